//! Unified error type for all logforge operations.

use std::path::PathBuf;

/// Error type for logforge operations.
#[derive(Debug)]
pub enum Error {
    /// I/O error.
    Io(std::io::Error),
    /// TOML config parsing error.
    ConfigParse(toml::de::Error),
    /// Log file could not be opened (bad path, permission, missing directory).
    FileSink {
        /// Resolved path the sink tried to open.
        path: PathBuf,
        /// Underlying open failure.
        source: std::io::Error,
    },
    /// Local syslog transport could not be reached.
    SyslogUnavailable(String),
    /// Severity name rejected under strict validation.
    InvalidLevel(String),
    /// Path template violates the substitution rules (duplicate token,
    /// token outside the filename component).
    InvalidPath(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(e) => write!(f, "parse error: {e}"),
            Self::FileSink { path, source } => {
                write!(f, "cannot open log file {}: {source}", path.display())
            }
            Self::SyslogUnavailable(s) => write!(f, "syslog unavailable: {s}"),
            Self::InvalidLevel(level) => write!(f, "unknown log level: '{level}'"),
            Self::InvalidPath(s) => write!(f, "invalid path template: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::ConfigParse(e) => Some(e),
            Self::FileSink { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for Error {
    fn from(e: toml::de::Error) -> Self {
        Self::ConfigParse(e)
    }
}
