//! Severity levels that gate which messages reach which sinks.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Severity substituted when a lenient lookup misses.
pub const DEFAULT_LEVEL: Level = Level::Warning;

/// Derives `Ord` so a sink can compare a record's level against its configured
/// minimum. Discriminants match the classic numeric levels so callers holding
/// a pre-resolved number round-trip cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Development-time diagnostics, too noisy for normal operation.
    Debug = 10,
    /// Normal operational milestones.
    Info = 20,
    /// Non-fatal anomalies that may need attention.
    #[default]
    Warning = 30,
    /// Failures that prevent an operation from completing.
    Error = 40,
    /// Failures after which the process cannot meaningfully continue.
    Critical = 50,
}

impl Level {
    /// Uppercase because log lines and the syslog format spell levels that way.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "DEBUG",
            Self::Info => "INFO",
            Self::Warning => "WARNING",
            Self::Error => "ERROR",
            Self::Critical => "CRITICAL",
        }
    }

    /// Convenience for iteration — used by tests and level-table lookups.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Debug,
            Self::Info,
            Self::Warning,
            Self::Error,
            Self::Critical,
        ]
    }

    /// The numeric value carried by the discriminant (10/20/30/40/50).
    #[must_use]
    pub const fn as_number(self) -> i64 {
        self as i64
    }

    /// Buckets arbitrary numeric levels by threshold instead of exact match,
    /// so a caller passing 15 keeps the filtering behavior it would have had
    /// with raw numeric comparison (15 admits INFO and above).
    #[must_use]
    pub const fn from_number(n: i64) -> Self {
        match n {
            i64::MIN..=10 => Self::Debug,
            11..=20 => Self::Info,
            21..=30 => Self::Warning,
            31..=40 => Self::Error,
            _ => Self::Critical,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` so callers can distinguish "unknown level" from other
/// parse failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError(String);

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown log level: '{}'", self.0)
    }
}

impl std::error::Error for ParseLevelError {}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DEBUG" => Ok(Self::Debug),
            "INFO" => Ok(Self::Info),
            "WARNING" | "WARN" => Ok(Self::Warning),
            "ERROR" | "ERR" => Ok(Self::Error),
            "CRITICAL" | "CRIT" => Ok(Self::Critical),
            _ => Err(ParseLevelError(s.to_string())),
        }
    }
}

/// Config-facing severity: either a symbolic name or an already-resolved
/// numeric level. Untagged so TOML accepts `level = "info"` and `level = 20`
/// interchangeably.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum LevelSpec {
    /// Pre-resolved numeric level, used directly.
    Number(i64),
    /// Symbolic name, looked up case-insensitively.
    Name(String),
}

impl Default for LevelSpec {
    fn default() -> Self {
        Self::Name("warning".to_string())
    }
}

impl LevelSpec {
    /// Lenient resolution: an unrecognized name silently becomes `default`.
    /// Never fails — the permissive contract callers rely on.
    #[must_use]
    pub fn resolve(&self, default: Level) -> Level {
        match self {
            Self::Number(n) => Level::from_number(*n),
            Self::Name(name) => name.parse().unwrap_or(default),
        }
    }

    /// Hardened resolution for callers that opted into strict validation.
    ///
    /// # Errors
    /// `Error::InvalidLevel` when the symbolic name is not in the level table.
    pub fn resolve_strict(&self) -> Result<Level, crate::Error> {
        match self {
            Self::Number(n) => Ok(Level::from_number(*n)),
            Self::Name(name) => name
                .parse()
                .map_err(|_| crate::Error::InvalidLevel(name.clone())),
        }
    }
}

impl From<Level> for LevelSpec {
    fn from(level: Level) -> Self {
        Self::Number(level.as_number())
    }
}
