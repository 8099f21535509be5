//! Configuration struct definitions.

use crate::fmt;
use crate::level::LevelSpec;
use serde::Deserialize;

/// Logger identity and cross-sink behavior.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct GeneralConfig {
    /// Logger name in the registry. Empty = process-root logger.
    pub name: String,
    /// Bubble records to ancestor loggers (dot-separated names).
    pub propagate: bool,
    /// Reject unrecognized severity names instead of silently substituting
    /// the default.
    pub strict_levels: bool,
}

/// Console sink configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Attach the console sink.
    pub enabled: bool,
    /// Minimum severity the console sink emits.
    pub level: LevelSpec,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            level: LevelSpec::default(),
        }
    }
}

/// Syslog sink configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct SyslogConfig {
    /// Attach the syslog sink.
    pub enabled: bool,
    /// Minimum severity the syslog sink emits.
    pub level: LevelSpec,
    /// Process/script name prepended to every syslog line.
    pub tag: String,
}

/// Write mode for the log file. The single-letter aliases keep configs
/// ported from stdio-style mode strings working.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileMode {
    /// Keep existing content, append new lines.
    #[default]
    #[serde(alias = "a")]
    Append,
    /// Truncate on open.
    #[serde(alias = "w", alias = "truncate")]
    Overwrite,
}

/// A (token, strftime format) pair injected into the file path template.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct SubstitutionRule {
    /// Placeholder text to replace, e.g. `{date}`.
    pub token: String,
    /// strftime format the current local time is rendered with.
    pub format: String,
}

impl SubstitutionRule {
    /// Most callers only ever substitute the date token.
    #[must_use]
    pub fn date(format: impl Into<String>) -> Self {
        Self {
            token: crate::retention::DATE_TOKEN.to_string(),
            format: format.into(),
        }
    }
}

/// File sink configuration.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct FileConfig {
    /// Path template for the log file. Empty disables file logging.
    pub path: String,
    /// Minimum severity the file sink emits.
    pub level: LevelSpec,
    /// Append to or overwrite an existing file.
    pub mode: FileMode,
    /// Defer open (and creation) until the first write. Open errors then
    /// surface as swallowed write errors instead of construction errors.
    pub lazy_open: bool,
    /// Substitution rules applied to `path`, in order.
    pub substitutions: Vec<SubstitutionRule>,
    /// Delete matching rotations older than this many days. 0 disables the
    /// sweep.
    pub retention_days: u32,
}

/// Shared line format for console and file sinks.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Line template with `{timestamp}`, `{name}`, `{level}`, `{message}`.
    pub template: String,
    /// strftime format for the `{timestamp}` placeholder.
    pub timestamp_format: String,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            template: fmt::DEFAULT_TEMPLATE.to_string(),
            timestamp_format: fmt::DEFAULT_TIMESTAMP_FORMAT.to_string(),
        }
    }
}

/// A completely empty config document must still produce a working logger —
/// `#[serde(default)]` on every field keeps zero-config working.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct LoggerConfig {
    /// Name, propagation, and validation strictness apply to the whole
    /// logger, above any particular sink.
    pub general: GeneralConfig,
    /// Console output and its own severity floor.
    pub console: ConsoleConfig,
    /// Local syslog output and its own severity floor.
    pub syslog: SyslogConfig,
    /// Log file output, naming rules, and retention.
    pub file: FileConfig,
    /// Line layout shared by the console and file sinks.
    pub format: FormatConfig,
}
