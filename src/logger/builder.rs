//! Stepwise construction for callers that don't want to fill in a
//! [`LoggerConfig`] by hand. Each sink gets a dedicated sub-builder; the
//! terminal `build()` funnels into the same all-or-nothing construction path
//! as [`super::create_logger`].

use super::from_config;
use crate::config::{FileMode, LoggerConfig, SubstitutionRule};
use crate::level::Level;
use crate::logger::Logger;
use crate::registry::Registry;
use crate::sink::Sink;

/// Unlike [`super::create_logger`], the builder starts with no sinks at all —
/// only what the caller asks for gets attached.
pub struct LoggerBuilder {
    config: LoggerConfig,
    extra_sinks: Vec<Box<dyn Sink>>,
    registry: Option<Registry>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    #[must_use]
    pub fn new() -> Self {
        let mut config = LoggerConfig::default();
        config.console.enabled = false;
        Self {
            config,
            extra_sinks: Vec::new(),
            registry: None,
        }
    }

    /// Registry name for this logger. Empty means the process-root logger.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.config.general.name = name.into();
        self
    }

    /// Bubble records to ancestor loggers (dot-separated names).
    #[must_use]
    pub const fn propagate(mut self, propagate: bool) -> Self {
        self.config.general.propagate = propagate;
        self
    }

    /// Reject unknown severity names instead of silently falling back.
    #[must_use]
    pub const fn strict_levels(mut self, strict: bool) -> Self {
        self.config.general.strict_levels = strict;
        self
    }

    /// Line layout shared by console and file sinks.
    #[must_use]
    pub fn template(mut self, template: impl Into<String>) -> Self {
        self.config.format.template = template.into();
        self
    }

    /// strftime format for the `{timestamp}` placeholder.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.config.format.timestamp_format = format.into();
        self
    }

    /// Build against a private registry instead of the process-global one —
    /// tests and embedded uses must not share the global namespace.
    #[must_use]
    pub fn registry(mut self, registry: &Registry) -> Self {
        self.registry = Some(registry.clone());
        self
    }

    /// Console output has its own severity floor needing a dedicated
    /// sub-builder.
    #[must_use]
    pub fn console(self) -> ConsoleBuilder {
        ConsoleBuilder { parent: self }
    }

    /// Syslog output has its own concerns (tag, severity floor) needing a
    /// dedicated sub-builder.
    #[must_use]
    pub fn syslog(self) -> SyslogBuilder {
        SyslogBuilder { parent: self }
    }

    /// File output has its own concerns (path template, mode, retention)
    /// needing a dedicated sub-builder.
    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder { parent: self }
    }

    /// The three built-in sinks can't cover every use case.
    #[must_use]
    pub fn sink(mut self, sink: impl Sink + 'static) -> Self {
        self.extra_sinks.push(Box::new(sink));
        self
    }

    /// Constructs every sink, then attaches them to the named registry entry
    /// in one step.
    ///
    /// # Errors
    /// `Error::FileSink`, `Error::SyslogUnavailable`, `Error::InvalidPath`,
    /// or `Error::InvalidLevel` (strict mode) — in which case the registry
    /// entry is left untouched.
    pub fn build(self) -> Result<Logger, crate::Error> {
        let registry = self
            .registry
            .unwrap_or_else(|| Registry::global().clone());
        from_config::build_into(&registry, &self.config, self.extra_sinks)
    }
}

/// Console output's severity floor, separate from every other sink's.
pub struct ConsoleBuilder {
    parent: LoggerBuilder,
}

impl ConsoleBuilder {
    /// Minimum severity the console sink emits.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.parent.config.console.level = level.into();
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more
    /// sinks.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.config.console.enabled = true;
        self.parent
    }
}

/// Syslog tag and severity floor, separate from every other sink's.
pub struct SyslogBuilder {
    parent: LoggerBuilder,
}

impl SyslogBuilder {
    /// Process/script name prepended to every syslog line.
    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.parent.config.syslog.tag = tag.into();
        self
    }

    /// Minimum severity the syslog sink emits.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.parent.config.syslog.level = level.into();
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more
    /// sinks.
    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.config.syslog.enabled = true;
        self.parent
    }
}

/// File path template, write mode, and retention, separate from every other
/// sink's concerns.
pub struct FileBuilder {
    parent: LoggerBuilder,
}

impl FileBuilder {
    /// Path template the log file is written to. May contain `{date}`.
    #[must_use]
    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.parent.config.file.path = path.into();
        self
    }

    /// Minimum severity the file sink emits.
    #[must_use]
    pub fn level(mut self, level: Level) -> Self {
        self.parent.config.file.level = level.into();
        self
    }

    /// Append to or overwrite an existing file.
    #[must_use]
    pub const fn mode(mut self, mode: FileMode) -> Self {
        self.parent.config.file.mode = mode;
        self
    }

    /// Defer open (and creation) to the first write.
    #[must_use]
    pub const fn lazy_open(mut self, lazy: bool) -> Self {
        self.parent.config.file.lazy_open = lazy;
        self
    }

    /// Adds a substitution rule applied to the path template in order.
    #[must_use]
    pub fn substitution(mut self, rule: SubstitutionRule) -> Self {
        self.parent.config.file.substitutions.push(rule);
        self
    }

    /// Shorthand for the common case: substitute `{date}` with this strftime
    /// format.
    #[must_use]
    pub fn date_format(self, format: impl Into<String>) -> Self {
        self.substitution(SubstitutionRule::date(format))
    }

    /// Delete matching rotations older than this many days after
    /// construction. 0 disables the sweep.
    #[must_use]
    pub const fn retention_days(mut self, days: u32) -> Self {
        self.parent.config.file.retention_days = days;
        self
    }

    /// Sub-builder consumes self, so there must be a way back to chain more
    /// sinks.
    #[must_use]
    pub fn done(self) -> LoggerBuilder {
        self.parent
    }
}
