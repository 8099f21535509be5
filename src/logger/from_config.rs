//! Logger construction from a [`LoggerConfig`].
//!
//! All-or-nothing: every requested sink is constructed in isolation before
//! any of them is attached, so a failure (unreachable syslog, unopenable
//! file) leaves an existing logger of the same name exactly as it was.

use super::Logger;
use crate::config::LoggerConfig;
use crate::fmt::LineTemplate;
use crate::internal;
use crate::level::{Level, LevelSpec};
use crate::registry::Registry;
use crate::retention::{self, FilePattern};
use crate::sink::{ConsoleSink, FileSink, Sink};
use chrono::Local;
use std::time::SystemTime;

/// Creates (or reconfigures) a logger in the process-global registry.
///
/// Sinks are attached in order — console, syslog, file — each filtering by
/// its own severity; the logger itself generates every record. When a file
/// sink and a positive retention period are both configured, stale rotations
/// of the resolved file name are swept as the last construction step.
///
/// # Errors
/// `Error::FileSink` when the log file cannot be opened,
/// `Error::SyslogUnavailable` when the local syslog transport is
/// unreachable, `Error::InvalidPath` on a bad path template, and
/// `Error::InvalidLevel` for unknown severity names under
/// `general.strict_levels`.
pub fn create_logger(config: &LoggerConfig) -> Result<Logger, crate::Error> {
    create_logger_in(Registry::global(), config)
}

/// Same contract as [`create_logger`], against a caller-owned registry.
///
/// # Errors
/// See [`create_logger`].
pub fn create_logger_in(
    registry: &Registry,
    config: &LoggerConfig,
) -> Result<Logger, crate::Error> {
    build_into(registry, config, Vec::new())
}

/// Shared construction path for [`create_logger`] and the builder.
pub(super) fn build_into(
    registry: &Registry,
    config: &LoggerConfig,
    extra_sinks: Vec<Box<dyn Sink>>,
) -> Result<Logger, crate::Error> {
    let name = &config.general.name;
    internal::debug(&format!(
        "Constructing logger '{}'",
        if name.is_empty() { "root" } else { name }
    ));

    let template = LineTemplate::parse(
        &config.format.template,
        &config.format.timestamp_format,
    );
    let strict = config.general.strict_levels;
    let mut sinks: Vec<Box<dyn Sink>> = Vec::new();

    if config.console.enabled {
        let level = resolve_level(&config.console.level, strict)?;
        sinks.push(Box::new(ConsoleSink::new(level, template.clone())));
    }

    if config.syslog.enabled {
        attach_syslog(config, strict, &mut sinks)?;
    }

    let mut retention_pattern: Option<FilePattern> = None;
    if !config.file.path.is_empty() {
        let level = resolve_level(&config.file.level, strict)?;
        let pattern = FilePattern::new(
            &config.file.path,
            &config.file.substitutions,
            Local::now(),
        )?;

        let sink = if config.file.lazy_open {
            FileSink::open_lazy(pattern.resolved(), config.file.mode, level, template)
        } else {
            FileSink::open(pattern.resolved(), config.file.mode, level, template)?
        };
        sinks.push(Box::new(sink));

        if config.file.retention_days > 0 {
            retention_pattern = Some(pattern);
        }
    }

    sinks.extend(extra_sinks);
    internal::debug(&format!("{} sink(s) constructed", sinks.len()));

    // Every sink is live; only now touch the registry entry
    let logger = registry.get_or_create(name);
    logger.reconfigure(sinks, config.general.propagate);

    if let Some(pattern) = retention_pattern {
        let report = retention::sweep(&pattern, config.file.retention_days, SystemTime::now());
        report.log(&logger);
    }

    Ok(logger)
}

#[cfg(unix)]
fn attach_syslog(
    config: &LoggerConfig,
    strict: bool,
    sinks: &mut Vec<Box<dyn Sink>>,
) -> Result<(), crate::Error> {
    use crate::sink::SyslogSink;

    let level = resolve_level(&config.syslog.level, strict)?;
    sinks.push(Box::new(SyslogSink::connect(&config.syslog.tag, level)?));
    Ok(())
}

#[cfg(not(unix))]
fn attach_syslog(
    _config: &LoggerConfig,
    _strict: bool,
    _sinks: &mut Vec<Box<dyn Sink>>,
) -> Result<(), crate::Error> {
    Err(crate::Error::SyslogUnavailable(
        "local syslog transport requires a unix platform".to_string(),
    ))
}

fn resolve_level(spec: &LevelSpec, strict: bool) -> Result<Level, crate::Error> {
    if strict {
        spec.resolve_strict()
    } else {
        Ok(spec.resolve(crate::level::DEFAULT_LEVEL))
    }
}
