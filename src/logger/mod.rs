//! The logger handle fans each record out to its sinks. There is no
//! logger-wide severity threshold — every record is generated and each sink
//! filters independently, so one logger serves sinks with different
//! verbosity without being rebuilt.

mod builder;
mod from_config;

pub use builder::{ConsoleBuilder, FileBuilder, LoggerBuilder, SyslogBuilder};
pub use from_config::{create_logger, create_logger_in};

use crate::level::Level;
use crate::registry::RegistryInner;
use crate::sink::{Record, Sink};
use chrono::Local;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

/// Registry entry shared by every handle to one named logger. Sinks sit
/// behind a lock so reconfiguration can swap the whole set atomically
/// (clear-then-reattach).
pub(crate) struct LoggerCore {
    name: String,
    display_name: String,
    sinks: RwLock<Vec<Box<dyn Sink>>>,
    propagate: AtomicBool,
}

impl LoggerCore {
    pub(crate) fn new(name: &str) -> Self {
        let display_name = if name.is_empty() { "root" } else { name };
        Self {
            name: name.to_string(),
            display_name: display_name.to_string(),
            sinks: RwLock::new(Vec::new()),
            propagate: AtomicBool::new(false),
        }
    }

    /// Replaces the sink set in one step — previously attached sinks are
    /// detached before the new ones take effect.
    pub(crate) fn replace_sinks(&self, sinks: Vec<Box<dyn Sink>>) {
        let mut guard = self
            .sinks
            .write()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = sinks;
    }

    pub(crate) fn set_propagate(&self, propagate: bool) {
        self.propagate.store(propagate, Ordering::Relaxed);
    }

    fn propagates(&self) -> bool {
        self.propagate.load(Ordering::Relaxed)
    }

    /// Per-sink filtering happens here: a sink never sees a record below its
    /// own minimum. Write errors are swallowed — logging must not take the
    /// host application down.
    fn dispatch(&self, record: &Record) {
        let sinks = self
            .sinks
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for sink in sinks.iter() {
            if record.level >= sink.min_level() {
                let _ = sink.write(record);
            }
        }
    }
}

/// Cheap to clone — all handles to one name share the same registry entry.
#[derive(Clone)]
pub struct Logger {
    core: Arc<LoggerCore>,
    registry: Arc<RegistryInner>,
}

impl std::fmt::Debug for Logger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.core.name)
            .field("sinks", &self.sink_count())
            .field("propagate", &self.core.propagates())
            .finish()
    }
}

impl Logger {
    pub(crate) fn from_parts(core: Arc<LoggerCore>, registry: Arc<RegistryInner>) -> Self {
        Self { core, registry }
    }

    /// Sinks without registry bookkeeping — the crate's own diagnostics use
    /// this so they never collide with host application logger names.
    pub(crate) fn detached(name: &str, sinks: Vec<Box<dyn Sink>>) -> Self {
        let core = LoggerCore::new(name);
        core.replace_sinks(sinks);
        Self {
            core: Arc::new(core),
            registry: Arc::new(RegistryInner::default()),
        }
    }

    /// Stepwise construction for callers that don't want to fill in a
    /// [`crate::LoggerConfig`].
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Clear-then-reattach: the whole sink set is replaced in one step, so
    /// repeated construction under one name never duplicates sinks.
    pub(crate) fn reconfigure(&self, sinks: Vec<Box<dyn Sink>>, propagate: bool) {
        self.core.replace_sinks(sinks);
        self.core.set_propagate(propagate);
    }

    /// Core dispatch — stamps the record once, fans out to this logger's
    /// sinks, then bubbles to ancestors while propagation allows.
    pub fn log(&self, level: Level, msg: &str) {
        let record = Record {
            level,
            target: self.core.display_name.clone(),
            message: msg.to_string(),
            timestamp: Local::now(),
        };

        self.core.dispatch(&record);

        if !self.core.propagates() {
            return;
        }
        for ancestor in ancestor_names(&self.core.name) {
            // Unregistered intermediate names are skipped, not created
            let Some(core) = self.registry.lookup(&ancestor) else {
                continue;
            };
            core.dispatch(&record);
            if !core.propagates() {
                break;
            }
        }
    }

    /// Development-time diagnostics, too noisy for normal operation.
    pub fn debug(&self, msg: &str) {
        self.log(Level::Debug, msg);
    }

    /// Normal operational milestones.
    pub fn info(&self, msg: &str) {
        self.log(Level::Info, msg);
    }

    /// Non-fatal anomalies that may need attention.
    pub fn warning(&self, msg: &str) {
        self.log(Level::Warning, msg);
    }

    /// Failures that prevent an operation from completing.
    pub fn error(&self, msg: &str) {
        self.log(Level::Error, msg);
    }

    /// Failures after which the process cannot meaningfully continue.
    pub fn critical(&self, msg: &str) {
        self.log(Level::Critical, msg);
    }

    /// Buffered sinks may lose tail data on abrupt exit without an explicit
    /// flush.
    ///
    /// # Errors
    /// Returns the first I/O error encountered across all sinks.
    pub fn flush(&self) -> Result<(), crate::Error> {
        let sinks = self
            .core
            .sinks
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        for sink in sinks.iter() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Registry key this logger was created under (may be empty).
    #[must_use]
    pub fn name(&self) -> &str {
        &self.core.name
    }

    /// Whether records bubble to ancestor loggers.
    #[must_use]
    pub fn propagate(&self) -> bool {
        self.core.propagates()
    }

    /// Tests verify construction wired up the expected number of sinks.
    #[must_use]
    pub fn sink_count(&self) -> usize {
        self.core
            .sinks
            .read()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }
}

/// Dot-separated ancestry, nearest first: `a.b.c` → `a.b`, `a`, `""`.
fn ancestor_names(name: &str) -> Vec<String> {
    let mut ancestors = Vec::new();
    let mut current = name;
    while let Some(idx) = current.rfind('.') {
        current = &current[..idx];
        ancestors.push(current.to_string());
    }
    if !name.is_empty() {
        ancestors.push(String::new());
    }
    ancestors
}
