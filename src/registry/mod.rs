//! Named-logger registry — the process-wide mutable state behind
//! `get_or_create`, wrapped in an explicit object with a mutex so concurrent
//! construction of the same name is serialized instead of undefined.
//!
//! A process-global instance sits behind `OnceLock`; independent instances
//! keep tests and embedded uses isolated from each other.

use crate::logger::{Logger, LoggerCore};
use std::collections::HashMap;
use std::sync::{Arc, Mutex, OnceLock};

static GLOBAL: OnceLock<Registry> = OnceLock::new();

/// Map shared by every logger handle created from one registry — propagation
/// resolves ancestor names through it at log time.
#[derive(Default)]
pub(crate) struct RegistryInner {
    loggers: Mutex<HashMap<String, Arc<LoggerCore>>>,
}

impl RegistryInner {
    pub(crate) fn lookup(&self, name: &str) -> Option<Arc<LoggerCore>> {
        let loggers = self
            .loggers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        loggers.get(name).cloned()
    }
}

/// Requesting the same name twice returns the same underlying logger, so a
/// second construction call reconfigures rather than duplicates.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RegistryInner>,
}

impl Registry {
    /// Fresh registry with no loggers — for tests and embedded uses that must
    /// not share the process-global namespace.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-global registry used by [`crate::create_logger`].
    #[must_use]
    pub fn global() -> &'static Self {
        GLOBAL.get_or_init(Self::new)
    }

    /// Returns the logger registered under `name`, creating an empty one
    /// (no sinks, no propagation) on first request.
    #[must_use]
    pub fn get_or_create(&self, name: &str) -> Logger {
        let mut loggers = self
            .inner
            .loggers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        let core = loggers
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(LoggerCore::new(name)))
            .clone();
        drop(loggers);
        Logger::from_parts(core, Arc::clone(&self.inner))
    }

    /// Returns the logger registered under `name`, if any.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Logger> {
        self.inner
            .lookup(name)
            .map(|core| Logger::from_parts(core, Arc::clone(&self.inner)))
    }

    /// Number of registered loggers — diagnostics and tests.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .loggers
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
            .len()
    }

    /// True when no logger has been registered yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
