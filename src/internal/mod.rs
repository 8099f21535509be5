//! logforge's own diagnostic logger — construction, config loading, and the
//! retention sweep narrate through it without touching any host application
//! logger name.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (host init, tests) race to call `init`.

use crate::fmt::LineTemplate;
use crate::level::Level;
use crate::logger::Logger;
use crate::sink::ConsoleSink;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

/// Quiet default — only anomalies in logforge itself reach stderr.
///
/// `OnceLock` guarantees only the first call takes effect; later calls are
/// no-ops.
pub fn init() {
    init_with_level(Level::Warning);
}

/// Verbose alternative for debugging logger construction itself.
pub fn init_with_level(level: Level) {
    INTERNAL_LOGGER.get_or_init(|| {
        Logger::detached(
            "logforge",
            vec![Box::new(ConsoleSink::new(level, LineTemplate::default()))],
        )
    });
}

/// Pre-init calls silently vanish rather than crashing — safe during early
/// startup.
fn log(level: Level, msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        logger.log(level, msg);
    }
}

/// Construction and sweep step-by-step narration.
pub fn debug(msg: &str) {
    log(Level::Debug, msg);
}

/// Operational milestones.
pub fn info(msg: &str) {
    log(Level::Info, msg);
}

/// Non-fatal anomalies — unreadable sweep candidates, skipped cleanup.
pub fn warn(msg: &str) {
    log(Level::Warning, msg);
}

/// Failures worth surfacing even when the caller swallowed the `Result`.
pub fn error(msg: &str) {
    log(Level::Error, msg);
}
