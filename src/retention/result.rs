//! Structured outcome of a retention sweep, kept separate from the sweep
//! engine so callers can report without re-deriving what happened.

use crate::logger::Logger;
use chrono::{DateTime, Local};
use std::path::PathBuf;

/// A file the sweep removed, with the modification time that aged it out.
#[derive(Debug, Clone)]
pub struct SweptFile {
    pub path: PathBuf,
    /// `None` when the filesystem couldn't report a modification time.
    pub modified: Option<DateTime<Local>>,
}

/// What one sweep did. Per-file failures are data here, not errors — the
/// sweep is best-effort cleanup and must never cost the caller its logger.
#[derive(Debug, Clone, Default)]
pub struct SweepReport {
    /// Files removed because their age exceeded the retention period.
    pub deleted: Vec<SweptFile>,
    /// Matching files young enough to keep.
    pub retained: usize,
    /// Files (or the directory listing itself) that could not be processed,
    /// with the reason.
    pub failed: Vec<(PathBuf, String)>,
    /// The threshold this sweep ran with, for reporting.
    pub retention_days: u32,
}

impl SweepReport {
    /// Number of files actually removed.
    #[must_use]
    pub const fn count(&self) -> usize {
        self.deleted.len()
    }

    /// True when every candidate was processed without an error.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failed.is_empty()
    }

    /// Reports the sweep through the freshly built logger, so deletion
    /// notices land in the new log file alongside everything else.
    pub fn log(&self, logger: &Logger) {
        for swept in &self.deleted {
            let modified = swept.modified.map_or_else(
                || "unknown".to_string(),
                |m| m.format("%Y-%m-%d %H:%M:%S").to_string(),
            );
            logger.info(&format!(
                "Deleted old log file {} (modified {modified}, retention {} days)",
                swept.path.display(),
                self.retention_days
            ));
        }
        for (path, reason) in &self.failed {
            logger.warning(&format!(
                "Could not clean up {}: {reason}",
                path.display()
            ));
        }
    }
}
