//! Without retention, date-stamped log files accumulate until the disk
//! fills. This module finds previous rotations of a log file by name
//! pattern and deletes the ones older than the configured age.

mod pattern;
mod result;

pub use pattern::{DATE_TOKEN, FilePattern};
pub use result::{SweepReport, SweptFile};

use crate::internal;
use std::fs;
use std::time::{Duration, SystemTime};

const SECS_PER_DAY: u64 = 86_400;

/// One pass over the file's directory: delete every matching regular file
/// whose age strictly exceeds `retention_days` whole days. A file exactly at
/// the threshold survives; a brand-new file always survives.
///
/// Failures are captured per file and never abort the pass — losing a stale
/// rotation is acceptable, losing the logger being constructed is not.
/// Running the sweep twice with no new files deletes nothing further.
#[must_use]
pub fn sweep(pattern: &FilePattern, retention_days: u32, now: SystemTime) -> SweepReport {
    let mut report = SweepReport {
        retention_days,
        ..SweepReport::default()
    };
    let cutoff = Duration::from_secs(u64::from(retention_days) * SECS_PER_DAY);

    internal::debug(&format!(
        "Sweeping {} for rotations older than {retention_days} days",
        pattern.dir().display()
    ));

    let entries = match fs::read_dir(pattern.dir()) {
        Ok(entries) => entries,
        Err(e) => {
            internal::warn(&format!(
                "Cannot list {}: {e}",
                pattern.dir().display()
            ));
            report.failed.push((pattern.dir().to_path_buf(), e.to_string()));
            return report;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if !pattern.matches(name) {
            continue;
        }
        // Entry may vanish between listing and stat
        let Ok(meta) = fs::metadata(&path) else {
            continue;
        };
        if !meta.is_file() {
            continue;
        }

        let modified = meta.modified().ok();
        let age = modified
            .and_then(|m| now.duration_since(m).ok())
            .unwrap_or(Duration::ZERO);

        if age > cutoff {
            match fs::remove_file(&path) {
                Ok(()) => {
                    internal::debug(&format!("Deleted stale rotation {}", path.display()));
                    report.deleted.push(SweptFile {
                        path,
                        modified: modified.map(Into::into),
                    });
                }
                Err(e) => {
                    internal::warn(&format!("Cannot delete {}: {e}", path.display()));
                    report.failed.push((path, e.to_string()));
                }
            }
        } else {
            report.retained += 1;
        }
    }

    internal::debug(&format!(
        "Sweep complete: {} deleted, {} retained, {} failed",
        report.deleted.len(),
        report.retained,
        report.failed.len()
    ));

    report
}
