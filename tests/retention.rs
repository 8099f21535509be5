//! Tests for the retention sweep.

use chrono::Local;
use logforge::{FilePattern, SubstitutionRule, sweep};
use std::fs::{self, File};
use std::path::Path;
use std::time::{Duration, SystemTime};
use tempfile::tempdir;

const DAY: u64 = 86_400;

fn pattern_in(dir: &Path) -> FilePattern {
    let template = format!("{}/app-{{date}}.log", dir.display());
    FilePattern::new(&template, &[SubstitutionRule::date("%Y%m%d")], Local::now()).unwrap()
}

fn write_aged(path: &Path, now: SystemTime, age: Duration) {
    fs::write(path, "log content").unwrap();
    let file = File::options().write(true).open(path).unwrap();
    file.set_modified(now - age).unwrap();
}

#[test]
fn deletes_old_rotation_keeps_fresh_file() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();

    let old = dir.path().join("app-20200101.log");
    let fresh = dir.path().join("app-20240101.log");
    write_aged(&old, now, Duration::from_secs(3 * DAY));
    fs::write(&fresh, "today").unwrap();

    let report = sweep(&pattern_in(dir.path()), 1, now);

    assert!(!old.exists());
    assert!(fresh.exists());
    assert_eq!(report.count(), 1);
    assert_eq!(report.deleted[0].path, old);
    assert_eq!(report.retained, 1);
    assert!(report.is_clean());
}

#[test]
fn age_exactly_at_threshold_is_retained() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();

    let file = dir.path().join("app-20240101.log");
    write_aged(&file, now, Duration::from_secs(7 * DAY));

    let report = sweep(&pattern_in(dir.path()), 7, now);

    assert!(file.exists());
    assert_eq!(report.count(), 0);
    assert_eq!(report.retained, 1);
}

#[test]
fn one_second_over_threshold_is_deleted() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();

    let file = dir.path().join("app-20240101.log");
    write_aged(&file, now, Duration::from_secs(7 * DAY + 1));

    let report = sweep(&pattern_in(dir.path()), 7, now);

    assert!(!file.exists());
    assert_eq!(report.count(), 1);
}

#[test]
fn second_sweep_deletes_nothing_further() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();

    write_aged(
        &dir.path().join("app-20200101.log"),
        now,
        Duration::from_secs(30 * DAY),
    );
    fs::write(dir.path().join("app-20240101.log"), "today").unwrap();

    let pattern = pattern_in(dir.path());
    let first = sweep(&pattern, 7, now);
    let second = sweep(&pattern, 7, now);

    assert_eq!(first.count(), 1);
    assert_eq!(second.count(), 0);
    assert_eq!(second.retained, 1);
}

#[test]
fn empty_directory_is_success() {
    let dir = tempdir().unwrap();
    let report = sweep(&pattern_in(dir.path()), 7, SystemTime::now());
    assert_eq!(report.count(), 0);
    assert_eq!(report.retained, 0);
    assert!(report.is_clean());
}

#[test]
fn non_matching_files_are_untouched() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();

    let unrelated = dir.path().join("unrelated.log");
    write_aged(&unrelated, now, Duration::from_secs(365 * DAY));

    let report = sweep(&pattern_in(dir.path()), 1, now);

    assert!(unrelated.exists());
    assert_eq!(report.count(), 0);
    assert_eq!(report.retained, 0);
}

#[test]
fn literal_pattern_only_considers_the_target_file() {
    let dir = tempdir().unwrap();
    let now = SystemTime::now();

    let target = dir.path().join("app.log");
    let sibling = dir.path().join("app2.log");
    write_aged(&target, now, Duration::from_secs(10 * DAY));
    write_aged(&sibling, now, Duration::from_secs(10 * DAY));

    let template = format!("{}/app.log", dir.path().display());
    let pattern = FilePattern::new(&template, &[], Local::now()).unwrap();
    let report = sweep(&pattern, 7, now);

    assert!(!target.exists());
    assert!(sibling.exists());
    assert_eq!(report.count(), 1);
}
