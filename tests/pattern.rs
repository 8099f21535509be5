//! Tests for path template resolution and the derived rotation matcher.

use chrono::{DateTime, Local, TimeZone};
use logforge::{Error, FilePattern, SubstitutionRule};
use std::path::Path;

fn jan_15() -> DateTime<Local> {
    Local.with_ymd_and_hms(2024, 1, 15, 12, 0, 0).unwrap()
}

#[test]
fn resolves_date_token() {
    let pattern = FilePattern::new(
        "/tmp/app-{date}.log",
        &[SubstitutionRule::date("%Y-%m-%d")],
        jan_15(),
    )
    .unwrap();
    assert_eq!(pattern.resolved(), Path::new("/tmp/app-2024-01-15.log"));
    assert_eq!(pattern.dir(), Path::new("/tmp"));
}

#[test]
fn matcher_accepts_other_dates_in_same_position() {
    let pattern = FilePattern::new(
        "/tmp/app-{date}.log",
        &[SubstitutionRule::date("%Y-%m-%d")],
        jan_15(),
    )
    .unwrap();
    assert!(pattern.matches("app-2024-01-15.log"));
    assert!(pattern.matches("app-2020-11-02.log"));
    assert!(pattern.matches("app-20201102.log"));
    assert!(!pattern.matches("other-2020-11-02.log"));
    assert!(!pattern.matches("app-2020-11-02.log.gz"));
}

#[test]
fn no_token_matches_only_the_literal_name() {
    let pattern = FilePattern::new("/tmp/app.log", &[], jan_15()).unwrap();
    assert_eq!(pattern.resolved(), Path::new("/tmp/app.log"));
    assert!(pattern.matches("app.log"));
    // The dot must match literally, not as a regex metachar
    assert!(!pattern.matches("appxlog"));
    assert!(!pattern.matches("app.log.1"));
}

#[test]
fn bare_filename_sweeps_current_dir() {
    let pattern = FilePattern::new("app.log", &[], jan_15()).unwrap();
    assert_eq!(pattern.dir(), Path::new("."));
}

#[test]
fn unrecognized_token_stays_literal_but_wildcards() {
    // Only {date} is substituted; other tokens still widen the search
    let rules = [SubstitutionRule {
        token: "{host}".to_string(),
        format: "%Y".to_string(),
    }];
    let pattern = FilePattern::new("/tmp/app-{host}.log", &rules, jan_15()).unwrap();
    assert_eq!(pattern.resolved(), Path::new("/tmp/app-{host}.log"));
    assert!(pattern.matches("app-web1.log"));
    assert!(pattern.matches("app-{host}.log"));
}

#[test]
fn duplicate_token_rejected() {
    let result = FilePattern::new(
        "/tmp/{date}-{date}.log",
        &[SubstitutionRule::date("%Y")],
        jan_15(),
    );
    assert!(matches!(result, Err(Error::InvalidPath(_))));
}

#[test]
fn token_in_directory_component_rejected() {
    let result = FilePattern::new(
        "/tmp/{date}/app.log",
        &[SubstitutionRule::date("%Y")],
        jan_15(),
    );
    assert!(matches!(result, Err(Error::InvalidPath(_))));
}

#[test]
fn invalid_strftime_format_rejected() {
    let result = FilePattern::new(
        "/tmp/app-{date}.log",
        &[SubstitutionRule::date("%Q")],
        jan_15(),
    );
    assert!(matches!(result, Err(Error::InvalidPath(_))));
}
