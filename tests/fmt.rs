//! Tests for line template rendering.

use chrono::{Local, TimeZone};
use logforge::{Level, LineTemplate, Record};

fn record() -> Record {
    Record {
        level: Level::Info,
        target: "app".to_string(),
        message: "hello".to_string(),
        timestamp: Local.with_ymd_and_hms(2024, 1, 15, 10, 30, 45).unwrap(),
    }
}

#[test]
fn default_line_shape() {
    let line = LineTemplate::default().render(&record());
    assert_eq!(line, "2024-01-15 10:30:45,000 - app - INFO - hello");
}

#[test]
fn custom_template() {
    let template = LineTemplate::parse("{level}|{name}|{message}", "%H:%M");
    assert_eq!(template.render(&record()), "INFO|app|hello");
}

#[test]
fn timestamp_format_applies() {
    let template = LineTemplate::parse("{timestamp}", "%Y%m%d");
    assert_eq!(template.render(&record()), "20240115");
}

#[test]
fn unknown_placeholder_passes_through() {
    let template = LineTemplate::parse("{nope} {message}", "%H:%M");
    assert_eq!(template.render(&record()), "{nope} hello");
}

#[test]
fn level_renders_uppercase() {
    let mut rec = record();
    rec.level = Level::Critical;
    let template = LineTemplate::parse("{level}: {message}", "%H:%M");
    assert_eq!(template.render(&rec), "CRITICAL: hello");
}
