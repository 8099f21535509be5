//! Tests for severity level functionality.

use logforge::{DEFAULT_LEVEL, Error, Level, LevelSpec};

#[test]
fn level_ordering() {
    assert!(Level::Debug < Level::Info);
    assert!(Level::Info < Level::Warning);
    assert!(Level::Warning < Level::Error);
    assert!(Level::Error < Level::Critical);
}

#[test]
fn level_display() {
    assert_eq!(Level::Debug.to_string(), "DEBUG");
    assert_eq!(Level::Info.to_string(), "INFO");
    assert_eq!(Level::Warning.to_string(), "WARNING");
    assert_eq!(Level::Error.to_string(), "ERROR");
    assert_eq!(Level::Critical.to_string(), "CRITICAL");
}

#[test]
fn level_from_str() {
    assert_eq!("debug".parse::<Level>().unwrap(), Level::Debug);
    assert_eq!("INFO".parse::<Level>().unwrap(), Level::Info);
    assert_eq!("Warning".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("warn".parse::<Level>().unwrap(), Level::Warning);
    assert_eq!("err".parse::<Level>().unwrap(), Level::Error);
    assert_eq!("crit".parse::<Level>().unwrap(), Level::Critical);
}

#[test]
fn level_from_str_invalid() {
    assert!("verbose".parse::<Level>().is_err());
}

#[test]
fn level_numbers() {
    assert_eq!(Level::Debug.as_number(), 10);
    assert_eq!(Level::Critical.as_number(), 50);
    for level in Level::all() {
        assert_eq!(Level::from_number(level.as_number()), level);
    }
}

#[test]
fn level_from_number_buckets() {
    // In-between values keep raw numeric filtering semantics
    assert_eq!(Level::from_number(0), Level::Debug);
    assert_eq!(Level::from_number(15), Level::Info);
    assert_eq!(Level::from_number(25), Level::Warning);
    assert_eq!(Level::from_number(35), Level::Error);
    assert_eq!(Level::from_number(99), Level::Critical);
}

#[test]
fn level_default() {
    assert_eq!(Level::default(), Level::Warning);
    assert_eq!(DEFAULT_LEVEL, Level::Warning);
}

#[test]
fn spec_resolves_name_and_number() {
    assert_eq!(
        LevelSpec::Name("info".to_string()).resolve(DEFAULT_LEVEL),
        Level::Info
    );
    assert_eq!(LevelSpec::Number(20).resolve(DEFAULT_LEVEL), Level::Info);
}

#[test]
fn spec_unknown_name_falls_back() {
    let spec = LevelSpec::Name("VERBOSE".to_string());
    assert_eq!(spec.resolve(DEFAULT_LEVEL), Level::Warning);
}

#[test]
fn spec_strict_rejects_unknown_name() {
    let spec = LevelSpec::Name("VERBOSE".to_string());
    match spec.resolve_strict() {
        Err(Error::InvalidLevel(name)) => assert_eq!(name, "VERBOSE"),
        other => panic!("expected InvalidLevel, got {other:?}"),
    }
}

#[test]
fn spec_strict_accepts_numbers() {
    assert_eq!(LevelSpec::Number(40).resolve_strict().unwrap(), Level::Error);
}
