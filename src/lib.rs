//! `logforge` - Multi-sink logger construction with retention cleanup.
//!
//! Given one configuration, builds a named logger wired to any combination
//! of three sinks — console (stderr), the local syslog daemon, and a log
//! file whose name may carry a substituted date — and, when file retention
//! is configured, deletes stale rotations of that file as the final
//! construction step.
//!
//! The logger itself generates every record; each sink filters by its own
//! minimum severity, so one logger serves destinations with different
//! verbosity. Loggers live in a named registry: constructing the same name
//! twice reconfigures the existing logger instead of duplicating sinks.
//!
//! # Example
//!
//! ```no_run
//! use logforge::{Level, Logger};
//!
//! let logger = Logger::builder()
//!     .name("app")
//!     .console()
//!         .level(Level::Info)
//!         .done()
//!     .file()
//!         .path("/var/log/app-{date}.log")
//!         .date_format("%Y%m%d")
//!         .level(Level::Debug)
//!         .retention_days(7)
//!         .done()
//!     .build()
//!     .expect("logger construction");
//!
//! logger.info("Application started");
//! logger.warning("Connection timeout");
//! ```
//!
//! Or from a TOML document the host application owns:
//!
//! ```
//! use logforge::{LoggerConfig, create_logger};
//!
//! let config = LoggerConfig::from_toml_str(
//!     r#"
//!     [console]
//!     level = "info"
//!     "#,
//! )
//! .expect("parse");
//! let logger = create_logger(&config).expect("logger construction");
//! logger.info("ready");
//! ```

pub mod config;
pub mod fmt;
pub mod internal;
pub mod level;
pub mod logger;
pub mod registry;
pub mod retention;
pub mod sink;

mod error;

// Re-exports for convenience
pub use config::{
    ConsoleConfig, FileConfig, FileMode, FormatConfig, GeneralConfig, LoggerConfig,
    SubstitutionRule, SyslogConfig,
};
pub use error::Error;
pub use fmt::LineTemplate;
pub use level::{DEFAULT_LEVEL, Level, LevelSpec, ParseLevelError};
pub use logger::{Logger, LoggerBuilder, create_logger, create_logger_in};
pub use registry::Registry;
pub use retention::{DATE_TOKEN, FilePattern, SweepReport, SweptFile, sweep};
pub use sink::{ConsoleSink, FileSink, Record, Sink};

#[cfg(unix)]
pub use sink::SyslogSink;
