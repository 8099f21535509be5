//! The three built-in sinks (console, syslog, file) can't cover every use
//! case — the `Sink` trait lets host applications attach custom destinations
//! without modifying logforge itself.

mod console;
mod file;
#[cfg(unix)]
mod syslog;

pub use console::ConsoleSink;
pub use file::FileSink;
#[cfg(unix)]
pub use syslog::SyslogSink;

use crate::level::Level;
use chrono::{DateTime, Local};

/// Carries all data a sink needs to render one log line. The timestamp is
/// captured once at log time so every sink agrees on it.
#[derive(Debug, Clone)]
pub struct Record {
    pub level: Level,
    /// Display name of the originating logger (`root` for the unnamed one).
    pub target: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

/// `Send + Sync` bounds enable concurrent logging from multiple threads
/// without locks on the trait object.
///
/// Each sink carries its own severity floor; dispatch never hands a sink a
/// record below [`Sink::min_level`].
pub trait Sink: Send + Sync {
    /// The minimum severity this sink emits.
    fn min_level(&self) -> Level;

    /// Renders the record in the sink's own format and writes it out.
    ///
    /// # Errors
    /// I/O errors from the underlying destination (stderr, file, socket).
    fn write(&self, record: &Record) -> Result<(), crate::Error>;

    /// Buffered destinations may lose tail data on abrupt exit without an
    /// explicit flush.
    ///
    /// # Errors
    /// I/O errors from the underlying destination.
    fn flush(&self) -> Result<(), crate::Error>;
}
