//! Local syslog daemon output over the platform's unix datagram socket.
//!
//! The daemon stamps its own timestamps, so lines carry only
//! `tag[pid]: SEVERITY: message` behind the RFC 3164 priority byte.
//! POSIX systems disagree on the socket path; the well-known candidates are
//! tried in order at connect time.

use super::{Record, Sink};
use crate::internal;
use crate::level::Level;
use std::os::unix::net::UnixDatagram;

/// Socket paths by platform: Linux/original BSD, macOS, FreeBSD/NetBSD.
const SYSLOG_PATHS: &[&str] = &["/dev/log", "/var/run/syslog", "/var/run/log"];

/// Messages are submitted with the USER facility, the default for
/// application-level logging.
const FACILITY_USER: u8 = 1;

/// Datagram sink connected to the local syslog transport.
pub struct SyslogSink {
    min_level: Level,
    tag: String,
    socket: UnixDatagram,
}

impl SyslogSink {
    /// Connects to the first reachable well-known syslog socket.
    ///
    /// # Errors
    /// `Error::SyslogUnavailable` when no socket accepts the connection.
    pub fn connect(tag: impl Into<String>, min_level: Level) -> Result<Self, crate::Error> {
        let socket = UnixDatagram::unbound()
            .map_err(|e| crate::Error::SyslogUnavailable(e.to_string()))?;

        for path in SYSLOG_PATHS {
            if socket.connect(path).is_ok() {
                internal::debug(&format!("Connected to syslog at {path}"));
                return Ok(Self {
                    min_level,
                    tag: tag.into(),
                    socket,
                });
            }
        }

        Err(crate::Error::SyslogUnavailable(format!(
            "no syslog socket reachable (tried {})",
            SYSLOG_PATHS.join(", ")
        )))
    }

    /// RFC 3164 priority: facility * 8 + severity code.
    const fn priority(level: Level) -> u8 {
        let severity = match level {
            Level::Debug => 7,
            Level::Info => 6,
            Level::Warning => 4,
            Level::Error => 3,
            Level::Critical => 2,
        };
        FACILITY_USER * 8 + severity
    }
}

impl Sink for SyslogSink {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn write(&self, record: &Record) -> Result<(), crate::Error> {
        let datagram = format!(
            "<{}>{}[{}]: {}: {}",
            Self::priority(record.level),
            self.tag,
            std::process::id(),
            record.level.as_str(),
            record.message
        );
        self.socket.send(datagram.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}
