//! TOML deserialization for [`LoggerConfig`].
//!
//! logforge never searches for a config file of its own — the host
//! application owns the file and hands the parsed section (or the whole
//! document) to [`crate::create_logger`].

mod structs;

pub use structs::{
    ConsoleConfig, FileConfig, FileMode, FormatConfig, GeneralConfig, LoggerConfig,
    SubstitutionRule, SyslogConfig,
};

use crate::internal;
use std::fs;
use std::path::Path;

impl LoggerConfig {
    /// Parses a logger config from a TOML document. An empty document yields
    /// the documented defaults (console at WARNING, everything else off).
    ///
    /// # Errors
    /// `Error::ConfigParse` on TOML syntax or type errors.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        let config: Self = toml::from_str(content)?;
        Ok(config)
    }

    /// Reads and parses a logger config from a file on disk.
    ///
    /// # Errors
    /// `Error::Io` if the file cannot be read, `Error::ConfigParse` on TOML
    /// syntax or type errors.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        internal::debug(&format!("Loading logger config from {}", path.display()));
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        internal::debug(&format!("Logger config loaded from {}", path.display()));
        Ok(config)
    }
}
