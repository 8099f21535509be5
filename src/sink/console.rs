//! Console output on stderr — log lines must not interleave with whatever
//! the host application writes to stdout.

use super::{Record, Sink};
use crate::fmt::LineTemplate;
use crate::level::Level;
use std::io::{self, Write};

/// Stderr sink rendering the shared timestamped line format.
#[derive(Debug, Clone)]
pub struct ConsoleSink {
    min_level: Level,
    template: LineTemplate,
}

impl ConsoleSink {
    #[must_use]
    pub fn new(min_level: Level, template: LineTemplate) -> Self {
        Self {
            min_level,
            template,
        }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new(Level::Warning, LineTemplate::default())
    }
}

impl Sink for ConsoleSink {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn write(&self, record: &Record) -> Result<(), crate::Error> {
        writeln!(io::stderr(), "{}", self.template.render(record))?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stderr().flush()?;
        Ok(())
    }
}
