//! File output on an already-resolved path. Path templates and date
//! substitution happen before construction — the sink only ever sees the
//! final path.

use super::{Record, Sink};
use crate::config::FileMode;
use crate::fmt::LineTemplate;
use crate::internal;
use crate::level::Level;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Writes one formatted line per record to a single open file handle.
///
/// Parent directories are never created here — a missing directory is a
/// construction error the caller must surface, not something to paper over.
pub struct FileSink {
    min_level: Level,
    template: LineTemplate,
    path: PathBuf,
    mode: FileMode,
    /// `None` until the first write when the sink was opened lazily.
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Opens the log file eagerly, so a bad path fails construction instead
    /// of the first log call.
    ///
    /// # Errors
    /// `Error::FileSink` when the file cannot be opened (permission, missing
    /// parent directory).
    pub fn open(
        path: impl Into<PathBuf>,
        mode: FileMode,
        min_level: Level,
        template: LineTemplate,
    ) -> Result<Self, crate::Error> {
        let path = path.into();
        let file = open_file(&path, mode)?;
        internal::debug(&format!("Opened log file {}", path.display()));
        Ok(Self {
            min_level,
            template,
            path,
            mode,
            file: Mutex::new(Some(file)),
        })
    }

    /// Defers open (and creation) to the first write. Open failures then
    /// surface as write errors, which dispatch swallows — callers choosing
    /// lazy mode trade early validation for not touching the filesystem.
    #[must_use]
    pub fn open_lazy(
        path: impl Into<PathBuf>,
        mode: FileMode,
        min_level: Level,
        template: LineTemplate,
    ) -> Self {
        Self {
            min_level,
            template,
            path: path.into(),
            mode,
            file: Mutex::new(None),
        }
    }

    /// The resolved path this sink writes to.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn open_file(path: &Path, mode: FileMode) -> Result<File, crate::Error> {
    let mut options = OpenOptions::new();
    match mode {
        FileMode::Append => options.create(true).append(true),
        FileMode::Overwrite => options.create(true).write(true).truncate(true),
    };
    options.open(path).map_err(|source| crate::Error::FileSink {
        path: path.to_path_buf(),
        source,
    })
}

impl Sink for FileSink {
    fn min_level(&self) -> Level {
        self.min_level
    }

    fn write(&self, record: &Record) -> Result<(), crate::Error> {
        let mut guard = self.file.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if guard.is_none() {
            *guard = Some(open_file(&self.path, self.mode)?);
        }
        let Some(file) = guard.as_mut() else {
            return Ok(());
        };

        let mut line = self.template.render(record);
        line.push('\n');
        file.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        let mut guard = self.file.lock().unwrap_or_else(std::sync::PoisonError::into_inner);
        if let Some(file) = guard.as_mut() {
            file.flush()?;
        }
        Ok(())
    }
}
