//! File appender implementation

use crate::core::{Appender, LogEntry, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Permission bits for newly created log files, before the umask
#[cfg(unix)]
const FILE_MODE: u32 = 0o666;

/// Appends lines to a single file.
///
/// Writes go straight to the file without buffering so the on-disk size
/// always reflects every line written so far.
pub struct FileAppender {
    path: PathBuf,
    file: Option<File>,
}

impl FileAppender {
    /// Open `path` for appending, creating it if absent
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or opened
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = open_append(&path).map_err(|e| {
            LoggerError::file_appender(path.display().to_string(), "Failed to open", e)
        })?;

        Ok(Self {
            path,
            file: Some(file),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_some()
    }

    /// Size of the open file in bytes
    pub fn size(&self) -> std::io::Result<u64> {
        Ok(self.handle()?.metadata()?.len())
    }

    /// Drop the file handle
    pub fn close(&mut self) {
        self.file = None;
    }

    /// Open the path again, replacing any current handle
    pub fn reopen(&mut self) -> std::io::Result<()> {
        self.file = None;
        self.file = Some(open_append(&self.path)?);
        Ok(())
    }

    /// Append raw bytes to the file
    pub fn write_line(&mut self, line: &str) -> Result<()> {
        let path = &self.path;
        let file = self
            .file
            .as_mut()
            .ok_or_else(|| LoggerError::writer(format!("log file '{}' is not open", path.display())))?;

        file.write_all(line.as_bytes()).map_err(|e| {
            LoggerError::file_appender(path.display().to_string(), "Failed to write log entry", e)
        })
    }

    fn handle(&self) -> std::io::Result<&File> {
        self.file.as_ref().ok_or_else(|| {
            std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("log file '{}' is not open", self.path.display()),
            )
        })
    }
}

/// Open `path` in create+append mode
pub(crate) fn open_append(path: &Path) -> std::io::Result<File> {
    let mut options = OpenOptions::new();
    options.create(true).append(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(FILE_MODE);
    }

    options.open(path)
}

impl Appender for FileAppender {
    fn append(&mut self, _entry: &LogEntry, line: &str) -> Result<()> {
        self.write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut file) = self.file {
            file.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) {
        self.file = None;
    }

    fn is_open(&self) -> bool {
        self.file.is_some()
    }

    fn name(&self) -> &str {
        "file"
    }
}
