//! Rotating file appender with size-based log rotation
//!
//! Before each write the appender checks whether the pending line would
//! bring the active file to the configured threshold. If so, the active file
//! becomes `<path>.01`, older backups shift up by one (`.01` to `.02`, and so
//! on) and a fresh active file is opened. At most `max_backups` backups are
//! kept; the oldest is deleted when the ring is full.
//!
//! ```text
//! log.txt          active
//! log.txt.01       most recent backup
//! log.txt.02
//! ...
//! log.txt.<max>    oldest backup
//! ```

use super::file::FileAppender;
use crate::core::appender::Appender;
use crate::core::error::{LoggerError, Result};
use crate::core::log_entry::LogEntry;
use std::fs;
use std::path::{Path, PathBuf};

/// When to rotate and how many backups to keep
///
/// # Examples
///
/// ```
/// use rust_clog::appenders::RotationPolicy;
///
/// let policy = RotationPolicy::new(2 * 1024 * 1024, 4);
/// assert_eq!(policy.max_bytes, 2 * 1024 * 1024);
/// assert_eq!(policy.max_backups, 4);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationPolicy {
    /// Rotate once the active file would reach this many bytes
    pub max_bytes: u64,
    /// Number of numbered backups to keep
    pub max_backups: u32,
}

impl RotationPolicy {
    #[must_use]
    pub fn new(max_bytes: u64, max_backups: u32) -> Self {
        Self {
            max_bytes,
            max_backups,
        }
    }

    /// Whether appending `pending_len` bytes to a file of `current_size`
    /// bytes requires a rotation first. Landing exactly on the threshold
    /// counts.
    #[must_use]
    pub fn should_rotate(&self, current_size: u64, pending_len: u64) -> bool {
        current_size.saturating_add(pending_len) >= self.max_bytes
    }
}

/// Path of backup slot `index` for `base`, e.g. `log.txt.03`
#[must_use]
pub fn backup_path(base: &Path, index: u32) -> PathBuf {
    let mut name = base.as_os_str().to_owned();
    name.push(format!(".{:02}", index));
    PathBuf::from(name)
}

/// File appender that rotates the active file by size
///
/// # Examples
///
/// ```no_run
/// use rust_clog::appenders::{RotatingFileAppender, RotationPolicy};
///
/// let appender =
///     RotatingFileAppender::new("/var/log/app.log", RotationPolicy::new(2 * 1024 * 1024, 4))
///         .unwrap();
/// assert_eq!(appender.rotations(), 0);
/// ```
pub struct RotatingFileAppender {
    file: FileAppender,
    policy: RotationPolicy,
    rotations: u64,
}

impl RotatingFileAppender {
    /// Open `path` for appending and attach `policy`
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be created or opened
    pub fn new(path: impl Into<PathBuf>, policy: RotationPolicy) -> Result<Self> {
        Ok(Self {
            file: FileAppender::new(path)?,
            policy,
            rotations: 0,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    #[must_use]
    pub fn policy(&self) -> &RotationPolicy {
        &self.policy
    }

    /// Number of rotations performed by this appender
    #[must_use]
    pub fn rotations(&self) -> u64 {
        self.rotations
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.file.is_open()
    }

    /// Path of backup slot `index`
    #[must_use]
    pub fn backup_path(&self, index: u32) -> PathBuf {
        backup_path(self.path(), index)
    }

    /// Rotate if appending `pending_len` bytes would reach the threshold.
    ///
    /// Returns whether a rotation happened. Any failure aborts the rotation
    /// where it stands; the active handle may be left closed, after which
    /// every write fails until the appender is recreated.
    pub fn rotate_if_needed(&mut self, pending_len: u64) -> Result<bool> {
        let current_size = self.file.size().map_err(|e| {
            self.rotation_error(self.path(), "Failed to stat active log file", e)
        })?;

        if !self.policy.should_rotate(current_size, pending_len) {
            return Ok(false);
        }

        let mut slot = self.find_usable_slot()?;

        // Shift backups up so slot 1 is free for the active file.
        while slot > 1 {
            let from = self.backup_path(slot - 1);
            let to = self.backup_path(slot);
            fs::rename(&from, &to).map_err(|e| {
                self.rotation_error(&from, format!("Failed to rename to '{}'", to.display()), e)
            })?;
            slot -= 1;
        }

        self.file.close();
        let newest = self.backup_path(1);
        fs::rename(self.path(), &newest).map_err(|e| {
            self.rotation_error(
                self.path(),
                format!("Failed to rename to '{}'", newest.display()),
                e,
            )
        })?;

        self.file
            .reopen()
            .map_err(|e| self.rotation_error(self.path(), "Failed to reopen log file", e))?;

        self.rotations += 1;
        Ok(true)
    }

    /// First free backup slot in `1..=max_backups`. When every slot is
    /// taken the oldest backup is deleted and its slot returned.
    fn find_usable_slot(&self) -> Result<u32> {
        let mut slot = 1;
        loop {
            let candidate = self.backup_path(slot);
            let exists = candidate.try_exists().map_err(|e| {
                self.rotation_error(&candidate, "Failed to check backup file", e)
            })?;

            if !exists {
                return Ok(slot);
            }

            if slot >= self.policy.max_backups {
                fs::remove_file(&candidate).map_err(|e| {
                    self.rotation_error(&candidate, "Failed to remove oldest backup", e)
                })?;
                return Ok(slot);
            }

            slot += 1;
        }
    }

    fn rotation_error(
        &self,
        path: &Path,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> LoggerError {
        LoggerError::file_rotation(path.display().to_string(), message, source)
    }
}

impl Appender for RotatingFileAppender {
    fn name(&self) -> &str {
        "rotating_file"
    }

    fn append(&mut self, _entry: &LogEntry, line: &str) -> Result<()> {
        self.rotate_if_needed(line.len() as u64)?;
        self.file.write_line(line)
    }

    fn flush(&mut self) -> Result<()> {
        Appender::flush(&mut self.file)
    }

    fn close(&mut self) {
        self.file.close();
    }

    fn is_open(&self) -> bool {
        self.file.is_open()
    }
}
