//! Logger configuration
//!
//! A [`LogConfig`] is handed to [`Logger::init`](super::Logger::init) once per
//! session. It can be built in code with the `with_*` methods or loaded from
//! JSON.
//!
//! # Examples
//!
//! ```
//! use rust_clog::{LogConfig, Visibility};
//!
//! let config = LogConfig::new()
//!     .with_console(true)
//!     .with_file("log.txt")
//!     .with_rotation(2 * 1024 * 1024, 4)
//!     .with_visibility(Visibility::ALL);
//!
//! assert!(config.validate().is_ok());
//! ```

use super::error::{LoggerError, Result};
use super::visibility::Visibility;
use crate::appenders::RotationPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Smallest accepted rotation threshold (1 MiB)
pub const MIN_ROTATE_SIZE: u64 = 1024 * 1024;
/// Largest accepted rotation threshold (256 MiB)
pub const MAX_ROTATE_SIZE: u64 = 256 * 1024 * 1024;
/// Fewest backups that may be kept
pub const MIN_ROTATE_COUNT: u32 = 1;
/// Most backups that may be kept; backups use a two-digit suffix
pub const MAX_ROTATE_COUNT: u32 = 99;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Write lines to standard output
    pub output_to_console: bool,
    /// Write lines to `output_file_path`
    pub output_to_file: bool,
    pub output_file_path: PathBuf,
    /// Rotate the file once it would reach `rotate_size` bytes
    pub rotate_file: bool,
    pub rotate_size: u64,
    /// Number of `<path>.NN` backups kept
    pub rotate_count: u32,
    /// Colour console lines by level
    pub console_colors: bool,
    #[serde(flatten)]
    pub visibility: Visibility,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            output_to_console: true,
            output_to_file: false,
            output_file_path: PathBuf::from("log.txt"),
            rotate_file: false,
            rotate_size: 10 * 1024 * 1024,
            rotate_count: 5,
            console_colors: false,
            visibility: Visibility::default(),
        }
    }
}

impl LogConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.output_to_console = enabled;
        self
    }

    /// Enable file output to `path`
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_to_file = true;
        self.output_file_path = path.into();
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn without_file(mut self) -> Self {
        self.output_to_file = false;
        self
    }

    /// Enable size-based rotation
    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_rotation(mut self, size: u64, count: u32) -> Self {
        self.rotate_file = true;
        self.rotate_size = size;
        self.rotate_count = count;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn without_rotation(mut self) -> Self {
        self.rotate_file = false;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    #[must_use = "builder methods return a new value and do not modify the original"]
    pub fn with_visibility(mut self, visibility: Visibility) -> Self {
        self.visibility = visibility;
        self
    }

    /// Whether the rotation step runs before each file write
    #[must_use]
    pub fn rotation_active(&self) -> bool {
        self.output_to_file && self.rotate_file
    }

    /// Rotation policy for the file sink, if rotation is active
    #[must_use]
    pub fn rotation_policy(&self) -> Option<RotationPolicy> {
        self.rotation_active()
            .then(|| RotationPolicy::new(self.rotate_size, self.rotate_count))
    }

    /// Check the file and rotation settings.
    ///
    /// Rotation bounds are only checked when file output and rotation are
    /// both enabled.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] describing the first
    /// offending field.
    pub fn validate(&self) -> Result<()> {
        if !self.output_to_file {
            return Ok(());
        }

        if self.output_file_path.as_os_str().is_empty() {
            return Err(LoggerError::config(
                "LogConfig",
                "output_file_path must not be empty when output_to_file is set",
            ));
        }

        if !self.rotate_file {
            return Ok(());
        }

        if !(MIN_ROTATE_SIZE..=MAX_ROTATE_SIZE).contains(&self.rotate_size) {
            return Err(LoggerError::config(
                "LogConfig",
                format!(
                    "invalid rotate_size [{}], must be [{}]~[{}]",
                    self.rotate_size, MIN_ROTATE_SIZE, MAX_ROTATE_SIZE
                ),
            ));
        }

        if !(MIN_ROTATE_COUNT..=MAX_ROTATE_COUNT).contains(&self.rotate_count) {
            return Err(LoggerError::config(
                "LogConfig",
                format!(
                    "invalid rotate_count [{}], must be [{}]~[{}]",
                    self.rotate_count, MIN_ROTATE_COUNT, MAX_ROTATE_COUNT
                ),
            ));
        }

        Ok(())
    }

    /// Parse and validate a JSON configuration
    ///
    /// Missing fields take their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: LogConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            LoggerError::io_operation(
                "reading logger configuration",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;
        Self::from_json_str(&content)
    }
}
