//! Main logger implementation
//!
//! [`Logger`] owns the configuration, the console and file sinks and the
//! lock that serializes every guarded write. Each [`Logger::log`] call runs
//! the rotation check and the sink writes under that lock, so lines from
//! concurrent threads never interleave inside the file.

use super::{
    appender::Appender,
    config::LogConfig,
    emitter,
    error::{LoggerError, Result},
    log_entry::LogEntry,
    log_level::LogLevel,
    metrics::LoggerMetrics,
    visibility::{Visibility, VisibilityFlags},
};
use crate::appenders::{ConsoleAppender, FileAppender, RotatingFileAppender};
use parking_lot::{const_mutex, Mutex};
use std::fmt;
use std::panic::Location;

/// Everything the guarded path mutates
struct SinkState {
    config: Option<LogConfig>,
    console: Option<ConsoleAppender>,
    file: Option<Box<dyn Appender>>,
}

impl SinkState {
    const fn empty() -> Self {
        Self {
            config: None,
            console: None,
            file: None,
        }
    }

    fn has_sinks(&self) -> bool {
        self.console.is_some() || self.file.is_some()
    }

    /// Console first, then file. Only the file can fail.
    fn write(&mut self, entry: &LogEntry, line: &str) -> Result<()> {
        if let Some(ref mut console) = self.console {
            console.append(entry, line)?;
        }
        if let Some(ref mut file) = self.file {
            file.append(entry, line)?;
        }
        Ok(())
    }
}

/// Leveled logger with a console sink and a size-rotated file sink.
///
/// A fresh logger has no sinks: [`log`](Logger::log) is a successful no-op
/// until [`init`](Logger::init) is called, while [`emit`](Logger::emit)
/// works immediately with the default visibility (errors only).
///
/// # Example
///
/// ```no_run
/// use rust_clog::{LogConfig, LogLevel, Logger, Visibility};
///
/// let logger = Logger::new();
/// logger.init(
///     LogConfig::new()
///         .with_file("log.txt")
///         .with_rotation(2 * 1024 * 1024, 4)
///         .with_visibility(Visibility::ALL),
/// )?;
///
/// rust_clog::log!(logger, LogLevel::Info, "listening on port {}", 8080)?;
/// logger.shutdown();
/// # Ok::<(), rust_clog::LoggerError>(())
/// ```
pub struct Logger {
    visibility: VisibilityFlags,
    metrics: LoggerMetrics,
    state: Mutex<SinkState>,
}

impl Logger {
    /// Create an unconfigured logger. Usable in a `static`.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            visibility: VisibilityFlags::new(),
            metrics: LoggerMetrics::new(),
            state: const_mutex(SinkState::empty()),
        }
    }

    /// Create a logger and initialize it with `config`
    pub fn with_config(config: LogConfig) -> Result<Self> {
        let logger = Self::new();
        logger.init(config)?;
        Ok(logger)
    }

    /// Apply `config`, replacing any previous sinks.
    ///
    /// The configuration is validated before anything is opened, so a
    /// rejected configuration leaves no new file handle behind and keeps the
    /// previous sinks in place.
    ///
    /// # Errors
    ///
    /// Returns [`LoggerError::InvalidConfiguration`] for out-of-range
    /// rotation settings, or a file error when the log file cannot be opened.
    pub fn init(&self, config: LogConfig) -> Result<()> {
        config.validate().map_err(|e| self.report(e))?;

        let console = config
            .output_to_console
            .then(|| ConsoleAppender::with_colors(config.console_colors));
        let file = Self::open_file_sink(&config).map_err(|e| self.report(e))?;

        let visibility = config.visibility;
        {
            let mut state = self.state.lock();
            state.console = console;
            // Replacing the sink drops, and so closes, any previous handle.
            state.file = file;
            state.config = Some(config);
        }
        self.visibility.set_all(visibility);

        Ok(())
    }

    fn open_file_sink(config: &LogConfig) -> Result<Option<Box<dyn Appender>>> {
        if !config.output_to_file {
            return Ok(None);
        }

        let path = config.output_file_path.clone();
        let sink: Box<dyn Appender> = match config.rotation_policy() {
            Some(policy) => Box::new(RotatingFileAppender::new(path, policy)?),
            None => Box::new(FileAppender::new(path)?),
        };
        Ok(Some(sink))
    }

    /// Close the log file if open. Safe to call repeatedly.
    ///
    /// The configuration is kept, so with file output enabled later calls to
    /// [`log`](Logger::log) fail until the logger is initialized again.
    pub fn shutdown(&self) {
        let mut state = self.state.lock();
        if let Some(ref mut file) = state.file {
            let _ = file.flush();
            file.close();
        }
    }

    /// Replace the visibility of every level at once
    pub fn change_visibility(&self, visibility: Visibility) {
        self.visibility.set_all(visibility);
    }

    pub fn set_level_visible(&self, level: LogLevel, visible: bool) {
        self.visibility.set(level, visible);
    }

    #[must_use]
    pub fn is_visible(&self, level: LogLevel) -> bool {
        self.visibility.is_visible(level)
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility.snapshot()
    }

    /// Print straight to the console without taking the lock.
    ///
    /// Only the visibility flags are consulted; the configured sinks are
    /// ignored.
    #[track_caller]
    pub fn emit(&self, level: LogLevel, args: fmt::Arguments<'_>) {
        emitter::emit_with(&self.visibility, level, args);
    }

    /// Write one line to every enabled sink.
    ///
    /// Hidden levels return immediately without locking. Otherwise the
    /// rotation check and the writes happen under the logger lock. Console
    /// output is best effort; the first file error (rotation or write) is
    /// printed through [`emit`](Logger::emit) and returned.
    #[track_caller]
    pub fn log(&self, level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
        if !self.visibility.is_visible(level) {
            self.metrics.record_suppressed();
            return Ok(());
        }

        let location = Location::caller();
        let result = {
            let mut state = self.state.lock();
            if !state.has_sinks() {
                return Ok(());
            }

            let entry = LogEntry::new(level, location, fmt::format(args));
            let line = entry.render();
            state.write(&entry, &line)
        };

        match result {
            Ok(()) => {
                self.metrics.record_logged();
                Ok(())
            }
            Err(e) => {
                self.metrics.record_failed();
                Err(self.report(e))
            }
        }
    }

    /// Flush every sink
    pub fn flush(&self) -> Result<()> {
        let mut state = self.state.lock();
        if let Some(ref mut console) = state.console {
            console.flush()?;
        }
        if let Some(ref mut file) = state.file {
            file.flush()?;
        }
        Ok(())
    }

    /// Whether a log file handle is currently open
    #[must_use]
    pub fn is_file_open(&self) -> bool {
        self.state.lock().file.as_ref().is_some_and(|file| file.is_open())
    }

    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.state.lock().config.is_some()
    }

    /// Active configuration, with the current visibility flags
    #[must_use]
    pub fn config(&self) -> Option<LogConfig> {
        let mut config = self.state.lock().config.clone()?;
        config.visibility = self.visibility.snapshot();
        Some(config)
    }

    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Print a failure at `Error` and hand it back
    fn report(&self, err: LoggerError) -> LoggerError {
        self.emit(LogLevel::Error, format_args!("{}", err));
        err
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}
