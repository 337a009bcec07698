//! # Rust CLog
//!
//! A small leveled logger with console and file output and size-based file
//! rotation.
//!
//! ## Features
//!
//! - **Four levels**: `ERR`, `WRN`, `INF` and `DBG`, each switched on or off
//!   independently at runtime
//! - **Guarded writes**: rotation check and sink writes run under one lock,
//!   so concurrent lines never tear
//! - **Size rotation**: the active file moves to `<path>.01`, older backups
//!   shift up, and at most `rotate_count` backups are kept
//! - **Bootstrap emitter**: [`emit!`] prints to the console before any
//!   configuration exists
//!
//! ## Example
//!
//! ```no_run
//! use rust_clog::prelude::*;
//! use rust_clog::{emit, glog};
//!
//! emit!(LogLevel::Error, "start {}", 0);
//!
//! rust_clog::init(
//!     LogConfig::new()
//!         .with_file("log.txt")
//!         .with_rotation(2 * 1024 * 1024, 4)
//!         .with_visibility(Visibility::up_to(LogLevel::Warning)),
//! )?;
//!
//! glog!(LogLevel::Error, "{} message {}", "error", 1)?;
//! rust_clog::shutdown();
//! # Ok::<(), LoggerError>(())
//! ```

pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::appenders::{ConsoleAppender, FileAppender, RotatingFileAppender, RotationPolicy};
    pub use crate::core::{
        Appender, LogConfig, LogEntry, LogLevel, Logger, LoggerError, LoggerMetrics, Result,
        Visibility,
    };
}

pub use crate::appenders::{ConsoleAppender, FileAppender, RotatingFileAppender, RotationPolicy};
pub use crate::core::{
    change_visibility, emit, global, init, log, shutdown, Appender, LogConfig, LogEntry, LogLevel,
    Logger, LoggerError, LoggerMetrics, Result, Visibility, VisibilityFlags, MAX_ROTATE_COUNT,
    MAX_ROTATE_SIZE, MIN_ROTATE_COUNT, MIN_ROTATE_SIZE,
};
