//! Logging macros for ergonomic log message formatting.
//!
//! These macros take `format!`-style arguments and keep the location of the
//! macro invocation, which ends up in the `file(line)` part of each line.
//!
//! # Examples
//!
//! ```
//! use rust_clog::prelude::*;
//! use rust_clog::{emit, info, warning};
//!
//! let logger = Logger::new();
//!
//! // Before init only the emitter prints anything
//! emit!(LogLevel::Error, "start {}", 0);
//!
//! // Guarded writes return a Result
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port).unwrap();
//! warning!(logger, "Retry attempt {} of {}", 3, 5).unwrap();
//! ```

/// Print to the console through the process-wide visibility flags,
/// without locking.
///
/// # Examples
///
/// ```
/// use rust_clog::{emit, LogLevel};
/// emit!(LogLevel::Error, "call init() fail");
/// emit!(LogLevel::Debug, "hidden by default: {}", 42);
/// ```
#[macro_export]
macro_rules! emit {
    ($level:expr, $($arg:tt)+) => {
        $crate::emit($level, format_args!($($arg)+))
    };
}

/// Guarded write on the given logger. Evaluates to `Result<()>`.
///
/// # Examples
///
/// ```
/// # use rust_clog::prelude::*;
/// # let logger = Logger::new();
/// use rust_clog::log;
/// log!(logger, LogLevel::Info, "Simple message").unwrap();
/// log!(logger, LogLevel::Error, "Error code: {}", 500).unwrap();
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log($level, format_args!($($arg)+))
    };
}

/// Guarded write on the process-wide logger. Evaluates to `Result<()>`.
///
/// # Examples
///
/// ```
/// use rust_clog::{glog, LogLevel};
/// glog!(LogLevel::Warning, "queue depth {}", 17).unwrap();
/// ```
#[macro_export]
macro_rules! glog {
    ($level:expr, $($arg:tt)+) => {
        $crate::log($level, format_args!($($arg)+))
    };
}

/// Log an error-level message.
///
/// # Examples
///
/// ```
/// # use rust_clog::prelude::*;
/// # let logger = Logger::new();
/// use rust_clog::error;
/// error!(logger, "Failed to connect to database").unwrap();
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use rust_clog::prelude::*;
/// # let logger = Logger::new();
/// use rust_clog::warning;
/// warning!(logger, "Low disk space").unwrap();
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an info-level message.
///
/// # Examples
///
/// ```
/// # use rust_clog::prelude::*;
/// # let logger = Logger::new();
/// use rust_clog::info;
/// info!(logger, "Processing {} items", 100).unwrap();
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a debug-level message.
///
/// # Examples
///
/// ```
/// # use rust_clog::prelude::*;
/// # let logger = Logger::new();
/// use rust_clog::debug;
/// debug!(logger, "Counter value: {}", 10).unwrap();
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}
