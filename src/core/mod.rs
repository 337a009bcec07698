//! Core logger types and traits

pub mod appender;
pub mod config;
pub mod emitter;
pub mod error;
pub mod global;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod timestamp;
pub mod visibility;

pub use appender::Appender;
pub use config::{
    LogConfig, MAX_ROTATE_COUNT, MAX_ROTATE_SIZE, MIN_ROTATE_COUNT, MIN_ROTATE_SIZE,
};
pub use error::{LoggerError, Result};
pub use global::{change_visibility, emit, global, init, log, shutdown};
pub use log_entry::LogEntry;
pub use log_level::LogLevel;
pub use logger::Logger;
pub use metrics::LoggerMetrics;
pub use timestamp::TIMESTAMP_FORMAT;
pub use visibility::{Visibility, VisibilityFlags};
