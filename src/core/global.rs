//! Process-wide logger
//!
//! A single [`Logger`] lives in a `static` so any call site can log without
//! threading a handle through. The free functions here forward to it; the
//! `emit!` and `glog!` macros use it too.

use super::{
    config::LogConfig, error::Result, log_level::LogLevel, logger::Logger,
    visibility::Visibility,
};
use std::fmt;

static GLOBAL_LOGGER: Logger = Logger::new();

/// The process-wide logger
#[inline]
pub fn global() -> &'static Logger {
    &GLOBAL_LOGGER
}

/// Initialize the process-wide logger. See [`Logger::init`].
pub fn init(config: LogConfig) -> Result<()> {
    GLOBAL_LOGGER.init(config)
}

/// Close the process-wide log file. See [`Logger::shutdown`].
pub fn shutdown() {
    GLOBAL_LOGGER.shutdown();
}

/// Change which levels are shown, for every thread
pub fn change_visibility(visibility: Visibility) {
    GLOBAL_LOGGER.change_visibility(visibility);
}

/// Unguarded console print through the process-wide visibility flags
#[track_caller]
pub fn emit(level: LogLevel, args: fmt::Arguments<'_>) {
    GLOBAL_LOGGER.emit(level, args);
}

/// Guarded write through the process-wide logger
#[track_caller]
pub fn log(level: LogLevel, args: fmt::Arguments<'_>) -> Result<()> {
    GLOBAL_LOGGER.log(level, args)
}
