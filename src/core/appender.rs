//! Appender trait for log output destinations

use super::{error::Result, log_entry::LogEntry};

pub trait Appender: Send + Sync {
    /// Write one rendered line. `entry` is the record `line` was built from.
    fn append(&mut self, entry: &LogEntry, line: &str) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    /// Release any held resource. Later appends may fail.
    fn close(&mut self) {}
    /// Whether the destination can currently accept writes
    fn is_open(&self) -> bool {
        true
    }
    fn name(&self) -> &str;
}
