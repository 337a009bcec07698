//! Log entry structure

use super::log_level::LogLevel;
use super::timestamp;
use chrono::{DateTime, Local};
use std::fmt;
use std::panic::Location;
use std::path::Path;

/// One formatted message together with where and when it was produced.
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub level: LogLevel,
    pub timestamp: DateTime<Local>,
    /// Basename of the calling source file
    pub file: String,
    pub line: u32,
    pub message: String,
}

impl LogEntry {
    /// Build an entry stamped with the current time and the given location
    pub fn new(level: LogLevel, location: &Location<'_>, message: String) -> Self {
        Self {
            level,
            timestamp: timestamp::now(),
            file: basename(location.file()).to_string(),
            line: location.line(),
            message,
        }
    }

    /// Build an entry for the caller of the function this is invoked from
    #[track_caller]
    pub fn capture(level: LogLevel, args: fmt::Arguments<'_>) -> Self {
        Self::new(level, Location::caller(), fmt::format(args))
    }

    /// `<timestamp> <file>(<line>).<LVL>: `
    pub fn prefix(&self) -> String {
        format!(
            "{} {}({:04}).{}: ",
            timestamp::format_timestamp(&self.timestamp),
            self.file,
            self.line,
            self.level.prefix()
        )
    }

    /// Full line as written to every sink, newline included
    pub fn render(&self) -> String {
        let mut line = self.prefix();
        line.push_str(&self.message);
        line.push('\n');
        line
    }
}

fn basename(path: &str) -> &str {
    Path::new(path)
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or(path)
}
