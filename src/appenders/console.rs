//! Console appender implementation

use crate::core::{Appender, LogEntry, Result};
use colored::Colorize;
use std::io::{self, Write};

/// Writes lines to standard output.
///
/// Console output is best effort: write failures are dropped and never
/// reach the caller.
pub struct ConsoleAppender {
    use_colors: bool,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self { use_colors: false }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    fn format_line(&self, entry: &LogEntry, line: &str) -> String {
        if !self.use_colors {
            return line.to_string();
        }
        // Colour the text only so the trailing newline stays uncoloured.
        let text = line.strip_suffix('\n').unwrap_or(line);
        format!("{}\n", text.color(entry.level.color_code()))
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry, line: &str) -> Result<()> {
        let output = self.format_line(entry, line);
        let _ = io::stdout().lock().write_all(output.as_bytes());
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        let _ = io::stdout().flush();
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
