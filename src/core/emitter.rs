//! Unsynchronized console emitter
//!
//! Prints a formatted line straight to standard output. It takes no lock,
//! touches no file and needs no prior initialization, so it is safe to use
//! for bootstrap messages and for the logger's own failure reports. Lines
//! from here may interleave with guarded console writes.

use super::log_entry::LogEntry;
use super::log_level::LogLevel;
use super::visibility::VisibilityFlags;
use std::fmt;
use std::io::{self, Write};

/// Print `args` at `level` if `flags` lets that level through.
///
/// The line carries the location of the caller. Console errors are
/// ignored.
#[track_caller]
pub fn emit_with(flags: &VisibilityFlags, level: LogLevel, args: fmt::Arguments<'_>) {
    let _ = write_to(&mut io::stdout().lock(), flags, level, args);
}

/// Render one line into `out` if `level` is visible.
///
/// Hidden levels write nothing.
#[track_caller]
pub fn write_to<W: Write>(
    out: &mut W,
    flags: &VisibilityFlags,
    level: LogLevel,
    args: fmt::Arguments<'_>,
) -> io::Result<()> {
    if !flags.is_visible(level) {
        return Ok(());
    }

    let entry = LogEntry::capture(level, args);
    out.write_all(entry.render().as_bytes())
}
