//! Per-level visibility switches
//!
//! [`Visibility`] is the plain, serializable form carried in a
//! [`LogConfig`](super::LogConfig). [`VisibilityFlags`] is the live table a
//! logger consults on every call; it is a set of atomics so a level check
//! never takes the writer lock.

use super::log_level::LogLevel;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Which levels are shown. Only errors are visible by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Visibility {
    pub show_error: bool,
    pub show_warning: bool,
    pub show_info: bool,
    pub show_debug: bool,
}

impl Visibility {
    /// Error only
    pub const DEFAULT: Visibility = Visibility {
        show_error: true,
        show_warning: false,
        show_info: false,
        show_debug: false,
    };

    /// Every level visible
    pub const ALL: Visibility = Visibility {
        show_error: true,
        show_warning: true,
        show_info: true,
        show_debug: true,
    };

    /// Nothing visible
    pub const NONE: Visibility = Visibility {
        show_error: false,
        show_warning: false,
        show_info: false,
        show_debug: false,
    };

    /// Show every level at or above `level` in severity
    #[must_use]
    pub fn up_to(level: LogLevel) -> Self {
        Self {
            show_error: true,
            show_warning: level >= LogLevel::Warning,
            show_info: level >= LogLevel::Info,
            show_debug: level >= LogLevel::Debug,
        }
    }

    #[must_use]
    pub fn is_visible(&self, level: LogLevel) -> bool {
        match level {
            LogLevel::Error => self.show_error,
            LogLevel::Warning => self.show_warning,
            LogLevel::Info => self.show_info,
            LogLevel::Debug => self.show_debug,
        }
    }

    #[must_use]
    pub fn with_level(mut self, level: LogLevel, visible: bool) -> Self {
        match level {
            LogLevel::Error => self.show_error = visible,
            LogLevel::Warning => self.show_warning = visible,
            LogLevel::Info => self.show_info = visible,
            LogLevel::Debug => self.show_debug = visible,
        }
        self
    }
}

impl Default for Visibility {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Live visibility table shared by every caller of a logger.
///
/// Loads and stores are `Relaxed`: a call racing an update sees either the
/// old or the new value for its level, never anything else.
#[derive(Debug)]
pub struct VisibilityFlags {
    flags: [AtomicBool; 4],
}

impl VisibilityFlags {
    pub const fn new() -> Self {
        Self::from_visibility(Visibility::DEFAULT)
    }

    pub const fn from_visibility(v: Visibility) -> Self {
        Self {
            flags: [
                AtomicBool::new(v.show_error),
                AtomicBool::new(v.show_warning),
                AtomicBool::new(v.show_info),
                AtomicBool::new(v.show_debug),
            ],
        }
    }

    #[inline]
    pub fn is_visible(&self, level: LogLevel) -> bool {
        self.flags[level.index()].load(Ordering::Relaxed)
    }

    pub fn set(&self, level: LogLevel, visible: bool) {
        self.flags[level.index()].store(visible, Ordering::Relaxed);
    }

    pub fn set_all(&self, v: Visibility) {
        for level in LogLevel::ALL {
            self.set(level, v.is_visible(level));
        }
    }

    pub fn snapshot(&self) -> Visibility {
        LogLevel::ALL
            .iter()
            .fold(Visibility::NONE, |v, &level| v.with_level(level, self.is_visible(level)))
    }
}

impl Default for VisibilityFlags {
    fn default() -> Self {
        Self::new()
    }
}
