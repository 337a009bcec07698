//! Appender implementations

pub mod console;
pub mod file;
pub mod rotating_file;

pub use console::ConsoleAppender;
pub use file::FileAppender;
pub use rotating_file::{backup_path, RotatingFileAppender, RotationPolicy};

// Re-export trait for convenience
pub use crate::core::Appender;
