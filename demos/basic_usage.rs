//! Basic logger usage example
//!
//! Demonstrates the bootstrap emitter, global initialization with console and
//! file output, and switching level visibility at runtime.
//!
//! Run with: cargo run --example basic_usage

use rust_clog::prelude::*;
use rust_clog::{emit, glog};

fn main() -> Result<()> {
    println!("=== Rust CLog - Basic Usage Example ===\n");

    // Usable before any configuration exists
    emit!(LogLevel::Error, "start {}", 0);

    rust_clog::init(
        LogConfig::new()
            .with_console(true)
            .with_file("log.txt")
            .with_rotation(2 * 1024 * 1024, 4)
            .with_visibility(Visibility::up_to(LogLevel::Warning)),
    )?;

    println!("\n1. Errors and warnings only:");
    glog!(LogLevel::Error, "{} message {}", "error", 1)?;
    glog!(LogLevel::Warning, "{} message {}", "warning", 1)?;
    glog!(LogLevel::Info, "{} message {}", "information", 1)?;
    glog!(LogLevel::Debug, "{} message {}", "debug", 1)?;

    println!("\n2. Every level visible:");
    rust_clog::change_visibility(Visibility::ALL);
    glog!(LogLevel::Info, "{} message {}", "information", 2)?;
    glog!(LogLevel::Debug, "{} message {}", "debug", 2)?;

    rust_clog::shutdown();

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
