//! JSON configuration example
//!
//! Loads a logger configuration from JSON, including one that fails
//! validation.
//!
//! Run with: cargo run --example json_config

use rust_clog::prelude::*;

const GOOD: &str = r#"{
    "output_to_console": true,
    "output_to_file": true,
    "output_file_path": "json_config.log",
    "rotate_file": true,
    "rotate_size": 4194304,
    "rotate_count": 8,
    "console_colors": true,
    "show_error": true,
    "show_warning": true,
    "show_info": true
}"#;

const BAD: &str = r#"{
    "output_to_file": true,
    "rotate_file": true,
    "rotate_size": 1024
}"#;

fn main() -> Result<()> {
    println!("=== Rust CLog - JSON Configuration Example ===\n");

    let config = LogConfig::from_json_str(GOOD)?;
    println!("Loaded: {:?}\n", config);

    let logger = Logger::with_config(config)?;
    rust_clog::info!(logger, "configured from JSON")?;
    rust_clog::debug!(logger, "debug stays hidden")?;
    logger.shutdown();

    match LogConfig::from_json_str(BAD) {
        Ok(_) => println!("\nUnexpectedly accepted"),
        Err(e) => println!("\nRejected as expected: {}", e),
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
