//! Size-based rotation example
//!
//! Writes enough lines through an explicit logger handle to rotate the file
//! several times, then lists the backups left on disk.
//!
//! Run with: cargo run --example rotation

use rust_clog::appenders::backup_path;
use rust_clog::prelude::*;
use rust_clog::MIN_ROTATE_SIZE;
use std::fs;
use std::path::PathBuf;

fn main() -> Result<()> {
    println!("=== Rust CLog - Rotation Example ===\n");

    let dir = PathBuf::from("logs");
    fs::create_dir_all(&dir)?;
    let path = dir.join("rotation.log");

    let logger = Logger::with_config(
        LogConfig::new()
            .with_console(false)
            .with_file(&path)
            .with_rotation(MIN_ROTATE_SIZE, 3)
            .with_visibility(Visibility::ALL),
    )?;

    let padding = "=".repeat(200);
    for i in 0..25_000 {
        rust_clog::info!(logger, "line {} {}", i, padding)?;
    }
    logger.shutdown();

    println!("Active file: {} ({} bytes)", path.display(), fs::metadata(&path)?.len());
    for index in 1..=3 {
        let backup = backup_path(&path, index);
        match fs::metadata(&backup) {
            Ok(meta) => println!("Backup:      {} ({} bytes)", backup.display(), meta.len()),
            Err(_) => println!("Backup:      {} (absent)", backup.display()),
        }
    }

    let metrics = logger.metrics();
    println!(
        "\nLogged {} lines, {} failures",
        metrics.total_logged(),
        metrics.failed_count()
    );

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
