//! Integration tests for the guarded write path
//!
//! These tests verify:
//! - Size-based rotation through a configured logger
//! - The rotation threshold boundary
//! - Backup ring ordering and discarding of the oldest backup
//! - Visibility filtering
//! - Initialization failures

use rust_clog::appenders::backup_path;
use rust_clog::prelude::*;
use rust_clog::MIN_ROTATE_SIZE;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const MIB: u64 = 1024 * 1024;

fn file_config(path: &Path) -> LogConfig {
    LogConfig::new()
        .with_console(false)
        .with_file(path)
        .with_visibility(Visibility::ALL)
}

/// Every guarded probe goes through here so all probes share one call site
/// and therefore one line length.
fn log_probe(logger: &Logger) -> Result<()> {
    logger.log(LogLevel::Error, format_args!("probe"))
}

fn probe_len(dir: &Path) -> u64 {
    let scratch = dir.join("scratch.log");
    let logger = Logger::with_config(file_config(&scratch)).expect("scratch logger");
    log_probe(&logger).expect("probe write");
    fs::metadata(&scratch).expect("scratch file").len()
}

/// Message number parsed back out of a `msg-<n> ...` line
fn msg_number(line: &str) -> u64 {
    let start = line.find("msg-").expect("numbered line") + 4;
    line[start..]
        .split(' ')
        .next()
        .and_then(|n| n.parse().ok())
        .expect("message number")
}

fn numbers_in(path: &Path) -> Vec<u64> {
    fs::read_to_string(path)
        .expect("read log file")
        .lines()
        .map(msg_number)
        .collect()
}

#[test]
fn test_exact_threshold_forces_rotation() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("exact.log");
    let probe = probe_len(temp_dir.path());
    assert!(probe > "probe\n".len() as u64);

    let prefill = "x".repeat((MIN_ROTATE_SIZE - probe) as usize);
    fs::write(&log_file, &prefill).unwrap();

    let logger =
        Logger::with_config(file_config(&log_file).with_rotation(MIN_ROTATE_SIZE, 3)).unwrap();
    log_probe(&logger).unwrap();

    let backup = backup_path(&log_file, 1);
    assert_eq!(fs::read_to_string(&backup).unwrap(), prefill);
    assert_eq!(fs::metadata(&log_file).unwrap().len(), probe);
}

#[test]
fn test_one_byte_below_threshold_does_not_rotate() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("below.log");
    let probe = probe_len(temp_dir.path());

    let prefill = "x".repeat((MIN_ROTATE_SIZE - probe - 1) as usize);
    fs::write(&log_file, &prefill).unwrap();

    let logger =
        Logger::with_config(file_config(&log_file).with_rotation(MIN_ROTATE_SIZE, 3)).unwrap();
    log_probe(&logger).unwrap();

    assert!(!backup_path(&log_file, 1).exists());
    assert_eq!(fs::metadata(&log_file).unwrap().len(), MIN_ROTATE_SIZE - 1);
}

#[test]
fn test_three_rotations_at_two_mib() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("log.txt");

    let logger = Logger::with_config(file_config(&log_file).with_rotation(2 * MIB, 4)).unwrap();

    let padding = "p".repeat(1000);
    let mut n = 0u64;
    while !backup_path(&log_file, 3).exists() {
        rust_clog::error!(logger, "msg-{} {}", n, padding).unwrap();
        n += 1;
        assert!(n < 20_000, "rotation never happened three times");
    }

    let b1 = backup_path(&log_file, 1);
    let b2 = backup_path(&log_file, 2);
    let b3 = backup_path(&log_file, 3);
    assert!(b1.exists() && b2.exists() && b3.exists());
    assert!(!backup_path(&log_file, 4).exists());

    for backup in [&b1, &b2, &b3] {
        let size = fs::metadata(backup).unwrap().len();
        assert!(size < 2 * MIB, "backup {} too large: {}", backup.display(), size);
    }

    // Oldest content sits at the highest number; .01 holds the most recent.
    let (n3, n2, n1, active) = (
        numbers_in(&b3),
        numbers_in(&b2),
        numbers_in(&b1),
        numbers_in(&log_file),
    );
    assert_eq!(n3.first(), Some(&0));
    assert!(n3.last() < n2.first());
    assert!(n2.last() < n1.first());
    assert!(n1.last() < active.first());
    assert_eq!(active.last(), Some(&(n - 1)));

    let total = n3.len() + n2.len() + n1.len() + active.len();
    assert_eq!(total as u64, n);
}

#[test]
fn test_full_ring_discards_oldest() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("ring.log");

    let logger =
        Logger::with_config(file_config(&log_file).with_rotation(MIN_ROTATE_SIZE, 2)).unwrap();

    let padding = "q".repeat(2000);
    let mut n = 0u64;
    let mut log_next = |logger: &Logger| {
        rust_clog::info!(logger, "msg-{} {}", n, padding).unwrap();
        n += 1;
    };

    while !backup_path(&log_file, 2).exists() {
        log_next(&logger);
    }
    let oldest_before = numbers_in(&backup_path(&log_file, 2));
    assert_eq!(oldest_before.first(), Some(&0));

    // Drive one more rotation; the active file shrinks when it happens.
    let newest_before = numbers_in(&backup_path(&log_file, 1));
    let mut last_len = fs::metadata(&log_file).unwrap().len();
    loop {
        log_next(&logger);
        let len = fs::metadata(&log_file).unwrap().len();
        if len < last_len {
            break;
        }
        last_len = len;
    }

    assert!(!backup_path(&log_file, 3).exists());
    assert_eq!(numbers_in(&backup_path(&log_file, 2)), newest_before);
    for path in [log_file.clone(), backup_path(&log_file, 1), backup_path(&log_file, 2)] {
        assert!(!numbers_in(&path).contains(&0), "oldest content survived in {}", path.display());
    }
}

#[test]
fn test_hidden_levels_write_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("hidden.log");

    let logger = Logger::with_config(
        file_config(&log_file).with_visibility(Visibility::up_to(LogLevel::Warning)),
    )
    .unwrap();

    rust_clog::info!(logger, "not shown").unwrap();
    rust_clog::debug!(logger, "not shown either").unwrap();
    assert_eq!(fs::metadata(&log_file).unwrap().len(), 0);

    rust_clog::warning!(logger, "shown").unwrap();
    let content = fs::read_to_string(&log_file).unwrap();
    assert_eq!(content.lines().count(), 1);
    assert!(content.contains(".WRN: shown"));

    logger.change_visibility(Visibility::ALL);
    rust_clog::debug!(logger, "now shown").unwrap();
    assert_eq!(fs::read_to_string(&log_file).unwrap().lines().count(), 2);
    assert_eq!(logger.metrics().suppressed_count(), 2);
}

#[test]
fn test_init_rejects_rotation_bounds() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("bounds.log");
    let logger = Logger::new();

    for config in [
        file_config(&log_file).with_rotation(MIN_ROTATE_SIZE - 1, 4),
        file_config(&log_file).with_rotation(rust_clog::MAX_ROTATE_SIZE + 1, 4),
        file_config(&log_file).with_rotation(MIN_ROTATE_SIZE, 0),
        file_config(&log_file).with_rotation(MIN_ROTATE_SIZE, 100),
    ] {
        let err = logger.init(config).unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
        assert!(!logger.is_file_open());
    }
    assert!(!log_file.exists());
}

#[test]
fn test_init_reports_unopenable_path() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("no_such_dir").join("app.log");

    let err = Logger::with_config(file_config(&log_file)).err().expect("init should fail");
    assert!(matches!(err, LoggerError::FileAppenderError { .. }));
}

#[test]
fn test_reinit_switches_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let first = temp_dir.path().join("first.log");
    let second = temp_dir.path().join("second.log");

    let logger = Logger::with_config(file_config(&first)).unwrap();
    rust_clog::error!(logger, "one").unwrap();

    logger.init(file_config(&second)).unwrap();
    rust_clog::error!(logger, "two").unwrap();

    assert!(fs::read_to_string(&first).unwrap().contains("one"));
    assert!(!fs::read_to_string(&first).unwrap().contains("two"));
    assert!(fs::read_to_string(&second).unwrap().contains("two"));
}

#[test]
fn test_rotation_failure_is_returned_and_counted() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("stuck.log");

    // The only backup slot is a directory, so it cannot be removed.
    let slot = backup_path(&log_file, 1);
    fs::create_dir(&slot).unwrap();
    fs::write(slot.join("keep"), "x").unwrap();

    let prefill = "x".repeat(MIN_ROTATE_SIZE as usize);
    fs::write(&log_file, &prefill).unwrap();

    let logger =
        Logger::with_config(file_config(&log_file).with_rotation(MIN_ROTATE_SIZE, 1)).unwrap();

    let err = rust_clog::error!(logger, "cannot rotate").unwrap_err();
    assert!(err.is_rotation());
    assert_eq!(logger.metrics().failed_count(), 1);
    assert_eq!(fs::read_to_string(&log_file).unwrap(), prefill);
}

#[test]
fn test_plain_file_without_rotation_grows() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let log_file = temp_dir.path().join("plain.log");

    let prefill = "x".repeat(MIN_ROTATE_SIZE as usize);
    fs::write(&log_file, &prefill).unwrap();

    let logger = Logger::with_config(file_config(&log_file)).unwrap();
    rust_clog::error!(logger, "still appended").unwrap();

    assert!(!backup_path(&log_file, 1).exists());
    assert!(fs::metadata(&log_file).unwrap().len() > MIN_ROTATE_SIZE);
}
