use pmt_logger::{LevelFilter, Logger};
use serial_test::serial;
use std::time::Duration;

// The global subscriber can only be installed once per process, so this file
// holds the single test that actually calls `init` successfully.
#[test]
#[serial]
fn file_logging_creates_rolling_logs() {
    let tmp_dir = tempfile::tempdir().expect("temp dir");
    let log_dir = tmp_dir.path().join("logs");

    let logger = Logger::builder("test-app")
        .console(false)
        .path(&log_dir)
        .level(LevelFilter::INFO)
        .init()
        .expect("logger init");

    tracing::info!("hello world");
    // Give the background worker a moment, then flush by dropping the guard.
    std::thread::sleep(Duration::from_millis(20));
    drop(logger);

    assert!(log_dir.exists(), "log directory should be created by logger init");

    let has_log = std::fs::read_dir(&log_dir)
        .expect("read log dir")
        .flatten()
        .any(|entry| entry.path().extension().and_then(|e| e.to_str()) == Some("log"));

    assert!(has_log, "at least one log file should be created");
}
