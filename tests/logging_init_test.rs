//! Logging initialization against a scratch directory.
//!
//! Lives in its own test binary because `init_logging` installs the global
//! subscriber, which can only happen once per process.

use recruit_registry::{init_logging, LogConfig};

#[test]
fn test_init_logging_creates_log_dir() {
    let temp = tempfile::tempdir().unwrap();
    let log_dir = temp.path().join("logs");

    let config = LogConfig {
        log_dir: log_dir.clone(),
        ..Default::default()
    };
    init_logging(config).unwrap();

    assert!(log_dir.exists());
    tracing::info!("logging initialized");
}
