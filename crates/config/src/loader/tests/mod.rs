//! Tests for the configuration loader.
//!
//! Responsibilities:
//! - Test path resolution precedence (explicit, env var, default).
//! - Test the read/parse/extract/validate pipeline failure modes.
//! - Test dotenv bootstrap behavior.
//!
//! Invariants:
//! - Tests use `serial_test` to prevent environment variable pollution.
//! - Tests use `global_test_lock()` for additional synchronization.
//! - Temporary directories are cleaned up automatically via `tempfile`.

use std::path::PathBuf;
use std::sync::Mutex;

use tempfile::TempDir;


/// Returns the global test lock for environment variable isolation.
pub fn env_lock() -> &'static Mutex<()> {
    crate::test_util::global_test_lock()
}

/// Write a well-formed config file into `dir` and return its path.
pub fn write_valid_config(dir: &TempDir) -> PathBuf {
    let path = dir.path().join("ota_deploy_config.json");
    std::fs::write(
        &path,
        r#"{
            "mqtt": {
                "broker": "localhost",
                "port": 1883,
                "username": "user",
                "password": "pass",
                "command_topic": "bms/ota/command",
                "status_topic": "bms/ota/status"
            }
        }"#,
    )
    .unwrap();
    path
}

/// Write arbitrary content as a config file into `dir` and return its
/// path.
pub fn write_config_content(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("ota_deploy_config.json");
    std::fs::write(&path, content).unwrap();
    path
}
