//! Integration tests for the public config loading API.
//!
//! These drive `load_config()` the way the OTA tools do at startup:
//! through `CONFIG_PATH` resolution against real files on disk.

use std::fs;
use std::path::PathBuf;

use secrecy::ExposeSecret;
use serial_test::serial;
use tempfile::TempDir;

use ota_config::{CONFIG_PATH_VAR, ConfigError, ConfigLoader, DEFAULT_CONFIG_FILE, load_config};

/// RAII guard for temporarily changing the current working directory.
struct CwdGuard {
    original_dir: PathBuf,
}

impl CwdGuard {
    fn new(temp_dir: &TempDir) -> Self {
        let original_dir = std::env::current_dir().expect("Failed to get current directory");
        std::env::set_current_dir(temp_dir.path()).expect("Failed to set current directory");
        Self { original_dir }
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original_dir);
    }
}

fn write_valid_config(dir: &std::path::Path, name: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(
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

#[test]
#[serial]
fn test_load_config_happy_path() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_valid_config(temp_dir.path(), "ota_deploy_config.json");

    temp_env::with_vars(
        [(CONFIG_PATH_VAR, Some(config_path.to_str().unwrap()))],
        || {
            let params = load_config().unwrap();

            assert_eq!(params.broker, "localhost");
            assert_eq!(params.port, 1883);
            assert_eq!(params.username, "user");
            assert_eq!(params.password.expose_secret(), "pass");
            assert_eq!(params.command_topic, "bms/ota/command");
            assert_eq!(params.status_topic, "bms/ota/status");
        },
    );
}

#[test]
#[serial]
fn test_load_config_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_valid_config(temp_dir.path(), "ota_deploy_config.json");

    temp_env::with_vars(
        [(CONFIG_PATH_VAR, Some(config_path.to_str().unwrap()))],
        || {
            let first = load_config().unwrap();
            let second = load_config().unwrap();

            assert_eq!(first.broker, second.broker);
            assert_eq!(first.port, second.port);
            assert_eq!(first.username, second.username);
            assert_eq!(
                first.password.expose_secret(),
                second.password.expose_secret()
            );
            assert_eq!(first.command_topic, second.command_topic);
            assert_eq!(first.status_topic, second.status_topic);
        },
    );
}

#[test]
#[serial]
fn test_load_config_missing_file() {
    temp_env::with_vars([(CONFIG_PATH_VAR, Some("non_existent_file.json"))], || {
        let result = load_config();
        assert!(matches!(result, Err(ConfigError::FileRead { .. })));
    });
}

#[test]
#[serial]
fn test_load_config_malformed_json() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("ota_deploy_config.json");
    fs::write(&config_path, "{ invalid_json }").unwrap();

    temp_env::with_vars(
        [(CONFIG_PATH_VAR, Some(config_path.to_str().unwrap()))],
        || {
            let result = load_config();
            assert!(matches!(result, Err(ConfigError::Parse { .. })));
        },
    );
}

#[test]
#[serial]
fn test_clearing_env_var_reverts_to_working_directory_default() {
    let temp_dir = TempDir::new().unwrap();
    write_valid_config(temp_dir.path(), DEFAULT_CONFIG_FILE);
    let _cwd_guard = CwdGuard::new(&temp_dir);

    temp_env::with_vars([(CONFIG_PATH_VAR, None::<&str>)], || {
        let params = load_config().unwrap();
        assert_eq!(params.broker, "localhost");
    });
}

#[test]
#[serial]
fn test_config_is_reread_on_every_load() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_valid_config(temp_dir.path(), "ota_deploy_config.json");

    temp_env::with_vars(
        [(CONFIG_PATH_VAR, Some(config_path.to_str().unwrap()))],
        || {
            let first = load_config().unwrap();
            assert_eq!(first.port, 1883);

            fs::write(
                &config_path,
                r#"{
                    "mqtt": {
                        "broker": "localhost",
                        "port": 8883,
                        "username": "user",
                        "password": "pass",
                        "command_topic": "bms/ota/command",
                        "status_topic": "bms/ota/status"
                    }
                }"#,
            )
            .unwrap();

            // No caching: the second load observes the new content.
            let second = load_config().unwrap();
            assert_eq!(second.port, 8883);
        },
    );
}

#[test]
fn test_builder_load_does_not_touch_environment() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = write_valid_config(temp_dir.path(), "custom.json");

    // No from_env(): an explicit path needs no env access at all.
    let params = ConfigLoader::new()
        .with_config_path(config_path)
        .load()
        .unwrap();
    assert_eq!(params.status_topic, "bms/ota/status");
}
