//! Configuration management for the OTA deployment tools.
//!
//! This crate provides types and a loader for the MQTT connection
//! parameters used by the OTA command and status channels, resolved
//! from the `CONFIG_PATH` environment variable and a JSON config file.

mod constants;
mod loader;
pub mod types;

pub use constants::{CONFIG_PATH_VAR, DEFAULT_CONFIG_FILE};
pub use loader::{ConfigError, ConfigLoader, env_var_or_none, load_config};
pub use types::MqttConfig;
