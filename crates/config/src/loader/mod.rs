//! Configuration loader for the OTA deployment tools.
//!
//! Responsibilities:
//! - Resolve the config file path from an explicit override, the
//!   `CONFIG_PATH` environment variable, or the default file name.
//! - Read and parse the JSON config document and extract the `mqtt`
//!   section as typed connection parameters.
//! - Enforce the `DOTENV_DISABLED` gate to prevent accidental dotenv
//!   loading in tests.
//!
//! Does NOT handle:
//! - Process termination on failure (the CLI entry point owns that).
//! - Establishing MQTT connections.
//!
//! Invariants / Assumptions:
//! - An explicit path set via `with_config_path` takes precedence over
//!   `CONFIG_PATH`, which takes precedence over the default file name.
//! - The file is re-read on every `load()`; nothing is cached.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading.

mod builder;
mod env;
mod error;
mod file;

#[cfg(test)]
mod tests;

pub use builder::ConfigLoader;
pub use env::env_var_or_none;
pub use error::ConfigError;

use crate::types::MqttConfig;

/// Load MQTT connection parameters using the standard resolution order:
/// `CONFIG_PATH` if set, otherwise `ota_deploy_config.json` in the
/// working directory.
///
/// This is the startup-time entry point for in-process callers. It never
/// returns a partially-valid result: either every field of [`MqttConfig`]
/// is populated and well-typed, or an error describes why not.
///
/// # Errors
///
/// Returns [`ConfigError::FileRead`] when the resolved file is missing or
/// unreadable, [`ConfigError::Parse`] when it is not valid JSON, and a
/// validation variant when the document lacks a usable `mqtt` section.
pub fn load_config() -> Result<MqttConfig, ConfigError> {
    ConfigLoader::new().from_env().load()
}
