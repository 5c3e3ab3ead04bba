//! Configuration loader builder implementation.
//!
//! Responsibilities:
//! - Resolve the config file path with the documented precedence:
//!   explicit override, then `CONFIG_PATH`, then the default file name.
//! - Drive the read/parse/extract/validate pipeline in `load()`.
//! - Support `.env` bootstrap so `CONFIG_PATH` can come from a dotenv
//!   file.
//!
//! Does NOT handle:
//! - File reading and section extraction (delegated to file.rs).
//! - Environment variable parsing (delegated to env.rs).
//!
//! Invariants / Assumptions:
//! - An explicit `with_config_path` wins over `CONFIG_PATH`.
//! - `load()` either returns a fully populated `MqttConfig` or an error;
//!   there is no partial result.
//! - `load_dotenv()` must be called explicitly to enable `.env` loading,
//!   and the `DOTENV_DISABLED` variable is checked first.

use std::path::PathBuf;

use tracing::debug;

use super::env::config_path_from_env;
use super::error::ConfigError;
use super::file::{extract_mqtt, read_document};
use crate::constants::DEFAULT_CONFIG_FILE;
use crate::types::MqttConfig;

/// Loader for the MQTT connection parameters in the deployment config
/// file.
#[derive(Default)]
pub struct ConfigLoader {
    config_path: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a new configuration loader.
    pub fn new() -> Self {
        Self { config_path: None }
    }

    /// Check if dotenv loading is disabled via environment variable.
    fn dotenv_disabled() -> bool {
        matches!(
            std::env::var("DOTENV_DISABLED").ok().as_deref(),
            Some("true") | Some("1")
        )
    }

    /// Load environment variables from a `.env` file if present.
    ///
    /// If the `DOTENV_DISABLED` environment variable is set to "true" or
    /// "1", the `.env` file will not be loaded (useful for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
    /// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
    ///
    /// Missing `.env` files are silently ignored (returns `Ok(self)`).
    ///
    /// SAFETY: Error messages never include raw .env line contents to
    /// prevent secret leakage.
    pub fn load_dotenv(self) -> Result<Self, ConfigError> {
        if Self::dotenv_disabled() {
            return Ok(self);
        }

        match dotenvy::dotenv() {
            Ok(_) => Ok(self),
            Err(e) if Self::is_not_found(&e) => Ok(self),
            Err(dotenvy::Error::LineParse(_, idx)) => {
                Err(ConfigError::DotenvParse { error_index: idx })
            }
            Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
                kind: io_err.kind(),
            }),
            Err(_) => Err(ConfigError::DotenvUnknown),
        }
    }

    /// Check if a dotenv error indicates the file was not found.
    fn is_not_found(err: &dotenvy::Error) -> bool {
        matches!(
            err,
            dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
        )
    }

    /// Override the config file path (CLI flag or testing).
    pub fn with_config_path(mut self, path: PathBuf) -> Self {
        self.config_path = Some(path);
        self
    }

    /// Apply the `CONFIG_PATH` environment variable, unless an explicit
    /// path was already set.
    pub fn from_env(mut self) -> Self {
        if self.config_path.is_none() {
            self.config_path = config_path_from_env();
        }
        self
    }

    /// The path `load()` will read, after precedence is applied.
    pub fn resolved_path(&self) -> PathBuf {
        self.config_path
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
    }

    /// Read, parse, and validate the config file, returning the MQTT
    /// connection parameters.
    ///
    /// The file is read fresh on every call; nothing is cached across
    /// invocations.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::FileRead`] when the file is missing or unreadable.
    /// - [`ConfigError::Parse`] when the content is not valid JSON.
    /// - [`ConfigError::MissingMqttSection`] when the document has no
    ///   `mqtt` key.
    /// - [`ConfigError::InvalidMqttSection`] when the section is missing
    ///   fields or mistyped.
    /// - [`ConfigError::InvalidValue`] when a field holds an unusable
    ///   value (port 0, blank broker or topics).
    pub fn load(self) -> Result<MqttConfig, ConfigError> {
        let path = self.resolved_path();
        debug!(path = %path.display(), "loading deployment config");

        let document = read_document(&path)?;
        let params = extract_mqtt(&path, &document)?;
        validate(&params)?;

        Ok(params)
    }
}

/// Validates the extracted connection parameters.
///
/// Checks:
/// - port is non-zero (valid range 1-65535; the upper bound is enforced
///   by the u16 type)
/// - broker is not blank
/// - command and status topics are not blank
fn validate(params: &MqttConfig) -> Result<(), ConfigError> {
    if params.port == 0 {
        return Err(ConfigError::InvalidValue {
            field: "port",
            message: "must be between 1 and 65535".to_string(),
        });
    }

    if params.broker.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "broker",
            message: "must not be blank".to_string(),
        });
    }

    if params.command_topic.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "command_topic",
            message: "must not be blank".to_string(),
        });
    }

    if params.status_topic.trim().is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "status_topic",
            message: "must not be blank".to_string(),
        });
    }

    Ok(())
}
