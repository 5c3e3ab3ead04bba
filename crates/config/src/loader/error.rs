//! Error types for configuration loading.
//!
//! Responsibilities:
//! - Define error variants for all configuration loading failures.
//! - Keep the three failure classes (unreadable file, malformed JSON,
//!   invalid content) as distinct variants so callers and exit-code
//!   mapping can tell them apart.
//!
//! Invariants:
//! - All variants include context for debugging (paths, field names).
//! - Dotenv errors NEVER include raw `.env` line contents to prevent
//!   secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The resolved path does not reference a readable file.
    #[error("Failed to read config file at {path}: {kind}. Hint: set CONFIG_PATH to the config file location")]
    FileRead { path: PathBuf, kind: ErrorKind },

    /// The file content is not syntactically valid JSON.
    #[error("Failed to parse config file at {path}: {message}")]
    Parse { path: PathBuf, message: String },

    /// The document parsed but has no `mqtt` section.
    #[error("Config file at {path} has no \"mqtt\" section")]
    MissingMqttSection { path: PathBuf },

    /// The `mqtt` section is present but missing fields or mistyped.
    #[error("Invalid \"mqtt\" section in config file at {path}: {message}")]
    InvalidMqttSection { path: PathBuf, message: String },

    /// A field deserialized but holds an unusable value.
    #[error("Invalid value for {field}: {message}")]
    InvalidValue {
        field: &'static str,
        message: String,
    },

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse
    /// failure, NOT the offending line content, to prevent leaking
    /// secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from the dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// True when the error means the config file itself could not be
    /// obtained, as opposed to its content being bad.
    pub fn is_read_failure(&self) -> bool {
        matches!(self, ConfigError::FileRead { .. })
    }

    /// True when the document parsed as JSON but failed validation
    /// (missing section, missing fields, or out-of-range values).
    pub fn is_validation_failure(&self) -> bool {
        matches!(
            self,
            ConfigError::MissingMqttSection { .. }
                | ConfigError::InvalidMqttSection { .. }
                | ConfigError::InvalidValue { .. }
        )
    }
}
