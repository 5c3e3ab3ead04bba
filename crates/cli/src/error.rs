//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that supervision tooling can use to
//!   distinguish failure classes.
//! - Map ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//!
//! Invariants:
//! - Every load/parse/validation failure maps to a non-zero code.
//! - Codes 2-4 mirror the loader's failure taxonomy.

use ota_config::ConfigError;

/// Structured exit codes for ota-deploy.
///
/// These codes enable supervision tooling to distinguish between failure
/// modes and take appropriate action (fix the path, fix the file, fail
/// fast).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success - command completed successfully.
    Success = 0,

    /// General error - unhandled or generic failure.
    GeneralError = 1,

    /// The config file could not be read (missing or unreadable path).
    ///
    /// Operators should check CONFIG_PATH and file permissions.
    ConfigUnreadable = 2,

    /// The config file is not valid JSON.
    ConfigMalformed = 3,

    /// The config file parsed but failed validation (missing `mqtt`
    /// section, missing fields, or out-of-range values).
    ConfigInvalid = 4,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ConfigError> for ExitCode {
    /// Map ConfigError variants to structured exit codes.
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::FileRead { .. } => ExitCode::ConfigUnreadable,

            ConfigError::Parse { .. } => ExitCode::ConfigMalformed,

            ConfigError::MissingMqttSection { .. }
            | ConfigError::InvalidMqttSection { .. }
            | ConfigError::InvalidValue { .. } => ExitCode::ConfigInvalid,

            ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
///
/// Returns ExitCode::GeneralError if no ConfigError is found in the
/// error chain.
pub trait ExitCodeExt {
    /// Extract the appropriate exit code from this error.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        for cause in self.chain() {
            if let Some(config_err) = cause.downcast_ref::<ConfigError>() {
                return ExitCode::from(config_err);
            }
        }

        ExitCode::GeneralError
    }
}
