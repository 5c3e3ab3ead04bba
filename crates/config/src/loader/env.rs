//! Environment variable handling for configuration.
//!
//! Responsibilities:
//! - Read `CONFIG_PATH` to resolve the config file location.
//! - Provide a helper for reading env vars with empty/whitespace
//!   filtering.
//!
//! Does NOT handle:
//! - Reading or validating the config file itself (see file.rs).
//! - `.env` file loading (handled by `ConfigLoader::load_dotenv`).
//!
//! Invariants:
//! - Empty or whitespace-only environment variables are treated as unset.
//! - Returned values are trimmed (leading/trailing whitespace removed).

use std::path::PathBuf;

use crate::constants::CONFIG_PATH_VAR;

/// Read an environment variable, returning None if unset, empty, or
/// whitespace-only. Returns the trimmed value if present.
pub fn env_var_or_none(key: &str) -> Option<String> {
    std::env::var(key).ok().and_then(|s| {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            None
        } else if trimmed.len() == s.len() {
            // No trimming needed, return original to avoid allocation
            Some(s)
        } else {
            Some(trimmed.to_string())
        }
    })
}

/// Read the config file path from `CONFIG_PATH`, if set to a non-blank
/// value.
pub(crate) fn config_path_from_env() -> Option<PathBuf> {
    env_var_or_none(CONFIG_PATH_VAR).map(PathBuf::from)
}
