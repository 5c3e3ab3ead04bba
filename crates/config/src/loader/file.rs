//! Config file reading and section extraction.
//!
//! Responsibilities:
//! - Read the config file as a scoped resource (opened, read, and
//!   released within one call; no handle escapes).
//! - Parse the content as a JSON document.
//! - Extract the `mqtt` section and deserialize it into `MqttConfig`.
//!
//! Does NOT handle:
//! - Path resolution (see builder.rs and env.rs).
//! - Range/blank-value validation of the extracted fields (see
//!   builder.rs).
//!
//! Invariants:
//! - Unreadable-file, malformed-JSON, and missing/mistyped-section
//!   failures map to distinct `ConfigError` variants.
//! - Field names are taken verbatim from the document; nothing is
//!   renamed or defaulted.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::error::ConfigError;
use crate::constants::MQTT_SECTION_KEY;
use crate::types::MqttConfig;

/// Read the file at `path` and parse it as a JSON document.
pub(crate) fn read_document(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        kind: e.kind(),
    })?;

    serde_json::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Extract the `mqtt` section from a parsed document.
///
/// Deserialization errors from serde_json name the offending field
/// (missing or mistyped), which is what the diagnostic carries.
pub(crate) fn extract_mqtt(path: &Path, document: &Value) -> Result<MqttConfig, ConfigError> {
    let section = document
        .get(MQTT_SECTION_KEY)
        .ok_or_else(|| ConfigError::MissingMqttSection {
            path: path.to_path_buf(),
        })?;

    serde_json::from_value(section.clone()).map_err(|e| ConfigError::InvalidMqttSection {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
