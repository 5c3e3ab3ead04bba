//! Centralized constants for the OTA deployment workspace.

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_VAR: &str = "CONFIG_PATH";

/// Default config file name, resolved relative to the working directory
/// when `CONFIG_PATH` is unset. Deployments are expected to set the
/// variable explicitly.
pub const DEFAULT_CONFIG_FILE: &str = "ota_deploy_config.json";

/// Top-level key holding the MQTT connection parameters in the config
/// document.
pub const MQTT_SECTION_KEY: &str = "mqtt";
