//! MQTT connection parameter types.
//!
//! Responsibilities:
//! - Define the connection parameters for the OTA command/status channels.
//! - Handle serialization of the broker password without exposing it in
//!   `Debug` output.
//!
//! Does NOT handle:
//! - Loading or validating the config file (see the `loader` module).
//! - Establishing MQTT connections (callers own that).
//!
//! Invariants:
//! - All fields are mandatory; the loader never produces a partially
//!   populated value.
//! - The password uses `secrecy::SecretString` to prevent accidental
//!   logging. Serialization includes it for config round-trips; secrecy
//!   is for runtime safety.

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

/// Module for serializing SecretString as strings.
mod secret_string {
    use secrecy::{ExposeSecret, SecretString};
    use serde::{Deserialize as DeserializeTrait, Serialize as SerializeTrait};
    use serde::{Deserializer, Serializer};

    pub fn serialize<S>(secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        secret.expose_secret().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<SecretString, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SecretString::new(s.into()))
    }
}

/// MQTT connection parameters for the OTA command and status channels.
///
/// Deserialized verbatim from the `mqtt` section of the config document:
/// no renaming, no defaulting, and no coercion beyond what serde_json
/// performs natively (a `port` encoded as a JSON string is rejected).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MqttConfig {
    /// Broker hostname (e.g., `localhost`).
    pub broker: String,
    /// Broker port, 1-65535.
    pub port: u16,
    /// Username for broker authentication.
    pub username: String,
    /// Password for broker authentication.
    #[serde(with = "secret_string")]
    pub password: SecretString,
    /// Topic the deployer publishes OTA commands to.
    pub command_topic: String,
    /// Topic devices report OTA status on.
    pub status_topic: String,
}
