//! Configuration types for the OTA deployment tools.

mod connection;

pub use connection::MqttConfig;
