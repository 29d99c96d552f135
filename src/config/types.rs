//! Configuration types for the voucher engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from `engine.yaml`.

use serde::Deserialize;

fn default_bind_address() -> String {
    "0.0.0.0:5000".to_string()
}

/// HTTP server settings.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Address the API listens on (e.g. "0.0.0.0:5000").
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

/// Calendar defaults applied to every request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CalendarConfig {
    /// National holidays as `DD/MM` text, merged into requests that ask for them.
    #[serde(default)]
    pub national_holidays: Option<String>,
    /// Alternating-Saturday policy used when a request does not set one.
    #[serde(default)]
    pub consider_alternating_saturdays: bool,
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EngineConfig {
    /// Server settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Calendar defaults.
    #[serde(default)]
    pub calendar: CalendarConfig,
}
