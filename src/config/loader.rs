//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::Policy;

use super::types::EngineConfig;

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "engine.yaml";

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── engine.yaml   # Server and calendar settings
/// ```
///
/// # Example
///
/// ```no_run
/// use vt_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Listening on {}", loader.bind_address());
/// # Ok::<(), vt_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: EngineConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `engine.yaml` is missing ([`EngineError::ConfigNotFound`])
    /// - `engine.yaml` is not valid YAML for [`EngineConfig`]
    ///   ([`EngineError::ConfigParseError`])
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let config_path = path.as_ref().join(CONFIG_FILE_NAME);
        let config = Self::load_yaml::<EngineConfig>(&config_path)?;
        Ok(Self { config })
    }

    /// Builds a loader around an already-constructed configuration.
    pub fn from_config(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Address the API should listen on.
    pub fn bind_address(&self) -> &str {
        &self.config.server.bind_address
    }

    /// Configured national holidays as `DD/MM` text, if any.
    pub fn national_holidays(&self) -> Option<&str> {
        self.config.calendar.national_holidays.as_deref()
    }

    /// Resolves the policy for a request, falling back to the configured default.
    pub fn policy(&self, consider_alternating_saturdays: Option<bool>) -> Policy {
        Policy {
            consider_alternating_saturdays: consider_alternating_saturdays
                .unwrap_or(self.config.calendar.consider_alternating_saturdays),
        }
    }
}
