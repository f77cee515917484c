//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading statutory
//! rate configurations from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::StatutoryConfig;

/// Loads and provides access to a statutory rate configuration.
///
/// # Directory Structure
///
/// The configuration directory holds one `statutory.yaml` per statutory
/// regime:
/// ```text
/// config/mauritius/
/// └── statutory.yaml   # Rates, brackets and thresholds
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/mauritius").unwrap();
/// let config = loader.config();
/// println!("Effective year: {}", config.effective_year);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: StatutoryConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// Returns an error if `statutory.yaml` is missing
    /// (`ConfigNotFound`) or does not parse (`ConfigParse`).
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let statutory_path = path.as_ref().join("statutory.yaml");
        let config = Self::load_yaml::<StatutoryConfig>(&statutory_path)?;
        Ok(Self { config })
    }

    /// Wraps an already-built configuration, e.g. the built-in table.
    pub fn from_config(config: StatutoryConfig) -> Self {
        Self { config }
    }

    /// The loaded statutory configuration.
    pub fn config(&self) -> &StatutoryConfig {
        &self.config
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParse {
            path: path_str,
            message: e.to_string(),
        })
    }
}
