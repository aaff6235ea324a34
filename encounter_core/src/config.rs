//! Engine configuration

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Error loading engine configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Tunable engine settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Largest party accepted by composition checks
    #[serde(default = "default_max_party_size")]
    pub max_party_size: usize,
    /// Alternative rules tables; the standard tables when absent
    #[serde(default)]
    pub rules_path: Option<PathBuf>,
    /// `tracing` filter used when `RUST_LOG` is unset
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        EngineConfig {
            max_party_size: default_max_party_size(),
            rules_path: None,
            log_filter: default_log_filter(),
        }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: EngineConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_party_size == 0 {
            return Err(ConfigError::ValidationError(
                "max_party_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn default_max_party_size() -> usize {
    100
}

fn default_log_filter() -> String {
    "info".to_string()
}
