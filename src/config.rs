use std::path::Path;

use crate::env::EnvConfig;
use crate::error::ConfigError;
use crate::game::GameConfig;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub env: EnvConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game.validate()
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
