use std::path::Path;

use log::warn;

use crate::error::ConfigError;
use crate::game::{GameConfig, MIN_CONNECT_LENGTH};

/// Settings for new games.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// Pieces in a row needed to win; used until the player enters another
    pub connect_length: usize,
}

impl Default for GameSettings {
    fn default() -> Self {
        GameSettings {
            connect_length: MIN_CONNECT_LENGTH,
        }
    }
}

/// Settings for the terminal frontend.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// How long a freshly dropped piece stays highlighted. 0 disables it.
    pub drop_animation_ms: u64,
    /// How long to wait for a key press before redrawing
    pub poll_interval_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        UiSettings {
            drop_animation_ms: 800,
            poll_interval_ms: 100,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameSettings,
    pub ui: UiSettings,
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
            warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.game_config()?;
        if self.ui.poll_interval_ms == 0 {
            return Err(ConfigError::Validation(
                "ui.poll_interval_ms must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Board geometry for the configured connect length
    pub fn game_config(&self) -> Result<GameConfig, ConfigError> {
        GameConfig::new(self.game.connect_length)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
