use std::path::Path;
use std::time::Duration;

use crate::error::ConfigError;
use crate::game::{Player, PlayerId};

/// Longest pause allowed after an input error.
const MAX_ERROR_PAUSE_MS: u64 = 10_000;

/// Display settings for one seat.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    pub avatar: String,
}

/// Top-level game configuration, loadable from TOML.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Milliseconds to leave an input error on screen before redrawing
    pub error_pause_ms: u64,
    pub player_one: PlayerConfig,
    pub player_two: PlayerConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            error_pause_ms: 1000,
            player_one: PlayerConfig {
                name: "Player 1".into(),
                avatar: "🔵".into(),
            },
            player_two: PlayerConfig {
                name: "Player 2".into(),
                avatar: "🔴".into(),
            },
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: GameConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Like [`GameConfig::load_or_default`], but a file that cannot be read,
    /// parsed or validated is reported as a warning and replaced by defaults.
    /// The game always starts.
    pub fn load_or_warn(path: &Path) -> Self {
        Self::load_or_default(path).unwrap_or_else(|err| {
            tracing::warn!(path = %path.display(), %err, "ignoring config file, using defaults");
            Self::default()
        })
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (seat, player) in [("player_one", &self.player_one), ("player_two", &self.player_two)] {
            if player.name.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{seat}.name must not be blank"
                )));
            }
            if player.avatar.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "{seat}.avatar must not be blank"
                )));
            }
        }
        if self.error_pause_ms > MAX_ERROR_PAUSE_MS {
            return Err(ConfigError::Validation(format!(
                "error_pause_ms must be <= {MAX_ERROR_PAUSE_MS}"
            )));
        }
        Ok(())
    }

    /// The two players, in seat order
    pub fn players(&self) -> [Player; 2] {
        [
            Player::new(PlayerId::One, &self.player_one.name, &self.player_one.avatar),
            Player::new(PlayerId::Two, &self.player_two.name, &self.player_two.avatar),
        ]
    }

    pub fn error_pause(&self) -> Duration {
        Duration::from_millis(self.error_pause_ms)
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&GameConfig::default()).expect("default config serializes")
    }
}
