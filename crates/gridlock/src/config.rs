//! Match configuration loaded from disk.

use crate::controller::{DEFAULT_PLAYER_ONE, DEFAULT_PLAYER_TWO};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Default player names for a match, read from a TOML file.
///
/// Both fields are optional in the file; missing entries keep the
/// built-in defaults. CLI flags override either value afterwards.
#[derive(Debug, Clone, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Display name for the X player.
    #[serde(default = "default_player_one")]
    player_one: String,

    /// Display name for the O player.
    #[serde(default = "default_player_two")]
    player_two: String,
}

fn default_player_one() -> String {
    DEFAULT_PLAYER_ONE.to_string()
}

fn default_player_two() -> String {
    DEFAULT_PLAYER_TWO.to_string()
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(
            player_one = %config.player_one,
            player_two = %config.player_two,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Applies command-line overrides on top of the file values.
    #[instrument(skip(self))]
    pub fn override_names(&mut self, player_one: Option<String>, player_two: Option<String>) {
        if let Some(name) = player_one {
            debug!(name = %name, "Overriding player one name");
            self.player_one = name;
        }
        if let Some(name) = player_two {
            debug!(name = %name, "Overriding player two name");
            self.player_two = name;
        }
    }
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            player_one: default_player_one(),
            player_two: default_player_two(),
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
