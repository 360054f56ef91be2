//! Arena configuration loaded from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings shared by every command.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct ArenaConfig {
    /// Number of games in a tournament.
    #[serde(default = "default_games")]
    games: usize,

    /// Seed for the random strategy. Absent means seeded from the OS.
    #[serde(default)]
    seed: Option<u64>,

    /// Render the board after every move in single games.
    #[serde(default = "default_show_boards")]
    show_boards: bool,
}

fn default_games() -> usize {
    10
}

fn default_show_boards() -> bool {
    true
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            games: default_games(),
            seed: None,
            show_boards: default_show_boards(),
        }
    }
}

impl ArenaConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(games = config.games, seed = ?config.seed, "Config loaded successfully");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides.
    pub fn with_overrides(
        mut self,
        games: Option<usize>,
        seed: Option<u64>,
        quiet: bool,
    ) -> Self {
        if let Some(games) = games {
            self.games = games;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        if quiet {
            self.show_boards = false;
        }
        self
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ArenaConfig::default();
        assert_eq!(*config.games(), 10);
        assert_eq!(*config.seed(), None);
        assert!(*config.show_boards());
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: ArenaConfig = toml::from_str("seed = 7").unwrap();
        assert_eq!(*config.seed(), Some(7));
        assert_eq!(*config.games(), 10);
    }

    #[test]
    fn test_overrides_win() {
        let config = ArenaConfig::default().with_overrides(Some(4), Some(1), true);
        assert_eq!(*config.games(), 4);
        assert_eq!(*config.seed(), Some(1));
        assert!(!*config.show_boards());
    }

    #[test]
    fn test_missing_overrides_keep_file_values() {
        let config: ArenaConfig = toml::from_str("games = 3\nseed = 5").unwrap();
        let config = config.with_overrides(None, None, false);
        assert_eq!(*config.games(), 3);
        assert_eq!(*config.seed(), Some(5));
    }
}
