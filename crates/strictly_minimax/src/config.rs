//! Engine configuration.

use crate::types::DEFAULT_SIZE;
use crate::ConfigError;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Which search runs when the engine has to think.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum SearchAlgorithm {
    /// Minimax with alpha-beta pruning.
    #[default]
    AlphaBeta,
    /// Unpruned minimax.
    Plain,
}

/// How the first move on an empty board is chosen.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum OpeningPolicy {
    /// Search the empty board like any other.
    #[default]
    FullSearch,
    /// Play a uniformly random square.
    Random,
}

/// Configuration for an [`Engine`](crate::Engine).
///
/// ```toml
/// board_size = 3
/// algorithm = "alpha_beta"
/// opening = "random"
/// seed = 42
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Side length of boards created by the engine.
    #[serde(default = "default_board_size")]
    board_size: usize,

    /// Search used for every non-opening position.
    #[serde(default)]
    algorithm: SearchAlgorithm,

    /// Opening shortcut.
    #[serde(default)]
    opening: OpeningPolicy,

    /// Seed for the random opening; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

#[instrument]
fn default_board_size() -> usize {
    DEFAULT_SIZE
}

impl EngineConfig {
    /// Creates a configuration with the given policies on a 3×3 board.
    #[instrument]
    pub fn new(algorithm: SearchAlgorithm, opening: OpeningPolicy) -> Self {
        Self {
            board_size: default_board_size(),
            algorithm,
            opening,
            seed: None,
        }
    }

    /// Replaces the board size, which must be at least 1.
    pub fn with_board_size(mut self, board_size: usize) -> Result<Self, ConfigError> {
        self.board_size = board_size;
        self.validate()?;
        Ok(self)
    }

    /// Fixes the random opening seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(
            board_size = config.board_size,
            algorithm = %config.algorithm,
            opening = %config.opening,
            "Config loaded successfully"
        );
        Ok(config)
    }

    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        if self.board_size == 0 {
            return Err(ConfigError::new("board_size must be at least 1"));
        }
        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(SearchAlgorithm::default(), OpeningPolicy::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(*config.board_size(), 3);
        assert_eq!(*config.algorithm(), SearchAlgorithm::AlphaBeta);
        assert_eq!(*config.opening(), OpeningPolicy::FullSearch);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_empty_toml_uses_defaults() {
        assert_eq!(EngineConfig::from_toml("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn test_full_toml() {
        let config = EngineConfig::from_toml(
            "board_size = 4\nalgorithm = \"plain\"\nopening = \"random\"\nseed = 9\n",
        )
        .unwrap();
        assert_eq!(*config.board_size(), 4);
        assert_eq!(*config.algorithm(), SearchAlgorithm::Plain);
        assert_eq!(*config.opening(), OpeningPolicy::Random);
        assert_eq!(*config.seed(), Some(9));
    }

    #[test]
    fn test_zero_board_size_rejected() {
        assert!(EngineConfig::from_toml("board_size = 0").is_err());
    }

    #[test]
    fn test_with_board_size_rejects_zero() {
        let err = EngineConfig::default().with_board_size(0).unwrap_err();
        assert!(err.message.contains("board_size"));
        assert_eq!(*EngineConfig::default().with_board_size(5).unwrap().board_size(), 5);
    }

    #[test]
    fn test_unknown_algorithm_rejected() {
        let err = EngineConfig::from_toml("algorithm = \"mcts\"").unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }
}
