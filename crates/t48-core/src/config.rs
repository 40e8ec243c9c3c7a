//! Engine configuration
//!
//! Fixed at construction: grid size, spawn candidates and win target.
//! Deserializes from partial JSON, missing fields keep their defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{DEFAULT_SIZE, DEFAULT_SPAWN_VALUES, DEFAULT_WIN_TARGET};
use crate::error::{ConfigError, EngineError};
use crate::grid::Tile;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board edge length
    pub size: usize,

    /// Values a spawned tile is drawn from, uniformly
    pub spawn_values: Vec<Tile>,

    /// Reaching or exceeding this value on any cell wins
    pub win_target: Tile,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            spawn_values: DEFAULT_SPAWN_VALUES.to_vec(),
            win_target: DEFAULT_WIN_TARGET,
        }
    }
}

impl EngineConfig {
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    pub fn with_spawn_values(mut self, values: impl Into<Vec<Tile>>) -> Self {
        self.spawn_values = values.into();
        self
    }

    pub fn with_win_target(mut self, target: Tile) -> Self {
        self.win_target = target;
        self
    }

    /// Check the configuration can drive an engine
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.spawn_values.is_empty() {
            return Err(ConfigError::NoSpawnValues);
        }
        if self.spawn_values.contains(&0) {
            return Err(ConfigError::ZeroSpawnValue);
        }
        if self.win_target == 0 {
            return Err(ConfigError::ZeroWinTarget);
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration
    pub fn from_json_str(json: &str) -> Result<Self, EngineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON configuration file
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.size, 4);
        assert_eq!(config.spawn_values, vec![2, 4]);
        assert_eq!(config.win_target, 2048);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let base = EngineConfig::default();
        assert_eq!(base.clone().with_size(0).validate(), Err(ConfigError::ZeroSize));
        assert_eq!(
            base.clone().with_spawn_values(Vec::<Tile>::new()).validate(),
            Err(ConfigError::NoSpawnValues)
        );
        assert_eq!(
            base.clone().with_spawn_values([2u64, 0]).validate(),
            Err(ConfigError::ZeroSpawnValue)
        );
        assert_eq!(base.with_win_target(0).validate(), Err(ConfigError::ZeroWinTarget));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = EngineConfig::from_json_str(r#"{ "size": 5 }"#).unwrap();
        assert_eq!(config.size, 5);
        assert_eq!(config.spawn_values, vec![2, 4]);
        assert_eq!(config.win_target, 2048);
    }

    #[test]
    fn test_json_validation_error() {
        let err = EngineConfig::from_json_str(r#"{ "size": 0 }"#).unwrap_err();
        assert!(matches!(err, EngineError::Config(ConfigError::ZeroSize)));
    }

    #[test]
    fn test_malformed_json() {
        let err = EngineConfig::from_json_str("{ size: ").unwrap_err();
        assert!(matches!(err, EngineError::Json(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = EngineConfig::from_json_file("/nonexistent/t48-config.json").unwrap_err();
        assert!(matches!(err, EngineError::Io(_)));
    }
}
