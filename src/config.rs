//! Launch parameters
//!
//! Filled in by the frontend (CLI flags on native, canvas size on the web)
//! and checked once before a session is built.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::{WORLD_HEIGHT, WORLD_WIDTH};
use crate::sim::WorldBounds;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("world width must be positive")]
    ZeroWidth,
    #[error("world height must be positive")]
    ZeroHeight,
}

/// Everything needed to start a session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub width: u32,
    pub height: u32,
    /// Difficulty level; reported but not used by the spawner
    pub level: u32,
    /// Seed for every random draw in the session
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: WORLD_WIDTH,
            height: WORLD_HEIGHT,
            level: 1,
            seed: 0,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }
        if self.height == 0 {
            return Err(ConfigError::ZeroHeight);
        }
        Ok(())
    }

    pub fn bounds(&self) -> WorldBounds {
        WorldBounds::new(self.width as f32, self.height as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_reference_world() {
        let config = GameConfig::default();
        assert_eq!(config.validate(), Ok(()));
        assert_eq!(config.bounds(), WorldBounds::new(800.0, 500.0));
        assert_eq!(config.level, 1);
    }

    #[test]
    fn test_rejects_empty_world() {
        let config = GameConfig {
            width: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroWidth));

        let config = GameConfig {
            height: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroHeight));
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 42}"#).expect("parse");
        assert_eq!(config.seed, 42);
        assert_eq!(config.width, 800);
    }
}
