//! Session configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) gives the
//! reference layout: Pyros hovering north of the player, awake from the start.
//!
//! ```toml
//! seed = 7
//! activation_radius = 30.0
//!
//! [[bosses]]
//! kind = "pyros"
//! position = [0.0, 10.0, -20.0]
//! activate_on_start = true
//!
//! [[bosses]]          # kind omitted: picked with the session RNG
//! activation_radius = 15.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use aether_core::constants::*;
use aether_core::enums::BossKind;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read session config {}", path.display())]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse session TOML")]
    ParseToml {
        #[source]
        source: toml::de::Error,
    },

    #[error("session needs at least one boss")]
    NoBosses,

    #[error("invalid session config: {reason}")]
    Invalid { reason: String },
}

/// One boss to place in the world at session start.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BossSpawn {
    /// `None` picks a random kind.
    pub kind: Option<BossKind>,
    /// `None` picks a random spot over the island.
    pub position: Option<[f32; 3]>,
    /// Overrides the session-wide activation radius.
    pub activation_radius: Option<f32>,
    /// Scripted activation on the first tick instead of waiting for the player.
    pub activate_on_start: bool,
}

/// Configuration for starting a new simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// RNG seed for determinism. Same seed = same session.
    pub seed: u64,
    /// Initial time scale (1.0 = normal).
    pub time_scale: f64,
    pub player_spawn: [f32; 3],
    pub activation_radius: f32,
    pub bosses: Vec<BossSpawn>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            time_scale: 1.0,
            player_spawn: PLAYER_SPAWN,
            activation_radius: DEFAULT_ACTIVATION_RADIUS,
            bosses: vec![BossSpawn {
                kind: Some(BossKind::Pyros),
                position: Some(PYROS_SPAWN),
                activation_radius: None,
                activate_on_start: true,
            }],
        }
    }
}

impl SessionConfig {
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        let config: SessionConfig =
            toml::from_str(input).map_err(|source| ConfigError::ParseToml { source })?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let input = std::fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&input)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bosses.is_empty() {
            return Err(ConfigError::NoBosses);
        }
        if !(0.0..=MAX_TIME_SCALE).contains(&self.time_scale) {
            return Err(ConfigError::Invalid {
                reason: format!(
                    "time_scale {} outside 0.0..={MAX_TIME_SCALE}",
                    self.time_scale
                ),
            });
        }
        let radii = std::iter::once(self.activation_radius)
            .chain(self.bosses.iter().filter_map(|b| b.activation_radius));
        for radius in radii {
            if !radius.is_finite() || radius < 0.0 {
                return Err(ConfigError::Invalid {
                    reason: format!("activation radius {radius} must be a non-negative number"),
                });
            }
        }
        Ok(())
    }
}
