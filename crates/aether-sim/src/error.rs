use thiserror::Error;

use aether_boss::BossError;
use aether_core::error::CommandError;

use crate::config::ConfigError;

/// Anything the engine can refuse.
#[derive(Debug, Error)]
pub enum SimError {
    #[error(transparent)]
    Command(#[from] CommandError),

    #[error("boss state rejected: {0}")]
    Boss(#[from] BossError),

    #[error("session config rejected: {0}")]
    Config(#[from] ConfigError),
}
