//! Errors raised at the command boundary.

use thiserror::Error;

/// Why a player command was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("no boss with id {boss_id}")]
    UnknownBoss { boss_id: u32 },

    #[error("command requires an active session")]
    NoSession,
}
