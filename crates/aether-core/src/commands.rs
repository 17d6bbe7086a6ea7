//! Player commands sent from the host to the simulation.
//!
//! Commands are validated and queued for processing at the next tick boundary.
//! Amounts arrive signed, exactly as a frontend would send them; the engine
//! rejects negative values instead of the combat core.

use serde::{Deserialize, Serialize};

use crate::error::CommandError;
use crate::types::Position;

/// All possible player actions.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Session control ---
    /// Spawn the configured player and bosses and begin ticking.
    StartSession,
    /// Pause the simulation.
    Pause,
    /// Resume the simulation.
    Resume,
    /// Set time scale (1.0 = normal, 2.0 = double).
    SetTimeScale { scale: f64 },

    // --- Boss interaction ---
    /// Scripted activation (bypasses the proximity trigger).
    ActivateBoss { boss_id: u32 },
    /// A player strike landed on a boss.
    DamageBoss { boss_id: u32, amount: i64 },
    /// Restore health to a boss (scripted events, debugging).
    HealBoss { boss_id: u32, amount: i64 },

    // --- Player ---
    /// Teleport the player avatar (drives the proximity trigger).
    MovePlayer { position: Position },
}

/// Validate a signed damage or heal amount coming from outside the core.
pub fn validate_amount(amount: i64) -> Result<u32, CommandError> {
    if amount < 0 {
        return Err(CommandError::InvalidArgument {
            reason: format!("amount must be non-negative, got {amount}"),
        });
    }
    // Oversized amounts saturate; the ledger clamps anyway.
    Ok(u32::try_from(amount).unwrap_or(u32::MAX))
}
