//! Events emitted by the simulation for UI and audio feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Boss lifecycle and combat events, collected per tick.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum BossEvent {
    /// Boss woke up (proximity or scripted).
    Activated { boss_id: u32 },
    /// Boss executed one attack variant.
    Attack {
        boss_id: u32,
        variant_index: usize,
        attack: String,
        /// Base damage to a player caught in it.
        damage: u32,
    },
    /// Damage landed. `delta` is what was actually subtracted.
    Damaged { boss_id: u32, delta: u32, health: u32 },
    Healed { boss_id: u32, health: u32 },
    Defeated { boss_id: u32 },
    /// Boss entity removed from the world after its defeat sequence.
    Disposed { boss_id: u32 },
}

/// Alert for the UI alert queue.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Alert {
    pub level: AlertLevel,
    pub message: String,
    pub tick: u64,
}
