//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Combat logic lives in the boss crate and the sim systems.

use serde::{Deserialize, Serialize};

use crate::enums::*;

/// Marker for the player avatar.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Player;

/// Stable identity of a boss entity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossTag {
    /// Session-unique id used by commands.
    pub boss_id: u32,
    pub kind: BossKind,
    /// Display name, e.g. "Pyros".
    pub name: String,
    pub element: Element,
}

/// Proximity trigger that wakes an inactive boss.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ActivationTrigger {
    /// Ground distance from the player at which the boss activates.
    pub radius: f32,
}

/// Set once a boss is defeated; the entity is disposed when it expires.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct DisposeAt {
    pub tick: u64,
}
