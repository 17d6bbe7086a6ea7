//! Game state snapshot: the complete visible state handed to presentation each tick.

use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::{Alert, BossEvent};
use crate::types::{Position, SimTime};

/// Complete game state produced after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub player: PlayerView,
    pub bosses: Vec<BossView>,
    /// The boss alert banner, if one is showing.
    pub banner: Option<BannerView>,
    /// Presentation effects live this tick.
    pub effects: Vec<EffectView>,
    pub alerts: Vec<Alert>,
    pub events: Vec<BossEvent>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
}

/// One boss as the HUD sees it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BossView {
    pub boss_id: u32,
    pub name: String,
    /// Epithet shown under the health bar.
    pub title: String,
    pub kind: BossKind,
    pub element: Element,
    pub position: Position,
    pub lifecycle: LifecycleState,
    pub health: u32,
    pub max_health: u32,
    /// 0.0 - 100.0
    pub health_pct: f32,
    pub status: StatusBand,
    /// Name of the attack that fires when the cooldown runs out.
    pub next_attack: String,
    pub attack_cooldown_ticks: u32,
}

/// Centered boss alert text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BannerView {
    pub boss_id: u32,
    pub text: String,
    /// CSS colour string.
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectView {
    pub boss_id: u32,
    pub kind: EffectKind,
    pub remaining_ticks: u32,
}
