//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::*;

/// Coarse phase of a boss's existence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LifecycleState {
    /// Spawned but dormant. Does not attack.
    #[default]
    Inactive,
    /// Engaged in combat, cycling attacks.
    Active,
    /// Health reached zero. Terminal.
    Defeated,
}

/// Qualitative label derived from a boss's health percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusBand {
    /// Above 70%.
    Dominant,
    /// 30% to 70% inclusive.
    Engaged,
    /// Below 30%.
    Weakened,
}

impl StatusBand {
    pub fn as_str(self) -> &'static str {
        match self {
            StatusBand::Dominant => "dominant",
            StatusBand::Engaged => "engaged",
            StatusBand::Weakened => "weakened",
        }
    }

    /// Label shown on the boss alert banner.
    pub fn banner_label(self) -> &'static str {
        match self {
            StatusBand::Dominant => "DOMINATING",
            StatusBand::Engaged => "ENGAGED",
            StatusBand::Weakened => "WEAKENED",
        }
    }
}

impl std::fmt::Display for StatusBand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Elemental affinity of a boss. Drives alert colouring.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Element {
    #[default]
    Fire,
    Water,
    Wind,
    Earth,
}

impl Element {
    /// Banner colour used when this boss is announced.
    pub fn alert_color(self) -> &'static str {
        match self {
            Element::Fire => COLOR_FIRE,
            Element::Water => COLOR_WATER,
            Element::Wind => COLOR_WIND,
            Element::Earth => COLOR_EARTH,
        }
    }
}

/// Boss archetypes available to a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BossKind {
    /// Pyros, the Flame Leviathan.
    Pyros,
    VolcanoLord,
    CrystalGuardian,
    SkyTyrant,
}

impl BossKind {
    pub const ALL: [BossKind; 4] = [
        BossKind::Pyros,
        BossKind::VolcanoLord,
        BossKind::CrystalGuardian,
        BossKind::SkyTyrant,
    ];
}

/// Presentation effect kinds scheduled on the effect timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EffectKind {
    /// Boss mesh tinted red after taking damage.
    DamageFlash,
    /// Visual for an executed attack variant.
    Attack { variant_index: usize },
    CameraShake,
}

/// Game phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    #[default]
    MainMenu,
    Active,
    Paused,
    /// Every boss in the session has been defeated.
    Complete,
}

/// Alert severity level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AlertLevel {
    Info,
    Warning,
    Critical,
}
