//! Boss-type profiles.
//!
//! A boss type is data, not a subclass: a name, an element, its health pool,
//! its attack tempo and the ordered list of attacks it rotates through.

use aether_core::constants::*;
use aether_core::enums::{BossKind, Element};

/// One named attack variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttackProfile {
    pub name: &'static str,
    /// Damage dealt to a player caught in the effect.
    pub damage: u32,
    /// How long the attack's visual stays on screen.
    pub effect_ticks: u32,
    /// Heavy attacks also shake the camera.
    pub shakes_camera: bool,
}

/// Behavioral profile for a boss type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BossProfile {
    pub kind: BossKind,
    pub name: &'static str,
    /// Epithet shown under the health bar.
    pub title: &'static str,
    pub element: Element,
    pub max_health: u32,
    pub attack_cooldown_ticks: u32,
    /// Rotation order. Index = variant index.
    pub attacks: &'static [AttackProfile],
}

impl BossProfile {
    pub fn attack(&self, variant_index: usize) -> Option<&AttackProfile> {
        self.attacks.get(variant_index)
    }

    pub fn attack_name(&self, variant_index: usize) -> &'static str {
        self.attack(variant_index).map_or("Unknown", |a| a.name)
    }
}

const PYROS_ATTACKS: &[AttackProfile] = &[
    AttackProfile {
        name: "Fire Breath",
        damage: 15,
        // Cone grows from 1x to 3x at 0.1 per 50 ms.
        effect_ticks: 60,
        shakes_camera: false,
    },
    AttackProfile {
        name: "Meteor Shower",
        damage: 20,
        effect_ticks: 180,
        shakes_camera: true,
    },
    AttackProfile {
        name: "Ground Fire",
        damage: 10,
        effect_ticks: 300,
        shakes_camera: false,
    },
];

const VOLCANO_LORD_ATTACKS: &[AttackProfile] = &[
    AttackProfile {
        name: "Lava Pool",
        damage: 10,
        effect_ticks: 300,
        shakes_camera: false,
    },
    AttackProfile {
        name: "Meteor Shower",
        damage: 20,
        effect_ticks: 180,
        shakes_camera: true,
    },
    AttackProfile {
        name: "Earthquake",
        damage: 15,
        effect_ticks: 240,
        shakes_camera: true,
    },
];

const CRYSTAL_GUARDIAN_ATTACKS: &[AttackProfile] = &[
    AttackProfile {
        name: "Crystal Spikes",
        damage: 12,
        effect_ticks: 240,
        shakes_camera: false,
    },
    AttackProfile {
        name: "Energy Beam",
        damage: 25,
        effect_ticks: 120,
        shakes_camera: false,
    },
    AttackProfile {
        name: "Teleport",
        damage: 0,
        effect_ticks: 0,
        shakes_camera: false,
    },
];

const SKY_TYRANT_ATTACKS: &[AttackProfile] = &[
    AttackProfile {
        name: "Wind Gust",
        damage: 8,
        effect_ticks: 180,
        shakes_camera: false,
    },
    AttackProfile {
        name: "Lightning Strike",
        damage: 30,
        effect_ticks: 60,
        shakes_camera: true,
    },
    AttackProfile {
        name: "Aerial Assault",
        damage: 18,
        effect_ticks: 120,
        shakes_camera: true,
    },
];

/// Get the profile for a given boss type.
pub fn get_profile(kind: BossKind) -> BossProfile {
    match kind {
        BossKind::Pyros => BossProfile {
            kind,
            name: "Pyros",
            title: "the Flame Leviathan",
            element: Element::Fire,
            max_health: DEFAULT_BOSS_MAX_HEALTH,
            attack_cooldown_ticks: DEFAULT_ATTACK_COOLDOWN_TICKS,
            attacks: PYROS_ATTACKS,
        },
        BossKind::VolcanoLord => BossProfile {
            kind,
            name: "Volcano Lord",
            title: "Tyrant of the Caldera",
            element: Element::Fire,
            max_health: 1200,
            attack_cooldown_ticks: secs_to_ticks(3.0),
            attacks: VOLCANO_LORD_ATTACKS,
        },
        BossKind::CrystalGuardian => BossProfile {
            kind,
            name: "Crystal Guardian",
            title: "Warden of the Deep Veins",
            element: Element::Earth,
            max_health: 1000,
            attack_cooldown_ticks: secs_to_ticks(2.5),
            attacks: CRYSTAL_GUARDIAN_ATTACKS,
        },
        BossKind::SkyTyrant => BossProfile {
            kind,
            name: "Sky Tyrant",
            title: "Lord of the High Winds",
            element: Element::Wind,
            max_health: 900,
            attack_cooldown_ticks: secs_to_ticks(1.5),
            attacks: SKY_TYRANT_ATTACKS,
        },
    }
}
