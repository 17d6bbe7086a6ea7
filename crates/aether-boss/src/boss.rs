//! The boss aggregate: ledger + attack cycle + lifecycle.
//!
//! Invariant: `health == 0` exactly when the lifecycle is Defeated. Damage
//! is the only way down to zero and it always routes through `defeat`.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

use aether_core::enums::{LifecycleState, StatusBand};

use crate::cycle::{AttackCycle, CycleConfig};
use crate::error::BossError;
use crate::health::HealthLedger;
use crate::hooks::BossHooks;
use crate::lifecycle::Lifecycle;
use crate::profiles::BossProfile;
use crate::status::status_band;

/// Outcome of one `apply_damage` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DamageReport {
    /// Health actually removed (never more than the health that was left).
    pub applied: u32,
    /// Health after the hit.
    pub health: u32,
    /// True if this hit defeated the boss.
    pub defeated: bool,
}

/// Persisted combat state of one boss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossSave {
    pub health: u32,
    pub lifecycle: LifecycleState,
    pub attack_pattern_index: usize,
    #[serde(default)]
    pub attack_cooldown_ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BossEntity {
    ledger: HealthLedger,
    cycle: AttackCycle,
    lifecycle: Lifecycle,
}

impl BossEntity {
    /// A fresh boss: Inactive, full health, variant 0 ready.
    pub fn new(max_health: u32, cycle: CycleConfig) -> Result<Self, BossError> {
        let max_health = NonZeroU32::new(max_health).ok_or(BossError::ZeroMaxHealth)?;
        Ok(Self {
            ledger: HealthLedger::new(max_health),
            cycle: AttackCycle::new(cycle),
            lifecycle: Lifecycle::default(),
        })
    }

    pub fn from_profile(profile: &BossProfile) -> Result<Self, BossError> {
        let variants = std::num::NonZeroUsize::new(profile.attacks.len())
            .ok_or(BossError::NoAttackVariants)?;
        Self::new(
            profile.max_health,
            CycleConfig::new(profile.attack_cooldown_ticks, variants),
        )
    }

    // --- Lifecycle ---

    /// Inactive → Active, firing `on_activate`. No-op otherwise.
    pub fn activate<H: BossHooks + ?Sized>(&mut self, hooks: &mut H) -> bool {
        let activated = self.lifecycle.activate();
        if activated {
            hooks.on_activate();
        }
        activated
    }

    /// One simulation frame. Only an Active boss advances its attack cycle.
    pub fn tick<H: BossHooks + ?Sized>(&mut self, hooks: &mut H) -> Option<usize> {
        if !self.lifecycle.is_active() {
            return None;
        }
        let fired = self.cycle.tick();
        if let Some(variant_index) = fired {
            hooks.on_attack(variant_index);
        }
        fired
    }

    /// Transition to Defeated and fire `on_defeat` once.
    pub(crate) fn defeat<H: BossHooks + ?Sized>(&mut self, hooks: &mut H) -> bool {
        let defeated = self.lifecycle.defeat();
        if defeated {
            hooks.on_defeat();
        }
        defeated
    }

    // --- Health ---

    /// Subtract `amount` (floored at zero) and defeat the boss if it hits zero.
    ///
    /// `on_damage_feedback` fires only when health actually dropped.
    pub fn apply_damage<H: BossHooks + ?Sized>(
        &mut self,
        amount: u32,
        hooks: &mut H,
    ) -> DamageReport {
        let applied = self.ledger.subtract(amount);
        if applied > 0 {
            hooks.on_damage_feedback(applied);
        }
        let defeated = self.ledger.is_depleted() && self.defeat(hooks);
        DamageReport {
            applied,
            health: self.ledger.health(),
            defeated,
        }
    }

    /// Add `amount` up to max health. Defeated bosses do not recover.
    pub fn heal(&mut self, amount: u32) -> u32 {
        if self.lifecycle.is_defeated() {
            return self.ledger.health();
        }
        self.ledger.add(amount)
    }

    // --- Queries ---

    pub fn health(&self) -> u32 {
        self.ledger.health()
    }

    pub fn max_health(&self) -> u32 {
        self.ledger.max_health()
    }

    pub fn health_percentage(&self) -> f32 {
        self.ledger.percentage()
    }

    /// Recomputed from current health on every call.
    pub fn status_band(&self) -> StatusBand {
        status_band(self.health_percentage())
    }

    pub fn state(&self) -> LifecycleState {
        self.lifecycle.state()
    }

    pub fn is_active(&self) -> bool {
        self.lifecycle.is_active()
    }

    pub fn is_defeated(&self) -> bool {
        self.lifecycle.is_defeated()
    }

    pub fn attack_pattern_index(&self) -> usize {
        self.cycle.pattern_index()
    }

    pub fn attack_cooldown_ticks(&self) -> u32 {
        self.cycle.cooldown_ticks()
    }

    pub fn cycle_config(&self) -> CycleConfig {
        self.cycle.config()
    }

    // --- Persistence ---

    pub fn save(&self) -> BossSave {
        BossSave {
            health: self.health(),
            lifecycle: self.state(),
            attack_pattern_index: self.attack_pattern_index(),
            attack_cooldown_ticks: self.attack_cooldown_ticks(),
        }
    }

    /// Load a save. The save is checked against this boss's configuration and
    /// the health/lifecycle invariant; nothing changes if it is rejected.
    pub fn restore(&mut self, save: &BossSave) -> Result<(), BossError> {
        let max_health = self.max_health();
        if save.health > max_health {
            return Err(BossError::HealthOutOfRange {
                health: save.health,
                max_health,
            });
        }
        if (save.health == 0) != (save.lifecycle == LifecycleState::Defeated) {
            return Err(BossError::InconsistentLifecycle {
                health: save.health,
                state: save.lifecycle,
            });
        }
        let config = self.cycle.config();
        if save.attack_pattern_index >= config.variant_count.get() {
            return Err(BossError::AttackIndexOutOfRange {
                index: save.attack_pattern_index,
                variant_count: config.variant_count.get(),
            });
        }
        if save.attack_cooldown_ticks > config.cooldown_ticks {
            return Err(BossError::CooldownOutOfRange {
                cooldown: save.attack_cooldown_ticks,
                max: config.cooldown_ticks,
            });
        }

        self.ledger.set(save.health);
        self.lifecycle = Lifecycle::restore(save.lifecycle);
        self.cycle
            .set_position(save.attack_pattern_index, save.attack_cooldown_ticks);
        Ok(())
    }
}
