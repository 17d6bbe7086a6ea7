//! Health ledger: current/max health with clamping.
//!
//! Total over its domain. It never fails and never allocates; deciding what
//! a depleted ledger means is left to the boss.

use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthLedger {
    health: u32,
    max_health: NonZeroU32,
}

impl HealthLedger {
    /// A ledger at full health.
    pub fn new(max_health: NonZeroU32) -> Self {
        Self {
            health: max_health.get(),
            max_health,
        }
    }

    pub fn health(&self) -> u32 {
        self.health
    }

    pub fn max_health(&self) -> u32 {
        self.max_health.get()
    }

    pub fn is_depleted(&self) -> bool {
        self.health == 0
    }

    /// Subtract `amount`, floored at zero. Returns the amount actually removed.
    pub fn subtract(&mut self, amount: u32) -> u32 {
        let applied = amount.min(self.health);
        self.health -= applied;
        applied
    }

    /// Add `amount`, capped at max health. Returns the resulting health.
    pub fn add(&mut self, amount: u32) -> u32 {
        self.health = self.health.saturating_add(amount).min(self.max_health.get());
        self.health
    }

    /// `100 * health / max_health`, in [0, 100].
    pub fn percentage(&self) -> f32 {
        (self.health as f64 * 100.0 / self.max_health.get() as f64) as f32
    }

    /// Overwrite the current health. Callers validate the range first.
    pub(crate) fn set(&mut self, health: u32) {
        self.health = health.min(self.max_health.get());
    }
}
