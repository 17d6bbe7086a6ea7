//! Attack cycle: a cooldown counter gating round-robin attack selection.
//!
//! The cycle only picks *which* variant fires. What the attack looks like is
//! up to whoever receives the index.

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use aether_core::constants::DEFAULT_ATTACK_COOLDOWN_TICKS;

/// Tuning for one boss type's attack rotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleConfig {
    /// Cooldown restored after every attack.
    pub cooldown_ticks: u32,
    /// Number of attack variants (N).
    pub variant_count: NonZeroUsize,
}

impl CycleConfig {
    pub fn new(cooldown_ticks: u32, variant_count: NonZeroUsize) -> Self {
        Self {
            cooldown_ticks,
            variant_count,
        }
    }

    /// Default cooldown with `variant_count` variants, or `None` if zero.
    pub fn with_variants(variant_count: usize) -> Option<Self> {
        NonZeroUsize::new(variant_count).map(|n| Self::new(DEFAULT_ATTACK_COOLDOWN_TICKS, n))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttackCycle {
    config: CycleConfig,
    cooldown_ticks: u32,
    pattern_index: usize,
}

impl AttackCycle {
    /// Ready to attack immediately with variant 0.
    pub fn new(config: CycleConfig) -> Self {
        Self {
            config,
            cooldown_ticks: 0,
            pattern_index: 0,
        }
    }

    /// Advance one tick. Returns the variant that fired, if any.
    ///
    /// With cooldown `C` the cycle fires on the first tick and then once
    /// every `C + 1` ticks: the firing tick plus `C` cooling ticks.
    pub fn tick(&mut self) -> Option<usize> {
        if self.cooldown_ticks > 0 {
            self.cooldown_ticks -= 1;
            return None;
        }

        let fired = self.pattern_index;
        self.cooldown_ticks = self.config.cooldown_ticks;
        self.pattern_index = (self.pattern_index + 1) % self.config.variant_count.get();
        Some(fired)
    }

    pub fn config(&self) -> CycleConfig {
        self.config
    }

    pub fn cooldown_ticks(&self) -> u32 {
        self.cooldown_ticks
    }

    /// The variant that fires next.
    pub fn pattern_index(&self) -> usize {
        self.pattern_index
    }

    pub(crate) fn set_position(&mut self, pattern_index: usize, cooldown_ticks: u32) {
        self.pattern_index = pattern_index;
        self.cooldown_ticks = cooldown_ticks;
    }
}
