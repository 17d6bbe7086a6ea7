//! Effect timeline: tick-based scheduling for presentation effects.
//!
//! The combat core asks for an effect through its hooks; the timeline decides
//! when it is live and when it expires. Nothing here feeds back into combat.

use aether_core::enums::EffectKind;
use aether_core::state::EffectView;

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledEffect {
    pub boss_id: u32,
    pub kind: EffectKind,
    /// First tick the effect is visible.
    pub starts_at: u64,
    /// First tick it is gone.
    pub ends_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct EffectTimeline {
    effects: Vec<ScheduledEffect>,
}

impl EffectTimeline {
    /// Schedule `kind` to start `after_ticks` from `now` and last `duration_ticks`.
    /// Zero-length effects are dropped.
    pub fn schedule(
        &mut self,
        now: u64,
        after_ticks: u32,
        duration_ticks: u32,
        boss_id: u32,
        kind: EffectKind,
    ) {
        if duration_ticks == 0 {
            return;
        }
        let starts_at = now + after_ticks as u64;
        self.effects.push(ScheduledEffect {
            boss_id,
            kind,
            starts_at,
            ends_at: starts_at + duration_ticks as u64,
        });
    }

    /// Drop everything that has ended by `now`.
    pub fn expire(&mut self, now: u64) {
        self.effects.retain(|e| e.ends_at > now);
    }

    /// Forget a boss's effects (on disposal).
    pub fn clear_boss(&mut self, boss_id: u32) {
        self.effects.retain(|e| e.boss_id != boss_id);
    }

    pub fn pending(&self) -> usize {
        self.effects.len()
    }

    /// Effects visible at `now`.
    pub fn live(&self, now: u64) -> Vec<EffectView> {
        self.effects
            .iter()
            .filter(|e| e.starts_at <= now && now < e.ends_at)
            .map(|e| EffectView {
                boss_id: e.boss_id,
                kind: e.kind,
                remaining_ticks: (e.ends_at - now) as u32,
            })
            .collect()
    }
}
