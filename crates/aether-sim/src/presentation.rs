//! Presentation side of the hook boundary.
//!
//! `CombatHooks` is what the engine hands a boss on every mutating call. It
//! turns hook calls into boss events, banner changes and scheduled effects.

use aether_boss::hooks::BossHooks;
use aether_boss::profiles::get_profile;
use aether_core::components::BossTag;
use aether_core::constants::{CAMERA_SHAKE_TICKS, DAMAGE_FLASH_TICKS};
use aether_core::enums::EffectKind;
use aether_core::events::BossEvent;

use crate::systems::alerts::BannerBoard;
use crate::systems::effects::EffectTimeline;

/// Everything the hooks write to. Owned by the engine.
#[derive(Debug, Clone, Default)]
pub struct Presentation {
    /// Boss events raised since the last snapshot.
    pub events: Vec<BossEvent>,
    pub effects: EffectTimeline,
    pub banner: BannerBoard,
}

/// Hook adapter bound to one boss for the duration of one call.
pub struct CombatHooks<'a> {
    pub tag: &'a BossTag,
    pub now: u64,
    pub out: &'a mut Presentation,
}

impl<'a> CombatHooks<'a> {
    pub fn new(tag: &'a BossTag, now: u64, out: &'a mut Presentation) -> Self {
        Self { tag, now, out }
    }
}

impl BossHooks for CombatHooks<'_> {
    fn on_activate(&mut self) {
        tracing::info!(boss_id = self.tag.boss_id, name = %self.tag.name, "boss activated");
        self.out
            .banner
            .show_boss_alert(self.tag.boss_id, &self.tag.name, self.tag.element, self.now);
        self.out.events.push(BossEvent::Activated {
            boss_id: self.tag.boss_id,
        });
    }

    fn on_defeat(&mut self) {
        tracing::info!(boss_id = self.tag.boss_id, name = %self.tag.name, "boss defeated");
        self.out
            .banner
            .boss_defeated(self.tag.boss_id, &self.tag.name, self.now);
        self.out.events.push(BossEvent::Defeated {
            boss_id: self.tag.boss_id,
        });
    }

    fn on_attack(&mut self, variant_index: usize) {
        let profile = get_profile(self.tag.kind);
        let attack = profile.attack_name(variant_index);
        let mut damage = 0;
        tracing::debug!(boss_id = self.tag.boss_id, variant_index, attack, "boss attack");

        if let Some(spec) = profile.attack(variant_index) {
            damage = spec.damage;
            self.out.effects.schedule(
                self.now,
                0,
                spec.effect_ticks,
                self.tag.boss_id,
                EffectKind::Attack { variant_index },
            );
            if spec.shakes_camera {
                self.out.effects.schedule(
                    self.now,
                    0,
                    CAMERA_SHAKE_TICKS,
                    self.tag.boss_id,
                    EffectKind::CameraShake,
                );
            }
        }
        self.out.events.push(BossEvent::Attack {
            boss_id: self.tag.boss_id,
            variant_index,
            attack: attack.to_string(),
            damage,
        });
    }

    fn on_damage_feedback(&mut self, _delta: u32) {
        self.out.effects.schedule(
            self.now,
            0,
            DAMAGE_FLASH_TICKS,
            self.tag.boss_id,
            EffectKind::DamageFlash,
        );
    }
}
