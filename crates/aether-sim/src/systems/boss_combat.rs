//! Boss combat system: one lifecycle tick per boss per frame, then a
//! status refresh for the alert banner.

use hecs::World;

use aether_boss::BossEntity;
use aether_core::components::BossTag;

use crate::presentation::{CombatHooks, Presentation};

/// Tick every boss. Only Active bosses advance their attack cycle.
pub fn run(world: &mut World, now: u64, out: &mut Presentation) {
    for (_entity, (boss, tag)) in world.query_mut::<(&mut BossEntity, &BossTag)>() {
        boss.tick(&mut CombatHooks::new(tag, now, out));
    }
}

/// Pull each active boss's status into the banner. The banner ignores bosses
/// it is not showing.
pub fn refresh_banner(world: &World, now: u64, out: &mut Presentation) {
    for (_entity, (boss, tag)) in world.query::<(&BossEntity, &BossTag)>().iter() {
        if boss.is_active() {
            out.banner
                .update_status(tag.boss_id, boss.health_percentage(), boss.status_band(), now);
        }
    }
}
