//! Cleanup system: disposes of defeated bosses once their defeat banner is done.

use hecs::{Entity, World};

use aether_boss::BossEntity;
use aether_core::components::{BossTag, DisposeAt};
use aether_core::constants::DEFEAT_BANNER_TICKS;
use aether_core::events::BossEvent;

use crate::presentation::Presentation;

/// Uses a pre-allocated buffer to avoid per-tick allocation.
pub fn run(
    world: &mut World,
    now: u64,
    out: &mut Presentation,
    buffer: &mut Vec<(Entity, u32)>,
) {
    buffer.clear();

    // Newly defeated bosses get a disposal deadline.
    for (entity, (boss, tag, dispose)) in
        world.query_mut::<(&BossEntity, &BossTag, Option<&DisposeAt>)>()
    {
        if boss.is_defeated() && dispose.is_none() {
            buffer.push((entity, tag.boss_id));
        }
    }
    for (entity, _) in buffer.drain(..) {
        let _ = world.insert_one(
            entity,
            DisposeAt {
                tick: now + DEFEAT_BANNER_TICKS as u64,
            },
        );
    }

    // Only bosses still defeated at their deadline are removed.
    for (entity, (boss, tag, dispose)) in
        world.query_mut::<(&BossEntity, &BossTag, &DisposeAt)>()
    {
        if boss.is_defeated() && now >= dispose.tick {
            buffer.push((entity, tag.boss_id));
        }
    }
    for (entity, boss_id) in buffer.drain(..) {
        let _ = world.despawn(entity);
        tracing::debug!(boss_id, "boss disposed");
        out.effects.clear_boss(boss_id);
        out.events.push(BossEvent::Disposed { boss_id });
    }
}
