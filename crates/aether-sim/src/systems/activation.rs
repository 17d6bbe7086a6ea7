//! Proximity activation: wakes dormant bosses when the player comes close.

use hecs::World;

use aether_boss::BossEntity;
use aether_core::components::{ActivationTrigger, BossTag, Player};
use aether_core::enums::LifecycleState;
use aether_core::types::Position;

use crate::presentation::{CombatHooks, Presentation};

/// Activate every Inactive boss whose trigger radius contains the player.
pub fn run(world: &mut World, now: u64, out: &mut Presentation) {
    let Some(player_pos) = find_player_position(world) else {
        return;
    };

    for (_entity, (boss, tag, pos, trigger)) in
        world.query_mut::<(&mut BossEntity, &BossTag, &Position, &ActivationTrigger)>()
    {
        if boss.state() != LifecycleState::Inactive {
            continue;
        }
        if pos.ground_distance_to(&player_pos) <= trigger.radius {
            boss.activate(&mut CombatHooks::new(tag, now, out));
        }
    }
}

pub fn find_player_position(world: &World) -> Option<Position> {
    world
        .query::<(&Player, &Position)>()
        .iter()
        .next()
        .map(|(_, (_, pos))| *pos)
}
