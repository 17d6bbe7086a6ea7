//! Entity spawn factories for setting up the session world.
//!
//! Creates the player avatar and boss entities with their component bundles.

use hecs::World;
use rand::seq::SliceRandom;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use aether_boss::profiles::get_profile;
use aether_boss::{BossEntity, BossError};
use aether_core::components::*;
use aether_core::constants::*;
use aether_core::enums::BossKind;
use aether_core::types::Position;

use crate::config::{BossSpawn, SessionConfig};

/// Spawn the player avatar.
pub fn spawn_player(world: &mut World, at: Position) -> hecs::Entity {
    world.spawn((Player, at))
}

/// Spawn one boss. Missing kind and position are rolled with `rng`.
pub fn spawn_boss(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    boss_id: u32,
    spawn: &BossSpawn,
    default_radius: f32,
) -> Result<hecs::Entity, BossError> {
    let kind = spawn.kind.unwrap_or_else(|| random_kind(rng));
    let position = match spawn.position {
        Some(xyz) => Position::from_array(xyz),
        None => random_position(rng),
    };
    let profile = get_profile(kind);
    let boss = BossEntity::from_profile(&profile)?;

    let tag = BossTag {
        boss_id,
        kind,
        name: profile.name.to_string(),
        element: profile.element,
    };
    let trigger = ActivationTrigger {
        radius: spawn.activation_radius.unwrap_or(default_radius),
    };

    Ok(world.spawn((boss, tag, position, trigger)))
}

/// Set up a session: player first, then bosses numbered in config order.
/// Returns the ids of bosses that should wake on the first tick.
pub fn setup_session(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    config: &SessionConfig,
) -> Result<Vec<u32>, BossError> {
    world.clear();
    spawn_player(world, Position::from_array(config.player_spawn));

    let mut scripted = Vec::new();
    for (boss_id, spawn) in (0u32..).zip(&config.bosses) {
        spawn_boss(world, rng, boss_id, spawn, config.activation_radius)?;
        if spawn.activate_on_start {
            scripted.push(boss_id);
        }
    }
    Ok(scripted)
}

fn random_kind(rng: &mut ChaCha8Rng) -> BossKind {
    *BossKind::ALL.choose(rng).unwrap_or(&BossKind::Pyros)
}

fn random_position(rng: &mut ChaCha8Rng) -> Position {
    Position::new(
        rng.gen_range(-ISLAND_HALF_EXTENT..ISLAND_HALF_EXTENT),
        BOSS_SPAWN_HEIGHT,
        rng.gen_range(-ISLAND_HALF_EXTENT..ISLAND_HALF_EXTENT),
    )
}
