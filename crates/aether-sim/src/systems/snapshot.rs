//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world. Status bands are
//! asked of each boss here, every time, never stored.

use hecs::World;

use aether_boss::profiles::get_profile;
use aether_boss::BossEntity;
use aether_core::components::BossTag;
use aether_core::enums::GamePhase;
use aether_core::events::{Alert, BossEvent};
use aether_core::state::*;
use aether_core::types::{Position, SimTime};

use crate::presentation::Presentation;
use crate::systems::activation::find_player_position;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    presentation: &Presentation,
    events: Vec<BossEvent>,
    alerts: Vec<Alert>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        player: PlayerView {
            position: find_player_position(world).unwrap_or_default(),
        },
        bosses: build_bosses(world),
        banner: presentation.banner.view(),
        effects: presentation.effects.live(time.tick),
        alerts,
        events,
    }
}

/// Build BossView list, ordered by boss id.
fn build_bosses(world: &World) -> Vec<BossView> {
    let mut bosses: Vec<BossView> = world
        .query::<(&BossEntity, &BossTag, &Position)>()
        .iter()
        .map(|(_, (boss, tag, pos))| {
            let profile = get_profile(tag.kind);
            BossView {
                boss_id: tag.boss_id,
                name: tag.name.clone(),
                title: profile.title.to_string(),
                kind: tag.kind,
                element: tag.element,
                position: *pos,
                lifecycle: boss.state(),
                health: boss.health(),
                max_health: boss.max_health(),
                health_pct: boss.health_percentage(),
                status: boss.status_band(),
                next_attack: profile.attack_name(boss.attack_pattern_index()).to_string(),
                attack_cooldown_ticks: boss.attack_cooldown_ticks(),
            }
        })
        .collect();
    bosses.sort_by_key(|b| b.boss_id);
    bosses
}
