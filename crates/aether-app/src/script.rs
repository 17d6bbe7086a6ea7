//! Scripted headless session: wake a boss, strike it on a fixed rhythm,
//! stop after a tick budget or when the session completes.

use aether_core::commands::PlayerCommand;
use aether_core::enums::GamePhase;
use aether_core::events::BossEvent;
use aether_core::state::GameStateSnapshot;
use aether_sim::{SessionConfig, SimulationEngine};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StrikePlan {
    /// Maximum ticks to simulate.
    pub ticks: u64,
    /// Strike every N ticks; 0 disables strikes.
    pub strike_every: u64,
    pub strike_damage: i64,
    /// Boss to activate and strike.
    pub target: u32,
}

impl Default for StrikePlan {
    fn default() -> Self {
        Self {
            ticks: 600,
            strike_every: 30,
            strike_damage: 10,
            target: 0,
        }
    }
}

/// Summary of a scripted run alongside the final snapshot.
#[derive(Debug, Clone, Default)]
pub struct ScriptOutcome {
    pub ticks_run: u64,
    pub strikes: u32,
    pub attacks_seen: u32,
    pub defeats_seen: u32,
    pub last: GameStateSnapshot,
}

pub fn run_scripted(config: SessionConfig, plan: &StrikePlan) -> ScriptOutcome {
    let mut engine = SimulationEngine::new(config);
    engine.queue_commands([
        PlayerCommand::StartSession,
        PlayerCommand::ActivateBoss {
            boss_id: plan.target,
        },
    ]);

    let mut outcome = ScriptOutcome::default();
    for n in 0..plan.ticks {
        if plan.strike_every > 0 && n > 0 && n % plan.strike_every == 0 {
            engine.queue_command(PlayerCommand::DamageBoss {
                boss_id: plan.target,
                amount: plan.strike_damage,
            });
            outcome.strikes += 1;
        }

        let snap = engine.tick();
        outcome.ticks_run += 1;
        for event in &snap.events {
            match event {
                BossEvent::Attack { .. } => outcome.attacks_seen += 1,
                BossEvent::Defeated { .. } => outcome.defeats_seen += 1,
                _ => {}
            }
        }
        for alert in &snap.alerts {
            tracing::warn!(tick = alert.tick, "{}", alert.message);
        }

        let done = snap.phase == GamePhase::Complete;
        outcome.last = snap;
        if done {
            break;
        }
    }
    outcome
}

#[cfg(test)]
mod tests {
    use super::*;
    use aether_core::enums::LifecycleState;

    #[test]
    fn test_default_plan_defeats_pyros() {
        // 10 damage every 30 ticks: the tenth strike lands on tick 300.
        let outcome = run_scripted(SessionConfig::default(), &StrikePlan::default());
        assert_eq!(outcome.strikes, 16);
        assert_eq!(outcome.defeats_seen, 1);
        // Attacks at 0, 121, 242 before the killing blow.
        assert_eq!(outcome.attacks_seen, 3);
        assert_eq!(outcome.last.phase, GamePhase::Complete);
        assert!(outcome.last.bosses.is_empty());
    }

    #[test]
    fn test_no_strikes_keeps_boss_alive() {
        let plan = StrikePlan {
            ticks: 250,
            strike_every: 0,
            ..Default::default()
        };
        let outcome = run_scripted(SessionConfig::default(), &plan);
        assert_eq!(outcome.ticks_run, 250);
        assert_eq!(outcome.strikes, 0);
        assert_eq!(outcome.attacks_seen, 3);
        let boss = &outcome.last.bosses[0];
        assert_eq!(boss.lifecycle, LifecycleState::Active);
        assert_eq!(boss.health, 100);
    }
}
