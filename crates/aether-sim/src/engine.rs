//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs world, processes player commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! enabling deterministic testing. All mutation happens on the caller's
//! thread, one tick at a time.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use aether_boss::{BossEntity, BossHooks, BossSave};
use aether_core::commands::{validate_amount, PlayerCommand};
use aether_core::components::{BossTag, DisposeAt, Player};
use aether_core::constants::MAX_TIME_SCALE;
use aether_core::enums::{AlertLevel, GamePhase};
use aether_core::error::CommandError;
use aether_core::events::{Alert, BossEvent};
use aether_core::state::GameStateSnapshot;
use aether_core::types::{Position, SimTime};

use crate::config::SessionConfig;
use crate::error::SimError;
use crate::presentation::{CombatHooks, Presentation};
use crate::systems;
use crate::world_setup;

/// The simulation engine. Owns the ECS world and all session state.
pub struct SimulationEngine {
    config: SessionConfig,
    world: World,
    time: SimTime,
    phase: GamePhase,
    time_scale: f64,
    rng: ChaCha8Rng,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<(hecs::Entity, u32)>,
    presentation: Presentation,
    alerts: Vec<Alert>,
}

impl SimulationEngine {
    /// Create a new engine sitting at the main menu.
    pub fn new(config: SessionConfig) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: GamePhase::default(),
            time_scale: config.time_scale,
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            presentation: Presentation::default(),
            alerts: Vec::new(),
            config,
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Active {
            self.run_systems();
            self.time.advance();
            self.check_complete();
        }

        let events = std::mem::take(&mut self.presentation.events);
        let alerts = std::mem::take(&mut self.alerts);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            &self.presentation,
            events,
            alerts,
        )
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current time scale.
    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Capture one boss's combat state.
    pub fn boss_save(&self, boss_id: u32) -> Option<BossSave> {
        self.world
            .query::<(&BossEntity, &BossTag)>()
            .iter()
            .find(|(_, (_, tag))| tag.boss_id == boss_id)
            .map(|(_, (boss, _))| boss.save())
    }

    /// Overwrite one boss's combat state; the boss resumes from the saved point.
    ///
    /// Restoring a live boss to Defeated runs its defeat sequence. Restoring a
    /// defeated boss to life cancels its disposal and its victory banner.
    pub fn restore_boss(&mut self, boss_id: u32, save: &BossSave) -> Result<(), SimError> {
        let now = self.time.tick;
        let (entity, boss, tag) = find_boss(&mut self.world, boss_id)?;
        let was_defeated = boss.is_defeated();
        boss.restore(save)?;
        let defeated = boss.is_defeated();

        if defeated && !was_defeated {
            CombatHooks::new(tag, now, &mut self.presentation).on_defeat();
        }
        if !defeated {
            if was_defeated {
                tracing::info!(boss_id, "defeated boss restored");
                self.presentation.banner.dismiss(boss_id);
            }
            let _ = self.world.remove_one::<DisposeAt>(entity);
        }
        Ok(())
    }

    /// Process all queued commands. Rejections are logged and surfaced as alerts.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            if let Err(err) = self.handle_command(command) {
                tracing::warn!(tick = self.time.tick, error = %err, "command rejected");
                self.alerts.push(Alert {
                    level: AlertLevel::Warning,
                    message: err.to_string(),
                    tick: self.time.tick,
                });
            }
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) -> Result<(), SimError> {
        match command {
            PlayerCommand::StartSession => {
                if matches!(self.phase, GamePhase::MainMenu | GamePhase::Complete) {
                    self.start_session()?;
                }
            }
            PlayerCommand::Pause => {
                if self.phase == GamePhase::Active {
                    self.phase = GamePhase::Paused;
                }
            }
            PlayerCommand::Resume => {
                if self.phase == GamePhase::Paused {
                    self.phase = GamePhase::Active;
                }
            }
            PlayerCommand::SetTimeScale { scale } => {
                self.time_scale = scale.clamp(0.0, MAX_TIME_SCALE);
            }
            PlayerCommand::ActivateBoss { boss_id } => {
                self.require_session()?;
                self.activate_boss(boss_id)?;
            }
            PlayerCommand::DamageBoss { boss_id, amount } => {
                self.require_session()?;
                let amount = validate_amount(amount)?;
                let now = self.time.tick;
                let (_, boss, tag) = find_boss(&mut self.world, boss_id)?;
                let report =
                    boss.apply_damage(amount, &mut CombatHooks::new(tag, now, &mut self.presentation));
                if report.applied > 0 {
                    self.presentation.events.push(BossEvent::Damaged {
                        boss_id,
                        delta: report.applied,
                        health: report.health,
                    });
                }
            }
            PlayerCommand::HealBoss { boss_id, amount } => {
                self.require_session()?;
                let amount = validate_amount(amount)?;
                let (_, boss, _tag) = find_boss(&mut self.world, boss_id)?;
                let before = boss.health();
                let health = boss.heal(amount);
                if health != before {
                    self.presentation
                        .events
                        .push(BossEvent::Healed { boss_id, health });
                }
            }
            PlayerCommand::MovePlayer { position } => {
                self.require_session()?;
                for (_entity, (_player, pos)) in self.world.query_mut::<(&Player, &mut Position)>()
                {
                    *pos = position;
                }
            }
        }
        Ok(())
    }

    fn start_session(&mut self) -> Result<(), SimError> {
        self.config.validate()?;
        self.rng = ChaCha8Rng::seed_from_u64(self.config.seed);
        self.presentation = Presentation::default();
        self.time = SimTime::default();

        let scripted = world_setup::setup_session(&mut self.world, &mut self.rng, &self.config)?;
        tracing::info!(
            seed = self.config.seed,
            bosses = self.config.bosses.len(),
            "session started"
        );
        self.phase = GamePhase::Active;

        for boss_id in scripted {
            self.activate_boss(boss_id)?;
        }
        Ok(())
    }

    fn activate_boss(&mut self, boss_id: u32) -> Result<(), SimError> {
        let now = self.time.tick;
        let (_, boss, tag) = find_boss(&mut self.world, boss_id)?;
        boss.activate(&mut CombatHooks::new(tag, now, &mut self.presentation));
        Ok(())
    }

    fn require_session(&self) -> Result<(), CommandError> {
        match self.phase {
            GamePhase::Active | GamePhase::Paused => Ok(()),
            GamePhase::MainMenu | GamePhase::Complete => Err(CommandError::NoSession),
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.time.tick;
        // 1. Proximity activation
        systems::activation::run(&mut self.world, now, &mut self.presentation);
        // 2. Boss lifecycle tick (attack cycle)
        systems::boss_combat::run(&mut self.world, now, &mut self.presentation);
        // 3. Banner status line
        systems::boss_combat::refresh_banner(&self.world, now, &mut self.presentation);
        // 4. Dispose of defeated bosses
        systems::cleanup::run(
            &mut self.world,
            now,
            &mut self.presentation,
            &mut self.despawn_buffer,
        );
        // 5. Presentation timers
        self.presentation.effects.expire(now);
        self.presentation.banner.expire(now);
    }

    /// The session ends once every boss has been defeated and disposed of.
    fn check_complete(&mut self) {
        let remaining = self.world.query::<&BossTag>().iter().count();
        if remaining == 0 {
            tracing::info!(tick = self.time.tick, "all bosses defeated, session complete");
            self.phase = GamePhase::Complete;
        }
    }
}

/// Look up a boss by its session id.
fn find_boss(
    world: &mut World,
    boss_id: u32,
) -> Result<(hecs::Entity, &mut BossEntity, &BossTag), CommandError> {
    world
        .query_mut::<(&mut BossEntity, &BossTag)>()
        .into_iter()
        .find(|(_, (_, tag))| tag.boss_id == boss_id)
        .map(|(entity, (boss, tag))| (entity, boss, tag))
        .ok_or(CommandError::UnknownBoss { boss_id })
}
