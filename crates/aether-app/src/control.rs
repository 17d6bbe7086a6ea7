//! Control surface over the game loop thread.
//!
//! These functions bridge host requests (CLI input, tests) to the game loop
//! thread via channels.

use anyhow::{anyhow, bail, Context, Result};

use aether_core::commands::PlayerCommand;
use aether_core::state::GameStateSnapshot;
use aether_sim::SessionConfig;

use crate::game_loop;
use crate::state::{AppState, GameLoopCommand};

fn poisoned<T>(_: T) -> anyhow::Error {
    anyhow!("app state lock poisoned")
}

/// Start the simulation. Spawns the game loop thread if not already running.
pub fn start_simulation<F>(state: &AppState, config: SessionConfig, on_snapshot: F) -> Result<()>
where
    F: FnMut(&GameStateSnapshot) + Send + 'static,
{
    let mut tx_lock = state.command_tx.lock().map_err(poisoned)?;
    if tx_lock.is_some() {
        bail!("simulation already running");
    }

    let (cmd_tx, handle) =
        game_loop::spawn_game_loop(config, state.latest_snapshot.clone(), on_snapshot)
            .context("failed to spawn game loop thread")?;

    *tx_lock = Some(cmd_tx);
    *state.loop_handle.lock().map_err(poisoned)? = Some(handle);
    Ok(())
}

/// Send a player command to the simulation.
pub fn send_command(state: &AppState, command: PlayerCommand) -> Result<()> {
    let tx_lock = state.command_tx.lock().map_err(poisoned)?;
    match tx_lock.as_ref() {
        Some(tx) => tx
            .send(GameLoopCommand::PlayerCommand(command))
            .context("game loop is gone"),
        None => bail!("simulation not started"),
    }
}

/// Get the latest snapshot synchronously.
pub fn get_snapshot(state: &AppState) -> Result<Option<GameStateSnapshot>> {
    let lock = state.latest_snapshot.lock().map_err(poisoned)?;
    Ok(lock.clone())
}

/// Stop the game loop and wait for its thread. No-op if not running.
pub fn shutdown(state: &AppState) -> Result<()> {
    if let Some(tx) = state.command_tx.lock().map_err(poisoned)?.take() {
        // A closed channel means the loop already exited.
        let _ = tx.send(GameLoopCommand::Shutdown);
    }
    if let Some(handle) = state.loop_handle.lock().map_err(poisoned)?.take() {
        handle
            .join()
            .map_err(|_| anyhow!("game loop thread panicked"))?;
    }
    Ok(())
}
