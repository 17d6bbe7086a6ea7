use std::io::BufRead;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use aether_app::control;
use aether_app::logging;
use aether_app::script::{run_scripted, StrikePlan};
use aether_app::state::AppState;
use aether_core::commands::PlayerCommand;
use aether_core::state::GameStateSnapshot;
use aether_sim::SessionConfig;

#[derive(Parser, Debug)]
#[command(name = "aether")]
#[command(about = "Run AETHER boss encounters without a renderer")]
#[command(version)]
struct Cli {
    /// Session config TOML (defaults to a lone Pyros)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Override the RNG seed from the config
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pretty: bool,

    #[command(subcommand)]
    mode: Mode,
}

#[derive(Subcommand, Debug)]
enum Mode {
    /// Run a scripted session as fast as possible and print the final snapshot
    Headless(HeadlessArgs),
    /// Run in real time, reading JSON player commands from stdin, one per line
    Live,
}

#[derive(Args, Debug)]
struct HeadlessArgs {
    /// Maximum ticks to simulate
    #[arg(long, default_value_t = 600)]
    ticks: u64,

    /// Strike the target every N ticks (0 = never)
    #[arg(long, default_value_t = 30)]
    strike_every: u64,

    /// Damage per strike
    #[arg(long, default_value_t = 10, allow_negative_numbers = true)]
    strike_damage: i64,

    /// Boss id to activate and strike
    #[arg(long, default_value_t = 0)]
    target: u32,
}

fn main() -> Result<()> {
    logging::init();
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => SessionConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config.seed = seed;
    }

    match cli.mode {
        Mode::Headless(args) => {
            let plan = StrikePlan {
                ticks: args.ticks,
                strike_every: args.strike_every,
                strike_damage: args.strike_damage,
                target: args.target,
            };
            let outcome = run_scripted(config, &plan);
            tracing::info!(
                ticks = outcome.ticks_run,
                strikes = outcome.strikes,
                attacks = outcome.attacks_seen,
                defeats = outcome.defeats_seen,
                phase = ?outcome.last.phase,
                "scripted session finished"
            );
            print_json(&outcome.last, cli.pretty)
        }
        Mode::Live => run_live(config, cli.pretty),
    }
}

fn run_live(config: SessionConfig, pretty: bool) -> Result<()> {
    let state = AppState::new();
    control::start_simulation(&state, config, |snap: &GameStateSnapshot| {
        for event in &snap.events {
            if let Ok(line) = serde_json::to_string(event) {
                println!("{line}");
            }
        }
    })?;
    control::send_command(&state, PlayerCommand::StartSession)?;

    for line in std::io::stdin().lock().lines() {
        let line = line.context("reading stdin")?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        match serde_json::from_str::<PlayerCommand>(line) {
            Ok(command) => control::send_command(&state, command)?,
            Err(err) => tracing::warn!(%err, "ignoring malformed command"),
        }
    }

    control::shutdown(&state)?;
    if let Some(snap) = control::get_snapshot(&state)? {
        print_json(&snap, pretty)?;
    }
    Ok(())
}

fn print_json(snapshot: &GameStateSnapshot, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(snapshot)
    } else {
        serde_json::to_string(snapshot)
    }
    .context("serializing snapshot")?;
    println!("{json}");
    Ok(())
}
