//! Headless session simulation for AETHER.
//!
//! Owns the hecs ECS world, runs the boss systems at a fixed tick rate,
//! and produces GameStateSnapshots for whatever presents them.

pub mod config;
pub mod engine;
pub mod error;
pub mod presentation;
pub mod systems;
pub mod world_setup;

pub use aether_core as core;
pub use config::{ConfigError, SessionConfig};
pub use engine::SimulationEngine;
pub use error::SimError;
