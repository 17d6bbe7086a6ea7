//! AETHER host application.
//!
//! Wires the session engine to a real-time game-loop thread and exposes a
//! small control surface (start, send command, poll snapshot, shut down).

pub mod control;
pub mod game_loop;
pub mod logging;
pub mod script;
pub mod state;

pub use aether_core as core;
