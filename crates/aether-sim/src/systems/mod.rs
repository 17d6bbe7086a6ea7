//! ECS systems that operate on the session world each tick.
//!
//! Systems are pure functions over `&mut World` (or `&World` for read-only)
//! plus the engine-owned presentation state.

pub mod activation;
pub mod alerts;
pub mod boss_combat;
pub mod cleanup;
pub mod effects;
pub mod snapshot;
