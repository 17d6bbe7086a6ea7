//! Boss combat state machine for Ashes of Aether.
//!
//! A boss is plain data: a health ledger, an attack cycle and a lifecycle.
//! Presentation reacts through [`hooks::BossHooks`], handed in by the caller
//! on every mutating call. Nothing here touches the ECS or a renderer.

pub mod boss;
pub mod cycle;
pub mod error;
pub mod health;
pub mod hooks;
pub mod lifecycle;
pub mod profiles;
pub mod status;

pub use aether_core as core;
pub use boss::{BossEntity, BossSave, DamageReport};
pub use error::BossError;
pub use hooks::BossHooks;

#[cfg(test)]
mod tests;
