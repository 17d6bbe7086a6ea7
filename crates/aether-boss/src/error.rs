use thiserror::Error;

use aether_core::enums::LifecycleState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BossError {
    #[error("max health must be greater than zero")]
    ZeroMaxHealth,

    #[error("a boss needs at least one attack variant")]
    NoAttackVariants,

    #[error("saved health {health} exceeds max health {max_health}")]
    HealthOutOfRange { health: u32, max_health: u32 },

    #[error("saved health {health} is inconsistent with lifecycle {state:?}")]
    InconsistentLifecycle { health: u32, state: LifecycleState },

    #[error("saved attack index {index} out of range for {variant_count} variants")]
    AttackIndexOutOfRange { index: usize, variant_count: usize },

    #[error("saved cooldown {cooldown} exceeds configured cooldown {max}")]
    CooldownOutOfRange { cooldown: u32, max: u32 },
}
