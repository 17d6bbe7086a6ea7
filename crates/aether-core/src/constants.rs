//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz). One tick per rendered frame.
pub const TICK_RATE: u32 = 60;

// --- Boss combat ---

/// Ticks between two boss attacks (2 seconds at 60 Hz).
pub const DEFAULT_ATTACK_COOLDOWN_TICKS: u32 = 120;

/// Max health of a boss built without a profile.
pub const DEFAULT_BOSS_MAX_HEALTH: u32 = 100;

/// Health percentage above which a boss is "dominant".
pub const DOMINANT_THRESHOLD_PCT: f32 = 70.0;

/// Health percentage below which a boss is "weakened".
pub const WEAKENED_THRESHOLD_PCT: f32 = 30.0;

/// Distance (world units) at which an inactive boss notices the player.
pub const DEFAULT_ACTIVATION_RADIUS: f32 = 25.0;

// --- World ---

/// Half-extent of the island area on the X/Z plane where bosses may spawn.
pub const ISLAND_HALF_EXTENT: f32 = 60.0;

/// Hover height of a spawned boss above the island surface.
pub const BOSS_SPAWN_HEIGHT: f32 = 10.0;

/// Where Pyros waits in the reference layout.
pub const PYROS_SPAWN: [f32; 3] = [0.0, 10.0, -20.0];

/// Player spawn point.
pub const PLAYER_SPAWN: [f32; 3] = [0.0, 1.0, 20.0];

// --- Presentation timing ---

/// How long the "APPROACHING" banner stays up (5 seconds).
pub const ALERT_DISPLAY_TICKS: u32 = 300;

/// How long "APPROACHING!" holds before the banner switches to live status.
pub const ANNOUNCE_HOLD_TICKS: u32 = 120;

/// How long the "DEFEATED" banner stays up (3 seconds).
pub const DEFEAT_BANNER_TICKS: u32 = 180;

/// Damage flash duration (100 ms).
pub const DAMAGE_FLASH_TICKS: u32 = 6;

/// Camera shake scheduled on heavy attacks.
pub const CAMERA_SHAKE_TICKS: u32 = 30;

/// Maximum simulation speed multiplier.
pub const MAX_TIME_SCALE: f64 = 4.0;

// --- Alert colours ---

pub const COLOR_FIRE: &str = "#ff4136";
pub const COLOR_WATER: &str = "#0074D9";
pub const COLOR_WIND: &str = "#7FDBFF";
pub const COLOR_EARTH: &str = "#3D9970";
pub const COLOR_VICTORY: &str = "#2ECC40";

/// Convert seconds to whole ticks at the nominal tick rate.
pub fn secs_to_ticks(secs: f32) -> u32 {
    (secs * TICK_RATE as f32).round() as u32
}
