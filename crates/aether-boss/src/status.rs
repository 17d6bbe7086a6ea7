//! Status reporter: health percentage to display band.

use aether_core::constants::{DOMINANT_THRESHOLD_PCT, WEAKENED_THRESHOLD_PCT};
use aether_core::enums::StatusBand;

/// `> 70` dominant, `30..=70` engaged, `< 30` weakened.
pub fn status_band(health_pct: f32) -> StatusBand {
    if health_pct > DOMINANT_THRESHOLD_PCT {
        StatusBand::Dominant
    } else if health_pct >= WEAKENED_THRESHOLD_PCT {
        StatusBand::Engaged
    } else {
        StatusBand::Weakened
    }
}
