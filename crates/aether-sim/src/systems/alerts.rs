//! Boss alert banner.
//!
//! One banner at a time. Activation announces the boss in its element colour,
//! the banner then tracks the boss's status band until it times out, and a
//! defeat replaces whatever is showing with a green victory line.

use aether_core::constants::*;
use aether_core::enums::{Element, StatusBand};
use aether_core::state::BannerView;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BannerMode {
    Announce,
    Victory,
}

#[derive(Debug, Clone)]
struct Banner {
    boss_id: u32,
    name: String,
    color: &'static str,
    text: String,
    mode: BannerMode,
    shown_at: u64,
    hide_at: u64,
}

#[derive(Debug, Clone, Default)]
pub struct BannerBoard {
    current: Option<Banner>,
}

impl BannerBoard {
    /// "<NAME> APPROACHING!" for [`ALERT_DISPLAY_TICKS`].
    pub fn show_boss_alert(&mut self, boss_id: u32, name: &str, element: Element, now: u64) {
        let name = name.to_uppercase();
        self.current = Some(Banner {
            boss_id,
            text: format!("{name} APPROACHING!"),
            name,
            color: element.alert_color(),
            mode: BannerMode::Announce,
            shown_at: now,
            hide_at: now + ALERT_DISPLAY_TICKS as u64,
        });
    }

    /// Replace the announcement with "<NAME> - <BAND> (<pct>%)" once it has
    /// been up for [`ANNOUNCE_HOLD_TICKS`]. Ignored for other bosses and
    /// while the victory line is showing.
    pub fn update_status(&mut self, boss_id: u32, health_pct: f32, band: StatusBand, now: u64) {
        let Some(banner) = self.current.as_mut() else {
            return;
        };
        if banner.boss_id != boss_id
            || banner.mode != BannerMode::Announce
            || now < banner.shown_at + ANNOUNCE_HOLD_TICKS as u64
        {
            return;
        }
        banner.text = format!(
            "{} - {} ({}%)",
            banner.name,
            band.banner_label(),
            health_pct.round() as u32
        );
    }

    /// "<NAME> DEFEATED!" in green for [`DEFEAT_BANNER_TICKS`].
    pub fn boss_defeated(&mut self, boss_id: u32, name: &str, now: u64) {
        let name = name.to_uppercase();
        self.current = Some(Banner {
            boss_id,
            text: format!("{name} DEFEATED!"),
            name,
            color: COLOR_VICTORY,
            mode: BannerMode::Victory,
            shown_at: now,
            hide_at: now + DEFEAT_BANNER_TICKS as u64,
        });
    }

    /// Take down whatever banner is showing for `boss_id`.
    pub fn dismiss(&mut self, boss_id: u32) {
        if self.current.as_ref().is_some_and(|b| b.boss_id == boss_id) {
            self.current = None;
        }
    }

    /// Hide the banner once its time is up.
    pub fn expire(&mut self, now: u64) {
        if self.current.as_ref().is_some_and(|b| now >= b.hide_at) {
            self.current = None;
        }
    }

    pub fn view(&self) -> Option<BannerView> {
        self.current.as_ref().map(|b| BannerView {
            boss_id: b.boss_id,
            text: b.text.clone(),
            color: b.color.to_string(),
        })
    }
}
