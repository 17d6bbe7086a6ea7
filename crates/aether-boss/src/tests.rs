//! Tests for the boss combat state machine.

use std::num::NonZeroUsize;

use aether_core::enums::{BossKind, LifecycleState, StatusBand};

use crate::boss::{BossEntity, BossSave};
use crate::cycle::{AttackCycle, CycleConfig};
use crate::error::BossError;
use crate::hooks::{HookCall, HookLog, NoHooks};
use crate::profiles::get_profile;

fn cycle(cooldown: u32, variants: usize) -> CycleConfig {
    CycleConfig::new(cooldown, NonZeroUsize::new(variants).unwrap())
}

fn boss(max_health: u32) -> BossEntity {
    BossEntity::new(max_health, cycle(120, 3)).unwrap()
}

fn active_boss(max_health: u32) -> BossEntity {
    let mut b = boss(max_health);
    b.activate(&mut NoHooks);
    b
}

// ---- Construction ----

#[test]
fn test_new_boss_is_inactive_at_full_health() {
    let b = boss(100);
    assert_eq!(b.state(), LifecycleState::Inactive);
    assert_eq!(b.health(), 100);
    assert_eq!(b.max_health(), 100);
    assert_eq!(b.attack_pattern_index(), 0);
    assert_eq!(b.attack_cooldown_ticks(), 0);
}

#[test]
fn test_zero_max_health_rejected() {
    assert_eq!(
        BossEntity::new(0, cycle(120, 3)),
        Err(BossError::ZeroMaxHealth)
    );
}

#[test]
fn test_no_variants_rejected() {
    assert!(CycleConfig::with_variants(0).is_none());
    assert_eq!(CycleConfig::with_variants(3).unwrap().cooldown_ticks, 120);
}

#[test]
fn test_every_profile_builds() {
    for kind in BossKind::ALL {
        let profile = get_profile(kind);
        let b = BossEntity::from_profile(&profile).unwrap();
        assert_eq!(b.max_health(), profile.max_health);
        assert_eq!(b.cycle_config().variant_count.get(), profile.attacks.len());
        assert_eq!(b.cycle_config().cooldown_ticks, profile.attack_cooldown_ticks);
    }
}

#[test]
fn test_pyros_profile_matches_reference() {
    let p = get_profile(BossKind::Pyros);
    assert_eq!(p.max_health, 100);
    assert_eq!(p.attack_cooldown_ticks, 120);
    let names: Vec<_> = p.attacks.iter().map(|a| a.name).collect();
    assert_eq!(names, ["Fire Breath", "Meteor Shower", "Ground Fire"]);
    assert_eq!(p.attack_name(7), "Unknown");
}

// ---- Health ledger ----

#[test]
fn test_damage_monotonic_and_never_negative() {
    let mut b = active_boss(100);
    let mut last = b.health();
    for amount in [0, 7, 13, 1, 50, 90, 3, 0, 1000] {
        let report = b.apply_damage(amount, &mut NoHooks);
        assert!(report.health <= last);
        assert_eq!(report.health, b.health());
        assert_eq!(report.applied, last - report.health);
        last = report.health;
    }
    assert_eq!(b.health(), 0);
}

#[test]
fn test_overkill_reports_actual_delta_and_defeats_once() {
    let mut log = HookLog::default();
    let mut b = boss(100);
    b.activate(&mut log);

    let report = b.apply_damage(150, &mut log);
    assert_eq!(report.applied, 100);
    assert_eq!(report.health, 0);
    assert!(report.defeated);
    assert_eq!(b.state(), LifecycleState::Defeated);
    assert_eq!(log.count(HookCall::Defeat), 1);
    assert_eq!(log.count(HookCall::DamageFeedback(100)), 1);

    // Further hits change nothing and fire nothing.
    let again = b.apply_damage(10, &mut log);
    assert_eq!(again.applied, 0);
    assert!(!again.defeated);
    assert_eq!(log.count(HookCall::Defeat), 1);
    assert_eq!(log.calls.len(), 3);
}

#[test]
fn test_zero_damage_fires_no_feedback() {
    let mut log = HookLog::default();
    let mut b = active_boss(100);
    let report = b.apply_damage(0, &mut log);
    assert_eq!(report.applied, 0);
    assert!(log.calls.is_empty());
}

#[test]
fn test_health_zero_iff_defeated() {
    let mut b = active_boss(50);
    for _ in 0..10 {
        b.apply_damage(6, &mut NoHooks);
        assert_eq!(b.health() == 0, b.state() == LifecycleState::Defeated);
    }
    assert!(b.is_defeated());
}

#[test]
fn test_damage_while_inactive_can_defeat() {
    let mut log = HookLog::default();
    let mut b = boss(10);
    b.apply_damage(10, &mut log);
    assert_eq!(b.state(), LifecycleState::Defeated);
    assert_eq!(log.count(HookCall::Defeat), 1);
    assert_eq!(log.count(HookCall::Activate), 0);
}

#[test]
fn test_heal_caps_at_max() {
    let mut b = active_boss(100);
    b.apply_damage(30, &mut NoHooks);
    assert_eq!(b.heal(10), 80);
    assert_eq!(b.heal(500), 100);
    assert_eq!(b.heal(1), 100);
}

#[test]
fn test_heal_after_defeat_stays_zero() {
    let mut b = active_boss(100);
    b.apply_damage(100, &mut NoHooks);
    assert_eq!(b.heal(50), 0);
    assert_eq!(b.health(), 0);
    assert!(b.is_defeated());
}

#[test]
fn test_percentage_and_band_scenario() {
    let mut b = boss(100);
    assert_eq!(b.health_percentage(), 100.0);
    assert_eq!(b.status_band(), StatusBand::Dominant);

    b.apply_damage(40, &mut NoHooks);
    assert_eq!(b.health_percentage(), 60.0);
    assert_eq!(b.status_band(), StatusBand::Engaged);

    b.apply_damage(35, &mut NoHooks);
    assert_eq!(b.status_band(), StatusBand::Weakened);

    // Band follows health back up; nothing is cached.
    b.heal(60);
    assert_eq!(b.status_band(), StatusBand::Dominant);
}

// ---- Lifecycle ----

#[test]
fn test_activate_idempotent() {
    let mut log = HookLog::default();
    let mut b = boss(100);
    assert!(b.activate(&mut log));
    assert!(!b.activate(&mut log));
    assert_eq!(log.count(HookCall::Activate), 1);
    assert_eq!(b.state(), LifecycleState::Active);
}

#[test]
fn test_activate_after_defeat_is_noop() {
    let mut log = HookLog::default();
    let mut b = active_boss(100);
    b.apply_damage(100, &mut log);
    assert!(!b.activate(&mut log));
    assert_eq!(b.state(), LifecycleState::Defeated);
    assert_eq!(log.count(HookCall::Activate), 0);
}

#[test]
fn test_defeat_twice_fires_once() {
    let mut log = HookLog::default();
    let mut b = active_boss(100);
    assert!(b.defeat(&mut log));
    assert!(!b.defeat(&mut log));
    assert_eq!(log.count(HookCall::Defeat), 1);
}

// ---- Attack cycle ----

#[test]
fn test_first_window_fires_variant_zero_once() {
    let mut log = HookLog::default();
    let mut b = active_boss(100);
    for _ in 0..121 {
        b.tick(&mut log);
    }
    assert_eq!(log.attacks(), vec![0]);
    assert_eq!(b.attack_pattern_index(), 1);
    assert_eq!(b.attack_cooldown_ticks(), 0);
}

#[test]
fn test_one_attack_per_cooldown_window() {
    let mut log = HookLog::default();
    let mut b = active_boss(100);
    let period = 121;
    for window in 1..=5 {
        for _ in 0..period {
            b.tick(&mut log);
        }
        assert_eq!(log.attacks().len(), window);
    }
}

#[test]
fn test_no_attacks_while_inactive_or_defeated() {
    let mut log = HookLog::default();
    let mut b = boss(100);
    for _ in 0..500 {
        assert_eq!(b.tick(&mut log), None);
    }
    assert!(log.attacks().is_empty());

    b.activate(&mut log);
    b.apply_damage(100, &mut log);
    for _ in 0..500 {
        b.tick(&mut log);
    }
    assert!(log.attacks().is_empty());
}

#[test]
fn test_defeat_freezes_cooldown() {
    let mut b = active_boss(100);
    b.tick(&mut NoHooks);
    for _ in 0..20 {
        b.tick(&mut NoHooks);
    }
    let cooldown = b.attack_cooldown_ticks();
    b.apply_damage(100, &mut NoHooks);
    b.tick(&mut NoHooks);
    assert_eq!(b.attack_cooldown_ticks(), cooldown);
}

#[test]
fn test_round_robin_for_any_n() {
    for n in 1..=6 {
        let mut c = AttackCycle::new(cycle(2, n));
        let fired: Vec<usize> = (0..3 * n * 3).filter_map(|_| c.tick()).collect();
        let expected: Vec<usize> = (0..3 * n).map(|i| i % n).collect();
        assert_eq!(fired, expected, "n = {n}");
    }
}

#[test]
fn test_single_variant_repeats() {
    let mut c = AttackCycle::new(cycle(0, 1));
    for _ in 0..10 {
        assert_eq!(c.tick(), Some(0));
        assert_eq!(c.pattern_index(), 0);
    }
}

#[test]
fn test_zero_cooldown_attacks_every_tick() {
    let mut c = AttackCycle::new(cycle(0, 3));
    let fired: Vec<_> = (0..6).map(|_| c.tick()).collect();
    assert_eq!(
        fired,
        vec![Some(0), Some(1), Some(2), Some(0), Some(1), Some(2)]
    );
}

#[test]
fn test_cooldown_decrements_once_per_tick() {
    let mut c = AttackCycle::new(cycle(120, 3));
    c.tick();
    for expected in (0..120).rev() {
        assert_eq!(c.tick(), None);
        assert_eq!(c.cooldown_ticks(), expected);
    }
    assert_eq!(c.tick(), Some(1));
}

// ---- Save / restore ----

#[test]
fn test_save_restore_round_trip() {
    let mut b = active_boss(100);
    for _ in 0..130 {
        b.tick(&mut NoHooks);
    }
    b.apply_damage(25, &mut NoHooks);
    let save = b.save();
    assert_eq!(save.health, 75);
    assert_eq!(save.lifecycle, LifecycleState::Active);

    let json = serde_json::to_string(&save).unwrap();
    let loaded: BossSave = serde_json::from_str(&json).unwrap();

    let mut restored = boss(100);
    restored.restore(&loaded).unwrap();
    assert_eq!(restored, b);
}

#[test]
fn test_restore_rejects_inconsistent_saves() {
    let mut b = boss(100);
    let base = b.save();

    let cases = [
        (
            BossSave {
                health: 101,
                ..base
            },
            BossError::HealthOutOfRange {
                health: 101,
                max_health: 100,
            },
        ),
        (
            BossSave { health: 0, ..base },
            BossError::InconsistentLifecycle {
                health: 0,
                state: LifecycleState::Inactive,
            },
        ),
        (
            BossSave {
                lifecycle: LifecycleState::Defeated,
                ..base
            },
            BossError::InconsistentLifecycle {
                health: 100,
                state: LifecycleState::Defeated,
            },
        ),
        (
            BossSave {
                attack_pattern_index: 3,
                ..base
            },
            BossError::AttackIndexOutOfRange {
                index: 3,
                variant_count: 3,
            },
        ),
        (
            BossSave {
                attack_cooldown_ticks: 121,
                ..base
            },
            BossError::CooldownOutOfRange {
                cooldown: 121,
                max: 120,
            },
        ),
    ];

    for (save, expected) in cases {
        assert_eq!(b.restore(&save), Err(expected));
        assert_eq!(b.save(), base, "rejected restore must not change state");
    }
}

#[test]
fn test_restore_defeated_boss_stays_down() {
    let mut b = boss(100);
    b.restore(&BossSave {
        health: 0,
        lifecycle: LifecycleState::Defeated,
        attack_pattern_index: 2,
        attack_cooldown_ticks: 0,
    })
    .unwrap();
    assert_eq!(b.heal(10), 0);
    assert!(!b.activate(&mut NoHooks));
    assert_eq!(b.tick(&mut NoHooks), None);
}

#[test]
fn test_hooks_work_through_trait_object() {
    let mut log = HookLog::default();
    {
        let hooks: &mut dyn crate::hooks::BossHooks = &mut log;
        let mut b = boss(100);
        b.activate(hooks);
        b.tick(hooks);
        b.apply_damage(5, hooks);
    }
    assert_eq!(
        log.calls,
        vec![
            HookCall::Activate,
            HookCall::Attack(0),
            HookCall::DamageFeedback(5)
        ]
    );
}
