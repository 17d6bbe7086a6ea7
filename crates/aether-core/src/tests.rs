use crate::commands::{validate_amount, PlayerCommand};
use crate::constants::*;
use crate::enums::*;
use crate::error::CommandError;
use crate::events::{Alert, BossEvent};
use crate::state::GameStateSnapshot;
use crate::types::{Position, SimTime};

#[test]
fn test_status_band_serializes_lowercase() {
    assert_eq!(
        serde_json::to_string(&StatusBand::Dominant).unwrap(),
        "\"dominant\""
    );
    assert_eq!(
        serde_json::to_string(&StatusBand::Engaged).unwrap(),
        "\"engaged\""
    );
    assert_eq!(
        serde_json::to_string(&StatusBand::Weakened).unwrap(),
        "\"weakened\""
    );
    assert_eq!(StatusBand::Engaged.to_string(), "engaged");
    assert_eq!(StatusBand::Dominant.banner_label(), "DOMINATING");
}

#[test]
fn test_boss_kind_snake_case() {
    let kind: BossKind = serde_json::from_str("\"volcano_lord\"").unwrap();
    assert_eq!(kind, BossKind::VolcanoLord);
    assert_eq!(serde_json::to_string(&BossKind::Pyros).unwrap(), "\"pyros\"");
}

#[test]
fn test_element_colors() {
    assert_eq!(Element::Fire.alert_color(), "#ff4136");
    assert_eq!(Element::Water.alert_color(), "#0074D9");
    assert_eq!(Element::Wind.alert_color(), "#7FDBFF");
    assert_eq!(Element::Earth.alert_color(), "#3D9970");
}

/// Verify PlayerCommand round-trips through serde (tagged union).
#[test]
fn test_player_command_serde() {
    let commands = vec![
        PlayerCommand::StartSession,
        PlayerCommand::ActivateBoss { boss_id: 0 },
        PlayerCommand::DamageBoss {
            boss_id: 0,
            amount: 40,
        },
        PlayerCommand::HealBoss {
            boss_id: 1,
            amount: 5,
        },
        PlayerCommand::MovePlayer {
            position: Position::new(1.0, 2.0, 3.0),
        },
        PlayerCommand::SetTimeScale { scale: 2.0 },
        PlayerCommand::Pause,
        PlayerCommand::Resume,
    ];
    for cmd in &commands {
        let json = serde_json::to_string(cmd).unwrap();
        let back: PlayerCommand = serde_json::from_str(&json).unwrap();
        assert_eq!(json, serde_json::to_string(&back).unwrap());
    }
}

#[test]
fn test_damage_command_from_frontend_json() {
    let json = r#"{"type":"DamageBoss","boss_id":3,"amount":-5}"#;
    let cmd: PlayerCommand = serde_json::from_str(json).unwrap();
    match cmd {
        PlayerCommand::DamageBoss { boss_id, amount } => {
            assert_eq!(boss_id, 3);
            assert!(validate_amount(amount).is_err());
        }
        other => panic!("unexpected command {other:?}"),
    }
}

#[test]
fn test_validate_amount() {
    assert_eq!(validate_amount(0), Ok(0));
    assert_eq!(validate_amount(150), Ok(150));
    assert_eq!(validate_amount(i64::MAX), Ok(u32::MAX));
    assert!(matches!(
        validate_amount(-1),
        Err(CommandError::InvalidArgument { .. })
    ));
}

#[test]
fn test_boss_event_serde_tagged() {
    let event = BossEvent::Attack {
        boss_id: 0,
        variant_index: 2,
        attack: "Ground Fire".to_string(),
        damage: 25,
    };
    let json = serde_json::to_string(&event).unwrap();
    assert!(json.contains("\"type\":\"Attack\""));
    let back: BossEvent = serde_json::from_str(&json).unwrap();
    assert_eq!(event, back);
}

#[test]
fn test_alert_serde() {
    let alert = Alert {
        level: AlertLevel::Warning,
        message: "invalid argument".to_string(),
        tick: 12,
    };
    let json = serde_json::to_string(&alert).unwrap();
    let back: Alert = serde_json::from_str(&json).unwrap();
    assert_eq!(alert.message, back.message);
    assert_eq!(alert.tick, back.tick);
}

#[test]
fn test_snapshot_serde() {
    let snapshot = GameStateSnapshot::default();
    let json = serde_json::to_string(&snapshot).unwrap();
    let back: GameStateSnapshot = serde_json::from_str(&json).unwrap();
    assert_eq!(snapshot.time.tick, back.time.tick);
    assert_eq!(snapshot.phase, back.phase);
    assert!(back.banner.is_none());
}

#[test]
fn test_position_distances() {
    let a = Position::new(0.0, 0.0, 0.0);
    let b = Position::new(3.0, 10.0, 4.0);
    assert!((a.ground_distance_to(&b) - 5.0).abs() < 1e-5);
    assert!(a.distance_to(&b) > 10.0);
}

#[test]
fn test_position_serializes_as_array() {
    let json = serde_json::to_string(&Position::new(1.0, 2.0, 3.0)).unwrap();
    assert_eq!(json, "[1.0,2.0,3.0]");
}

#[test]
fn test_sim_time_advance() {
    let mut time = SimTime::default();
    for _ in 0..TICK_RATE {
        time.advance();
    }
    assert_eq!(time.tick, TICK_RATE as u64);
    assert!((time.elapsed_secs - 1.0).abs() < 1e-9);
}

#[test]
fn test_secs_to_ticks() {
    assert_eq!(secs_to_ticks(2.0), DEFAULT_ATTACK_COOLDOWN_TICKS);
    assert_eq!(secs_to_ticks(5.0), ALERT_DISPLAY_TICKS);
    assert_eq!(secs_to_ticks(0.1), DAMAGE_FLASH_TICKS);
}
