//! Config domain: unit tests for tuning parsing and validation.

use super::MovementTuning;
use super::loader::parse_tuning;
use super::validation::validate_tuning;

const SAMPLE: &str = r#"(
    max_speed: 280.0,
    jump_take_off_speed: 430.0,
    jump_modifier: 1.4,
    jump_deceleration: 0.45,
    accel: 2800.0,
    decel: 2400.0,
    gravity: 1700.0,
)"#;

#[test]
fn test_parse_well_formed_tuning() {
    let tuning = parse_tuning(SAMPLE, "movement.ron").expect("sample should parse");
    assert_eq!(tuning.max_speed, 280.0);
    assert_eq!(tuning.jump_take_off_speed, 430.0);
    assert_eq!(tuning.jump_modifier, 1.4);
    assert_eq!(tuning.jump_deceleration, 0.45);
    assert_eq!(tuning.gravity, 1700.0);
}

#[test]
fn test_parse_error_carries_file_name() {
    let err = parse_tuning("(max_speed: oops)", "movement.ron").unwrap_err();
    assert_eq!(err.file, "movement.ron");
    assert!(err.message.starts_with("Parse error"));
}

#[test]
fn test_defaults_validate_cleanly() {
    let errors = validate_tuning(&MovementTuning::default());
    assert!(errors.is_empty());
}

#[test]
fn test_zero_max_speed_is_rejected() {
    let tuning = MovementTuning {
        max_speed: 0.0,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "max_speed");
}

#[test]
fn test_negative_take_off_speed_is_rejected() {
    let tuning = MovementTuning {
        jump_take_off_speed: -7.0,
        ..Default::default()
    };
    let errors = validate_tuning(&tuning);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, "jump_take_off_speed");
}

#[test]
fn test_all_bad_fields_are_reported() {
    let tuning = MovementTuning {
        max_speed: -1.0,
        jump_take_off_speed: 0.0,
        ..Default::default()
    };
    assert_eq!(validate_tuning(&tuning).len(), 2);
}
