//! Player domain: unit tests for the jump state machine and velocity policy.

use super::systems::jump::{JumpEffect, JumpStep, advance};
use super::systems::velocity::{VelocityInput, step_velocity};
use super::{Facing, JumpState};
use crate::config::MovementTuning;
use bevy::prelude::*;

fn tuning() -> MovementTuning {
    MovementTuning {
        max_speed: 320.0,
        jump_take_off_speed: 7.0,
        jump_modifier: 1.5,
        jump_deceleration: 0.5,
        ..Default::default()
    }
}

fn policy_input(velocity: Vec2) -> VelocityInput {
    VelocityInput {
        velocity,
        move_x: 0.0,
        jump_requested: false,
        stop_jump_requested: false,
        grounded: true,
        facing: Facing::Right,
    }
}

#[test]
fn test_press_while_grounded_reaches_jumping_in_two_ticks() {
    let step = advance(JumpState::Grounded, true, true);
    assert_eq!(step.next, JumpState::PrepareToJump);
    assert!(!step.jump_requested);
    assert_eq!(step.effect, None);

    // PrepareToJump advances unconditionally and raises the intent
    let step = advance(step.next, true, false);
    assert_eq!(step.next, JumpState::Jumping);
    assert!(step.jump_requested);
    assert_eq!(step.effect, None);
}

#[test]
fn test_airborne_press_is_dropped() {
    // No transition from Grounded without contact, even with the button down
    let step = advance(JumpState::Grounded, false, true);
    assert_eq!(step.next, JumpState::Grounded);
    assert!(!step.jump_requested);

    // A press in any later state leaves the path untouched
    for (state, grounded) in [
        (JumpState::Jumping, false),
        (JumpState::InFlight, false),
        (JumpState::Landed, true),
    ] {
        let with_press = advance(state, grounded, true);
        let without_press = advance(state, grounded, false);
        assert_eq!(with_press, without_press, "press must be inert in {:?}", state);
    }
}

#[test]
fn test_jumped_fires_exactly_once_per_flight() {
    // Contact still held: no notification yet
    let step = advance(JumpState::Jumping, true, false);
    assert_eq!(step.next, JumpState::Jumping);
    assert_eq!(step.effect, None);

    // Contact lost: the one and only Jumped edge
    let step = advance(JumpState::Jumping, false, false);
    assert_eq!(step.next, JumpState::InFlight);
    assert_eq!(step.effect, Some(JumpEffect::Jumped));

    // Staying airborne emits nothing further
    let step = advance(JumpState::InFlight, false, false);
    assert_eq!(step.next, JumpState::InFlight);
    assert_eq!(step.effect, None);
}

#[test]
fn test_landing_reaches_grounded_within_two_ticks() {
    let step = advance(JumpState::InFlight, true, false);
    assert_eq!(step.next, JumpState::Landed);
    assert_eq!(step.effect, Some(JumpEffect::Landed));

    let step = advance(step.next, true, false);
    assert_eq!(step.next, JumpState::Grounded);
    assert_eq!(step.effect, None);
}

#[test]
fn test_grounded_is_a_stable_fixed_point() {
    let mut state = JumpState::Grounded;
    for _ in 0..100 {
        let step = advance(state, true, false);
        assert_eq!(step.next, JumpState::Grounded);
        assert!(!step.jump_requested);
        assert_eq!(step.effect, None);
        state = step.next;
    }
}

#[test]
fn test_full_jump_cycle_emits_one_jumped_and_one_landed() {
    // Grounded ticks, press, take-off, five airborne ticks, touch-down
    let contacts = [true, true, true, false, false, false, false, false, true, true, true];
    let presses = [false, true, false, false, false, false, false, false, false, false, false];

    let mut state = JumpState::Grounded;
    let mut jumped = 0;
    let mut landed = 0;
    let mut requests = 0;

    for (grounded, pressed) in contacts.into_iter().zip(presses) {
        let JumpStep {
            next,
            jump_requested,
            effect,
        } = advance(state, grounded, pressed);
        state = next;
        if jump_requested {
            requests += 1;
        }
        match effect {
            Some(JumpEffect::Jumped) => jumped += 1,
            Some(JumpEffect::Landed) => landed += 1,
            None => {}
        }
    }

    assert_eq!(state, JumpState::Grounded);
    assert_eq!(requests, 1);
    assert_eq!(jumped, 1);
    assert_eq!(landed, 1);
}

#[test]
fn test_take_off_impulse_scales_with_modifier() {
    let step = step_velocity(
        VelocityInput {
            jump_requested: true,
            ..policy_input(Vec2::ZERO)
        },
        &tuning(),
    );
    assert_eq!(step.vertical_velocity, 10.5);
    assert!(!step.jump_requested, "a consumed request must be cleared");
}

#[test]
fn test_stale_request_without_contact_applies_nothing() {
    let step = step_velocity(
        VelocityInput {
            jump_requested: true,
            grounded: false,
            ..policy_input(Vec2::new(0.0, -20.0))
        },
        &tuning(),
    );
    assert_eq!(step.vertical_velocity, -20.0);
}

#[test]
fn test_jump_cut_halves_ascent() {
    let step = step_velocity(
        VelocityInput {
            stop_jump_requested: true,
            ..policy_input(Vec2::new(0.0, 8.0))
        },
        &tuning(),
    );
    assert_eq!(step.vertical_velocity, 4.0);
    assert!(!step.stop_jump_requested, "the flag is consumed either way");
}

#[test]
fn test_jump_cut_ignores_descent() {
    let step = step_velocity(
        VelocityInput {
            stop_jump_requested: true,
            ..policy_input(Vec2::new(0.0, -3.0))
        },
        &tuning(),
    );
    assert_eq!(step.vertical_velocity, -3.0);
    assert!(!step.stop_jump_requested);
}

#[test]
fn test_take_off_wins_over_jump_cut() {
    // Both flags on the same tick: the impulse applies, the cut waits
    let step = step_velocity(
        VelocityInput {
            jump_requested: true,
            stop_jump_requested: true,
            ..policy_input(Vec2::ZERO)
        },
        &tuning(),
    );
    assert_eq!(step.vertical_velocity, 10.5);
    assert!(step.stop_jump_requested, "an unconsumed cut request survives");
}

#[test]
fn test_facing_dead_zone() {
    let right = step_velocity(
        VelocityInput {
            move_x: 0.02,
            facing: Facing::Left,
            ..policy_input(Vec2::ZERO)
        },
        &tuning(),
    );
    assert_eq!(right.facing, Facing::Right);

    let left = step_velocity(
        VelocityInput {
            move_x: -0.02,
            ..policy_input(Vec2::ZERO)
        },
        &tuning(),
    );
    assert_eq!(left.facing, Facing::Left);

    let held = step_velocity(
        VelocityInput {
            move_x: 0.005,
            facing: Facing::Left,
            ..policy_input(Vec2::ZERO)
        },
        &tuning(),
    );
    assert_eq!(held.facing, Facing::Left);
}

#[test]
fn test_target_velocity_tracks_move_axis() {
    let step = step_velocity(
        VelocityInput {
            move_x: -1.0,
            ..policy_input(Vec2::ZERO)
        },
        &tuning(),
    );
    assert_eq!(step.target_velocity, Vec2::new(-320.0, 0.0));

    // A zeroed axis (the control-disabled case) targets a standstill
    let step = step_velocity(policy_input(Vec2::new(100.0, 0.0)), &tuning());
    assert_eq!(step.target_velocity, Vec2::ZERO);
}

#[test]
fn test_speed_ratio_is_unclamped() {
    let step = step_velocity(policy_input(Vec2::new(-480.0, 0.0)), &tuning());
    assert_eq!(step.speed_ratio, 1.5);
}
