//! Sprites domain: unit tests for animation state selection.

use super::animation::{AnimationController, AnimationState, select_state};

#[test]
fn test_grounded_states_split_on_run_threshold() {
    assert_eq!(select_state(true, 0.0, 0.0), AnimationState::Idle);
    assert_eq!(select_state(true, 0.03, 0.0), AnimationState::Idle);
    assert_eq!(select_state(true, 0.5, 0.0), AnimationState::Run);
}

#[test]
fn test_airborne_states_split_on_vertical_velocity() {
    assert_eq!(select_state(false, 0.0, 200.0), AnimationState::Jump);
    assert_eq!(select_state(false, 0.0, -200.0), AnimationState::Fall);
    // The apex tick reads as falling
    assert_eq!(select_state(false, 0.0, 0.0), AnimationState::Fall);
}

#[test]
fn test_controller_records_previous_state() {
    let mut controller = AnimationController::default();
    controller.set_state(AnimationState::Run);
    assert_eq!(controller.state, AnimationState::Run);
    assert_eq!(controller.previous_state, AnimationState::Idle);

    // Re-setting the same state is not a transition
    controller.set_state(AnimationState::Run);
    assert_eq!(controller.previous_state, AnimationState::Idle);

    controller.set_state(AnimationState::Jump);
    assert_eq!(controller.previous_state, AnimationState::Run);
}
