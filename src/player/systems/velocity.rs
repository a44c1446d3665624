//! Player domain: the per-tick velocity policy.
//!
//! `step_velocity` is the pure policy; `compute_velocity` wires it to the
//! physics velocity, the target for the kinematics step, and the
//! presentation hints.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementTuning;
use crate::player::{
    AnimationSignals, ControlEnabled, Facing, GroundContact, JumpIntent, MovementInput, Player,
    TargetVelocity,
};

/// Everything the policy reads for one tick.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VelocityInput {
    pub velocity: Vec2,
    /// Horizontal move axis, already gated by the control flag.
    pub move_x: f32,
    pub jump_requested: bool,
    pub stop_jump_requested: bool,
    pub grounded: bool,
    pub facing: Facing,
}

/// Everything the policy writes for one tick.
#[derive(Debug, Clone, Copy)]
pub(crate) struct VelocityStep {
    pub vertical_velocity: f32,
    pub target_velocity: Vec2,
    pub facing: Facing,
    pub jump_requested: bool,
    pub stop_jump_requested: bool,
    pub speed_ratio: f32,
}

/// The policy, in strict order: take-off impulse, then jump cut, then
/// facing, hints, and the horizontal target.
pub(crate) fn step_velocity(input: VelocityInput, tuning: &MovementTuning) -> VelocityStep {
    let mut vertical = input.velocity.y;
    let mut jump_requested = input.jump_requested;
    let mut stop_jump_requested = input.stop_jump_requested;

    if jump_requested && input.grounded {
        vertical = tuning.jump_take_off_speed * tuning.jump_modifier;
        jump_requested = false;
    } else if stop_jump_requested {
        stop_jump_requested = false;
        // Braking only applies while still ascending
        if vertical > 0.0 {
            vertical *= tuning.jump_deceleration;
        }
    }

    // Dead zone so near-zero analog input cannot flicker the facing
    let facing = if input.move_x > 0.01 {
        Facing::Right
    } else if input.move_x < -0.01 {
        Facing::Left
    } else {
        input.facing
    };

    VelocityStep {
        vertical_velocity: vertical,
        target_velocity: Vec2::new(input.move_x * tuning.max_speed, 0.0),
        facing,
        jump_requested,
        stop_jump_requested,
        speed_ratio: input.velocity.x.abs() / tuning.max_speed,
    }
}

/// Apply the policy. Runs immediately after the state machine, so intent
/// raised in tick N is consumed in tick N.
pub(crate) fn compute_velocity(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut query: Query<
        (
            &mut LinearVelocity,
            &mut TargetVelocity,
            &mut JumpIntent,
            &mut Facing,
            &mut AnimationSignals,
            &GroundContact,
            &ControlEnabled,
        ),
        With<Player>,
    >,
) {
    for (mut velocity, mut target, mut intent, mut facing, mut signals, contact, control) in
        &mut query
    {
        let move_x = if control.0 { input.axis.x } else { 0.0 };

        let step = step_velocity(
            VelocityInput {
                velocity: Vec2::new(velocity.x, velocity.y),
                move_x,
                jump_requested: intent.jump_requested,
                stop_jump_requested: intent.stop_jump_requested,
                grounded: contact.on_ground,
                facing: *facing,
            },
            &tuning,
        );

        velocity.y = step.vertical_velocity;
        target.0 = step.target_velocity;
        intent.jump_requested = step.jump_requested;
        intent.stop_jump_requested = step.stop_jump_requested;
        *facing = step.facing;
        signals.grounded = contact.on_ground;
        signals.speed_ratio = step.speed_ratio;
    }
}
