//! Kinematic integration: gravity and target-velocity smoothing.
//!
//! The controller only publishes a horizontal target; this module owns how
//! the actual velocity approaches it, and owns gravity (the player body
//! runs with `GravityScale(0.0)`).

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::config::MovementTuning;
use crate::core::SimulationSet;
use crate::player::{Player, TargetVelocity};

pub struct KinematicsPlugin;

impl Plugin for KinematicsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (apply_gravity, approach_target_velocity)
                .chain()
                .in_set(SimulationSet::Integrate),
        );
    }
}

pub(crate) fn apply_gravity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<&mut LinearVelocity, With<Player>>,
) {
    let dt = time.delta_secs();

    for mut velocity in &mut query {
        velocity.y -= tuning.gravity * dt;
    }
}

/// Accelerate or brake `velocity.x` toward the controller's target.
pub(crate) fn approach_target_velocity(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut query: Query<(&TargetVelocity, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();

    for (target, mut velocity) in &mut query {
        let target_vx = target.0.x;

        if target_vx.abs() > f32::EPSILON {
            // Accelerate toward target
            let accel = tuning.accel * dt;
            if velocity.x < target_vx {
                velocity.x = (velocity.x + accel).min(target_vx);
            } else {
                velocity.x = (velocity.x - accel).max(target_vx);
            }
        } else {
            // Decelerate to zero
            let decel = tuning.decel * dt;
            if velocity.x > 0.0 {
                velocity.x = (velocity.x - decel).max(0.0);
            } else {
                velocity.x = (velocity.x + decel).min(0.0);
            }
        }
    }
}
