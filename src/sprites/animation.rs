//! Animation state selection from controller hints.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{AnimationSignals, Facing, Player};
use crate::sprites::CharacterVisual;

/// Normalized speed below which the character reads as standing still.
const RUN_THRESHOLD: f32 = 0.05;

/// Animation states for the character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnimationState {
    #[default]
    Idle,
    Run,
    Jump,
    Fall,
}

/// Current and previous animation state, for transition detection.
#[derive(Component, Debug, Default)]
pub struct AnimationController {
    pub state: AnimationState,
    pub previous_state: AnimationState,
}

impl AnimationController {
    /// Set the state, remembering the previous one when it changes.
    pub fn set_state(&mut self, state: AnimationState) {
        if self.state != state {
            self.previous_state = self.state;
            self.state = state;
        }
    }
}

/// Map the controller's hints to an animation state. `speed_ratio` is
/// normalized to max speed, so the run threshold is scale-independent.
pub(crate) fn select_state(
    grounded: bool,
    speed_ratio: f32,
    vertical_velocity: f32,
) -> AnimationState {
    if grounded {
        if speed_ratio > RUN_THRESHOLD {
            AnimationState::Run
        } else {
            AnimationState::Idle
        }
    } else if vertical_velocity > 0.0 {
        AnimationState::Jump
    } else {
        AnimationState::Fall
    }
}

pub(crate) fn update_animation_state(
    mut query: Query<(&AnimationSignals, &LinearVelocity, &mut AnimationController), With<Player>>,
) {
    for (signals, velocity, mut controller) in &mut query {
        controller.set_state(select_state(signals.grounded, signals.speed_ratio, velocity.y));
    }
}

/// Mirror the sprite to match the controller's facing.
pub(crate) fn apply_facing(
    players: Query<(&Facing, &Children), With<Player>>,
    mut visuals: Query<&mut Sprite, With<CharacterVisual>>,
) {
    for (facing, children) in &players {
        for child in children.iter() {
            if let Ok(mut sprite) = visuals.get_mut(child) {
                sprite.flip_x = *facing == Facing::Left;
            }
        }
    }
}
