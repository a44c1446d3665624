//! Player domain: controller components and physics layers.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Walkable surfaces (floors, platforms, walls)
    Ground,
    /// Player character
    Player,
}

#[derive(Component, Debug)]
pub struct Player;

/// Jump lifecycle. Exactly one value live per player; advanced only by the
/// state-machine step, once per tick.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JumpState {
    #[default]
    Grounded,
    PrepareToJump,
    Jumping,
    InFlight,
    Landed,
}

/// One-tick instructions handed from the state machine to the velocity
/// policy.
#[derive(Component, Debug, Default)]
pub struct JumpIntent {
    /// True only on the tick of the `PrepareToJump -> Jumping` transition.
    pub jump_requested: bool,
    /// Set on the jump release edge; cleared once the policy consumes it.
    pub stop_jump_requested: bool,
}

/// Horizontal velocity target the kinematics step smooths toward.
#[derive(Component, Debug, Default)]
pub struct TargetVelocity(pub Vec2);

/// External controllers (respawn, cutscenes) toggle this. While off,
/// horizontal input reads as zero and jump edges are dropped, but the state
/// machine and velocity policy keep running.
#[derive(Component, Debug)]
pub struct ControlEnabled(pub bool);

impl Default for ControlEnabled {
    fn default() -> Self {
        Self(true)
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

/// Ground contact as reported by the integrator probe.
#[derive(Component, Debug, Default)]
pub struct GroundContact {
    pub on_ground: bool,
}

/// Per-tick hints for the presentation layer. `speed_ratio` is
/// `|velocity.x| / max_speed`, deliberately unclamped so external pushes
/// past max speed show through.
#[derive(Component, Debug, Default)]
pub struct AnimationSignals {
    pub grounded: bool,
    pub speed_ratio: f32,
}

/// Character extent derived from the collider, for camera and trigger
/// systems.
pub fn player_bounds(transform: &Transform, collider: &Collider) -> Rect {
    let half = match collider.shape_scaled().as_cuboid() {
        Some(c) => Vec2::new(c.half_extents.x, c.half_extents.y),
        None => Vec2::new(12.0, 24.0),
    };
    Rect::from_center_half_size(transform.translation.truncate(), half)
}
