//! Player domain: the per-tick movement controller.
//!
//! The jump state machine and the velocity policy are the core; input
//! sampling and the ground probe feed them, and everything downstream
//! (kinematics, sprites, camera) only reads what they publish.

mod components;
mod events;
mod resources;
mod systems;

#[cfg(test)]
mod tests;

pub use components::{
    AnimationSignals, ControlEnabled, Facing, GameLayer, GroundContact, JumpIntent, JumpState,
    Player, TargetVelocity, player_bounds,
};
pub use events::{JumpedEvent, LandedEvent};
pub use resources::MovementInput;

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::player::systems::{compute_velocity, detect_ground, read_input, update_jump_state};
use crate::world::SpawnPoint;

pub struct PlayerPlugin;

impl Plugin for PlayerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementInput>()
            .add_message::<JumpedEvent>()
            .add_message::<LandedEvent>()
            .add_systems(Startup, spawn_player)
            .add_systems(Update, read_input.in_set(SimulationSet::Sample))
            .add_systems(
                Update,
                (detect_ground, update_jump_state, compute_velocity)
                    .chain()
                    .in_set(SimulationSet::Controller),
            );
    }
}

/// Spawn the player character at the arena spawn point. The visual is
/// attached separately by the sprites plugin.
fn spawn_player(mut commands: Commands, spawn: Res<SpawnPoint>) {
    commands.spawn((
        (
            Player,
            JumpState::default(),
            JumpIntent::default(),
            GroundContact::default(),
            ControlEnabled::default(),
            Facing::default(),
            AnimationSignals::default(),
            TargetVelocity::default(),
        ),
        Transform::from_translation(spawn.0.extend(0.0)),
        (
            RigidBody::Dynamic,
            Collider::rectangle(24.0, 48.0),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            GravityScale(0.0), // gravity is applied by the kinematics step
            Friction::new(0.0),
            CollisionLayers::new(GameLayer::Player, [GameLayer::Ground]),
        ),
    ));
}
