//! Core domain: kill plane and respawn flow.
//!
//! The respawn controller only touches the control flag, the transform,
//! and the integrator-owned velocity. The jump state machine is left
//! alone and re-converges on its own.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{ControlEnabled, Player, player_bounds};
use crate::world::{KillPlane, SpawnPoint};

const RESPAWN_DELAY: f32 = 0.6;

/// Countdown between falling out and being placed back at the spawn point.
#[derive(Component, Debug)]
pub struct Respawning {
    pub remaining: f32,
}

/// Disable control and start the respawn countdown once the character's
/// bounds drop fully below the kill plane.
pub(crate) fn begin_respawn(
    mut commands: Commands,
    kill_plane: Res<KillPlane>,
    mut query: Query<
        (Entity, &Transform, &Collider, &mut ControlEnabled),
        (With<Player>, Without<Respawning>),
    >,
) {
    for (entity, transform, collider, mut control) in &mut query {
        let bounds = player_bounds(transform, collider);
        if bounds.max.y < kill_plane.0 {
            control.0 = false;
            commands.entity(entity).insert(Respawning {
                remaining: RESPAWN_DELAY,
            });
            info!(
                "Player fell out at y={:.0}, respawning",
                transform.translation.y
            );
        }
    }
}

/// Place the character back at the spawn point and hand control back.
pub(crate) fn finish_respawn(
    mut commands: Commands,
    time: Res<Time>,
    spawn: Res<SpawnPoint>,
    mut query: Query<
        (
            Entity,
            &mut Respawning,
            &mut Transform,
            &mut LinearVelocity,
            &mut ControlEnabled,
        ),
        With<Player>,
    >,
) {
    for (entity, mut respawning, mut transform, mut velocity, mut control) in &mut query {
        respawning.remaining -= time.delta_secs();
        if respawning.remaining > 0.0 {
            continue;
        }

        transform.translation = spawn.0.extend(transform.translation.z);
        velocity.0 = Vec2::ZERO;
        control.0 = true;
        commands.entity(entity).remove::<Respawning>();
    }
}
