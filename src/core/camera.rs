//! Core domain: camera setup and bounds-following.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{Player, player_bounds};

const FOLLOW_RATE: f32 = 5.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Smoothly track the center of the player's collider bounds.
pub(crate) fn follow_player(
    time: Res<Time>,
    player: Query<(&Transform, &Collider), (With<Player>, Without<Camera2d>)>,
    mut camera: Query<&mut Transform, With<Camera2d>>,
) {
    let Ok((player_transform, collider)) = player.single() else {
        return;
    };
    let Ok(mut camera_transform) = camera.single_mut() else {
        return;
    };

    let target = player_bounds(player_transform, collider).center();
    let t = (time.delta_secs() * FOLLOW_RATE).min(1.0);
    let current = camera_transform.translation.truncate();
    camera_transform.translation = current.lerp(target, t).extend(camera_transform.translation.z);
}
