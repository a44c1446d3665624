//! Arena: static geometry, spawn point, and the kill plane.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::GameLayer;

/// Where the player spawns and respawns.
#[derive(Resource, Debug)]
pub struct SpawnPoint(pub Vec2);

/// Characters whose bounds drop below this height are respawned.
#[derive(Resource, Debug)]
pub struct KillPlane(pub f32);

/// Marker for walkable colliders.
#[derive(Component, Debug)]
pub struct Ground;

pub struct WorldPlugin;

impl Plugin for WorldPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(SpawnPoint(Vec2::new(0.0, 60.0)))
            .insert_resource(KillPlane(-400.0))
            .add_systems(Startup, spawn_arena);
    }
}

fn spawn_arena(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);

    let static_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);

    // Ground with a gap on the right so the kill plane is reachable
    commands.spawn((
        Ground,
        Sprite {
            color: ground_color,
            custom_size: Some(Vec2::new(700.0, 40.0)),
            ..default()
        },
        Transform::from_xyz(-80.0, -200.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(700.0, 40.0),
        static_layers,
    ));

    // Left wall
    commands.spawn((
        Ground,
        Sprite {
            color: wall_color,
            custom_size: Some(Vec2::new(40.0, 500.0)),
            ..default()
        },
        Transform::from_xyz(-450.0, 50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(40.0, 500.0),
        static_layers,
    ));

    // Platform - left side
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(150.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(-250.0, -50.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(150.0, 20.0),
        static_layers,
    ));

    // Platform - center, higher
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(120.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(0.0, 80.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(120.0, 20.0),
        static_layers,
    ));

    // Landing ledge across the gap
    commands.spawn((
        Ground,
        Sprite {
            color: platform_color,
            custom_size: Some(Vec2::new(160.0, 20.0)),
            ..default()
        },
        Transform::from_xyz(420.0, -160.0, 0.0),
        RigidBody::Static,
        Collider::rectangle(160.0, 20.0),
        static_layers,
    ));
}
