//! Sprites domain: presentation sinks for the movement controller.
//!
//! One-way consumers of controller output: facing flip, animation state
//! selection, and procedural jump/land pulses. Nothing here writes back
//! into controller state.

mod animation;
mod cues;

#[cfg(test)]
mod tests;

pub use animation::{AnimationController, AnimationState};

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::player::Player;
use crate::sprites::animation::{apply_facing, update_animation_state};
use crate::sprites::cues::{ScalePulse, play_pulses, trigger_cues};

/// Marker for the child entity carrying the player's sprite. Pulses scale
/// this child, not the body, so the collider is never distorted.
#[derive(Component, Debug)]
pub struct CharacterVisual;

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                attach_visual,
                update_animation_state,
                apply_facing,
                trigger_cues,
                play_pulses,
            )
                .chain()
                .in_set(SimulationSet::Present),
        );
    }
}

/// Give newly spawned players their visual child and animation bookkeeping.
fn attach_visual(
    mut commands: Commands,
    players: Query<Entity, (With<Player>, Without<AnimationController>)>,
) {
    for entity in &players {
        commands
            .entity(entity)
            .insert(AnimationController::default())
            .with_children(|parent| {
                parent.spawn((
                    CharacterVisual,
                    ScalePulse::default(),
                    Sprite {
                        color: Color::srgb(0.9, 0.9, 0.9),
                        custom_size: Some(Vec2::new(24.0, 48.0)),
                        ..default()
                    },
                    Transform::default(),
                ));
            });
    }
}
