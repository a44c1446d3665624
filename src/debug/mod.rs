//! Debug overlay for the movement controller (dev-tools builds).
//!
//! F1 or backtick toggles a live readout of the jump state, velocity, and
//! contact/control flags.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::player::{ControlEnabled, GroundContact, JumpState, Player, TargetVelocity};

/// Resource tracking overlay visibility.
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    pub show_info: bool,
}

/// Marker for the overlay text node.
#[derive(Component, Debug)]
pub struct DebugInfoOverlay;

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(Update, (toggle_overlay, update_overlay).chain());
    }
}

/// Toggle the overlay with F1 or backtick.
fn toggle_overlay(
    mut commands: Commands,
    keyboard: Res<ButtonInput<KeyCode>>,
    mut state: ResMut<DebugState>,
    existing: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !(keyboard.just_pressed(KeyCode::F1) || keyboard.just_pressed(KeyCode::Backquote)) {
        return;
    }

    state.show_info = !state.show_info;
    info!(
        "[DEBUG] Overlay {}",
        if state.show_info { "ON" } else { "OFF" }
    );

    if state.show_info {
        spawn_overlay(&mut commands);
    } else {
        for entity in &existing {
            commands.entity(entity).despawn();
        }
    }
}

/// Refresh the overlay with current controller state.
fn update_overlay(
    state: Res<DebugState>,
    player: Query<
        (
            &JumpState,
            &GroundContact,
            &ControlEnabled,
            &LinearVelocity,
            &TargetVelocity,
        ),
        With<Player>,
    >,
    mut overlay: Query<&mut Text, With<DebugInfoOverlay>>,
) {
    if !state.show_info {
        return;
    }

    if let (Ok((jump_state, contact, control, velocity, target)), Ok(mut text)) =
        (player.single(), overlay.single_mut())
    {
        **text = format!(
            "Jump: {:?}\nVel: ({:.0}, {:.0})\nTarget vx: {:.0}\nGrounded: {}\nControl: {}",
            jump_state, velocity.x, velocity.y, target.0.x, contact.on_ground, control.0
        );
    }
}

fn spawn_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
