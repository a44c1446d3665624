//! Procedural jump/land cues.
//!
//! Consumes the queued controller notifications and plays a short
//! squash/stretch pulse on the visual child. Fire-and-forget: a missing
//! target entity drops the cue.

use bevy::ecs::message::MessageReader;
use bevy::prelude::*;

use crate::player::{JumpedEvent, LandedEvent, Player};
use crate::sprites::CharacterVisual;

const PULSE_TIME: f32 = 0.12;
const STRETCH: Vec2 = Vec2::new(0.8, 1.2);
const SQUASH: Vec2 = Vec2::new(1.2, 0.8);

/// A scale pulse easing back to identity.
#[derive(Component, Debug, Default)]
pub(crate) struct ScalePulse {
    pub remaining: f32,
    pub from: Vec2,
}

pub(crate) fn trigger_cues(
    mut jumped: MessageReader<JumpedEvent>,
    mut landed: MessageReader<LandedEvent>,
    players: Query<&Children, With<Player>>,
    mut pulses: Query<&mut ScalePulse, With<CharacterVisual>>,
) {
    for event in jumped.read() {
        if let Ok(children) = players.get(event.player) {
            start_pulse(children, &mut pulses, STRETCH);
        }
    }

    for event in landed.read() {
        if let Ok(children) = players.get(event.player) {
            start_pulse(children, &mut pulses, SQUASH);
        }
    }
}

fn start_pulse(
    children: &Children,
    pulses: &mut Query<&mut ScalePulse, With<CharacterVisual>>,
    from: Vec2,
) {
    for child in children.iter() {
        if let Ok(mut pulse) = pulses.get_mut(child) {
            pulse.remaining = PULSE_TIME;
            pulse.from = from;
        }
    }
}

pub(crate) fn play_pulses(
    time: Res<Time>,
    mut query: Query<(&mut ScalePulse, &mut Transform), With<CharacterVisual>>,
) {
    for (mut pulse, mut transform) in &mut query {
        if pulse.remaining <= 0.0 {
            transform.scale = Vec3::ONE;
            continue;
        }

        pulse.remaining -= time.delta_secs();
        let progress = 1.0 - (pulse.remaining / PULSE_TIME).clamp(0.0, 1.0);
        transform.scale = pulse.from.lerp(Vec2::ONE, progress).extend(1.0);
    }
}
