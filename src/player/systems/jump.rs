//! Player domain: the jump state machine.
//!
//! `advance` is the pure per-tick step; `update_jump_state` wires it to the
//! ECS, maintains the intent flags, and queues the jump/land notifications.

use bevy::ecs::message::MessageWriter;
use bevy::prelude::*;

use crate::player::events::{JumpedEvent, LandedEvent};
use crate::player::{ControlEnabled, GroundContact, JumpIntent, JumpState, MovementInput, Player};

/// Edge effect produced by a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum JumpEffect {
    Jumped,
    Landed,
}

/// Outcome of one state-machine tick.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct JumpStep {
    pub next: JumpState,
    /// True only on the `PrepareToJump -> Jumping` tick.
    pub jump_requested: bool,
    pub effect: Option<JumpEffect>,
}

impl JumpStep {
    fn stay(state: JumpState) -> Self {
        Self {
            next: state,
            jump_requested: false,
            effect: None,
        }
    }
}

/// Advance the jump lifecycle by one tick.
///
/// `PrepareToJump` separates the take-off impulse from the airborne
/// notification: the impulse fires on the next tick while contact still
/// holds, and `Jumped` only once contact is actually lost, so collider
/// jitter cannot fake a flight. `Landed` is a one-tick transit state, which
/// pins the landing notification to exactly once per flight. A jump press
/// in any state but `Grounded` is silently dropped.
pub(crate) fn advance(state: JumpState, grounded: bool, jump_pressed: bool) -> JumpStep {
    match state {
        JumpState::Grounded if grounded && jump_pressed => JumpStep {
            next: JumpState::PrepareToJump,
            jump_requested: false,
            effect: None,
        },
        JumpState::Grounded => JumpStep::stay(JumpState::Grounded),
        JumpState::PrepareToJump => JumpStep {
            next: JumpState::Jumping,
            jump_requested: true,
            effect: None,
        },
        JumpState::Jumping if !grounded => JumpStep {
            next: JumpState::InFlight,
            jump_requested: false,
            effect: Some(JumpEffect::Jumped),
        },
        JumpState::Jumping => JumpStep::stay(JumpState::Jumping),
        JumpState::InFlight if grounded => JumpStep {
            next: JumpState::Landed,
            jump_requested: false,
            effect: Some(JumpEffect::Landed),
        },
        JumpState::InFlight => JumpStep::stay(JumpState::InFlight),
        JumpState::Landed => JumpStep {
            next: JumpState::Grounded,
            jump_requested: false,
            effect: None,
        },
    }
}

/// Run the state machine once per tick, after input sampling and before the
/// velocity policy.
pub(crate) fn update_jump_state(
    input: Res<MovementInput>,
    mut jumped: MessageWriter<JumpedEvent>,
    mut landed: MessageWriter<LandedEvent>,
    mut query: Query<
        (
            Entity,
            &mut JumpState,
            &mut JumpIntent,
            &GroundContact,
            &ControlEnabled,
        ),
        With<Player>,
    >,
) {
    for (entity, mut state, mut intent, contact, control) in &mut query {
        // Input edges are dropped while control is off; the machine itself
        // keeps running so an airborne jump completes normally.
        let jump_pressed = input.jump_just_pressed && control.0;
        if input.jump_released && control.0 {
            intent.stop_jump_requested = true;
        }

        intent.jump_requested = false;
        let step = advance(*state, contact.on_ground, jump_pressed);

        if step.next != *state {
            debug!("Jump state: {:?} -> {:?}", *state, step.next);
        }

        *state = step.next;
        intent.jump_requested = step.jump_requested;
        if step.jump_requested {
            // Take-off supersedes any stale shortened-jump request.
            intent.stop_jump_requested = false;
        }

        match step.effect {
            Some(JumpEffect::Jumped) => {
                jumped.write(JumpedEvent { player: entity });
            }
            Some(JumpEffect::Landed) => {
                landed.write(LandedEvent { player: entity });
            }
            None => {}
        }
    }
}
