//! Player domain: jump lifecycle notifications.

use bevy::ecs::message::Message;
use bevy::prelude::*;

/// Queued once per flight, when ground contact is first lost after take-off.
#[derive(Debug)]
pub struct JumpedEvent {
    pub player: Entity,
}

impl Message for JumpedEvent {}

/// Queued once per flight, when ground contact returns.
#[derive(Debug)]
pub struct LandedEvent {
    pub player: Entity,
}

impl Message for LandedEvent {}
