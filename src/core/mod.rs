//! Core domain: tick ordering, camera, and the respawn controller.

mod camera;
mod respawn;

pub use respawn::Respawning;

use bevy::prelude::*;

use crate::core::camera::{follow_player, setup_camera};
use crate::core::respawn::{begin_respawn, finish_respawn};

/// Per-tick phases. Chained so the controller always runs between input
/// sampling and integration, and presentation only sees finished state.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Sample,
    Controller,
    Integrate,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                SimulationSet::Sample,
                SimulationSet::Controller,
                SimulationSet::Integrate,
                SimulationSet::Present,
            )
                .chain(),
        )
        .add_systems(Startup, setup_camera)
        .add_systems(
            Update,
            (begin_respawn, finish_respawn)
                .chain()
                .in_set(SimulationSet::Sample),
        )
        .add_systems(Update, follow_player.in_set(SimulationSet::Present));
    }
}
