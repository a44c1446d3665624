//! Config domain: movement tuning loaded from RON at startup.

mod loader;
#[cfg(test)]
mod tests;
mod validation;

pub use loader::TuningLoadError;
pub use validation::ValidationError;

use bevy::prelude::*;
use serde::Deserialize;
use std::path::Path;

use crate::config::loader::load_tuning;
use crate::config::validation::validate_tuning;

/// Tunables for the movement controller and the kinematics step.
/// Installed once at startup and read-only afterwards.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct MovementTuning {
    pub max_speed: f32,
    pub jump_take_off_speed: f32,
    /// Scales the take-off speed at the moment of the impulse.
    pub jump_modifier: f32,
    /// Scales residual upward velocity when a jump is cut short.
    /// Values in (0, 1) shorten the arc; out-of-range values are accepted
    /// but change the semantics.
    pub jump_deceleration: f32,
    pub accel: f32,
    pub decel: f32,
    pub gravity: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            max_speed: 320.0,
            jump_take_off_speed: 450.0,
            jump_modifier: 1.5,
            jump_deceleration: 0.5,
            accel: 3000.0,
            decel: 2600.0,
            gravity: 1800.0,
        }
    }
}

pub struct ConfigPlugin;

impl Plugin for ConfigPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .add_systems(Startup, install_tuning);
    }
}

/// Load and validate `assets/data/movement.ron`, keeping the compiled
/// defaults when the file is missing, malformed, or rejected.
fn install_tuning(mut tuning: ResMut<MovementTuning>) {
    let path = Path::new("assets/data/movement.ron");

    let loaded = match load_tuning(path) {
        Ok(loaded) => loaded,
        Err(e) => {
            warn!("{}; using default movement tuning", e);
            return;
        }
    };

    let errors = validate_tuning(&loaded);
    if !errors.is_empty() {
        for error in &errors {
            error!("{}", error);
        }
        error!(
            "Rejecting {}; using default movement tuning",
            path.display()
        );
        return;
    }

    if loaded.jump_deceleration <= 0.0 || loaded.jump_deceleration >= 1.0 {
        warn!(
            "jump_deceleration {} is outside (0, 1); releasing jump will no longer shorten the arc as intended",
            loaded.jump_deceleration
        );
    }

    info!("Movement tuning loaded from {}", path.display());
    *tuning = loaded;
}
