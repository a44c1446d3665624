//! Validation for movement tuning values.

use super::MovementTuning;

/// A tuning value the controller cannot run with.
#[derive(Debug)]
pub struct ValidationError {
    pub field: &'static str,
    pub value: f32,
    pub requirement: &'static str,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "movement tuning field '{}' is {} but must be {}",
            self.field, self.value, self.requirement
        )
    }
}

/// Check the invariants the controller relies on. `max_speed` divides the
/// normalized speed hint every tick, so non-positive values are rejected
/// here instead of guarded at each use.
pub fn validate_tuning(tuning: &MovementTuning) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if tuning.max_speed <= 0.0 {
        errors.push(ValidationError {
            field: "max_speed",
            value: tuning.max_speed,
            requirement: "positive",
        });
    }

    if tuning.jump_take_off_speed <= 0.0 {
        errors.push(ValidationError {
            field: "jump_take_off_speed",
            value: tuning.jump_take_off_speed,
            requirement: "positive",
        });
    }

    errors
}
