//! Player domain: per-tick input snapshot.

use bevy::prelude::*;

/// Raw input sampled once per tick. The control gate is applied where the
/// values are consumed, not here.
#[derive(Resource, Debug, Default)]
pub struct MovementInput {
    /// Horizontal axis in [-1, 1]; y is unused by the controller.
    pub axis: Vec2,
    /// True only on the tick the jump button went down.
    pub jump_just_pressed: bool,
    /// True only on the tick the jump button was released.
    pub jump_released: bool,
}
