//! Player domain: controller systems, in tick order.

pub(crate) mod ground;
pub(crate) mod input;
pub(crate) mod jump;
pub(crate) mod velocity;

pub(crate) use ground::detect_ground;
pub(crate) use input::read_input;
pub(crate) use jump::update_jump_state;
pub(crate) use velocity::compute_velocity;
