pub mod attendance;
pub mod color;
pub mod position;
pub mod seat;
