pub mod debug_draw;
pub mod gravity;
pub mod rapier;
