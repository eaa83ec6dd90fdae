pub mod lifetime;
pub mod spawner;

pub use lifetime::{expire_lifetimes, Lifetime};
pub use spawner::{spawn_parent_and_children, spawn_solo, SpawnCue};
