pub mod app;
pub mod audio;
pub mod core;
pub mod debug;
pub mod gameplay;
pub mod interaction;
pub mod physics;
pub mod rendering;

// Curated re-exports
pub use crate::app::demo::DemoPlugin;
pub use crate::core::config::{DemoConfig, WindowConfig};
pub use crate::gameplay::scene::{SceneBuildError, SceneState};
pub use crate::physics::debug_draw::DebugDrawMode;
