//! Debug module: periodic frame / population stats in the log.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::{DebugLogTimer, DebugStats};

#[cfg(feature = "debug")]
use crate::core::system::system_order::SceneUpdateSet;
#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use stats::{debug_logging_system, debug_stats_collect_system};

        app.init_resource::<DebugStats>()
            .init_resource::<DebugLogTimer>()
            .add_systems(
                Update,
                (debug_stats_collect_system, debug_logging_system)
                    .chain()
                    .after(SceneUpdateSet),
            );
    }
}
