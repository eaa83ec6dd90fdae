pub mod effects;
pub mod scene;
pub mod spawn;

use bevy::prelude::*;

use crate::core::system::system_order::SceneUpdateSet;
use effects::advance_effect_tracks;
use scene::{setup_scene, SceneGeneration, SceneState};
use spawn::expire_lifetimes;

/// Scene construction plus the per-frame timed effects and lifetime expiry.
pub struct GameplayPlugin;

impl Plugin for GameplayPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<SceneState>()
            .init_resource::<SceneGeneration>()
            .add_systems(Startup, setup_scene)
            .add_systems(
                Update,
                (advance_effect_tracks, expire_lifetimes).in_set(SceneUpdateSet),
            );
    }
}
