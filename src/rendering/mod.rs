pub mod camera;
pub mod particles;
pub mod textures;

use bevy::prelude::*;

use crate::core::system::system_order::SceneUpdateSet;
use particles::{emit_particles, follow_pointer, update_particles};

/// Pointer emitter systems. The emitter entity itself is part of the scene.
pub struct ParticlesPlugin;

impl Plugin for ParticlesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (follow_pointer, emit_particles, update_particles)
                .chain()
                .in_set(SceneUpdateSet),
        );
    }
}
