use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use bevy_rapier2d::render::RapierDebugRenderPlugin;

use crate::core::config::DemoConfig;
use crate::core::system::system_order::PhysicsSyncSet;
use crate::physics::debug_draw::apply_debug_draw_mask;
use crate::physics::gravity::{sync_rapier_gravity, Gravity};

/// Scene-side physics state: gravity and the debug-draw mirror. Works without Rapier
/// installed (headless tests), the sync systems simply find nothing to update.
pub struct PhysicsStatePlugin;

impl Plugin for PhysicsStatePlugin {
    fn build(&self, app: &mut App) {
        let magnitude = app
            .world()
            .get_resource::<DemoConfig>()
            .map(|c| c.physics.gravity)
            .unwrap_or(Gravity::default().magnitude);
        app.insert_resource(Gravity::new(magnitude)).add_systems(
            Update,
            (sync_rapier_gravity, apply_debug_draw_mask).in_set(PhysicsSyncSet),
        );
    }
}

/// Our wrapper to configure Rapier: simulation plus a debug renderer that starts hidden.
pub struct PhysicsSetupPlugin;

impl Plugin for PhysicsSetupPlugin {
    fn build(&self, app: &mut App) {
        let ppm = app
            .world()
            .get_resource::<DemoConfig>()
            .map(|c| c.physics.pixels_per_meter)
            .unwrap_or(10.0);
        app.add_plugins((
            RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(ppm),
            RapierDebugRenderPlugin {
                enabled: false,
                ..default()
            },
        ))
        .add_plugins(PhysicsStatePlugin)
        .add_systems(PostStartup, log_rapier_contexts);
    }
}

fn log_rapier_contexts(q_cfg: Query<&RapierConfiguration>, gravity: Res<Gravity>) {
    let contexts = q_cfg.iter().count();
    info!(target: "physics", contexts, gravity = ?gravity.vector, "Rapier ready");
}
