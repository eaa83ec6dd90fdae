// This file is part of Bird Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::assets::DemoAssetsPlugin;
use crate::core::config::ConfigReportPlugin;
use crate::core::system::system_order::{InputReactSet, PhysicsSyncSet, SceneUpdateSet};
#[cfg(feature = "debug")]
use crate::debug::DebugPlugin;
use crate::gameplay::GameplayPlugin;
use crate::interaction::input::DemoInputPlugin;
use crate::interaction::session::auto_close::AutoClosePlugin;
use crate::interaction::session::RestartPlugin;
use crate::physics::rapier::rapier_physics::PhysicsSetupPlugin;
use crate::rendering::camera::CameraPlugin;
use crate::rendering::ParticlesPlugin;

/// Everything the demo scene needs on top of `DefaultPlugins`. Expects `DemoConfig` to be
/// inserted before it is added.
pub struct DemoPlugin;

impl Plugin for DemoPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                InputReactSet,
                SceneUpdateSet.after(InputReactSet),
                PhysicsSyncSet.after(SceneUpdateSet),
            ),
        )
        .add_plugins((
            ConfigReportPlugin,
            DemoAssetsPlugin,
            CameraPlugin,
            PhysicsSetupPlugin,
            DemoInputPlugin,
            RestartPlugin,
            GameplayPlugin,
            ParticlesPlugin,
            AutoClosePlugin,
            #[cfg(feature = "debug")]
            DebugPlugin,
        ));
    }
}
