use bevy::prelude::*;

use crate::core::assets::DemoAssets;
use crate::core::components::{RestartButton, SceneEntity};
use crate::core::config::DemoConfig;
use crate::gameplay::scene::{build_scene, SceneGeneration, SceneState};
use crate::physics::gravity::Gravity;

/// Request to throw the whole scene away and build it again.
#[derive(Event, Debug, Clone, Copy, Default)]
pub struct RestartScene;

pub fn restart_button_pressed(
    q_button: Query<&Interaction, (Changed<Interaction>, With<RestartButton>)>,
    mut restart: EventWriter<RestartScene>,
) {
    for interaction in &q_button {
        if *interaction == Interaction::Pressed {
            restart.write(RestartScene);
        }
    }
}

/// Despawn every scene root and rebuild. Teardown and rebuild are queued together, so both
/// land at the same sync point. Several requests in one frame collapse into one restart.
#[allow(clippy::too_many_arguments)]
pub fn handle_restart(
    mut commands: Commands,
    mut requests: EventReader<RestartScene>,
    q_roots: Query<Entity, With<SceneEntity>>,
    mut state: ResMut<SceneState>,
    mut gravity: ResMut<Gravity>,
    mut generation: ResMut<SceneGeneration>,
    assets: Option<Res<DemoAssets>>,
    cfg: Res<DemoConfig>,
) -> Result {
    if requests.is_empty() {
        return Ok(());
    }
    requests.clear();

    let mut removed = 0usize;
    for entity in &q_roots {
        commands.entity(entity).despawn();
        removed += 1;
    }
    *state = SceneState::default();
    *gravity = Gravity::new(cfg.physics.gravity);
    generation.0 += 1;
    info!(target: "scene", generation = generation.0, removed, "restarting scene");
    build_scene(&mut commands, assets.as_deref(), &cfg)?;
    Ok(())
}
