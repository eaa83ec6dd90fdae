use bevy::prelude::*;

use super::bindings::ControlBindings;
use super::snapshot::InputSnapshot;
use crate::core::assets::DemoAssets;
use crate::core::config::DemoConfig;
use crate::gameplay::scene::SceneState;
use crate::gameplay::spawn::{spawn_parent_and_children, spawn_solo};
use crate::interaction::session::restart::RestartScene;
use crate::physics::gravity::Gravity;

/// Dispatch this frame's edges, then consume them.
///
/// Left and right spawns are exclusive within a frame (left wins). The gravity key acts on
/// its press and release edges only, so repeated presses or releases change nothing, and
/// gravity points down whenever the key ends the frame released.
#[allow(clippy::too_many_arguments)]
pub fn react_to_input(
    mut commands: Commands,
    mut snapshot: ResMut<InputSnapshot>,
    bindings: Res<ControlBindings>,
    assets: Option<Res<DemoAssets>>,
    cfg: Res<DemoConfig>,
    mut state: ResMut<SceneState>,
    mut gravity: ResMut<Gravity>,
    mut restart: EventWriter<RestartScene>,
) {
    let pointer = snapshot.pointer;

    match assets.as_deref() {
        Some(assets) => {
            if snapshot.just_pressed(bindings.spawn_solo) {
                spawn_solo(&mut commands, assets, &cfg, pointer);
            } else if snapshot.just_pressed(bindings.spawn_family) {
                spawn_parent_and_children(&mut commands, assets, &cfg, pointer);
            }
        }
        None => {
            if snapshot.just_pressed(bindings.spawn_solo)
                || snapshot.just_pressed(bindings.spawn_family)
            {
                warn!(target: "spawn", "spawn ignored: demo assets not loaded");
            }
        }
    }

    // A tap inside one frame carries both edges; the release wins unless the key is held again.
    let flip = bindings.flip_gravity;
    if snapshot.just_pressed(flip) {
        gravity.invert();
        state.gravity_override_active = true;
        debug!(target: "input", gravity = ?gravity.vector, "gravity inverted");
    }
    if snapshot.just_released(flip) && !snapshot.pressed(flip) {
        gravity.restore();
        state.gravity_override_active = false;
        debug!(target: "input", gravity = ?gravity.vector, "gravity restored");
    }

    if snapshot.just_released(bindings.cycle_debug_draw) {
        state.debug_draw = state.debug_draw.next();
        info!(target: "physics", mode = ?state.debug_draw, "debug draw");
    }

    if snapshot.just_released(bindings.restart) {
        restart.write(RestartScene);
    }

    snapshot.clear_for_next_frame();
}
