pub mod bindings;
pub mod reactor;
pub mod snapshot;

use bevy::prelude::*;

use crate::core::config::DemoConfig;
use crate::core::system::system_order::{InputCollectSet, InputReactSet};
use bindings::ControlBindings;
use reactor::react_to_input;
use snapshot::{collect_input_snapshot, InputSnapshot};

pub struct DemoInputPlugin;

impl Plugin for DemoInputPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputSnapshot>()
            .init_resource::<ControlBindings>()
            .configure_sets(PreUpdate, InputCollectSet)
            .add_systems(PreStartup, load_control_bindings)
            .add_systems(PreUpdate, collect_input_snapshot.in_set(InputCollectSet))
            .add_systems(Update, react_to_input.in_set(InputReactSet));
    }
}

fn load_control_bindings(mut commands: Commands, cfg: Option<Res<DemoConfig>>) {
    let Some(cfg) = cfg else {
        return;
    };
    let (bindings, errors) = ControlBindings::from_config(&cfg.controls);
    for e in &errors {
        error!(target: "input", "CONTROLS ERROR: {e}");
    }
    if errors.is_empty() {
        info!(target: "input", ?bindings, "controls loaded");
    }
    commands.insert_resource(bindings);
}
