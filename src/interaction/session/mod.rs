pub mod auto_close;
pub mod restart;

use bevy::prelude::*;

use crate::core::system::system_order::InputReactSet;
use crate::interaction::input::reactor::react_to_input;
use restart::{handle_restart, restart_button_pressed, RestartScene};

/// Restart requests from the key binding or the on-screen button.
pub struct RestartPlugin;

impl Plugin for RestartPlugin {
    fn build(&self, app: &mut App) {
        app.add_event::<RestartScene>().add_systems(
            Update,
            (
                restart_button_pressed,
                handle_restart
                    .after(restart_button_pressed)
                    .after(react_to_input),
            )
                .in_set(InputReactSet),
        );
    }
}
