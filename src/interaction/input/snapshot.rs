//! Per-frame input snapshot: pointer position plus press/release edges for the bound
//! tokens. Collected once in `PreUpdate`, read by the reactor, then cleared so an edge
//! fires exactly once.
use std::collections::HashSet;

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use super::bindings::{ControlBindings, InputToken};
use crate::core::components::MainCamera;

#[derive(Resource, Debug, Default, Clone)]
pub struct InputSnapshot {
    /// Last known pointer position in world space.
    pub pointer: Vec2,
    pub held: HashSet<InputToken>,
    pub just_pressed: HashSet<InputToken>,
    pub just_released: HashSet<InputToken>,
    pub frame: u64,
}

impl InputSnapshot {
    pub fn pressed(&self, token: InputToken) -> bool {
        self.held.contains(&token)
    }
    pub fn just_pressed(&self, token: InputToken) -> bool {
        self.just_pressed.contains(&token)
    }
    pub fn just_released(&self, token: InputToken) -> bool {
        self.just_released.contains(&token)
    }
    /// Drop this frame's edges; held state and pointer carry over.
    pub fn clear_for_next_frame(&mut self) {
        self.just_pressed.clear();
        self.just_released.clear();
    }
    pub fn press(&mut self, token: InputToken) {
        if self.held.insert(token) {
            self.just_pressed.insert(token);
        }
    }
    pub fn release(&mut self, token: InputToken) {
        if self.held.remove(&token) {
            self.just_released.insert(token);
        }
    }
}

pub fn collect_input_snapshot(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    bindings: Res<ControlBindings>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform), With<MainCamera>>,
    mut snapshot: ResMut<InputSnapshot>,
) {
    snapshot.frame += 1;
    for token in bindings.tokens() {
        let (held, pressed, released) = match token {
            InputToken::Key(k) => (
                keyboard.pressed(k),
                keyboard.just_pressed(k),
                keyboard.just_released(k),
            ),
            InputToken::Mouse(b) => (
                mouse_buttons.pressed(b),
                mouse_buttons.just_pressed(b),
                mouse_buttons.just_released(b),
            ),
        };
        if held {
            snapshot.held.insert(token);
        } else {
            snapshot.held.remove(&token);
        }
        if pressed {
            snapshot.just_pressed.insert(token);
        }
        if released {
            snapshot.just_released.insert(token);
        }
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };
    match camera.viewport_to_world_2d(camera_transform, cursor) {
        Ok(world) => snapshot.pointer = world,
        Err(e) => trace!(target: "input", "viewport->world conversion failed: {e:?}"),
    }
}
