use bevy::prelude::*;

use crate::core::config::ControlsConfig;

/// A single physical input the demo can react to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputToken {
    Key(KeyCode),
    Mouse(MouseButton),
}

/// Demo actions resolved from `ControlsConfig`.
#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct ControlBindings {
    pub spawn_solo: InputToken,
    pub spawn_family: InputToken,
    pub flip_gravity: InputToken,
    pub cycle_debug_draw: InputToken,
    pub restart: InputToken,
}

impl Default for ControlBindings {
    fn default() -> Self {
        Self {
            spawn_solo: InputToken::Mouse(MouseButton::Left),
            spawn_family: InputToken::Mouse(MouseButton::Right),
            flip_gravity: InputToken::Key(KeyCode::KeyG),
            cycle_debug_draw: InputToken::Key(KeyCode::Space),
            restart: InputToken::Key(KeyCode::KeyR),
        }
    }
}

impl ControlBindings {
    /// Resolve configured tokens. Unparseable entries keep their default binding and are
    /// reported in the returned error list.
    pub fn from_config(cfg: &ControlsConfig) -> (Self, Vec<String>) {
        let mut bindings = Self::default();
        let mut errors = Vec::new();
        let slots: [(&str, &String, &mut InputToken); 5] = [
            ("spawn_solo", &cfg.spawn_solo, &mut bindings.spawn_solo),
            ("spawn_family", &cfg.spawn_family, &mut bindings.spawn_family),
            ("flip_gravity", &cfg.flip_gravity, &mut bindings.flip_gravity),
            ("cycle_debug_draw", &cfg.cycle_debug_draw, &mut bindings.cycle_debug_draw),
            ("restart", &cfg.restart, &mut bindings.restart),
        ];
        for (action, raw, slot) in slots {
            match parse_token(raw.trim()) {
                Ok(token) => *slot = token,
                Err(e) => errors.push(format!("[controls.{action} '{raw}'] {e}")),
            }
        }
        (bindings, errors)
    }

    pub fn tokens(&self) -> [InputToken; 5] {
        [
            self.spawn_solo,
            self.spawn_family,
            self.flip_gravity,
            self.cycle_debug_draw,
            self.restart,
        ]
    }
}

pub fn parse_token(s: &str) -> Result<InputToken, String> {
    if let Some(rest) = s.strip_prefix("Key:") {
        return parse_keycode(rest).map(InputToken::Key);
    }
    if let Some(rest) = s.strip_prefix("Mouse:") {
        return match rest {
            "Left" => Ok(InputToken::Mouse(MouseButton::Left)),
            "Right" => Ok(InputToken::Mouse(MouseButton::Right)),
            "Middle" => Ok(InputToken::Mouse(MouseButton::Middle)),
            other => Err(format!("Unknown mouse button '{other}'")),
        };
    }
    Err(format!("Unrecognized token '{s}' (expected Key:<name> or Mouse:<name>)"))
}

fn parse_keycode(name: &str) -> Result<KeyCode, String> {
    let kc = match name {
        "Space" => KeyCode::Space,
        "Enter" => KeyCode::Enter,
        "Escape" => KeyCode::Escape,
        "Backspace" => KeyCode::Backspace,
        "Tab" => KeyCode::Tab,
        "ShiftLeft" => KeyCode::ShiftLeft,
        "ControlLeft" => KeyCode::ControlLeft,
        "F1" => KeyCode::F1,
        "Digit1" => KeyCode::Digit1,
        "Digit2" => KeyCode::Digit2,
        "Digit3" => KeyCode::Digit3,
        "Digit4" => KeyCode::Digit4,
        single if single.len() == 1 || (single.len() == 4 && single.starts_with("Key")) => {
            let letter = single.chars().last().unwrap_or(' ').to_ascii_uppercase();
            letter_key(letter).ok_or_else(|| format!("Unsupported KeyCode '{name}'"))?
        }
        other => return Err(format!("Unsupported KeyCode '{other}' (extend parser)")),
    };
    Ok(kc)
}

fn letter_key(c: char) -> Option<KeyCode> {
    use KeyCode::*;
    const LETTERS: [KeyCode; 26] = [
        KeyA, KeyB, KeyC, KeyD, KeyE, KeyF, KeyG, KeyH, KeyI, KeyJ, KeyK, KeyL, KeyM, KeyN,
        KeyO, KeyP, KeyQ, KeyR, KeyS, KeyT, KeyU, KeyV, KeyW, KeyX, KeyY, KeyZ,
    ];
    if c.is_ascii_uppercase() {
        Some(LETTERS[(c as u8 - b'A') as usize])
    } else {
        None
    }
}
