use std::{fs, path::Path};

use anyhow::Context;
use bevy::prelude::*;
use serde::Deserialize;

#[derive(Debug, Deserialize, Resource, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    #[serde(rename = "autoClose")]
    pub auto_close: f32,
}
impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            title: "Bird Sandbox".into(),
            auto_close: 0.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct GroundConfig {
    pub height: f32,
    pub offset_y: f32,
}
impl Default for GroundConfig {
    fn default() -> Self {
        Self {
            height: 15.0,
            offset_y: -215.0,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Gravity magnitude in world units (pixels) per second squared. Applied downwards
    /// normally and upwards while the gravity key is held.
    pub gravity: f32,
    pub pixels_per_meter: f32,
    pub ground: GroundConfig,
}
impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: 98.1,
            pixels_per_meter: 10.0,
            ground: GroundConfig::default(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct BirdConfig {
    /// Side length of the (square) bird texture in pixels.
    pub size: f32,
    pub scale: f32,
}
impl Default for BirdConfig {
    fn default() -> Self {
        Self {
            size: 256.0,
            scale: 0.25,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct SpawnConfig {
    pub lifetime_secs: f32,
}
impl Default for SpawnConfig {
    fn default() -> Self {
        Self { lifetime_secs: 5.0 }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ParticleConfig {
    pub enabled: bool,
    pub max: usize,
    pub life: f32,
    pub life_var: f32,
    pub speed: f32,
    pub speed_var: f32,
    pub acceleration: (f32, f32),
    pub size: f32,
    pub size_var: f32,
}
impl Default for ParticleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max: 100,
            life: 0.5,
            life_var: 0.1,
            speed: 15.0,
            speed_var: 5.0,
            acceleration: (-200.0, 200.0),
            size: 24.0,
            size_var: 8.0,
        }
    }
}

/// Input bindings as `Key:<name>` / `Mouse:<name>` tokens.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct ControlsConfig {
    pub spawn_solo: String,
    pub spawn_family: String,
    pub flip_gravity: String,
    pub cycle_debug_draw: String,
    pub restart: String,
}
impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            spawn_solo: "Mouse:Left".into(),
            spawn_family: "Mouse:Right".into(),
            flip_gravity: "Key:G".into(),
            cycle_debug_draw: "Key:Space".into(),
            restart: "Key:R".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Asset path of the spawn cue. `None` uses the synthesized blip.
    pub spawn_cue: Option<String>,
    pub volume: f32,
}
impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            spawn_cue: None,
            volume: 0.6,
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct UiConfig {
    pub title_text: String,
    pub title_font_size: f32,
    pub restart_text: String,
    pub restart_font_size: f32,
}
impl Default for UiConfig {
    fn default() -> Self {
        Self {
            title_text: "Bevy!".into(),
            title_font_size: 100.0,
            restart_text: "Clear Everything!".into(),
            restart_font_size: 20.0,
        }
    }
}

#[derive(Debug, Deserialize, Resource, Clone, PartialEq, Default)]
#[serde(default)]
pub struct DemoConfig {
    pub window: WindowConfig,
    pub physics: PhysicsConfig,
    pub bird: BirdConfig,
    pub spawn: SpawnConfig,
    pub particles: ParticleConfig,
    pub controls: ControlsConfig,
    pub audio: AudioConfig,
    pub ui: UiConfig,
}

/// Outcome of loading the config, kept so it can be logged once logging is up.
#[derive(Resource, Debug, Clone, Default, PartialEq)]
pub struct ConfigReport {
    pub used: Vec<String>,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

impl DemoConfig {
    pub fn load_from_file(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let data = fs::read_to_string(path)
            .with_context(|| format!("read config {}", path.display()))?;
        ron::from_str(&data).with_context(|| format!("parse RON {}", path.display()))
    }

    /// Merge RON layers in order (later files override earlier keys) and deserialize the
    /// result. Returns the config, the layers that were read, and any per-layer errors.
    pub fn load_layered<P, I>(paths: I) -> (Self, Vec<String>, Vec<String>)
    where
        P: AsRef<Path>,
        I: IntoIterator<Item = P>,
    {
        use ron::value::Value;
        let mut merged: Option<Value> = None;
        let mut used = Vec::new();
        let mut errors = Vec::new();
        fn merge_value(base: &mut Value, overlay: Value) {
            match (base, overlay) {
                (Value::Map(bm), Value::Map(om)) => {
                    for (k, v) in om.into_iter() {
                        if let Some((_, ev)) = bm.iter_mut().find(|(ek, _)| **ek == k) {
                            merge_value(ev, v);
                            continue;
                        }
                        bm.insert(k, v);
                    }
                }
                (b, o) => *b = o,
            }
        }
        for p in paths {
            let path_ref = p.as_ref();
            match fs::read_to_string(path_ref) {
                Ok(txt) => match ron::from_str::<Value>(&txt) {
                    Ok(val) => {
                        if let Some(cur) = &mut merged {
                            merge_value(cur, val);
                        } else {
                            merged = Some(val);
                        }
                        used.push(path_ref.display().to_string());
                    }
                    Err(e) => errors.push(format!("{}: parse error: {e}", path_ref.display())),
                },
                Err(e) => errors.push(format!("{}: read error: {e}", path_ref.display())),
            }
        }
        let Some(val) = merged else {
            return (DemoConfig::default(), used, errors);
        };
        match val.into_rust::<DemoConfig>() {
            Ok(cfg) => (cfg, used, errors),
            Err(e) => {
                errors.push(format!(
                    "failed to deserialize merged config; using defaults: {e}"
                ));
                (DemoConfig::default(), used, errors)
            }
        }
    }

    pub fn validate(&self) -> Vec<String> {
        let mut w = Vec::new();
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            w.push("window dimensions must be > 0".into());
        }
        if self.window.auto_close < 0.0 {
            w.push(format!(
                "window.autoClose {} negative -> treated as disabled (should be >= 0)",
                self.window.auto_close
            ));
        } else if self.window.auto_close > 0.0 && self.window.auto_close < 0.01 {
            w.push(format!(
                "window.autoClose {} very small; closes almost immediately",
                self.window.auto_close
            ));
        }
        if self.physics.gravity <= 0.0 {
            w.push(format!(
                "physics.gravity {} must be a positive magnitude (direction comes from the G key)",
                self.physics.gravity
            ));
        }
        if self.physics.pixels_per_meter <= 0.0 {
            w.push("physics.pixels_per_meter must be > 0".into());
        }
        if self.physics.ground.height <= 0.0 {
            w.push("physics.ground.height must be > 0".into());
        }
        if self.physics.ground.offset_y.abs() > self.window.height * 0.5 {
            w.push(format!(
                "physics.ground.offset_y {} lies outside the window; spawned birds fall forever",
                self.physics.ground.offset_y
            ));
        }
        if self.bird.size <= 0.0 || self.bird.scale <= 0.0 {
            w.push("bird.size and bird.scale must be > 0".into());
        }
        if self.spawn.lifetime_secs <= 0.0 {
            w.push(format!(
                "spawn.lifetime_secs {} must be > 0; birds would vanish on their first frame",
                self.spawn.lifetime_secs
            ));
        }
        let p = &self.particles;
        if p.enabled {
            if p.max == 0 {
                w.push("particles.max is 0; emitter will never show anything".into());
            }
            if p.max > 10_000 {
                w.push(format!("particles.max {} very high; performance may suffer", p.max));
            }
            if p.life <= 0.0 {
                w.push("particles.life must be > 0".into());
            }
            if p.life_var < 0.0 || p.speed_var < 0.0 || p.size_var < 0.0 {
                w.push("particles variance values must be >= 0".into());
            }
            if p.life_var >= p.life {
                w.push(format!(
                    "particles.life_var {} >= life {} -> some particles die instantly",
                    p.life_var, p.life
                ));
            }
        }
        if !(0.0..=1.0).contains(&self.audio.volume) {
            w.push(format!("audio.volume {} outside 0..1", self.audio.volume));
        }
        w
    }
}
