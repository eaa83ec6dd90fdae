use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

/// World gravity. The direction flips while the gravity key is held; the magnitude comes
/// from config.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Gravity {
    pub magnitude: f32,
    pub vector: Vec2,
}

impl Gravity {
    pub fn new(magnitude: f32) -> Self {
        Self {
            magnitude,
            vector: Vec2::new(0.0, -magnitude),
        }
    }

    /// Pull upwards (key held).
    pub fn invert(&mut self) {
        self.vector = Vec2::new(0.0, self.magnitude);
    }

    /// Pull downwards again.
    pub fn restore(&mut self) {
        self.vector = Vec2::new(0.0, -self.magnitude);
    }

    pub fn is_inverted(&self) -> bool {
        self.vector.y > 0.0
    }
}

impl Default for Gravity {
    fn default() -> Self {
        Self::new(98.1)
    }
}

/// Push the gravity vector into every Rapier context that disagrees with it.
pub fn sync_rapier_gravity(gravity: Res<Gravity>, mut q_cfg: Query<&mut RapierConfiguration>) {
    for mut cfg in &mut q_cfg {
        if cfg.gravity != gravity.vector {
            cfg.gravity = gravity.vector;
        }
    }
}
