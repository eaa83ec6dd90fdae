//! Meteor-style particle trail that follows the pointer.
use bevy::prelude::*;
use rand::Rng;

use crate::core::assets::DemoAssets;
use crate::core::components::SceneEntity;
use crate::core::config::{DemoConfig, ParticleConfig};
use crate::interaction::input::snapshot::InputSnapshot;

const START_RGB: [f32; 3] = [0.2, 0.4, 0.7];
const START_BLUE_VAR: f32 = 0.2;
const END_RGB_VAR: f32 = 0.75;

#[derive(Component, Debug, Default)]
pub struct MouseEmitter {
    /// Fractional particles owed from previous frames.
    pub accumulator: f32,
}

#[derive(Component, Debug, Clone)]
pub struct Particle {
    pub velocity: Vec2,
    pub age: f32,
    pub life: f32,
    pub start_color: Srgba,
    pub end_color: Srgba,
}

impl Particle {
    pub fn color_at(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let lerp = |a: f32, b: f32| a + (b - a) * t;
        Color::srgba(
            lerp(self.start_color.red, self.end_color.red),
            lerp(self.start_color.green, self.end_color.green),
            lerp(self.start_color.blue, self.end_color.blue),
            lerp(self.start_color.alpha, self.end_color.alpha),
        )
    }
}

/// Emission rate that keeps a steady population of `max` particles living `life` seconds.
pub fn emission_rate(cfg: &ParticleConfig) -> f32 {
    if cfg.life <= 0.0 {
        0.0
    } else {
        cfg.max as f32 / cfg.life
    }
}

pub fn follow_pointer(
    snapshot: Res<InputSnapshot>,
    mut q_emitter: Query<&mut Transform, With<MouseEmitter>>,
) {
    for mut tf in &mut q_emitter {
        let target = snapshot.pointer.extend(tf.translation.z);
        if tf.translation != target {
            tf.translation = target;
        }
    }
}

pub fn emit_particles(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<DemoConfig>,
    assets: Option<Res<DemoAssets>>,
    mut q_emitter: Query<(&mut MouseEmitter, &Transform)>,
    q_live: Query<(), With<Particle>>,
) {
    let pc = &cfg.particles;
    if !pc.enabled {
        return;
    }
    let Some(assets) = assets else {
        return;
    };
    let mut live = q_live.iter().count();
    let rate = emission_rate(pc);
    let mut rng = rand::thread_rng();
    for (mut emitter, tf) in &mut q_emitter {
        emitter.accumulator += rate * time.delta_secs();
        let owed = emitter.accumulator.floor();
        emitter.accumulator -= owed;
        let budget = pc.max.saturating_sub(live);
        let count = (owed as usize).min(budget);
        for _ in 0..count {
            spawn_particle(&mut commands, &mut rng, pc, &assets, tf.translation.truncate());
        }
        live += count;
    }
}

fn spawn_particle(
    commands: &mut Commands,
    rng: &mut impl Rng,
    pc: &ParticleConfig,
    assets: &DemoAssets,
    origin: Vec2,
) {
    let mut vary = |base: f32, var: f32| base + rng.gen_range(-var.abs()..=var.abs());
    let speed = vary(pc.speed, pc.speed_var);
    let life = vary(pc.life, pc.life_var).max(0.01);
    let size = vary(pc.size, pc.size_var).max(1.0);
    let angle = rng.gen_range(0.0..std::f32::consts::TAU);
    let start_color = Srgba::new(
        START_RGB[0],
        START_RGB[1],
        (START_RGB[2] + rng.gen_range(-START_BLUE_VAR..=START_BLUE_VAR)).clamp(0.0, 1.0),
        1.0,
    );
    let end_color = Srgba::new(
        rng.gen_range(0.0..=END_RGB_VAR),
        rng.gen_range(0.0..=END_RGB_VAR),
        rng.gen_range(0.0..=END_RGB_VAR),
        0.0,
    );
    commands.spawn((
        SceneEntity,
        Particle {
            velocity: Vec2::from_angle(angle) * speed,
            age: 0.0,
            life,
            start_color,
            end_color,
        },
        Sprite {
            image: assets.snow.clone(),
            color: Color::Srgba(start_color),
            custom_size: Some(Vec2::splat(size)),
            ..default()
        },
        Transform::from_translation(origin.extend(5.0)),
    ));
}

pub fn update_particles(
    mut commands: Commands,
    time: Res<Time>,
    cfg: Res<DemoConfig>,
    mut q: Query<(Entity, &mut Particle, &mut Transform, &mut Sprite)>,
) {
    let dt = time.delta_secs();
    let accel = Vec2::new(cfg.particles.acceleration.0, cfg.particles.acceleration.1);
    for (entity, mut p, mut tf, mut sprite) in &mut q {
        p.age += dt;
        if p.age >= p.life {
            commands.entity(entity).despawn();
            continue;
        }
        p.velocity += accel * dt;
        tf.translation += (p.velocity * dt).extend(0.0);
        sprite.color = p.color_at(p.age / p.life);
    }
}
