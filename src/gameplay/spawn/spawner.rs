use std::f32::consts::TAU;

use bevy::audio::Volume;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::lifetime::Lifetime;
use crate::core::assets::DemoAssets;
use crate::core::components::{FamilyChild, SceneEntity, Spawned};
use crate::core::config::DemoConfig;
use crate::gameplay::effects::{Effect, EffectTrack, TimedEffect};

/// Dot child: spin this many turns, then fade.
pub const DOT_TURNS: f32 = 5.0;
pub const DOT_SPIN_SECS: f32 = 3.0;
pub const DOT_FADE_SECS: f32 = 2.0;
pub const DOT_RADIUS: f32 = 64.0;
pub const DOT_COLOR: Color = Color::srgba(0.0, 0.0, 1.0, 0.5);

/// Small-bird child: spin, grow and tint together.
pub const CHILD_BIRD_TURNS: f32 = 10.0;
pub const CHILD_BIRD_SECS: f32 = 3.0;
pub const CHILD_BIRD_SCALE: f32 = 1.5;
pub const CHILD_BIRD_TINT: Color = Color::srgb(1.0, 1.0, 0.0);

/// Marker on the fire-and-forget audio entity played for each spawn.
#[derive(Component)]
pub struct SpawnCue;

fn bird_sprite(image: Handle<Image>, cfg: &DemoConfig) -> Sprite {
    Sprite {
        image,
        custom_size: Some(Vec2::splat(cfg.bird.size)),
        ..default()
    }
}

/// Dynamic circle body sized to half the sprite width. The collider is expressed in
/// sprite-local units; Rapier scales it with the transform.
fn bird_body(cfg: &DemoConfig) -> (RigidBody, Collider) {
    (RigidBody::Dynamic, Collider::ball(cfg.bird.size * 0.5))
}

fn bird_transform(position: Vec2, cfg: &DemoConfig) -> Transform {
    Transform::from_translation(position.extend(0.0)).with_scale(Vec3::new(
        cfg.bird.scale,
        cfg.bird.scale,
        1.0,
    ))
}

/// One yellow bird with a physics body at `position`, removed after the configured lifetime.
pub fn spawn_solo(
    commands: &mut Commands,
    assets: &DemoAssets,
    cfg: &DemoConfig,
    position: Vec2,
) -> Entity {
    let entity = commands
        .spawn((
            Name::new("SoloBird"),
            SceneEntity,
            Spawned::Solo,
            bird_sprite(assets.bird_yellow.clone(), cfg),
            bird_transform(position, cfg),
            bird_body(cfg),
            Lifetime::from_secs(cfg.spawn.lifetime_secs),
        ))
        .id();
    play_spawn_cue(commands, assets, cfg);
    info!(target: "spawn", ?position, "solo bird");
    entity
}

/// A red bird carrying two children in its local space: a dot that spins then fades, and a
/// small blue bird that spins, grows and tints at once. Children die with the parent.
pub fn spawn_parent_and_children(
    commands: &mut Commands,
    assets: &DemoAssets,
    cfg: &DemoConfig,
    position: Vec2,
) -> Entity {
    let half = cfg.bird.size * 0.5;
    let dot_track = EffectTrack::sequence([
        TimedEffect::new(Effect::RotateBy(-TAU * DOT_TURNS), DOT_SPIN_SECS),
        TimedEffect::new(Effect::FadeOut, DOT_FADE_SECS),
    ]);
    let bird_track = EffectTrack::parallel([
        TimedEffect::new(Effect::RotateBy(-TAU * CHILD_BIRD_TURNS), CHILD_BIRD_SECS),
        TimedEffect::new(Effect::ScaleTo(CHILD_BIRD_SCALE), CHILD_BIRD_SECS),
        TimedEffect::new(Effect::TintTo(CHILD_BIRD_TINT), CHILD_BIRD_SECS),
    ]);

    let entity = commands
        .spawn((
            Name::new("ParentBird"),
            SceneEntity,
            Spawned::Parent,
            bird_sprite(assets.bird_red.clone(), cfg),
            bird_transform(position, cfg),
            bird_body(cfg),
            Lifetime::from_secs(cfg.spawn.lifetime_secs),
        ))
        .with_children(|parent| {
            // Lower-left corner of the parent sprite.
            parent.spawn((
                Name::new("DotChild"),
                FamilyChild::Dot,
                Sprite {
                    image: assets.dot.clone(),
                    color: DOT_COLOR,
                    custom_size: Some(Vec2::splat(DOT_RADIUS * 2.0)),
                    ..default()
                },
                Transform::from_xyz(-half, -half, 0.1),
                dot_track,
            ));
            // Upper-right corner of the parent sprite.
            parent.spawn((
                Name::new("BirdChild"),
                FamilyChild::Bird,
                bird_sprite(assets.bird_blue.clone(), cfg),
                Transform::from_xyz(half, half, 0.2),
                bird_track,
            ));
        })
        .id();
    play_spawn_cue(commands, assets, cfg);
    info!(target: "spawn", ?position, "parent bird with children");
    entity
}

pub fn play_spawn_cue(commands: &mut Commands, assets: &DemoAssets, cfg: &DemoConfig) {
    commands.spawn((
        SpawnCue,
        AudioPlayer::new(assets.spawn_cue.clone()),
        PlaybackSettings::DESPAWN.with_volume(Volume::Linear(cfg.audio.volume)),
    ));
}
