use std::fmt;

use bevy::prelude::*;
use bevy::ui::TextShadow;
use bevy_rapier2d::prelude::*;

use crate::core::assets::DemoAssets;
use crate::core::components::{Background, Ground, RestartButton, SceneEntity, TitleLabel};
use crate::core::config::DemoConfig;
use crate::physics::debug_draw::DebugDrawMode;
use crate::rendering::particles::MouseEmitter;

pub const BACKGROUND_Z: f32 = -100.0;
pub const BACKGROUND_COLOR: Color = Color::srgb(0.16, 0.18, 0.24);
pub const GROUND_COLOR: Color = Color::srgb(0.35, 0.27, 0.2);
const UI_MARGIN: f32 = 16.0;

/// Mutable state of the running scene. Reset to defaults on restart.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SceneState {
    pub debug_draw: DebugDrawMode,
    /// True while the gravity key is held.
    pub gravity_override_active: bool,
}

/// How many times the scene has been (re)built.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SceneGeneration(pub u32);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneBuildError {
    MissingAssets,
}

impl fmt::Display for SceneBuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneBuildError::MissingAssets => {
                write!(f, "demo assets are not loaded; cannot build the scene")
            }
        }
    }
}

impl std::error::Error for SceneBuildError {}

/// Spawn every scene-owned entity: background with ground collider, title, restart button
/// and the pointer emitter. Nothing is spawned when the assets are missing.
pub fn build_scene(
    commands: &mut Commands,
    assets: Option<&DemoAssets>,
    cfg: &DemoConfig,
) -> Result<(), SceneBuildError> {
    if assets.is_none() {
        return Err(SceneBuildError::MissingAssets);
    }
    spawn_background(commands, cfg);
    spawn_title(commands, cfg);
    spawn_restart_button(commands, cfg);
    commands.spawn((
        Name::new("MouseEmitter"),
        SceneEntity,
        MouseEmitter::default(),
        Transform::default(),
        Visibility::default(),
    ));
    Ok(())
}

fn spawn_background(commands: &mut Commands, cfg: &DemoConfig) {
    let size = Vec2::new(cfg.window.width, cfg.window.height);
    let ground = &cfg.physics.ground;
    commands
        .spawn((
            Name::new("Background"),
            SceneEntity,
            Background,
            Sprite::from_color(BACKGROUND_COLOR, size),
            Transform::from_xyz(0.0, 0.0, BACKGROUND_Z),
        ))
        .with_children(|bg| {
            bg.spawn((
                Name::new("Ground"),
                Ground,
                Sprite::from_color(GROUND_COLOR, Vec2::new(size.x, ground.height)),
                Transform::from_xyz(0.0, ground.offset_y, 0.1),
                RigidBody::Fixed,
                Collider::cuboid(size.x * 0.5, ground.height * 0.5),
            ));
        });
}

fn spawn_title(commands: &mut Commands, cfg: &DemoConfig) {
    commands.spawn((
        Name::new("TitleLabel"),
        SceneEntity,
        TitleLabel,
        Text::new(cfg.ui.title_text.clone()),
        TextFont {
            font_size: cfg.ui.title_font_size,
            ..default()
        },
        TextColor(Color::WHITE),
        TextShadow::default(),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(UI_MARGIN),
            top: Val::Px(UI_MARGIN * 0.5),
            ..default()
        },
    ));
}

fn spawn_restart_button(commands: &mut Commands, cfg: &DemoConfig) {
    commands
        .spawn((
            Name::new("RestartButton"),
            SceneEntity,
            RestartButton,
            Button,
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(UI_MARGIN),
                top: Val::Px(UI_MARGIN),
                padding: UiRect::axes(Val::Px(10.0), Val::Px(6.0)),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.35)),
        ))
        .with_children(|b| {
            b.spawn((
                Text::new(cfg.ui.restart_text.clone()),
                TextFont {
                    font_size: cfg.ui.restart_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
                TextShadow {
                    offset: Vec2::splat(2.0),
                    ..default()
                },
            ));
        });
}

pub fn setup_scene(
    mut commands: Commands,
    assets: Option<Res<DemoAssets>>,
    cfg: Res<DemoConfig>,
    mut generation: ResMut<SceneGeneration>,
) -> Result {
    build_scene(&mut commands, assets.as_deref(), &cfg)?;
    generation.0 = 1;
    info!(target: "scene", generation = generation.0, "scene built");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count<F: bevy::ecs::query::QueryFilter>(world: &mut World) -> usize {
        world.query_filtered::<Entity, F>().iter(world).count()
    }

    #[test]
    fn missing_assets_build_nothing() {
        let mut world = World::new();
        let cfg = DemoConfig::default();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        let err = build_scene(&mut commands, None, &cfg).unwrap_err();
        assert_eq!(err, SceneBuildError::MissingAssets);
        queue.apply(&mut world);
        assert_eq!(count::<With<SceneEntity>>(&mut world), 0);
    }

    #[test]
    fn scene_has_ground_title_button_and_emitter() {
        let mut world = World::new();
        let cfg = DemoConfig::default();
        let assets = DemoAssets::default();
        let mut queue = bevy::ecs::world::CommandQueue::default();
        let mut commands = Commands::new(&mut queue, &world);
        build_scene(&mut commands, Some(&assets), &cfg).unwrap();
        queue.apply(&mut world);
        assert_eq!(count::<With<SceneEntity>>(&mut world), 4);
        assert_eq!(count::<With<Ground>>(&mut world), 1);
        assert_eq!(count::<With<TitleLabel>>(&mut world), 1);
        assert_eq!(count::<With<RestartButton>>(&mut world), 1);
        assert_eq!(count::<With<MouseEmitter>>(&mut world), 1);
        // Ground is a child of the background, not a scene root of its own.
        assert_eq!(count::<(With<Ground>, With<SceneEntity>)>(&mut world), 0);
        let ground_tf = *world
            .query_filtered::<&Transform, With<Ground>>()
            .iter(&world)
            .next()
            .unwrap();
        assert_eq!(ground_tf.translation.y, cfg.physics.ground.offset_y);
    }

    #[test]
    fn state_defaults_to_no_debug_draw() {
        let s = SceneState::default();
        assert_eq!(s.debug_draw, DebugDrawMode::None);
        assert!(!s.gravity_override_active);
    }
}
