use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy_rapier2d::prelude::RapierConfiguration;
use bevy_rapier2d::render::{DebugRenderContext, DebugRenderMode};
use bird_sandbox::core::assets::DemoAssets;
use bird_sandbox::core::config::DemoConfig;
use bird_sandbox::core::system::system_order::{InputReactSet, PhysicsSyncSet, SceneUpdateSet};
use bird_sandbox::gameplay::GameplayPlugin;
use bird_sandbox::interaction::input::DemoInputPlugin;
use bird_sandbox::interaction::session::RestartPlugin;
use bird_sandbox::physics::rapier::rapier_physics::PhysicsStatePlugin;

/// Headless app with the two Rapier targets present but no simulation running.
fn test_app() -> (App, Entity) {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(DemoConfig::default())
        .insert_resource(DemoAssets::default())
        .insert_resource(ButtonInput::<KeyCode>::default())
        .insert_resource(ButtonInput::<MouseButton>::default())
        .insert_resource(DebugRenderContext::default())
        .configure_sets(
            Update,
            (
                InputReactSet,
                SceneUpdateSet.after(InputReactSet),
                PhysicsSyncSet.after(SceneUpdateSet),
            ),
        )
        .add_plugins((PhysicsStatePlugin, DemoInputPlugin, RestartPlugin, GameplayPlugin));
    let context = app.world_mut().spawn(RapierConfiguration::new(1.0)).id();
    app.update();
    (app, context)
}

fn frame(app: &mut App) {
    app.update();
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().clear();
}

fn tap(app: &mut App, key: KeyCode) {
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().press(key);
    frame(app);
    app.world_mut().resource_mut::<ButtonInput<KeyCode>>().release(key);
    frame(app);
}

fn overlay(app: &App) -> (bool, DebugRenderMode) {
    let ctx = app.world().resource::<DebugRenderContext>();
    (ctx.enabled, ctx.pipeline.mode)
}

fn rapier_gravity(app: &App, context: Entity) -> Vec2 {
    app.world().get::<RapierConfiguration>(context).unwrap().gravity
}

#[test]
fn debug_overlay_follows_space_cycle() {
    let (mut app, _) = test_app();
    assert!(!overlay(&app).0, "renderer starts hidden");

    tap(&mut app, KeyCode::Space);
    assert_eq!(overlay(&app), (true, DebugRenderMode::CONTACTS));

    tap(&mut app, KeyCode::Space);
    assert_eq!(overlay(&app), (true, DebugRenderMode::COLLIDER_SHAPES));

    tap(&mut app, KeyCode::Space);
    assert_eq!(overlay(&app), (true, DebugRenderMode::all()));

    tap(&mut app, KeyCode::Space);
    assert!(!overlay(&app).0);
}

#[test]
fn rapier_gravity_follows_gravity_key() {
    let (mut app, context) = test_app();
    assert_eq!(rapier_gravity(&app, context), Vec2::new(0.0, -98.1));

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .press(KeyCode::KeyG);
    frame(&mut app);
    assert_eq!(rapier_gravity(&app, context), Vec2::new(0.0, 98.1));

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::KeyG);
    frame(&mut app);
    assert_eq!(rapier_gravity(&app, context), Vec2::new(0.0, -98.1));
}

#[test]
fn restart_hides_overlay_again() {
    let (mut app, _) = test_app();
    tap(&mut app, KeyCode::Space);
    tap(&mut app, KeyCode::Space);
    assert!(overlay(&app).0);
    tap(&mut app, KeyCode::KeyR);
    assert!(!overlay(&app).0);
}
