use std::time::Duration;

use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bird_sandbox::core::assets::DemoAssets;
use bird_sandbox::core::config::DemoConfig;
use bird_sandbox::interaction::input::snapshot::InputSnapshot;
use bird_sandbox::rendering::particles::{MouseEmitter, Particle};
use bird_sandbox::rendering::ParticlesPlugin;

fn test_app(max: usize) -> App {
    let mut cfg = DemoConfig::default();
    cfg.particles.max = max;
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(100)))
        .insert_resource(cfg)
        .insert_resource(DemoAssets::default())
        .init_resource::<InputSnapshot>()
        .add_plugins(ParticlesPlugin);
    app.world_mut()
        .spawn((MouseEmitter::default(), Transform::default()));
    app.update();
    app
}

fn particle_count(app: &mut App) -> usize {
    let world = app.world_mut();
    world.query::<&Particle>().iter(world).count()
}

#[test]
fn live_particles_never_exceed_max() {
    let mut app = test_app(10);
    let mut peak = 0;
    for _ in 0..30 {
        app.update();
        let n = particle_count(&mut app);
        assert!(n <= 10, "{n} particles alive");
        peak = peak.max(n);
    }
    assert!(peak > 0, "emitter never produced anything");
}

#[test]
fn emitter_follows_pointer() {
    let mut app = test_app(10);
    app.world_mut().resource_mut::<InputSnapshot>().pointer = Vec2::new(-40.0, 25.0);
    app.update();
    let world = app.world_mut();
    let tf = world
        .query_filtered::<&Transform, With<MouseEmitter>>()
        .iter(world)
        .next()
        .copied()
        .unwrap();
    assert_eq!(tf.translation.truncate(), Vec2::new(-40.0, 25.0));
}

#[test]
fn particles_expire_once_emission_stops() {
    let mut app = test_app(50);
    for _ in 0..5 {
        app.update();
    }
    assert!(particle_count(&mut app) > 0);
    app.world_mut().resource_mut::<DemoConfig>().particles.enabled = false;
    // Longest possible life is life + life_var = 0.6 s.
    for _ in 0..8 {
        app.update();
    }
    assert_eq!(particle_count(&mut app), 0);
}
