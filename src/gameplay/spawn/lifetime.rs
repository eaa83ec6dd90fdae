use bevy::prelude::*;

/// Expiry record: the entity (and its children) is despawned once the timer finishes.
#[derive(Component, Debug, Clone, Deref, DerefMut)]
pub struct Lifetime(pub Timer);

impl Lifetime {
    pub fn from_secs(secs: f32) -> Self {
        Self(Timer::from_seconds(secs.max(0.0), TimerMode::Once))
    }
}

/// Tick every lifetime and despawn the ones that just expired. A finished timer only
/// reports `just_finished` on the tick that crossed the deadline, so each entity is
/// despawned exactly once.
pub fn expire_lifetimes(
    mut commands: Commands,
    time: Res<Time>,
    mut q: Query<(Entity, &mut Lifetime)>,
) {
    let dt = time.delta();
    let mut expired = 0usize;
    for (entity, mut lifetime) in &mut q {
        lifetime.tick(dt);
        if lifetime.just_finished() {
            commands.entity(entity).despawn();
            expired += 1;
        }
    }
    if expired > 0 {
        debug!(target: "spawn", expired, "lifetimes elapsed");
    }
}
