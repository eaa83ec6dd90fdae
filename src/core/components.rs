use bevy::prelude::*;

/// Root entity owned by the demo scene. Restart despawns every one of these (children go
/// with their parent), so only top-level entities carry it.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SceneEntity;

/// Marker for a bird spawned by mouse input (solo or family parent).
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawned {
    Solo,
    Parent,
}

/// Child attached to a family parent; removed implicitly with it.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FamilyChild {
    /// Procedurally drawn dot: spins, then fades.
    Dot,
    /// Small bird: spins, grows and tints at the same time.
    Bird,
}

/// The full-window background sprite (carries the ground collider as a child).
#[derive(Component)]
pub struct Background;

/// Fixed collider the birds land on.
#[derive(Component)]
pub struct Ground;

/// Title text in the top-left corner.
#[derive(Component)]
pub struct TitleLabel;

/// On-screen button that restarts the scene.
#[derive(Component)]
pub struct RestartButton;

/// The 2D camera. Lives outside the scene so it survives restarts.
#[derive(Component)]
pub struct MainCamera;
