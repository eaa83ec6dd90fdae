use bevy::prelude::*;

use crate::audio::spawn_cue_source;
use crate::core::config::DemoConfig;
use crate::rendering::textures::{build_textures, TextureHandles};

/// Handles every scene element draws from. Built once before the scene so the first spawn
/// never waits on a load; a default (all-placeholder) value is enough for headless runs.
#[derive(Resource, Debug, Clone, Default)]
pub struct DemoAssets {
    pub bird_yellow: Handle<Image>,
    pub bird_red: Handle<Image>,
    pub bird_blue: Handle<Image>,
    pub dot: Handle<Image>,
    pub snow: Handle<Image>,
    pub spawn_cue: Handle<AudioSource>,
}

impl DemoAssets {
    pub fn from_parts(textures: TextureHandles, spawn_cue: Handle<AudioSource>) -> Self {
        Self {
            bird_yellow: textures.bird_yellow,
            bird_red: textures.bird_red,
            bird_blue: textures.bird_blue,
            dot: textures.dot,
            snow: textures.snow,
            spawn_cue,
        }
    }
}

pub struct DemoAssetsPlugin;

impl Plugin for DemoAssetsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(PreStartup, preload_demo_assets);
    }
}

fn preload_demo_assets(
    mut commands: Commands,
    mut images: ResMut<Assets<Image>>,
    mut audio: ResMut<Assets<AudioSource>>,
    asset_server: Res<AssetServer>,
    cfg: Res<DemoConfig>,
) -> Result {
    let textures = build_textures(&mut images);
    let spawn_cue = match cfg.audio.spawn_cue.as_deref() {
        Some(path) => {
            info!(target: "scene", path, "spawn cue loaded from file");
            asset_server.load(path.to_owned())
        }
        None => audio.add(spawn_cue_source()?),
    };
    commands.insert_resource(DemoAssets::from_parts(textures, spawn_cue));
    info!(target: "scene", "procedural textures and spawn cue ready");
    Ok(())
}
