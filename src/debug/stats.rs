#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
use crate::core::components::Spawned;
#[cfg(feature = "debug")]
use crate::gameplay::scene::{SceneGeneration, SceneState};
#[cfg(feature = "debug")]
use crate::rendering::particles::Particle;

#[cfg(feature = "debug")]
#[derive(Resource, Debug, Default)]
pub struct DebugStats {
    pub fps: f32,
    pub frame_time_ms: f32,
    pub frame_counter: u64,
    pub solo_count: usize,
    pub parent_count: usize,
    pub particle_count: usize,
}

#[cfg(feature = "debug")]
#[derive(Resource, Debug)]
pub struct DebugLogTimer {
    pub log_interval: f32,
    pub time_accum: f32,
}

#[cfg(feature = "debug")]
impl Default for DebugLogTimer {
    fn default() -> Self {
        Self {
            log_interval: 1.0,
            time_accum: 0.0,
        }
    }
}

#[cfg(feature = "debug")]
pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    q_spawned: Query<&Spawned>,
    q_particles: Query<(), With<Particle>>,
) {
    stats.frame_counter += 1;
    let dt = time.delta_secs().max(1e-6);
    let inst_fps = 1.0 / dt;
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    let inst_ms = dt * 1000.0;
    stats.frame_time_ms = if stats.frame_time_ms == 0.0 {
        inst_ms
    } else {
        stats.frame_time_ms * 0.9 + inst_ms * 0.1
    };
    let (mut solo, mut parent) = (0, 0);
    for s in &q_spawned {
        match s {
            Spawned::Solo => solo += 1,
            Spawned::Parent => parent += 1,
        }
    }
    stats.solo_count = solo;
    stats.parent_count = parent;
    stats.particle_count = q_particles.iter().count();
}

#[cfg(feature = "debug")]
pub fn debug_logging_system(
    time: Res<Time>,
    mut timer: ResMut<DebugLogTimer>,
    stats: Res<DebugStats>,
    state: Res<SceneState>,
    generation: Res<SceneGeneration>,
) {
    timer.time_accum += time.delta_secs();
    if timer.time_accum >= timer.log_interval {
        timer.time_accum = 0.0;
        info!(
            "SIM frame={} t={:.3}s fps={:.1} ft_ms={:.1} solo={} parents={} particles={} draw={:?} gravity_flipped={} gen={}",
            stats.frame_counter,
            time.elapsed_secs(),
            stats.fps,
            stats.frame_time_ms,
            stats.solo_count,
            stats.parent_count,
            stats.particle_count,
            state.debug_draw,
            state.gravity_override_active,
            generation.0
        );
    }
}
