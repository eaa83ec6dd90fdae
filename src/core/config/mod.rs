pub mod config;

pub use config::{
    AudioConfig, BirdConfig, ConfigReport, ControlsConfig, DemoConfig, GroundConfig,
    ParticleConfig, PhysicsConfig, SpawnConfig, UiConfig, WindowConfig,
};

use bevy::prelude::*;

/// Logs the load report produced before the app started.
pub struct ConfigReportPlugin;

impl Plugin for ConfigReportPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DemoConfig>()
            .add_systems(PreStartup, log_config_report);
    }
}

fn log_config_report(report: Option<Res<ConfigReport>>) {
    let Some(report) = report else {
        return;
    };
    for e in &report.errors {
        warn!(target: "config", "CONFIG LOAD ISSUE: {e}");
    }
    if report.used.is_empty() {
        info!(target: "config", "No config layers found; using defaults");
    } else {
        info!(target: "config", used = ?report.used, "Config layers loaded");
    }
    for w in &report.warnings {
        warn!(target: "config", "CONFIG WARNING: {w}");
    }
}
