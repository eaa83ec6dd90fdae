use bevy::prelude::*;
use clap::Parser;

use bird_sandbox::app::cli::Cli;
use bird_sandbox::core::config::{ConfigReport, DemoConfig};
use bird_sandbox::DemoPlugin;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let (mut cfg, used, errors) = DemoConfig::load_layered(cli.config_layers());
    if let Some(secs) = cli.auto_close {
        cfg.window.auto_close = secs;
    }
    let report = ConfigReport {
        used,
        errors,
        warnings: cfg.validate(),
    };

    let exit = App::new()
        .insert_resource(cfg.clone())
        .insert_resource(report)
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: cfg.window.title.clone(),
                resolution: (cfg.window.width, cfg.window.height).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(DemoPlugin)
        .run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => anyhow::bail!("bird_sandbox exited with code {code}"),
    }
}
