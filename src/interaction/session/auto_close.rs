use crate::core::config::DemoConfig;
use bevy::prelude::*;

#[derive(Resource, Deref, DerefMut)]
pub struct AutoCloseTimer(pub Timer);

/// Exit after `window.autoClose` seconds when that is positive (smoke runs, CI).
pub struct AutoClosePlugin;

impl Plugin for AutoClosePlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_autoclose)
            .add_systems(Update, check_autoclose);
    }
}

fn setup_autoclose(mut commands: Commands, cfg: Res<DemoConfig>) {
    let secs = cfg.window.auto_close;
    if secs > 0.0 {
        info!(target: "scene", seconds = secs, "AutoClose: exiting after {secs} seconds");
        commands.insert_resource(AutoCloseTimer(Timer::from_seconds(secs, TimerMode::Once)));
    }
}

fn check_autoclose(
    time: Res<Time>,
    timer: Option<ResMut<AutoCloseTimer>>,
    mut ev_exit: EventWriter<AppExit>,
) {
    let Some(mut t) = timer else {
        return;
    };
    t.tick(time.delta());
    if t.just_finished() {
        info!(target: "scene", "AutoClose: timer finished, requesting app exit");
        ev_exit.write(AppExit::Success);
    }
}
