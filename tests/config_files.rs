use std::io::Write;
use std::path::Path;

use bird_sandbox::app::cli::DEFAULT_CONFIG_PATH;
use bird_sandbox::core::config::DemoConfig;
use bird_sandbox::interaction::input::bindings::ControlBindings;

#[test]
fn shipped_config_matches_defaults() {
    let cfg = DemoConfig::load_from_file(DEFAULT_CONFIG_PATH).expect("shipped config parses");
    assert_eq!(cfg, DemoConfig::default());
    assert!(cfg.validate().is_empty());
}

#[test]
fn rebinding_controls_through_a_layer() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(br#"(controls: (flip_gravity: "Key:H", restart: "Mouse:Middle"))"#)
        .unwrap();
    let (cfg, used, errors) = DemoConfig::load_layered([Path::new(DEFAULT_CONFIG_PATH), f.path()]);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(used.len(), 2);
    let (bindings, errs) = ControlBindings::from_config(&cfg.controls);
    assert!(errs.is_empty(), "{errs:?}");
    let defaults = ControlBindings::default();
    assert_ne!(bindings.flip_gravity, defaults.flip_gravity);
    assert_ne!(bindings.restart, defaults.restart);
    assert_eq!(bindings.spawn_solo, defaults.spawn_solo);
}

#[test]
fn broken_layer_is_reported_and_skipped() {
    let mut f = tempfile::NamedTempFile::new().unwrap();
    f.write_all(b"(window: (width: ").unwrap();
    let (cfg, used, errors) = DemoConfig::load_layered([Path::new(DEFAULT_CONFIG_PATH), f.path()]);
    assert_eq!(used.len(), 1);
    assert_eq!(errors.len(), 1);
    assert!(errors[0].contains("parse error"));
    assert_eq!(cfg, DemoConfig::default());
}
