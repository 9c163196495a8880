// SPDX-License-Identifier: MPL-2.0
use std::time::Duration;

use glide_player::config::{self, Config, DEFAULT_SEEK_STEP_SECS};
use tempfile::tempdir;

#[test]
fn saved_preferences_drive_surface_settings() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let config = Config {
        autoplay: Some(false),
        overlay_hide_ms: Some(1_500),
        completion_exit_delay_ms: Some(3_000),
        ..Config::default()
    };
    config::save_to_path(&config, &path).expect("Failed to write config file");

    let settings = config::load_from_path(&path)
        .expect("Failed to load config from path")
        .settings();

    assert!(!settings.autoplay);
    assert_eq!(settings.overlay_hide_delay, Duration::from_millis(1_500));
    assert_eq!(settings.completion_exit_delay, Duration::from_millis(3_000));
    assert_eq!(settings.seek_step_secs, DEFAULT_SEEK_STEP_SECS);

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn invalid_file_falls_back_to_defaults() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");
    std::fs::write(&path, "autoplay = [not toml").expect("Failed to write file");

    let config = config::load_from_path(&path).expect("invalid TOML is not an error");
    assert_eq!(config, Config::default());
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let result = config::load_from_path(&dir.path().join("absent.toml"));
    assert!(matches!(result, Err(glide_player::error::Error::Io(_))));
}
