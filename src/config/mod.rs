//! This module handles the control surface configuration, including loading and saving
//! user preferences to a `settings.toml` file.
//!
//! # Examples
//!
//! ```no_run
//! use glide_player::config::{self, Config};
//! use std::path::PathBuf;
//!
//! // Load existing configuration
//! let mut config = config::load().unwrap_or_default();
//!
//! // Modify a setting
//! config.autoplay = Some(false);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//!
//! // To load/save from a specific path (e.g., for testing)
//! let temp_dir = PathBuf::from("./temp_config_dir");
//! std::fs::create_dir_all(&temp_dir).unwrap();
//! let temp_file = temp_dir.join("test_settings.toml");
//! config::save_to_path(&config, &temp_file).expect("Failed to save to path");
//! let loaded_config = config::load_from_path(&temp_file).expect("Failed to load from path");
//! assert_eq!(loaded_config.autoplay, Some(false));
//! std::fs::remove_dir_all(&temp_dir).unwrap();
//! ```

mod defaults;

pub use defaults::*;

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";
const APP_NAME: &str = "GlidePlayer";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub autoplay: Option<bool>,
    #[serde(default)]
    pub seek_step_secs: Option<f64>,
    #[serde(default)]
    pub overlay_hide_ms: Option<u64>,
    #[serde(default)]
    pub controls_auto_hide_secs: Option<u32>,
    #[serde(default)]
    pub completion_exit_delay_ms: Option<u64>,
    #[serde(default)]
    pub drag_threshold_px: Option<f32>,
    #[serde(default)]
    pub snap_margin: Option<f32>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            autoplay: Some(DEFAULT_AUTOPLAY),
            seek_step_secs: Some(DEFAULT_SEEK_STEP_SECS),
            overlay_hide_ms: Some(DEFAULT_OVERLAY_HIDE_MS),
            controls_auto_hide_secs: Some(DEFAULT_CONTROLS_AUTO_HIDE_SECS),
            completion_exit_delay_ms: Some(DEFAULT_COMPLETION_EXIT_DELAY_MS),
            drag_threshold_px: Some(DEFAULT_DRAG_THRESHOLD_PX),
            snap_margin: Some(DEFAULT_SNAP_MARGIN),
        }
    }
}

impl Config {
    /// Resolves the optional fields into clamped runtime settings.
    #[must_use]
    pub fn settings(&self) -> SurfaceSettings {
        SurfaceSettings {
            autoplay: self.autoplay.unwrap_or(DEFAULT_AUTOPLAY),
            seek_step_secs: self
                .seek_step_secs
                .unwrap_or(DEFAULT_SEEK_STEP_SECS)
                .clamp(MIN_SEEK_STEP_SECS, MAX_SEEK_STEP_SECS),
            overlay_hide_delay: Duration::from_millis(
                self.overlay_hide_ms
                    .unwrap_or(DEFAULT_OVERLAY_HIDE_MS)
                    .clamp(MIN_OVERLAY_HIDE_MS, MAX_OVERLAY_HIDE_MS),
            ),
            controls_auto_hide: Duration::from_secs(u64::from(
                self.controls_auto_hide_secs
                    .unwrap_or(DEFAULT_CONTROLS_AUTO_HIDE_SECS)
                    .clamp(MIN_CONTROLS_AUTO_HIDE_SECS, MAX_CONTROLS_AUTO_HIDE_SECS),
            )),
            completion_exit_delay: Duration::from_millis(
                self.completion_exit_delay_ms
                    .unwrap_or(DEFAULT_COMPLETION_EXIT_DELAY_MS)
                    .min(MAX_COMPLETION_EXIT_DELAY_MS),
            ),
            drag_threshold_px: self
                .drag_threshold_px
                .unwrap_or(DEFAULT_DRAG_THRESHOLD_PX)
                .clamp(MIN_DRAG_THRESHOLD_PX, MAX_DRAG_THRESHOLD_PX),
            snap_margin: self
                .snap_margin
                .unwrap_or(DEFAULT_SNAP_MARGIN)
                .clamp(0.0, MAX_SNAP_MARGIN),
        }
    }
}

/// Resolved, range-checked settings consumed by the control surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceSettings {
    pub autoplay: bool,
    pub seek_step_secs: f64,
    pub overlay_hide_delay: Duration,
    pub controls_auto_hide: Duration,
    pub completion_exit_delay: Duration,
    pub drag_threshold_px: f32,
    pub snap_margin: f32,
}

impl Default for SurfaceSettings {
    fn default() -> Self {
        Config::default().settings()
    }
}

fn get_default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

pub fn load() -> Result<Config> {
    if let Some(path) = get_default_config_path() {
        if path.exists() {
            return load_from_path(&path);
        }
    }
    Ok(Config::default())
}

pub fn save(config: &Config) -> Result<()> {
    if let Some(path) = get_default_config_path() {
        return save_to_path(config, &path);
    }
    Ok(())
}

pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    match toml::from_str(&content) {
        Ok(config) => Ok(config),
        Err(err) => {
            log::warn!("ignoring invalid settings file {}: {err}", path.display());
            Ok(Config::default())
        }
    }
}

pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
