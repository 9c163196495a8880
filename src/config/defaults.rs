// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the control surface. Constants are organized by category.
//!
//! # Categories
//!
//! - **Overlay**: Brightness/volume/aspect overlay auto-hide
//! - **Controls**: Chrome auto-hide while playing
//! - **Gesture**: Swipe claim threshold
//! - **Playback**: Seek step, rate presets, completion exit delay

// ==========================================================================
// Overlay Defaults
// ==========================================================================

/// Default auto-hide delay for the brightness, volume and aspect overlays (ms).
pub const DEFAULT_OVERLAY_HIDE_MS: u64 = 1_000;

/// Minimum overlay hide delay (ms).
pub const MIN_OVERLAY_HIDE_MS: u64 = 250;

/// Maximum overlay hide delay (ms).
pub const MAX_OVERLAY_HIDE_MS: u64 = 10_000;

/// Slider values this close to 0 or 1 snap to the extreme on release.
pub const DEFAULT_SNAP_MARGIN: f32 = 0.02;

/// Maximum snap margin.
pub const MAX_SNAP_MARGIN: f32 = 0.1;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default auto-hide timeout for the controls chrome while playing (seconds).
pub const DEFAULT_CONTROLS_AUTO_HIDE_SECS: u32 = 5;

/// Minimum controls auto-hide timeout (seconds).
pub const MIN_CONTROLS_AUTO_HIDE_SECS: u32 = 1;

/// Maximum controls auto-hide timeout (seconds).
pub const MAX_CONTROLS_AUTO_HIDE_SECS: u32 = 30;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Vertical travel (logical px) a touch needs before it can be claimed.
pub const DEFAULT_DRAG_THRESHOLD_PX: f32 = 10.0;

/// Minimum drag threshold (logical px).
pub const MIN_DRAG_THRESHOLD_PX: f32 = 2.0;

/// Maximum drag threshold (logical px).
pub const MAX_DRAG_THRESHOLD_PX: f32 = 100.0;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Rewind / fast-forward step (seconds).
pub const DEFAULT_SEEK_STEP_SECS: f64 = 10.0;

/// Minimum seek step (seconds).
pub const MIN_SEEK_STEP_SECS: f64 = 1.0;

/// Maximum seek step (seconds).
pub const MAX_SEEK_STEP_SECS: f64 = 60.0;

/// Delay between completion and leaving the screen (ms).
pub const DEFAULT_COMPLETION_EXIT_DELAY_MS: u64 = 1_500;

/// Maximum completion exit delay (ms).
pub const MAX_COMPLETION_EXIT_DELAY_MS: u64 = 10_000;

/// Playback rates cycled by the rate button, in order.
pub const PLAYBACK_RATE_PRESETS: &[f64] = &[0.5, 1.0, 1.5, 2.0];

/// Rate a fresh session starts at.
pub const DEFAULT_PLAYBACK_RATE: f64 = 1.0;

/// Whether playback starts as soon as the source is loaded.
pub const DEFAULT_AUTOPLAY: bool = true;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_OVERLAY_HIDE_MS > 0);
    assert!(DEFAULT_OVERLAY_HIDE_MS >= MIN_OVERLAY_HIDE_MS);
    assert!(DEFAULT_OVERLAY_HIDE_MS <= MAX_OVERLAY_HIDE_MS);
    assert!(DEFAULT_SNAP_MARGIN >= 0.0);
    assert!(DEFAULT_SNAP_MARGIN <= MAX_SNAP_MARGIN);

    assert!(MIN_CONTROLS_AUTO_HIDE_SECS > 0);
    assert!(DEFAULT_CONTROLS_AUTO_HIDE_SECS >= MIN_CONTROLS_AUTO_HIDE_SECS);
    assert!(DEFAULT_CONTROLS_AUTO_HIDE_SECS <= MAX_CONTROLS_AUTO_HIDE_SECS);

    assert!(MIN_DRAG_THRESHOLD_PX > 0.0);
    assert!(DEFAULT_DRAG_THRESHOLD_PX >= MIN_DRAG_THRESHOLD_PX);
    assert!(DEFAULT_DRAG_THRESHOLD_PX <= MAX_DRAG_THRESHOLD_PX);

    assert!(MIN_SEEK_STEP_SECS > 0.0);
    assert!(DEFAULT_SEEK_STEP_SECS >= MIN_SEEK_STEP_SECS);
    assert!(DEFAULT_SEEK_STEP_SECS <= MAX_SEEK_STEP_SECS);
    assert!(DEFAULT_COMPLETION_EXIT_DELAY_MS <= MAX_COMPLETION_EXIT_DELAY_MS);
};
