// SPDX-License-Identifier: MPL-2.0
//! Playback newtypes.
//!
//! This module provides type-safe wrappers for the two analog quantities the
//! surface drives (volume and brightness) and the cycled playback rate.

use crate::config::{DEFAULT_PLAYBACK_RATE, PLAYBACK_RATE_PRESETS};

// =============================================================================
// Unit range helpers
// =============================================================================

/// Snaps a slider value to exactly 0 or 1 when it lands within `margin` of
/// either end. Other values are returned unchanged.
#[must_use]
pub fn snap_to_extreme(value: f32, margin: f32) -> f32 {
    if value >= 1.0 - margin {
        1.0
    } else if value <= margin {
        0.0
    } else {
        value
    }
}

fn clamp_unit(value: f32) -> f32 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

// =============================================================================
// Volume
// =============================================================================

/// Audio volume, guaranteed to be within `[0, 1]`.
///
/// # Example
///
/// ```
/// use glide_player::domain::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(2.0).value(), 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f32);

impl Volume {
    /// Full-scale volume, applied on every fresh load.
    pub const FULL: Self = Self(1.0);

    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f32) -> Self {
        Self(clamp_unit(volume))
    }

    /// Returns the volume value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::FULL
    }
}

// =============================================================================
// Brightness
// =============================================================================

/// Display brightness, guaranteed to be within `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Brightness(f32);

impl Brightness {
    /// Full brightness, used when the device level cannot be read.
    pub const FULL: Self = Self(1.0);

    /// Creates a new brightness level, clamping to valid range.
    #[must_use]
    pub fn new(brightness: f32) -> Self {
        Self(clamp_unit(brightness))
    }

    /// Returns the brightness value as f32.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Opacity of the dimming scrim layered under the chrome.
    #[must_use]
    pub fn scrim_opacity(self) -> f32 {
        1.0 - self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::FULL
    }
}

// =============================================================================
// PlaybackRate
// =============================================================================

/// Playback rate, always one of the presets `[0.5, 1, 1.5, 2]`.
///
/// ```
/// use glide_player::domain::PlaybackRate;
///
/// let rate = PlaybackRate::default();
/// assert_eq!(rate.next().value(), 1.5);
/// assert_eq!(rate.next().next().next().value(), 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackRate(f64);

impl PlaybackRate {
    /// Returns the rate value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the next preset, wrapping from the fastest back to the slowest.
    #[must_use]
    pub fn next(self) -> Self {
        let next = PLAYBACK_RATE_PRESETS
            .iter()
            .find(|&&r| r > self.0 + 0.001)
            .or_else(|| PLAYBACK_RATE_PRESETS.first())
            .copied()
            .unwrap_or(DEFAULT_PLAYBACK_RATE);
        Self(next)
    }

    /// Label shown on the rate button, e.g. `1.5x`.
    #[must_use]
    pub fn label(self) -> String {
        format!("{}x", self.0)
    }
}

impl Default for PlaybackRate {
    fn default() -> Self {
        Self(DEFAULT_PLAYBACK_RATE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn volume_clamps_to_unit_range() {
        assert_abs_diff_eq!(Volume::new(-0.5).value(), 0.0);
        assert_abs_diff_eq!(Volume::new(1.5).value(), 1.0);
        assert_abs_diff_eq!(Volume::new(0.25).value(), 0.25);
        assert_abs_diff_eq!(Volume::new(f32::NAN).value(), 0.0);
    }

    #[test]
    fn brightness_scrim_is_inverse() {
        assert_abs_diff_eq!(Brightness::new(1.0).scrim_opacity(), 0.0);
        assert_abs_diff_eq!(Brightness::new(0.25).scrim_opacity(), 0.75);
        assert_abs_diff_eq!(Brightness::new(0.0).scrim_opacity(), 1.0);
    }

    #[test]
    fn snap_moves_near_extremes_only() {
        assert_eq!(snap_to_extreme(0.985, 0.02), 1.0);
        assert_eq!(snap_to_extreme(0.01, 0.02), 0.0);
        assert_eq!(snap_to_extreme(0.5, 0.02), 0.5);
        assert_eq!(snap_to_extreme(0.97, 0.02), 0.97);
    }

    #[test]
    fn rate_cycles_through_presets_and_wraps() {
        let mut rate = PlaybackRate::default();
        let mut seen = Vec::new();
        for _ in 0..5 {
            seen.push(rate.value());
            rate = rate.next();
        }
        assert_eq!(seen, vec![1.0, 1.5, 2.0, 0.5, 1.0]);
    }

    #[test]
    fn rate_labels() {
        assert_eq!(PlaybackRate::default().label(), "1x");
        assert_eq!(PlaybackRate::default().next().label(), "1.5x");
    }
}
