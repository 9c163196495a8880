// SPDX-License-Identifier: MPL-2.0
//! Transient overlays: brightness slider, volume slider, aspect label.
//!
//! Each overlay owns one hide timer. Showing an overlay cancels its pending
//! timer and arms a fresh one, so re-triggering resets the countdown instead
//! of stacking. Brightness and volume are mutually exclusive.

use std::time::{Duration, Instant};

use super::timer::{earliest, HideTimer};

/// Identifies one of the three overlays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayKind {
    Brightness,
    Volume,
    AspectLabel,
}

/// Visibility and displayed value of a single overlay.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayState<T> {
    visible: bool,
    content: T,
    timer: HideTimer,
}

impl<T> OverlayState<T> {
    fn new(content: T, delay: Duration) -> Self {
        Self {
            visible: false,
            content,
            timer: HideTimer::new(delay),
        }
    }

    fn show(&mut self, content: T, now: Instant) {
        self.content = content;
        self.visible = true;
        self.timer.arm(now);
    }

    fn hide(&mut self) {
        self.visible = false;
        self.timer.cancel();
    }

    fn fire_if_due(&mut self, now: Instant) -> bool {
        if self.timer.fire_if_due(now) {
            self.visible = false;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    #[must_use]
    pub fn content(&self) -> &T {
        &self.content
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.timer.is_armed()
    }
}

/// Coordinates the three overlays and their timers.
#[derive(Debug, Clone, PartialEq)]
pub struct OverlayCoordinator {
    brightness: OverlayState<f32>,
    volume: OverlayState<f32>,
    aspect: OverlayState<&'static str>,
}

impl OverlayCoordinator {
    #[must_use]
    pub fn new(hide_delay: Duration) -> Self {
        Self {
            brightness: OverlayState::new(0.0, hide_delay),
            volume: OverlayState::new(0.0, hide_delay),
            aspect: OverlayState::new("", hide_delay),
        }
    }

    /// Shows the brightness slider, hiding the volume slider immediately.
    pub fn show_brightness(&mut self, value: f32, now: Instant) {
        self.volume.hide();
        self.brightness.show(value, now);
    }

    /// Shows the volume slider, hiding the brightness slider immediately.
    pub fn show_volume(&mut self, value: f32, now: Instant) {
        self.brightness.hide();
        self.volume.show(value, now);
    }

    /// Shows the aspect label. Independent of the sliders.
    pub fn show_aspect_label(&mut self, label: &'static str, now: Instant) {
        self.aspect.show(label, now);
    }

    /// Restarts the hide countdown of a visible overlay.
    pub fn rearm(&mut self, kind: OverlayKind, now: Instant) {
        match kind {
            OverlayKind::Brightness if self.brightness.visible => self.brightness.timer.arm(now),
            OverlayKind::Volume if self.volume.visible => self.volume.timer.arm(now),
            OverlayKind::AspectLabel if self.aspect.visible => self.aspect.timer.arm(now),
            _ => {}
        }
    }

    /// Hides every overlay and cancels every timer.
    pub fn hide_all(&mut self) {
        self.brightness.hide();
        self.volume.hide();
        self.aspect.hide();
    }

    /// Fires due timers. Returns true if any overlay was hidden.
    pub fn tick(&mut self, now: Instant) -> bool {
        let brightness = self.brightness.fire_if_due(now);
        let volume = self.volume.fire_if_due(now);
        let aspect = self.aspect.fire_if_due(now);
        brightness || volume || aspect
    }

    /// Earliest pending hide deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        earliest([
            self.brightness.timer.deadline(),
            self.volume.timer.deadline(),
            self.aspect.timer.deadline(),
        ])
    }

    /// Returns true if the brightness or volume slider is on screen.
    #[must_use]
    pub fn slider_visible(&self) -> bool {
        self.brightness.visible || self.volume.visible
    }

    /// Returns true if any overlay, the aspect label included, is on screen.
    #[must_use]
    pub fn any_visible(&self) -> bool {
        self.slider_visible() || self.aspect.visible
    }

    #[must_use]
    pub fn is_visible(&self, kind: OverlayKind) -> bool {
        match kind {
            OverlayKind::Brightness => self.brightness.visible,
            OverlayKind::Volume => self.volume.visible,
            OverlayKind::AspectLabel => self.aspect.visible,
        }
    }

    #[must_use]
    pub fn brightness(&self) -> &OverlayState<f32> {
        &self.brightness
    }

    #[must_use]
    pub fn volume(&self) -> &OverlayState<f32> {
        &self.volume
    }

    #[must_use]
    pub fn aspect_label(&self) -> &OverlayState<&'static str> {
        &self.aspect
    }
}
