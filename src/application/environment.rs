// SPDX-License-Identifier: MPL-2.0
//! Error-absorbing wrapper around a [`DisplayEnvironment`].
//!
//! Brightness, orientation and chrome calls are cosmetic: a failure is logged
//! and the caller proceeds as if the call had succeeded.

use crate::application::port::DisplayEnvironment;
use crate::domain::{Brightness, Orientation};
use crate::error::EnvironmentError;

/// Applies display side effects, logging and dropping any platform failure.
pub struct EnvironmentAdapter {
    inner: Box<dyn DisplayEnvironment>,
    brightness_overridden: bool,
}

impl std::fmt::Debug for EnvironmentAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EnvironmentAdapter")
            .field("brightness_overridden", &self.brightness_overridden)
            .finish_non_exhaustive()
    }
}

impl EnvironmentAdapter {
    pub fn new(inner: Box<dyn DisplayEnvironment>) -> Self {
        Self {
            inner,
            brightness_overridden: false,
        }
    }

    /// Reads the device brightness, falling back to full brightness.
    pub fn current_brightness(&mut self) -> Brightness {
        match self.inner.current_brightness() {
            Ok(brightness) => brightness,
            Err(err) => {
                swallow("current_brightness", &err);
                Brightness::FULL
            }
        }
    }

    pub fn apply_brightness(&mut self, brightness: Brightness) {
        self.brightness_overridden = true;
        if let Err(err) = self.inner.apply_brightness(brightness) {
            swallow("apply_brightness", &err);
        }
    }

    /// Releases the brightness override if one was applied.
    pub fn release_brightness(&mut self) {
        if !self.brightness_overridden {
            return;
        }
        self.brightness_overridden = false;
        if let Err(err) = self.inner.release_brightness() {
            swallow("release_brightness", &err);
        }
    }

    pub fn apply_orientation_lock(&mut self, orientation: Orientation) {
        if let Err(err) = self.inner.apply_orientation_lock(orientation) {
            swallow("apply_orientation_lock", &err);
        }
    }

    pub fn set_immersive_chrome(&mut self, immersive: bool) {
        if let Err(err) = self.inner.set_immersive_chrome(immersive) {
            swallow("set_immersive_chrome", &err);
        }
    }

    pub fn set_status_bar_hidden(&mut self, hidden: bool) {
        if let Err(err) = self.inner.set_status_bar_hidden(hidden) {
            swallow("set_status_bar_hidden", &err);
        }
    }

    /// Returns true while a brightness override is in effect.
    #[must_use]
    pub fn is_brightness_overridden(&self) -> bool {
        self.brightness_overridden
    }
}

fn swallow(operation: &str, err: &EnvironmentError) {
    log::warn!("display environment call {operation} ignored: {err}");
}
