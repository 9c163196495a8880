// SPDX-License-Identifier: MPL-2.0
//! Display environment port definition.
//!
//! Platform calls for brightness, orientation and system chrome. Any of them
//! may be unavailable on a given platform; callers go through
//! [`EnvironmentAdapter`](crate::application::EnvironmentAdapter), which logs
//! and drops the errors.

use crate::domain::{Brightness, Orientation};
use crate::error::EnvironmentError;

/// Port for device display and chrome control.
pub trait DisplayEnvironment: Send {
    /// Reads the current device brightness.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the platform cannot report it.
    fn current_brightness(&mut self) -> Result<Brightness, EnvironmentError>;

    /// Overrides the device brightness.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the platform call fails.
    fn apply_brightness(&mut self, brightness: Brightness) -> Result<(), EnvironmentError>;

    /// Gives brightness control back to the system.
    ///
    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the platform call fails.
    fn release_brightness(&mut self) -> Result<(), EnvironmentError>;

    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the platform call fails.
    fn apply_orientation_lock(&mut self, orientation: Orientation)
        -> Result<(), EnvironmentError>;

    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the platform call fails.
    fn set_immersive_chrome(&mut self, immersive: bool) -> Result<(), EnvironmentError>;

    /// # Errors
    ///
    /// Returns an [`EnvironmentError`] if the platform call fails.
    fn set_status_bar_hidden(&mut self, hidden: bool) -> Result<(), EnvironmentError>;
}
