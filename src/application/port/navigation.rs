// SPDX-License-Identifier: MPL-2.0
//! Navigation port definition.

/// Port for leaving the player screen.
pub trait Navigator: Send {
    /// Pops the player screen.
    fn go_back(&mut self);
}
