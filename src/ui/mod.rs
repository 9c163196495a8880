// SPDX-License-Identifier: MPL-2.0
//! Control surface components and state management.
//!
//! Follows the Elm-style "state down, messages up" pattern: each component
//! owns its state, reacts to messages and exposes accessors.
//!
//! # Components
//!
//! - [`surface`] - The control surface orchestrating everything below
//! - [`gesture`] - Vertical swipe interpretation (brightness / volume)
//! - [`overlay`] - Transient slider and label overlays
//! - [`controls`] - Chrome visibility and lock state machine
//! - [`timer`] - Cancellable deadline timers
//! - [`runtime`] - Tokio driver and [`SurfaceHandle`](runtime::SurfaceHandle)

pub mod controls;
pub mod gesture;
pub mod overlay;
pub mod runtime;
pub mod surface;
pub mod timer;

pub use runtime::SurfaceHandle;
pub use surface::{ControlSurface, MediaSource, Message, Ports};
