// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the collaborators the control surface drives. These
//! traits use only domain types, so the surface stays independent of any
//! concrete player, platform or analytics backend.
//!
//! # Available Ports
//!
//! - [`engine`]: Media engine commands and callback events
//! - [`analytics`]: Fire-and-forget event logging
//! - [`navigation`]: Leaving the player screen
//! - [`environment`]: Brightness, orientation and system chrome
//!
//! # Design Notes
//!
//! - All traits are `Send` so a surface can be moved onto a driver task
//! - No `async fn`: results come back as messages
//!
//! # Example
//!
//! ```ignore
//! use glide_player::application::port::engine::MediaEngine;
//!
//! fn restart(engine: &mut impl MediaEngine) {
//!     engine.seek(0, glide_player::domain::SeekId(1));
//!     engine.play();
//! }
//! ```

pub mod analytics;
pub mod engine;
pub mod environment;
pub mod navigation;

pub use analytics::{AnalyticsEvent, AnalyticsKind, AnalyticsSink};
pub use engine::{EngineEvent, MediaEngine};
pub use environment::DisplayEnvironment;
pub use navigation::Navigator;
