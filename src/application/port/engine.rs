// SPDX-License-Identifier: MPL-2.0
//! Media engine port definition.
//!
//! This module defines the [`MediaEngine`] trait for the opaque decode/render
//! component and the [`EngineEvent`]s it reports back.
//!
//! # Design Notes
//!
//! - Methods are fire-and-forget and never block: completions arrive later as
//!   [`EngineEvent`]s posted to the surface's message channel
//! - Positions cross this boundary in milliseconds, the session works in seconds
//! - Uses domain types only ([`Volume`], [`PlaybackRate`], [`SeekId`])

use crate::domain::{PlaybackRate, SeekId, Volume};

/// Port for the media engine driven by the control surface.
///
/// # Lifecycle
///
/// 1. `load()` the source; the engine answers with [`EngineEvent::Loaded`]
/// 2. Transport commands (`play`, `pause`, `seek`, ...) while mounted
/// 3. Continuous [`EngineEvent::Status`] updates
/// 4. `unload()` on teardown; later events are ignored by the surface
pub trait MediaEngine: Send {
    /// Starts loading a source.
    fn load(&mut self, uri: &str);

    /// Releases the engine and any decoder resources.
    fn unload(&mut self);

    fn play(&mut self);

    fn pause(&mut self);

    /// Seeks to `position_ms`. The engine must acknowledge with
    /// [`EngineEvent::SeekCompleted`] carrying the same `id`.
    fn seek(&mut self, position_ms: u64, id: SeekId);

    fn set_volume(&mut self, volume: Volume);

    fn set_muted(&mut self, muted: bool);

    fn set_rate(&mut self, rate: PlaybackRate);

    fn set_looping(&mut self, looping: bool);

    fn present_picture_in_picture(&mut self);
}

/// Callback events emitted by the media engine.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineEvent {
    /// Load finished, successfully or not.
    Loaded {
        duration_ms: u64,
        error: Option<String>,
    },
    /// Periodic playback status.
    Status {
        position_ms: u64,
        is_buffering: bool,
        did_just_finish: bool,
    },
    /// A seek request was applied.
    SeekCompleted { id: SeekId, position_ms: u64 },
    /// Runtime error mid-stream.
    Error { message: String },
}

/// Converts engine milliseconds to session seconds.
#[must_use]
pub fn ms_to_secs(ms: u64) -> f64 {
    ms as f64 / 1000.0
}

/// Converts session seconds to engine milliseconds, flooring negatives to zero.
#[must_use]
pub fn secs_to_ms(secs: f64) -> u64 {
    (secs.max(0.0) * 1000.0).round() as u64
}
