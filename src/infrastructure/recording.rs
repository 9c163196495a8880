// SPDX-License-Identifier: MPL-2.0
//! Recording adapters.
//!
//! Port implementations that log every call and keep a shared record of it.
//! The demo binary runs on them, and tests use them to observe what the
//! surface asked its collaborators to do.
//!
//! Each adapter is cheap to clone; clones share the same record.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::port::{DisplayEnvironment, EngineEvent, MediaEngine, Navigator};
use crate::domain::{Brightness, Orientation, PlaybackRate, SeekId, Volume};
use crate::error::EnvironmentError;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

// =============================================================================
// Engine
// =============================================================================

/// A command received by [`RecordingEngine`].
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCall {
    Load(String),
    Unload,
    Play,
    Pause,
    Seek(u64, SeekId),
    SetVolume(f32),
    SetMuted(bool),
    SetRate(f64),
    SetLooping(bool),
    PictureInPicture,
}

/// Callback used to post engine events back to the surface.
pub type EventSink = Arc<dyn Fn(EngineEvent) + Send + Sync>;

/// Media engine that records commands.
///
/// With a responder attached it also answers like a real engine would:
/// `load` reports the configured duration and `seek` is acknowledged
/// immediately.
#[derive(Clone, Default)]
pub struct RecordingEngine {
    calls: Arc<Mutex<Vec<EngineCall>>>,
    responder: Option<(EventSink, u64)>,
}

impl std::fmt::Debug for RecordingEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordingEngine")
            .field("calls", &lock(&self.calls).len())
            .field("responds", &self.responder.is_some())
            .finish()
    }
}

impl RecordingEngine {
    /// Creates an engine that answers `load` and `seek` through `sink`.
    pub fn responding(sink: EventSink, duration_ms: u64) -> Self {
        Self {
            calls: Arc::default(),
            responder: Some((sink, duration_ms)),
        }
    }

    /// Returns a snapshot of the commands received so far.
    #[must_use]
    pub fn calls(&self) -> Vec<EngineCall> {
        lock(&self.calls).clone()
    }

    /// Forgets the recorded commands.
    pub fn clear(&self) {
        lock(&self.calls).clear();
    }

    fn record(&self, call: EngineCall) {
        log::info!("engine <- {call:?}");
        lock(&self.calls).push(call);
    }

    fn respond(&self, event: EngineEvent) {
        if let Some((sink, _)) = &self.responder {
            sink(event);
        }
    }
}

impl MediaEngine for RecordingEngine {
    fn load(&mut self, uri: &str) {
        self.record(EngineCall::Load(uri.to_string()));
        if let Some((_, duration_ms)) = &self.responder {
            let duration_ms = *duration_ms;
            self.respond(EngineEvent::Loaded {
                duration_ms,
                error: None,
            });
        }
    }

    fn unload(&mut self) {
        self.record(EngineCall::Unload);
    }

    fn play(&mut self) {
        self.record(EngineCall::Play);
    }

    fn pause(&mut self) {
        self.record(EngineCall::Pause);
    }

    fn seek(&mut self, position_ms: u64, id: SeekId) {
        self.record(EngineCall::Seek(position_ms, id));
        self.respond(EngineEvent::SeekCompleted { id, position_ms });
    }

    fn set_volume(&mut self, volume: Volume) {
        self.record(EngineCall::SetVolume(volume.value()));
    }

    fn set_muted(&mut self, muted: bool) {
        self.record(EngineCall::SetMuted(muted));
    }

    fn set_rate(&mut self, rate: PlaybackRate) {
        self.record(EngineCall::SetRate(rate.value()));
    }

    fn set_looping(&mut self, looping: bool) {
        self.record(EngineCall::SetLooping(looping));
    }

    fn present_picture_in_picture(&mut self) {
        self.record(EngineCall::PictureInPicture);
    }
}

// =============================================================================
// Display environment
// =============================================================================

/// A call received by [`RecordingEnvironment`].
#[derive(Debug, Clone, PartialEq)]
pub enum EnvironmentCall {
    ApplyBrightness(f32),
    ReleaseBrightness,
    Orientation(Orientation),
    Immersive(bool),
    StatusBarHidden(bool),
}

/// Display environment that records calls.
///
/// `unavailable()` builds one where every call fails, the way a platform
/// without brightness or orientation APIs behaves.
#[derive(Debug, Clone)]
pub struct RecordingEnvironment {
    calls: Arc<Mutex<Vec<EnvironmentCall>>>,
    device_brightness: Brightness,
    fail: bool,
}

impl Default for RecordingEnvironment {
    fn default() -> Self {
        Self::with_brightness(Brightness::new(0.6))
    }
}

impl RecordingEnvironment {
    pub fn with_brightness(device_brightness: Brightness) -> Self {
        Self {
            calls: Arc::default(),
            device_brightness,
            fail: false,
        }
    }

    pub fn unavailable() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn calls(&self) -> Vec<EnvironmentCall> {
        lock(&self.calls).clone()
    }

    pub fn clear(&self) {
        lock(&self.calls).clear();
    }

    fn record(&self, call: EnvironmentCall) -> Result<(), EnvironmentError> {
        log::info!("environment <- {call:?}");
        lock(&self.calls).push(call);
        if self.fail {
            Err(EnvironmentError::Unavailable("display control"))
        } else {
            Ok(())
        }
    }
}

impl DisplayEnvironment for RecordingEnvironment {
    fn current_brightness(&mut self) -> Result<Brightness, EnvironmentError> {
        if self.fail {
            Err(EnvironmentError::Unavailable("brightness"))
        } else {
            Ok(self.device_brightness)
        }
    }

    fn apply_brightness(&mut self, brightness: Brightness) -> Result<(), EnvironmentError> {
        self.record(EnvironmentCall::ApplyBrightness(brightness.value()))
    }

    fn release_brightness(&mut self) -> Result<(), EnvironmentError> {
        self.record(EnvironmentCall::ReleaseBrightness)
    }

    fn apply_orientation_lock(
        &mut self,
        orientation: Orientation,
    ) -> Result<(), EnvironmentError> {
        self.record(EnvironmentCall::Orientation(orientation))
    }

    fn set_immersive_chrome(&mut self, immersive: bool) -> Result<(), EnvironmentError> {
        self.record(EnvironmentCall::Immersive(immersive))
    }

    fn set_status_bar_hidden(&mut self, hidden: bool) -> Result<(), EnvironmentError> {
        self.record(EnvironmentCall::StatusBarHidden(hidden))
    }
}

// =============================================================================
// Navigator
// =============================================================================

/// Navigator that counts `go_back` calls.
#[derive(Debug, Clone, Default)]
pub struct RecordingNavigator {
    back_count: Arc<Mutex<usize>>,
}

impl RecordingNavigator {
    #[must_use]
    pub fn back_count(&self) -> usize {
        *lock(&self.back_count)
    }
}

impl Navigator for RecordingNavigator {
    fn go_back(&mut self) {
        log::info!("navigator <- go_back");
        *lock(&self.back_count) += 1;
    }
}
