// SPDX-License-Identifier: MPL-2.0
//! The control surface: orchestrates session, gestures, overlays and chrome.
//!
//! ## Architecture
//!
//! ```text
//! surface.rs (orchestrator)
//!     ├── session   - PlaybackSession, engine commands
//!     ├── gestures  - vertical swipe interpretation
//!     ├── overlays  - brightness / volume / aspect label
//!     ├── controls  - chrome visibility and lock
//!     └── env       - brightness, orientation, system chrome
//! ```
//!
//! Every input is a [`Message`] handled with an explicit `now`. Handlers read
//! play state from the session at call time; nothing is captured ahead of
//! time. State is observed through accessors.

use std::time::Instant;

use iced_core::{Point, Size};

use super::controls::{self, ControlsVisibility};
use super::gesture::{Adjustment, DragTarget, GestureContext, GestureInterpreter, Release};
use super::overlay::{OverlayCoordinator, OverlayKind};
use super::timer::{earliest, HideTimer};
use crate::application::port::engine::ms_to_secs;
use crate::application::port::{
    AnalyticsEvent, AnalyticsKind, AnalyticsSink, DisplayEnvironment, EngineEvent, MediaEngine,
    Navigator,
};
use crate::application::{EnvironmentAdapter, PlaybackSession, SessionEffect};
use crate::config::SurfaceSettings;
use crate::domain::{snap_to_extreme, AspectMode, Brightness, Orientation, Volume};
use crate::error::ErrorInfo;

/// Source handed to the surface on mount.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaSource {
    pub uri: String,
    pub content_id: String,
    /// Position to resume from once loaded, if any.
    pub resume_position_secs: Option<f64>,
}

/// Collaborators the surface drives.
pub struct Ports {
    pub engine: Box<dyn MediaEngine>,
    pub environment: Box<dyn DisplayEnvironment>,
    pub analytics: Box<dyn AnalyticsSink>,
    pub navigator: Box<dyn Navigator>,
}

/// Every input the surface reacts to.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    // ═══════════════════════════════════════════════════════════════════════
    // POINTER
    // ═══════════════════════════════════════════════════════════════════════
    PointerDown(Point),
    PointerMoved(Point),
    PointerUp(Point),
    PointerCancelled,
    ViewportResized(Size),

    // ═══════════════════════════════════════════════════════════════════════
    // ENGINE
    // ═══════════════════════════════════════════════════════════════════════
    Engine(EngineEvent),

    // ═══════════════════════════════════════════════════════════════════════
    // COMMANDS
    // ═══════════════════════════════════════════════════════════════════════
    TogglePlayback,
    Play,
    Pause,
    SeekTo(f64),
    Rewind,
    FastForward,
    ToggleMute,
    CycleRate,
    ToggleLoop,
    ToggleLock,
    ToggleFullscreen,
    CycleAspect,
    PictureInPicture,
    /// Leave the screen (also the single action on the error screen).
    GoBack,

    // ═══════════════════════════════════════════════════════════════════════
    // SLIDERS
    // ═══════════════════════════════════════════════════════════════════════
    BrightnessSliderChanged(f32),
    BrightnessSliderReleased(f32),
    VolumeSliderChanged(f32),
    VolumeSliderReleased(f32),

    /// Fire due timers.
    Tick,
}

/// Gesture-driven playback control surface for one player screen.
pub struct ControlSurface {
    content_id: String,
    settings: SurfaceSettings,

    session: PlaybackSession,
    gestures: GestureInterpreter,
    overlays: OverlayCoordinator,
    controls: ControlsVisibility,

    engine: Box<dyn MediaEngine>,
    env: EnvironmentAdapter,
    analytics: Box<dyn AnalyticsSink>,
    navigator: Box<dyn Navigator>,

    brightness: Brightness,
    viewport: Size,
    aspect: AspectMode,
    fullscreen: bool,

    /// Delay between completion and leaving the screen.
    exit_timer: HideTimer,
    exited: bool,
    mounted: bool,
}

impl std::fmt::Debug for ControlSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ControlSurface")
            .field("content_id", &self.content_id)
            .field("session", &self.session)
            .field("controls", &self.controls.mode())
            .field("brightness", &self.brightness)
            .field("fullscreen", &self.fullscreen)
            .field("exited", &self.exited)
            .field("mounted", &self.mounted)
            .finish_non_exhaustive()
    }
}

impl ControlSurface {
    /// Mounts the surface: locks landscape, reads the device brightness and
    /// starts loading the source.
    pub fn mount(source: MediaSource, ports: Ports, settings: SurfaceSettings) -> Self {
        let Ports {
            mut engine,
            environment,
            analytics,
            navigator,
        } = ports;

        let mut env = EnvironmentAdapter::new(environment);
        env.apply_orientation_lock(Orientation::Landscape);
        let brightness = env.current_brightness();

        log::info!("mounting player for {} ({})", source.content_id, source.uri);
        engine.load(&source.uri);

        Self {
            content_id: source.content_id,
            session: PlaybackSession::new(source.resume_position_secs, settings.autoplay),
            gestures: GestureInterpreter::new(settings.drag_threshold_px),
            overlays: OverlayCoordinator::new(settings.overlay_hide_delay),
            controls: ControlsVisibility::new(settings.controls_auto_hide),
            exit_timer: HideTimer::new(settings.completion_exit_delay),
            settings,
            engine,
            env,
            analytics,
            navigator,
            brightness,
            viewport: Size::ZERO,
            aspect: AspectMode::default(),
            fullscreen: false,
            exited: false,
            mounted: true,
        }
    }

    /// Handle a surface message.
    #[allow(clippy::too_many_lines)]
    pub fn handle(&mut self, msg: Message, now: Instant) {
        if !self.mounted {
            log::debug!("ignoring {msg:?} after teardown");
            return;
        }
        if self.exited {
            return;
        }
        if self.session.phase().is_failed() {
            if msg == Message::GoBack {
                self.leave();
            }
            return;
        }

        let locked = self.controls.is_locked();

        match msg {
            // ═══════════════════════════════════════════════════════════════
            // POINTER
            // ═══════════════════════════════════════════════════════════════
            Message::PointerDown(position) => self.gestures.touch_start(position),
            Message::PointerMoved(position) => {
                let ctx = GestureContext {
                    controls_hidden: !self.controls.is_shown(),
                    locked,
                    viewport: self.viewport,
                    brightness: self.brightness.value(),
                    volume: self.session.volume().value(),
                };
                if let Some(adjustment) = self.gestures.touch_move(position, ctx) {
                    self.apply_adjustment(adjustment, now);
                }
            }
            Message::PointerUp(_) => match self.gestures.touch_end(self.viewport) {
                Release::Tap => self.on_tap(now),
                Release::Drag(target) => self.overlays.rearm(overlay_for(target), now),
                Release::Ignored => {}
            },
            Message::PointerCancelled => {
                if let Release::Drag(target) = self.gestures.touch_cancel(self.viewport) {
                    self.overlays.rearm(overlay_for(target), now);
                }
            }
            Message::ViewportResized(size) => self.viewport = size,

            // ═══════════════════════════════════════════════════════════════
            // ENGINE
            // ═══════════════════════════════════════════════════════════════
            Message::Engine(event) => self.on_engine_event(event, now),

            // ═══════════════════════════════════════════════════════════════
            // COMMANDS
            // ═══════════════════════════════════════════════════════════════
            Message::GoBack => self.leave(),
            Message::ToggleLock => {
                let playing = self.session.is_playing();
                self.update_controls(controls::Message::ToggleLock, now, playing);
            }
            Message::Tick => self.tick(now),
            _ if locked => log::debug!("ignoring {msg:?} while locked"),

            Message::TogglePlayback => self.set_playing(!self.session.is_playing(), now),
            Message::Play => self.set_playing(true, now),
            Message::Pause => self.set_playing(false, now),
            Message::SeekTo(target_secs) => self.seek(|session, engine| {
                session.seek_to(target_secs, engine);
            }),
            Message::Rewind => {
                let step = self.settings.seek_step_secs;
                self.seek(|session, engine| session.seek_by(-step, engine));
            }
            Message::FastForward => {
                let step = self.settings.seek_step_secs;
                self.seek(|session, engine| session.seek_by(step, engine));
            }
            Message::ToggleMute => {
                let muted = !self.session.is_muted();
                self.session.set_muted(muted, self.engine.as_mut());
            }
            Message::CycleRate => {
                let rate = self.session.cycle_rate(self.engine.as_mut());
                log::debug!("playback rate {}", rate.label());
            }
            Message::ToggleLoop => {
                let looping = !self.session.is_looping();
                self.session.set_looping(looping, self.engine.as_mut());
            }
            Message::ToggleFullscreen => self.set_fullscreen(!self.fullscreen),
            Message::CycleAspect => {
                self.aspect = self.aspect.next();
                self.overlays.show_aspect_label(self.aspect.label(), now);
            }
            Message::PictureInPicture => self.engine.present_picture_in_picture(),

            // ═══════════════════════════════════════════════════════════════
            // SLIDERS
            // ═══════════════════════════════════════════════════════════════
            Message::BrightnessSliderChanged(value) => self.apply_adjustment(
                Adjustment {
                    target: DragTarget::Brightness,
                    value,
                },
                now,
            ),
            Message::BrightnessSliderReleased(value) => self.apply_adjustment(
                Adjustment {
                    target: DragTarget::Brightness,
                    value: snap_to_extreme(value, self.settings.snap_margin),
                },
                now,
            ),
            Message::VolumeSliderChanged(value) => self.apply_adjustment(
                Adjustment {
                    target: DragTarget::Volume,
                    value,
                },
                now,
            ),
            Message::VolumeSliderReleased(value) => self.apply_adjustment(
                Adjustment {
                    target: DragTarget::Volume,
                    value: snap_to_extreme(value, self.settings.snap_margin),
                },
                now,
            ),
        }
    }

    /// Earliest instant at which a `Tick` would change something.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        if !self.mounted || self.exited {
            return None;
        }
        earliest([
            self.overlays.next_deadline(),
            self.controls.next_deadline(),
            self.exit_timer.deadline(),
        ])
    }

    /// Cancels all timers and restores the device. Idempotent; also run on drop.
    pub fn teardown(&mut self) {
        if !self.mounted {
            return;
        }
        self.mounted = false;

        self.overlays.hide_all();
        self.controls.cancel_timer();
        self.exit_timer.cancel();
        self.gestures.reset();

        self.env.apply_orientation_lock(Orientation::Portrait);
        self.env.set_status_bar_hidden(false);
        self.env.set_immersive_chrome(false);
        self.env.release_brightness();
        self.engine.unload();
        log::info!("player for {} torn down", self.content_id);
    }

    // ═══════════════════════════════════════════════════════════════════════
    // INTERNALS
    // ═══════════════════════════════════════════════════════════════════════

    fn on_tap(&mut self, now: Instant) {
        // A visible overlay means the touch belongs to a drag that just ended
        // or the aspect label is still up
        if self.overlays.any_visible() {
            return;
        }
        self.update_controls(controls::Message::Tap, now, self.session.is_playing());
    }

    fn update_controls(&mut self, msg: controls::Message, now: Instant, is_playing: bool) {
        match self.controls.handle(msg, now, is_playing) {
            controls::Effect::None | controls::Effect::LockChanged(false) => {}
            controls::Effect::VisibilityChanged(shown) => {
                log::debug!("controls {}", if shown { "shown" } else { "hidden" });
            }
            controls::Effect::LockChanged(true) => {
                // Locking ends any drag in progress
                if let Release::Drag(target) = self.gestures.touch_cancel(self.viewport) {
                    self.overlays.rearm(overlay_for(target), now);
                }
            }
        }
    }

    fn apply_adjustment(&mut self, adjustment: Adjustment, now: Instant) {
        match adjustment.target {
            DragTarget::Brightness => {
                self.brightness = Brightness::new(adjustment.value);
                self.env.apply_brightness(self.brightness);
                self.overlays.show_brightness(self.brightness.value(), now);
            }
            DragTarget::Volume => {
                let volume = Volume::new(adjustment.value);
                self.session.set_volume(volume, self.engine.as_mut());
                self.overlays.show_volume(volume.value(), now);
            }
        }
    }

    fn set_playing(&mut self, playing: bool, now: Instant) {
        let effect = self.session.set_playing(playing, self.engine.as_mut());
        self.apply_session_effect(effect, now);
        if playing && self.exit_timer.is_armed() {
            log::debug!("replay after completion, staying on screen");
            self.exit_timer.cancel();
        }
        self.update_controls(controls::Message::Reveal, now, self.session.is_playing());
    }

    fn seek(&mut self, op: impl FnOnce(&mut PlaybackSession, &mut dyn MediaEngine)) {
        op(&mut self.session, self.engine.as_mut());
        // Moving away from the end keeps the screen open
        if self.exit_timer.is_armed() {
            log::debug!("seek after completion, staying on screen");
            self.exit_timer.cancel();
        }
    }

    fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
        let orientation = if fullscreen {
            Orientation::Landscape
        } else {
            Orientation::Portrait
        };
        self.env.apply_orientation_lock(orientation);
        self.env.set_status_bar_hidden(fullscreen);
        self.env.set_immersive_chrome(fullscreen);
    }

    fn on_engine_event(&mut self, event: EngineEvent, now: Instant) {
        let effect = match event {
            EngineEvent::Loaded { duration_ms, error } => {
                let effect = self.session.on_engine_loaded(
                    ms_to_secs(duration_ms),
                    error.map(ErrorInfo::from_engine),
                    self.engine.as_mut(),
                );
                if self.session.phase().is_ready() {
                    log::info!("loaded {} ({duration_ms} ms)", self.content_id);
                    self.update_controls(
                        controls::Message::Reveal,
                        now,
                        self.session.is_playing(),
                    );
                }
                effect
            }
            EngineEvent::Status {
                position_ms,
                is_buffering,
                did_just_finish,
            } => self.session.on_engine_status(
                ms_to_secs(position_ms),
                is_buffering,
                did_just_finish,
            ),
            EngineEvent::SeekCompleted { id, position_ms } => {
                self.session
                    .on_seek_completed(id, position_ms, self.engine.as_mut());
                SessionEffect::None
            }
            EngineEvent::Error { message } => self
                .session
                .on_engine_error(ErrorInfo::from_engine(message)),
        };
        self.apply_session_effect(effect, now);
    }

    fn apply_session_effect(&mut self, effect: SessionEffect, now: Instant) {
        match effect {
            SessionEffect::None => {}
            SessionEffect::FirstLoad => {
                self.log_event(AnalyticsKind::VideoView, self.session.position_secs());
            }
            SessionEffect::Paused { position_secs } => {
                self.log_event(AnalyticsKind::WatchTime, position_secs);
            }
            SessionEffect::Completed { position_secs } => {
                log::info!("{} completed", self.content_id);
                self.log_event(AnalyticsKind::VideoComplete, position_secs);
                self.update_controls(controls::Message::Reveal, now, false);
                self.exit_timer.arm(now);
            }
            SessionEffect::Failed => {
                self.overlays.hide_all();
                self.update_controls(controls::Message::ForceHide, now, false);
                self.exit_timer.cancel();
                self.gestures.reset();
            }
        }
    }

    fn log_event(&self, kind: AnalyticsKind, seconds_watched: f64) {
        self.analytics
            .log_event(AnalyticsEvent::new(kind, &self.content_id, seconds_watched));
    }

    fn tick(&mut self, now: Instant) {
        self.overlays.tick(now);
        self.update_controls(controls::Message::CheckTimeout, now, self.session.is_playing());
        if self.exit_timer.fire_if_due(now) {
            self.leave();
        }
    }

    fn leave(&mut self) {
        if self.exited {
            return;
        }
        self.exited = true;
        self.exit_timer.cancel();
        self.navigator.go_back();
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn session(&self) -> &PlaybackSession {
        &self.session
    }

    #[must_use]
    pub fn controls(&self) -> &ControlsVisibility {
        &self.controls
    }

    #[must_use]
    pub fn overlays(&self) -> &OverlayCoordinator {
        &self.overlays
    }

    #[must_use]
    pub fn gestures(&self) -> &GestureInterpreter {
        &self.gestures
    }

    #[must_use]
    pub fn brightness(&self) -> Brightness {
        self.brightness
    }

    /// Opacity of the dimming scrim, shown at all times under the chrome.
    #[must_use]
    pub fn scrim_opacity(&self) -> f32 {
        self.brightness.scrim_opacity()
    }

    #[must_use]
    pub fn aspect(&self) -> AspectMode {
        self.aspect
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    #[must_use]
    pub fn viewport(&self) -> Size {
        self.viewport
    }

    #[must_use]
    pub fn content_id(&self) -> &str {
        &self.content_id
    }

    /// Returns true once the surface asked to leave the screen.
    #[must_use]
    pub fn has_exited(&self) -> bool {
        self.exited
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

impl Drop for ControlSurface {
    fn drop(&mut self) {
        self.teardown();
    }
}

fn overlay_for(target: DragTarget) -> OverlayKind {
    match target {
        DragTarget::Brightness => OverlayKind::Brightness,
        DragTarget::Volume => OverlayKind::Volume,
    }
}
