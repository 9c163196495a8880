// SPDX-License-Identifier: MPL-2.0
//! Playback session: the authoritative record of what the engine is doing.
//!
//! The session is mutated by two sources:
//! - Engine callbacks (load, status, seek acknowledgement, runtime error)
//! - User commands forwarded by the control surface
//!
//! Every command that reaches the engine goes through here so that the local
//! state and the engine never disagree about intent. Analytics and navigation
//! are not the session's business; it reports them as [`SessionEffect`]s.

use crate::application::port::engine::{ms_to_secs, secs_to_ms};
use crate::application::port::MediaEngine;
use crate::domain::{PlaybackPhase, PlaybackRate, SeekId, Volume};
use crate::error::ErrorInfo;

/// Seek issued to the engine and not yet acknowledged.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PendingSeek {
    pub id: SeekId,
    pub target_secs: f64,
}

/// Effects produced by session transitions.
#[derive(Debug, Clone, PartialEq)]
pub enum SessionEffect {
    /// No effect.
    None,
    /// First successful load of this session.
    FirstLoad,
    /// Playback was paused at the given position.
    Paused { position_secs: f64 },
    /// Playback reached the end without looping.
    Completed { position_secs: f64 },
    /// Load or runtime failure; the session is now terminal.
    Failed,
}

/// State of a single playback session.
#[derive(Debug, Clone, PartialEq)]
#[allow(clippy::struct_excessive_bools)]
pub struct PlaybackSession {
    phase: PlaybackPhase,
    is_playing: bool,
    position_secs: f64,
    duration_secs: f64,
    is_buffering: bool,
    is_muted: bool,
    volume: Volume,
    rate: PlaybackRate,
    is_looping: bool,

    /// Where to resume once the source is loaded.
    resume_position_secs: Option<f64>,

    /// Most recent unacknowledged seek. Older acknowledgements are stale.
    pending_seek: Option<PendingSeek>,
    last_seek_id: SeekId,

    /// Set once completion was reported; cleared by any seek or play.
    completion_reported: bool,
    view_reported: bool,
}

impl PlaybackSession {
    /// Creates a session waiting for the engine to load.
    ///
    /// `play_on_load` is the initial play intent applied once loaded.
    pub fn new(resume_position_secs: Option<f64>, play_on_load: bool) -> Self {
        Self {
            phase: PlaybackPhase::Loading,
            is_playing: play_on_load,
            position_secs: 0.0,
            duration_secs: 0.0,
            is_buffering: false,
            is_muted: false,
            volume: Volume::FULL,
            rate: PlaybackRate::default(),
            is_looping: false,
            resume_position_secs: resume_position_secs.filter(|secs| *secs > 0.0),
            pending_seek: None,
            last_seek_id: SeekId::default(),
            completion_reported: false,
            view_reported: false,
        }
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ENGINE CALLBACKS
    // ═══════════════════════════════════════════════════════════════════════

    /// Handles the engine's load callback.
    ///
    /// On error the session becomes terminal. On success the duration is
    /// recorded, volume and mute are reset to full/unmuted, rate and loop are
    /// pushed to the engine, and play intent is applied (after a resume seek
    /// if one was requested).
    pub fn on_engine_loaded(
        &mut self,
        duration_secs: f64,
        error: Option<ErrorInfo>,
        engine: &mut dyn MediaEngine,
    ) -> SessionEffect {
        if self.phase.is_failed() {
            return SessionEffect::None;
        }
        if let Some(error) = error {
            return self.fail(error);
        }

        self.phase = PlaybackPhase::Ready;
        self.duration_secs = duration_secs.max(0.0);
        self.position_secs = self.position_secs.min(self.duration_secs);

        // Every fresh load starts at full volume, unmuted
        self.volume = Volume::FULL;
        self.is_muted = false;
        engine.set_volume(self.volume);
        engine.set_muted(false);
        engine.set_rate(self.rate);
        engine.set_looping(self.is_looping);

        match self.resume_position_secs.take() {
            // Play intent is applied when the seek is acknowledged
            Some(resume) => self.seek_to(resume, engine),
            None => self.apply_play_intent(engine),
        }

        if self.view_reported {
            SessionEffect::None
        } else {
            self.view_reported = true;
            SessionEffect::FirstLoad
        }
    }

    /// Handles a periodic status update.
    ///
    /// Positions reported while a seek is in flight are ignored: the target
    /// stays displayed until the engine acknowledges.
    pub fn on_engine_status(
        &mut self,
        position_secs: f64,
        is_buffering: bool,
        did_just_finish: bool,
    ) -> SessionEffect {
        if !self.phase.is_ready() {
            return SessionEffect::None;
        }

        self.is_buffering = is_buffering;
        if self.pending_seek.is_none() {
            self.position_secs = position_secs.clamp(0.0, self.duration_secs);
        }

        if did_just_finish && !self.is_looping && !self.completion_reported {
            self.completion_reported = true;
            self.is_playing = false;
            return SessionEffect::Completed {
                position_secs: self.position_secs,
            };
        }
        SessionEffect::None
    }

    /// Handles the engine's acknowledgement of a seek.
    ///
    /// Only the latest seek counts. Its acknowledgement re-applies the
    /// current play intent so that seeking never unpauses a paused session.
    pub fn on_seek_completed(
        &mut self,
        id: SeekId,
        position_ms: u64,
        engine: &mut dyn MediaEngine,
    ) {
        match self.pending_seek {
            Some(pending) if pending.id == id => {
                self.pending_seek = None;
                self.position_secs = ms_to_secs(position_ms).clamp(0.0, self.duration_secs);
                self.apply_play_intent(engine);
            }
            _ => log::debug!("ignoring superseded seek acknowledgement {id:?}"),
        }
    }

    /// Handles a runtime engine error. Terminal.
    pub fn on_engine_error(&mut self, error: ErrorInfo) -> SessionEffect {
        if self.phase.is_failed() {
            return SessionEffect::None;
        }
        self.fail(error)
    }

    // ═══════════════════════════════════════════════════════════════════════
    // COMMANDS
    // ═══════════════════════════════════════════════════════════════════════

    /// Plays or pauses.
    ///
    /// Before load only the intent is recorded. Pausing reports the position
    /// reached so the caller can log watch time.
    pub fn set_playing(&mut self, playing: bool, engine: &mut dyn MediaEngine) -> SessionEffect {
        if self.phase.is_failed() {
            return SessionEffect::None;
        }
        self.is_playing = playing;
        if !self.phase.is_ready() {
            return SessionEffect::None;
        }

        if playing {
            // Replaying from the end may complete again
            self.completion_reported = false;
            engine.play();
            SessionEffect::None
        } else {
            engine.pause();
            SessionEffect::Paused {
                position_secs: self.position_secs,
            }
        }
    }

    /// Seeks to `target_secs`, clamped to `[0, duration]`.
    ///
    /// A newer seek supersedes any pending one; the engine's status stream
    /// remains the source of truth for the final position.
    pub fn seek_to(&mut self, target_secs: f64, engine: &mut dyn MediaEngine) {
        if !self.phase.is_ready() {
            return;
        }
        let clamped = if target_secs.is_nan() {
            0.0
        } else {
            target_secs.clamp(0.0, self.duration_secs)
        };

        self.last_seek_id = self.last_seek_id.next();
        self.pending_seek = Some(PendingSeek {
            id: self.last_seek_id,
            target_secs: clamped,
        });
        self.position_secs = clamped;
        self.completion_reported = false;

        log::debug!("seek {:?} to {clamped:.3}s", self.last_seek_id);
        engine.seek(secs_to_ms(clamped), self.last_seek_id);
    }

    /// Seeks relative to the current (or pending target) position.
    pub fn seek_by(&mut self, delta_secs: f64, engine: &mut dyn MediaEngine) {
        let base = self
            .pending_seek
            .map_or(self.position_secs, |pending| pending.target_secs);
        self.seek_to(base + delta_secs, engine);
    }

    pub fn set_muted(&mut self, muted: bool, engine: &mut dyn MediaEngine) {
        if self.phase.is_failed() {
            return;
        }
        self.is_muted = muted;
        engine.set_muted(muted);
    }

    pub fn set_volume(&mut self, volume: Volume, engine: &mut dyn MediaEngine) {
        if self.phase.is_failed() {
            return;
        }
        self.volume = volume;
        engine.set_volume(volume);
    }

    /// Advances to the next rate preset.
    pub fn cycle_rate(&mut self, engine: &mut dyn MediaEngine) -> PlaybackRate {
        self.set_rate(self.rate.next(), engine);
        self.rate
    }

    pub fn set_rate(&mut self, rate: PlaybackRate, engine: &mut dyn MediaEngine) {
        if self.phase.is_failed() {
            return;
        }
        self.rate = rate;
        engine.set_rate(rate);
    }

    pub fn set_looping(&mut self, looping: bool, engine: &mut dyn MediaEngine) {
        if self.phase.is_failed() {
            return;
        }
        self.is_looping = looping;
        engine.set_looping(looping);
    }

    fn apply_play_intent(&self, engine: &mut dyn MediaEngine) {
        if self.is_playing {
            engine.play();
        } else {
            engine.pause();
        }
    }

    fn fail(&mut self, error: ErrorInfo) -> SessionEffect {
        log::info!("playback failed ({:?}): {}", error.kind, error.message);
        self.phase = PlaybackPhase::Failed(error);
        self.is_playing = false;
        self.is_buffering = false;
        self.pending_seek = None;
        SessionEffect::Failed
    }

    // ═══════════════════════════════════════════════════════════════════════
    // ACCESSORS
    // ═══════════════════════════════════════════════════════════════════════

    #[must_use]
    pub fn phase(&self) -> &PlaybackPhase {
        &self.phase
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn position_secs(&self) -> f64 {
        self.position_secs
    }

    #[must_use]
    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    #[must_use]
    pub fn is_buffering(&self) -> bool {
        self.is_buffering
    }

    #[must_use]
    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    #[must_use]
    pub fn volume(&self) -> Volume {
        self.volume
    }

    #[must_use]
    pub fn rate(&self) -> PlaybackRate {
        self.rate
    }

    #[must_use]
    pub fn is_looping(&self) -> bool {
        self.is_looping
    }

    /// Returns the terminal error, if any.
    #[must_use]
    pub fn last_error(&self) -> Option<&ErrorInfo> {
        self.phase.error()
    }

    #[must_use]
    pub fn pending_seek(&self) -> Option<PendingSeek> {
        self.pending_seek
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::recording::{EngineCall, RecordingEngine};
    use crate::test_utils::assert_abs_diff_eq;

    fn loaded(play: bool) -> (PlaybackSession, RecordingEngine) {
        let mut engine = RecordingEngine::default();
        let mut session = PlaybackSession::new(None, play);
        session.on_engine_loaded(120.0, None, &mut engine);
        engine.clear();
        (session, engine)
    }

    #[test]
    fn new_session_is_loading_at_zero() {
        let session = PlaybackSession::new(Some(30.0), true);
        assert!(!session.phase().is_ready());
        assert_abs_diff_eq!(session.position_secs(), 0.0);
        assert_abs_diff_eq!(session.duration_secs(), 0.0);
    }

    #[test]
    fn load_resets_volume_and_mute() {
        let mut engine = RecordingEngine::default();
        let mut session = PlaybackSession::new(None, true);
        session.set_volume(Volume::new(0.2), &mut engine);
        session.set_muted(true, &mut engine);

        let effect = session.on_engine_loaded(120.0, None, &mut engine);

        assert_eq!(effect, SessionEffect::FirstLoad);
        assert_abs_diff_eq!(session.volume().value(), 1.0);
        assert!(!session.is_muted());
        assert!(engine.calls().contains(&EngineCall::SetMuted(false)));
        assert_eq!(engine.calls().last(), Some(&EngineCall::Play));
    }

    #[test]
    fn second_load_does_not_report_view_again() {
        let (mut session, mut engine) = loaded(true);
        assert_eq!(
            session.on_engine_loaded(120.0, None, &mut engine),
            SessionEffect::None
        );
    }

    #[test]
    fn load_error_is_terminal() {
        let mut engine = RecordingEngine::default();
        let mut session = PlaybackSession::new(None, true);
        let effect = session.on_engine_loaded(
            0.0,
            Some(ErrorInfo::from_engine("404 not found")),
            &mut engine,
        );

        assert_eq!(effect, SessionEffect::Failed);
        assert!(session.last_error().is_some());
        assert!(engine.calls().is_empty());

        session.set_playing(true, &mut engine);
        session.seek_to(10.0, &mut engine);
        assert!(engine.calls().is_empty());
        assert!(!session.is_playing());
    }

    #[test]
    fn resume_position_seeks_before_playing() {
        let mut engine = RecordingEngine::default();
        let mut session = PlaybackSession::new(Some(42.0), true);
        session.on_engine_loaded(120.0, None, &mut engine);

        let pending = session.pending_seek().expect("resume seek issued");
        assert_eq!(engine.calls().last(), Some(&EngineCall::Seek(42_000, pending.id)));
        assert!(!engine.calls().contains(&EngineCall::Play));

        session.on_seek_completed(pending.id, 42_000, &mut engine);
        assert_eq!(engine.calls().last(), Some(&EngineCall::Play));
    }

    #[test]
    fn seek_preserves_pause_state() {
        for playing in [true, false] {
            let (mut session, mut engine) = loaded(playing);
            session.seek_to(60.0, &mut engine);
            let id = session.pending_seek().map(|p| p.id).expect("pending");
            session.on_seek_completed(id, 60_000, &mut engine);

            assert_eq!(session.is_playing(), playing);
            let expected = if playing { EngineCall::Play } else { EngineCall::Pause };
            assert_eq!(engine.calls().last(), Some(&expected));
        }
    }

    #[test]
    fn seek_clamps_to_duration() {
        let (mut session, mut engine) = loaded(false);
        session.seek_to(500.0, &mut engine);
        assert_abs_diff_eq!(session.position_secs(), 120.0);
        session.seek_to(-5.0, &mut engine);
        assert_abs_diff_eq!(session.position_secs(), 0.0);
    }

    #[test]
    fn superseded_seek_acknowledgement_is_ignored() {
        let (mut session, mut engine) = loaded(false);
        session.seek_to(10.0, &mut engine);
        let first = session.pending_seek().map(|p| p.id).expect("pending");
        session.seek_to(20.0, &mut engine);
        engine.clear();

        session.on_seek_completed(first, 10_000, &mut engine);
        assert!(engine.calls().is_empty());
        assert_abs_diff_eq!(session.position_secs(), 20.0);
        assert!(session.pending_seek().is_some());
    }

    #[test]
    fn seek_by_uses_pending_target() {
        let (mut session, mut engine) = loaded(true);
        session.seek_to(50.0, &mut engine);
        session.seek_by(10.0, &mut engine);
        assert_abs_diff_eq!(session.position_secs(), 60.0);
    }

    #[test]
    fn status_is_ignored_while_seeking() {
        let (mut session, mut engine) = loaded(true);
        session.seek_to(80.0, &mut engine);
        session.on_engine_status(3.0, true, false);
        assert_abs_diff_eq!(session.position_secs(), 80.0);
        assert!(session.is_buffering());
    }

    #[test]
    fn completion_is_reported_once() {
        let (mut session, _engine) = loaded(true);
        let first = session.on_engine_status(120.0, false, true);
        let second = session.on_engine_status(120.0, false, true);

        assert_eq!(first, SessionEffect::Completed { position_secs: 120.0 });
        assert_eq!(second, SessionEffect::None);
        assert!(!session.is_playing());
    }

    #[test]
    fn replay_after_completion_can_complete_again() {
        let (mut session, mut engine) = loaded(true);
        session.on_engine_status(120.0, false, true);
        session.set_playing(true, &mut engine);

        assert!(session.is_playing());
        assert_eq!(
            session.on_engine_status(120.0, false, true),
            SessionEffect::Completed { position_secs: 120.0 }
        );
    }

    #[test]
    fn looping_session_never_completes() {
        let (mut session, mut engine) = loaded(true);
        session.set_looping(true, &mut engine);
        assert_eq!(session.on_engine_status(120.0, false, true), SessionEffect::None);
    }

    #[test]
    fn pause_reports_position() {
        let (mut session, mut engine) = loaded(true);
        session.on_engine_status(33.5, false, false);
        let effect = session.set_playing(false, &mut engine);
        assert_eq!(effect, SessionEffect::Paused { position_secs: 33.5 });
        assert_eq!(engine.calls(), vec![EngineCall::Pause]);
    }

    #[test]
    fn rate_cycle_is_forwarded() {
        let (mut session, mut engine) = loaded(true);
        let rate = session.cycle_rate(&mut engine);
        assert_abs_diff_eq!(rate.value(), 1.5);
        assert_eq!(engine.calls(), vec![EngineCall::SetRate(1.5)]);
    }
}
