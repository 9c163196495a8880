// SPDX-License-Identifier: MPL-2.0
//! Controls chrome visibility.
//!
//! ```text
//!            tap                    lock
//!  Hidden ◀───────▶ Shown ─────────────────▶ Locked
//!    │                ▲  ◀─────────────────    │
//!    └──── lock ──────┼──────── unlock ────────┘
//!                     │
//!      auto-hide (5 s, only while playing)
//! ```
//!
//! Every transition into `Shown` cancels the auto-hide timer before deciding
//! whether to arm a new one, so a stale deadline can never hide controls the
//! user just reopened.

use std::time::{Duration, Instant};

use super::timer::HideTimer;

/// Visibility of the chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlsMode {
    Hidden,
    Shown,
    /// Chrome hidden except the unlock affordance; taps and swipes suppressed.
    Locked,
}

/// Messages for the controls state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Tap on the video surface.
    Tap,
    /// Play/pause pressed or playback (re)started: force shown, rearm per play state.
    Reveal,
    /// Lock button or unlock affordance pressed.
    ToggleLock,
    /// Check if the auto-hide deadline passed.
    CheckTimeout,
    /// Hide without touching the lock (terminal error, teardown).
    ForceHide,
}

/// Effects produced by controls visibility changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Chrome visibility changed.
    VisibilityChanged(bool),
    /// Lock changed.
    LockChanged(bool),
}

/// Controls visibility with its auto-hide timer.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlsVisibility {
    mode: ControlsMode,
    auto_hide: HideTimer,
}

impl ControlsVisibility {
    /// Starts shown, with no timer armed.
    #[must_use]
    pub fn new(auto_hide: Duration) -> Self {
        Self {
            mode: ControlsMode::Shown,
            auto_hide: HideTimer::new(auto_hide),
        }
    }

    /// Handle a controls message.
    ///
    /// `is_playing` is read at call time from the session, never cached.
    pub fn handle(&mut self, msg: Message, now: Instant, is_playing: bool) -> Effect {
        match msg {
            Message::Tap => match self.mode {
                ControlsMode::Locked => Effect::None,
                ControlsMode::Shown => {
                    self.hide();
                    Effect::VisibilityChanged(false)
                }
                ControlsMode::Hidden => {
                    self.enter_shown(now, is_playing);
                    Effect::VisibilityChanged(true)
                }
            },
            Message::Reveal => {
                if self.mode == ControlsMode::Locked {
                    return Effect::None;
                }
                let was_shown = self.mode == ControlsMode::Shown;
                self.enter_shown(now, is_playing);
                if was_shown {
                    Effect::None
                } else {
                    Effect::VisibilityChanged(true)
                }
            }
            Message::ToggleLock => {
                if self.mode == ControlsMode::Locked {
                    self.enter_shown(now, is_playing);
                    log::debug!("controls unlocked");
                    Effect::LockChanged(false)
                } else {
                    self.auto_hide.cancel();
                    self.mode = ControlsMode::Locked;
                    log::debug!("controls locked");
                    Effect::LockChanged(true)
                }
            }
            Message::CheckTimeout => {
                // Fire first so the handle is cleared even when ignored
                let fired = self.auto_hide.fire_if_due(now);
                if fired && self.mode == ControlsMode::Shown && is_playing {
                    self.mode = ControlsMode::Hidden;
                    log::debug!("controls auto-hidden");
                    Effect::VisibilityChanged(false)
                } else {
                    Effect::None
                }
            }
            Message::ForceHide => {
                self.auto_hide.cancel();
                if self.mode == ControlsMode::Shown {
                    self.mode = ControlsMode::Hidden;
                    Effect::VisibilityChanged(false)
                } else {
                    Effect::None
                }
            }
        }
    }

    fn enter_shown(&mut self, now: Instant, is_playing: bool) {
        self.auto_hide.cancel();
        self.mode = ControlsMode::Shown;
        if is_playing {
            self.auto_hide.arm(now);
        }
    }

    fn hide(&mut self) {
        self.auto_hide.cancel();
        self.mode = ControlsMode::Hidden;
    }

    /// Cancels the auto-hide timer without changing visibility.
    pub fn cancel_timer(&mut self) {
        self.auto_hide.cancel();
    }

    #[must_use]
    pub fn mode(&self) -> ControlsMode {
        self.mode
    }

    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.mode == ControlsMode::Shown
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.mode == ControlsMode::Locked
    }

    #[must_use]
    pub fn is_timer_armed(&self) -> bool {
        self.auto_hide.is_armed()
    }

    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.auto_hide.deadline()
    }
}
