// SPDX-License-Identifier: MPL-2.0
//! Cancellable one-shot deadline timer.
//!
//! Timers here do not run anything themselves. The owner arms them with the
//! current instant and later asks whether they are due; the driver sleeps
//! until the earliest deadline and sends a tick. One field per timer keeps
//! the "at most one live timer of each kind" rule structural.

use std::time::{Duration, Instant};

/// One-shot timer with a fixed delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideTimer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl HideTimer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Arms the timer `delay` after `now`, replacing any pending deadline.
    pub fn arm(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Cancels the pending deadline. No-op when idle.
    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    /// Fires the timer if its deadline has passed.
    ///
    /// Returns true exactly once per arming; the handle is cleared on fire.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    #[must_use]
    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }
}

/// Earliest of several optional deadlines.
pub fn earliest(deadlines: impl IntoIterator<Item = Option<Instant>>) -> Option<Instant> {
    deadlines.into_iter().flatten().min()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn fires_once_after_delay() {
        let t0 = Instant::now();
        let mut timer = HideTimer::new(SECOND);
        timer.arm(t0);

        assert!(!timer.fire_if_due(t0 + Duration::from_millis(999)));
        assert!(timer.fire_if_due(t0 + SECOND));
        assert!(!timer.is_armed());
        assert!(!timer.fire_if_due(t0 + SECOND * 2));
    }

    #[test]
    fn rearming_resets_countdown() {
        let t0 = Instant::now();
        let mut timer = HideTimer::new(SECOND);
        timer.arm(t0);
        timer.arm(t0 + Duration::from_millis(500));

        assert!(!timer.fire_if_due(t0 + SECOND));
        assert!(timer.fire_if_due(t0 + Duration::from_millis(1_500)));
    }

    #[test]
    fn cancel_is_idempotent() {
        let t0 = Instant::now();
        let mut timer = HideTimer::new(SECOND);
        timer.cancel();
        timer.arm(t0);
        timer.cancel();
        timer.cancel();
        assert!(!timer.fire_if_due(t0 + SECOND * 5));
    }

    #[test]
    fn earliest_skips_idle_timers() {
        let t0 = Instant::now();
        let later = t0 + SECOND;
        assert_eq!(earliest([None, Some(later), Some(t0)]), Some(t0));
        assert_eq!(earliest([None, None]), None);
    }
}
