// SPDX-License-Identifier: MPL-2.0
//! Session lifecycle phase.

use crate::error::ErrorInfo;

/// Lifecycle of a playback session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum PlaybackPhase {
    /// Source handed to the engine, waiting for the load callback.
    #[default]
    Loading,
    /// Duration known, commands are forwarded to the engine.
    Ready,
    /// Load or runtime failure. Terminal: only "go back" is honored.
    Failed(ErrorInfo),
}

impl PlaybackPhase {
    /// Returns true once the engine reported a successful load.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready)
    }

    /// Returns true if the session hit a terminal error.
    #[must_use]
    pub fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }

    /// Returns the terminal error, if any.
    #[must_use]
    pub fn error(&self) -> Option<&ErrorInfo> {
        match self {
            Self::Failed(info) => Some(info),
            _ => None,
        }
    }
}

/// Identifier the engine echoes back when a seek completes.
///
/// Ids increase monotonically within a session, so an acknowledgement
/// can be matched against the most recent request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct SeekId(pub u64);

impl SeekId {
    /// Returns the id following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_loading() {
        assert_eq!(PlaybackPhase::default(), PlaybackPhase::Loading);
        assert!(!PlaybackPhase::Loading.is_ready());
    }

    #[test]
    fn failed_exposes_error() {
        let phase = PlaybackPhase::Failed(ErrorInfo::from_engine("network timeout"));
        assert!(phase.is_failed());
        assert_eq!(phase.error().map(|e| e.message.as_str()), Some("network timeout"));
        assert!(PlaybackPhase::Ready.error().is_none());
    }

    #[test]
    fn seek_ids_increase() {
        let first = SeekId::default().next();
        assert!(first.next() > first);
    }
}
