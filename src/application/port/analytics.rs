// SPDX-License-Identifier: MPL-2.0
//! Analytics port definition.
//!
//! Fire-and-forget: sinks must not block and must swallow their own failures.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of analytics event the surface emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalyticsKind {
    /// First successful load of a session.
    VideoView,
    /// Playback paused; carries the position reached.
    WatchTime,
    /// Playback reached the end without looping.
    VideoComplete,
}

/// A single analytics record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsEvent {
    pub kind: AnalyticsKind,
    pub content_id: String,
    pub seconds_watched: f64,
    pub at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Creates an event stamped with the current time.
    pub fn new(kind: AnalyticsKind, content_id: impl Into<String>, seconds_watched: f64) -> Self {
        Self {
            kind,
            content_id: content_id.into(),
            seconds_watched,
            at: Utc::now(),
        }
    }
}

/// Port for the analytics collaborator.
pub trait AnalyticsSink: Send {
    fn log_event(&self, event: AnalyticsEvent);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_serializes_snake_case() {
        let event = AnalyticsEvent::new(AnalyticsKind::VideoComplete, "ep-1", 42.0);
        let text = toml::to_string(&event).expect("serializable");
        assert!(text.contains("kind = \"video_complete\""));
        assert!(text.contains("content_id = \"ep-1\""));
    }
}
