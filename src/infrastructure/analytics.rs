// SPDX-License-Identifier: MPL-2.0
//! Channel-backed analytics sink.
//!
//! The surface hands events to a [`ChannelAnalytics`] handle; a separate
//! [`AnalyticsCollector`] drains them for whatever uploads or stores them.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::application::port::{AnalyticsEvent, AnalyticsSink};

/// Default number of buffered events before new ones are dropped.
pub const DEFAULT_ANALYTICS_CAPACITY: usize = 256;

/// Handle for sending analytics events to the collector.
///
/// This handle is cheap to clone and can be shared across threads.
/// Events are sent via a bounded channel to avoid blocking the UI thread.
#[derive(Clone, Debug)]
pub struct ChannelAnalytics {
    event_tx: Sender<AnalyticsEvent>,
}

impl AnalyticsSink for ChannelAnalytics {
    /// Non-blocking: drops the event if the channel is full or closed.
    fn log_event(&self, event: AnalyticsEvent) {
        match self.event_tx.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                log::warn!("analytics buffer full, dropping {:?}", event.kind);
            }
            Err(TrySendError::Disconnected(event)) => {
                log::warn!("analytics collector gone, dropping {:?}", event.kind);
            }
        }
    }
}

/// Receiving end of the analytics channel.
#[derive(Debug)]
pub struct AnalyticsCollector {
    event_rx: Receiver<AnalyticsEvent>,
}

impl AnalyticsCollector {
    /// Creates a collector and the handle that feeds it.
    #[must_use]
    pub fn new(capacity: usize) -> (Self, ChannelAnalytics) {
        let (event_tx, event_rx) = bounded(capacity.max(1));
        (Self { event_rx }, ChannelAnalytics { event_tx })
    }

    /// Takes every event received so far without blocking.
    pub fn drain(&self) -> Vec<AnalyticsEvent> {
        self.event_rx.try_iter().collect()
    }
}

impl Default for AnalyticsCollector {
    fn default() -> Self {
        Self::new(DEFAULT_ANALYTICS_CAPACITY).0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::AnalyticsKind;

    #[test]
    fn events_reach_collector_in_order() {
        let (collector, sink) = AnalyticsCollector::new(8);
        sink.log_event(AnalyticsEvent::new(AnalyticsKind::VideoView, "ep-1", 0.0));
        sink.log_event(AnalyticsEvent::new(AnalyticsKind::WatchTime, "ep-1", 12.5));

        let kinds: Vec<_> = collector.drain().into_iter().map(|e| e.kind).collect();
        assert_eq!(kinds, vec![AnalyticsKind::VideoView, AnalyticsKind::WatchTime]);
        assert!(collector.drain().is_empty());
    }

    #[test]
    fn full_channel_drops_without_blocking() {
        let (collector, sink) = AnalyticsCollector::new(1);
        sink.log_event(AnalyticsEvent::new(AnalyticsKind::VideoView, "a", 0.0));
        sink.log_event(AnalyticsEvent::new(AnalyticsKind::WatchTime, "a", 1.0));

        assert_eq!(collector.drain().len(), 1);
    }

    #[test]
    fn closed_channel_is_ignored() {
        let (collector, sink) = AnalyticsCollector::new(4);
        drop(collector);
        sink.log_event(AnalyticsEvent::new(AnalyticsKind::VideoComplete, "a", 9.0));
    }
}
