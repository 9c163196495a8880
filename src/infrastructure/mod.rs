// SPDX-License-Identifier: MPL-2.0
//! Infrastructure layer adapters.
//!
//! Concrete implementations of the port traits defined in
//! `application::port`.
//!
//! # Available Adapters
//!
//! - [`analytics`]: Channel-backed [`AnalyticsSink`] with a draining collector
//! - [`recording`]: Adapters that log and record every call
//!
//! [`AnalyticsSink`]: crate::application::port::AnalyticsSink

pub mod analytics;
pub mod recording;

pub use analytics::{AnalyticsCollector, ChannelAnalytics};
pub use recording::{RecordingEngine, RecordingEnvironment, RecordingNavigator};
