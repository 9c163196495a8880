// SPDX-License-Identifier: MPL-2.0
//! Shared helpers for unit tests: float assertions and a fake clock offset.

use std::time::{Duration, Instant};

// Re-export approx macros for convenient use in tests
pub use approx::assert_abs_diff_eq;

/// Epsilon for slider values computed from pointer deltas.
pub const F32_EPSILON: f32 = 1e-6;

/// `t0` advanced by `millis` milliseconds.
pub fn at(t0: Instant, millis: u64) -> Instant {
    t0 + Duration::from_millis(millis)
}
