// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and lifecycle clocks.
//!
//! Re-exports the `approx` crate's assertion macro for float comparison,
//! which handles floating-point precision issues that `assert_eq!` cannot.

use std::time::{Duration, Instant};

pub use approx::assert_abs_diff_eq;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-6;

/// Returns `start` advanced by fractional seconds.
pub fn after(start: Instant, secs: f64) -> Instant {
    start + Duration::from_secs_f64(secs)
}
