// SPDX-License-Identifier: MPL-2.0
//! Time-based interpolation used by the pill slides and crossfades.
//!
//! Animations here are plain values: they record when they started and how
//! long they last, and are sampled with the current `Instant`. Nothing is
//! advanced in place, so rendering the same instant twice gives the same
//! result.

use std::time::{Duration, Instant};

/// Timing curve applied to linear progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    EaseOut,
    #[default]
    EaseInOut,
}

impl Easing {
    /// Applies the curve to `t`, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
        }
    }
}

/// Linear progress of a span starting at `start` and lasting `duration`.
fn progress(start: Instant, duration: Duration, now: Instant) -> f32 {
    if duration.is_zero() {
        return if now >= start { 1.0 } else { 0.0 };
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f32() / duration.as_secs_f32()).min(1.0)
}

/// A one-dimensional movement between two offsets.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slide {
    from: f32,
    to: f32,
    start: Instant,
    duration: Duration,
    easing: Easing,
}

impl Slide {
    #[must_use]
    pub fn new(from: f32, to: f32, start: Instant, duration: Duration, easing: Easing) -> Self {
        Self {
            from,
            to,
            start,
            duration,
            easing,
        }
    }

    /// Eased position at `now`.
    #[must_use]
    pub fn value(&self, now: Instant) -> f32 {
        let t = self.easing.apply(progress(self.start, self.duration, now));
        self.from + (self.to - self.from) * t
    }
}

/// An opacity swap between two visuals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Crossfade {
    start: Instant,
    duration: Duration,
}

impl Crossfade {
    #[must_use]
    pub fn new(start: Instant, duration: Duration) -> Self {
        Self { start, duration }
    }

    /// Opacity of the incoming visual; the outgoing one uses `1.0 - incoming`.
    #[must_use]
    pub fn incoming(&self, now: Instant) -> f32 {
        progress(self.start, self.duration, now)
    }
}
