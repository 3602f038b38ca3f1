// SPDX-License-Identifier: MPL-2.0
//! Pill timing newtypes.
//!
//! These wrappers apply the lower bounds the lifecycle relies on, so no
//! clamping is needed at usage sites. Long durations are taken as given.

use crate::config::{DEFAULT_EXIT_DELAY, MIN_ERROR_DISPLAY};
use std::time::Duration;

// =============================================================================
// MinDisplayTime
// =============================================================================

/// How long an error pill stays on screen, never less than two seconds.
///
/// # Example
///
/// ```
/// use pillbox::domain::pill::MinDisplayTime;
/// use std::time::Duration;
///
/// let short = MinDisplayTime::new(Duration::from_millis(500));
/// assert_eq!(short.as_duration(), Duration::from_secs(2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct MinDisplayTime(Duration);

impl MinDisplayTime {
    /// Creates a display time, raising short values to the minimum.
    #[must_use]
    pub fn new(value: Duration) -> Self {
        Self(value.max(MIN_ERROR_DISPLAY))
    }

    /// Creates a display time from fractional seconds.
    ///
    /// Negative and non-finite values fall back to the minimum.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        Duration::try_from_secs_f64(secs).map_or_else(|_| Self::default(), Self::new)
    }

    /// Returns the display time as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for MinDisplayTime {
    fn default() -> Self {
        Self(MIN_ERROR_DISPLAY)
    }
}

impl From<Duration> for MinDisplayTime {
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}

// =============================================================================
// ExitDelay
// =============================================================================

/// Pause between the result glyph appearing and the exit slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ExitDelay(Duration);

impl ExitDelay {
    /// No pause at all.
    pub const NONE: Self = Self(Duration::ZERO);

    #[must_use]
    pub fn new(value: Duration) -> Self {
        Self(value)
    }

    /// Creates an exit delay from fractional seconds.
    ///
    /// Negative and non-finite values fall back to the default.
    #[must_use]
    pub fn from_secs_f64(secs: f64) -> Self {
        Duration::try_from_secs_f64(secs).map_or_else(|_| Self::default(), Self::new)
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        self.0
    }
}

impl Default for ExitDelay {
    fn default() -> Self {
        Self(DEFAULT_EXIT_DELAY)
    }
}

impl From<Duration> for ExitDelay {
    fn from(value: Duration) -> Self {
        Self::new(value)
    }
}
