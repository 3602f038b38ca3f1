// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Every timing offset used by the pill lifecycle lives here so the
//! controller, the platform backends and the config file agree on a single
//! set of numbers.
//!
//! # Categories
//!
//! - **Geometry**: Pill size, text size and edge offsets
//! - **Timing**: Slide, crossfade and display durations
//! - **Error display**: Minimum visible time for error pills

use std::time::Duration;

// ==========================================================================
// Geometry Defaults
// ==========================================================================

/// Default pill width.
pub const DEFAULT_PILL_WIDTH: f32 = 200.0;

/// Default pill height.
pub const DEFAULT_PILL_HEIGHT: f32 = 45.0;

/// Corner radius of the pill background.
pub const PILL_CORNER_RADIUS: f32 = 20.0;

/// Default title text size.
pub const DEFAULT_TEXT_SIZE: f32 = 17.0;

/// Resting distance from the edge when the edge has a safe-area inset (notch).
pub const NOTCH_EDGE_OFFSET: f32 = 45.0;

/// Resting distance from the edge when there is no inset.
pub const DEFAULT_EDGE_OFFSET: f32 = 25.0;

/// Extra offset applied on the top edge when a navigation bar covers it.
pub const NAVIGATION_BAR_OFFSET: f32 = 40.0;

/// Distance beyond the edge where touch pills wait while hidden.
pub const TOUCH_HIDDEN_MARGIN: f32 = 300.0;

/// Gap kept between a hidden desktop pill and the edge.
pub const DESKTOP_HIDDEN_MARGIN: f32 = 50.0;

// ==========================================================================
// Timing Defaults
// ==========================================================================

/// Duration of the entrance and exit slides.
pub const SLIDE_DURATION: Duration = Duration::from_secs(1);

/// Duration of the spinner to glyph crossfade.
pub const CROSSFADE_DURATION: Duration = Duration::from_millis(250);

/// Default pause between the glyph swap and the exit slide.
pub const DEFAULT_EXIT_DELAY: Duration = Duration::from_millis(1500);

/// Longest exit delay accepted from `settings.toml`.
pub const MAX_EXIT_DELAY: Duration = Duration::from_secs(60);

/// Wait before a `reveal` starts moving.
pub const REVEAL_DELAY: Duration = Duration::from_millis(1500);

/// Extra lead before the `reveal` slide, matching the crossfade length.
pub const REVEAL_LEAD: Duration = Duration::from_millis(250);

/// One full spinner revolution.
pub const SPINNER_PERIOD: Duration = Duration::from_secs(1);

// ==========================================================================
// Error Display Defaults
// ==========================================================================

/// Minimum (and default) time an error pill stays on screen.
pub const MIN_ERROR_DISPLAY: Duration = Duration::from_secs(2);

/// Longest error display time accepted from `settings.toml`.
pub const MAX_ERROR_DISPLAY: Duration = Duration::from_secs(60);

/// Offset added to the entrance before an error pill starts leaving.
pub const ERROR_EXIT_START_OFFSET: Duration = Duration::from_secs(1);

/// Offset added to the display time before an error pill is torn down.
pub const ERROR_TEARDOWN_OFFSET: Duration = Duration::from_secs(5);

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(DEFAULT_PILL_WIDTH > 0.0);
    assert!(DEFAULT_PILL_HEIGHT > 0.0);
    assert!(DEFAULT_TEXT_SIZE < DEFAULT_PILL_HEIGHT);
    assert!(PILL_CORNER_RADIUS * 2.0 <= DEFAULT_PILL_HEIGHT);
    assert!(NOTCH_EDGE_OFFSET > DEFAULT_EDGE_OFFSET);
    assert!(TOUCH_HIDDEN_MARGIN > DEFAULT_PILL_HEIGHT);

    assert!(CROSSFADE_DURATION.as_millis() < SLIDE_DURATION.as_millis());
    assert!(DEFAULT_EXIT_DELAY.as_millis() <= MAX_EXIT_DELAY.as_millis());
    assert!(MIN_ERROR_DISPLAY.as_millis() <= MAX_ERROR_DISPLAY.as_millis());

    // The exit slide has to finish before teardown.
    assert!(
        ERROR_EXIT_START_OFFSET.as_millis() + SLIDE_DURATION.as_millis()
            <= ERROR_TEARDOWN_OFFSET.as_millis()
    );
};
