// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Colours and measurements used to draw a pill.

## Organization

- **Palette**: Base colours and the per-platform pill backgrounds
- **Opacity**: Standardized opacity levels
- **Spacing**: Insets inside the pill
- **Sizing**: Indicator and stroke sizes
- **Radius**: Corner radii
- **Shadow**: Shadow definition for the pill chrome

## Examples

```
use pillbox::ui::design_tokens::{opacity, palette};
use iced::Color;

let shadow = Color {
    a: opacity::SHADOW,
    ..palette::BLACK
};
assert_eq!(shadow, palette::SHADOW);
```
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    // Grayscale
    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_700: Color = Color::from_rgb(0.333, 0.333, 0.333); // Dark gray
    pub const GRAY_200: Color = Color::from_rgb(0.667, 0.667, 0.667); // Light gray

    // Pill chrome
    pub const PILL_TOUCH_DARK: Color = Color::from_rgb(0.129_411_76, 0.121_568_63, 0.105_882_35);
    pub const PILL_CATALYST_DARK: Color = Color::from_rgb(0.09, 0.09, 0.09);
    pub const PILL_TITLE: Color = Color::from_rgb(0.541_176_47, 0.537_254_9, 0.552_941_18);
    pub const SHADOW: Color = Color::from_rgba(0.0, 0.0, 0.0, super::opacity::SHADOW);

    // Semantic colors
    pub const SUCCESS_500: Color = Color::from_rgb(0.204, 0.780, 0.349);
    pub const ERROR_500: Color = Color::from_rgb(1.0, 0.231, 0.188);
    pub const NEUTRAL_500: Color = Color::from_rgb(0.557, 0.557, 0.576);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const SHADOW: f32 = 0.1;
    pub const SPINNER_TRACK: f32 = 0.25;
    pub const OPAQUE: f32 = 1.0;
}

// ============================================================================
// Spacing
// ============================================================================

pub mod spacing {
    /// Space reserved right of the title for the indicator.
    pub const INDICATOR_COLUMN: f32 = 40.0;
    /// Gap between the indicator and the trailing edge of the pill.
    pub const INDICATOR_TRAILING: f32 = 15.0;
    /// Leading inset of the title text.
    pub const TITLE_LEADING: f32 = 20.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    /// Side of the square the spinner and glyphs are drawn in.
    pub const INDICATOR: f32 = 23.0;
    /// Stroke width of spinner arcs and glyph outlines.
    pub const STROKE: f32 = 2.5;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const PILL: f32 = crate::config::PILL_CORNER_RADIUS;
}

// ============================================================================
// Shadow Definitions
// ============================================================================

pub mod shadow {
    /// Blur radius of the pill shadow.
    pub const BLUR: f32 = 10.0;
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OPAQUE == 1.0);
    assert!(opacity::SHADOW > 0.0 && opacity::SHADOW < 1.0);
    assert!(sizing::INDICATOR < spacing::INDICATOR_COLUMN);
    assert!(spacing::INDICATOR_TRAILING < spacing::INDICATOR_COLUMN);
    assert!(shadow::BLUR > 0.0);
};
