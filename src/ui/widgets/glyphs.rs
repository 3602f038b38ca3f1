// SPDX-License-Identifier: MPL-2.0
//! Outline geometry of the result glyphs.
//!
//! Glyphs are described as polylines inside a square of side `size` centred
//! on `center`, so they can be stroked with the same pen as the spinner.

use crate::pill::Glyph;
use iced::Point;

/// Returns true if the glyph is drawn inside a circular ring.
#[must_use]
pub fn has_ring(glyph: Glyph) -> bool {
    matches!(glyph, Glyph::Checkmark | Glyph::Cross)
}

/// Polylines making up `glyph`, ring excluded.
#[must_use]
pub fn strokes(glyph: Glyph, center: Point, size: f32) -> Vec<Vec<Point>> {
    let r = size / 2.0;
    let at = |dx: f32, dy: f32| Point::new(center.x + dx * r, center.y + dy * r);

    match glyph {
        Glyph::Checkmark => vec![vec![at(-0.45, 0.0), at(-0.1, 0.35), at(0.45, -0.3)]],
        Glyph::Cross => vec![
            vec![at(-0.35, -0.35), at(0.35, 0.35)],
            vec![at(0.35, -0.35), at(-0.35, 0.35)],
        ],
        Glyph::Exclamation => vec![
            // Triangle
            vec![at(0.0, -0.95), at(0.95, 0.8), at(-0.95, 0.8), at(0.0, -0.95)],
            // Stem
            vec![at(0.0, -0.35), at(0.0, 0.25)],
            // Dot
            vec![at(0.0, 0.5), at(0.0, 0.52)],
        ],
    }
}
