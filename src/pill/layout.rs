// SPDX-License-Identifier: MPL-2.0
//! Placement math.
//!
//! Vertical placement is expressed as a distance from the entry edge: a
//! positive distance is inside the surface, a negative one is beyond the
//! edge. Slides animate this distance, and [`distance_to_y`] turns it into a
//! surface coordinate for rendering.

use super::PillOptions;
use crate::config::NAVIGATION_BAR_OFFSET;
use crate::domain::Surface;
use crate::error::{Error, Result};
use crate::platform::{Edge, Platform};

/// Left coordinate that centres a pill of `width` on `surface`.
pub fn origin_for_center(surface: &Surface, width: f32) -> Result<f32> {
    if surface.is_degenerate() {
        return Err(Error::DegenerateSurface {
            width: surface.width,
            height: surface.height,
        });
    }
    Ok((surface.mid_x() - width / 2.0).round())
}

/// Distance between the entry edge and a resting pill.
pub fn resting_distance(platform: &dyn Platform, surface: &Surface, options: &PillOptions) -> f32 {
    let base = platform.edge_offset(surface, options.offset_from_edge);
    if options.navigation_bar && options.edge == Edge::Top {
        base + NAVIGATION_BAR_OFFSET
    } else {
        base
    }
}

/// Distance of a hidden pill; always beyond the edge.
pub fn hidden_distance(platform: &dyn Platform, options: &PillOptions) -> f32 {
    -platform.hidden_distance(options.height)
}

/// Top coordinate of a pill `distance` away from `edge`.
#[must_use]
pub fn distance_to_y(surface: &Surface, edge: Edge, height: f32, distance: f32) -> f32 {
    match edge {
        Edge::Top => distance,
        Edge::Bottom => surface.height - distance - height,
    }
}
