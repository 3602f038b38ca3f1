// SPDX-License-Identifier: MPL-2.0
//! Desktop window backend.

use super::{Platform, PillPalette};
use crate::animation::Easing;
use crate::config::DESKTOP_HIDDEN_MARGIN;
use crate::domain::Surface;
use crate::ui::design_tokens::palette;

/// Desktop backend. Rests at a fixed distance and hides just past the edge.
#[derive(Debug, Clone, Copy, Default)]
pub struct Desktop;

impl Platform for Desktop {
    fn name(&self) -> &'static str {
        "desktop"
    }

    fn edge_offset(&self, _surface: &Surface, offset_from_edge: f32) -> f32 {
        offset_from_edge
    }

    fn hidden_distance(&self, pill_height: f32) -> f32 {
        pill_height + DESKTOP_HIDDEN_MARGIN
    }

    fn slide_easing(&self) -> Easing {
        Easing::EaseIn
    }

    fn palette(&self, dark: bool) -> PillPalette {
        if dark {
            PillPalette {
                background: palette::GRAY_200,
                title: palette::WHITE,
                shadow: palette::SHADOW,
            }
        } else {
            PillPalette {
                background: palette::WHITE,
                title: palette::GRAY_700,
                shadow: palette::SHADOW,
            }
        }
    }
}
