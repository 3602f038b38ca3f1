// SPDX-License-Identifier: MPL-2.0
//! Touch-device backend (phones and tablets).

use super::{Platform, PillPalette};
use crate::animation::Easing;
use crate::config::{DEFAULT_EDGE_OFFSET, NOTCH_EDGE_OFFSET, TOUCH_HIDDEN_MARGIN};
use crate::domain::Surface;
use crate::ui::design_tokens::palette;

/// Touch backend. Rests lower on notched screens and hides far off-screen.
#[derive(Debug, Clone, Copy, Default)]
pub struct Touch {
    /// Use the darker background of desktop-class touch apps.
    catalyst: bool,
}

impl Touch {
    /// Variant for touch apps running in a desktop window.
    #[must_use]
    pub fn catalyst() -> Self {
        Self { catalyst: true }
    }
}

impl Platform for Touch {
    fn name(&self) -> &'static str {
        "touch"
    }

    fn edge_offset(&self, surface: &Surface, _offset_from_edge: f32) -> f32 {
        if surface.safe_area.has_notch() {
            NOTCH_EDGE_OFFSET
        } else {
            DEFAULT_EDGE_OFFSET
        }
    }

    fn hidden_distance(&self, _pill_height: f32) -> f32 {
        TOUCH_HIDDEN_MARGIN
    }

    fn slide_easing(&self) -> Easing {
        Easing::EaseInOut
    }

    fn palette(&self, dark: bool) -> PillPalette {
        let background = match (dark, self.catalyst) {
            (false, _) => palette::WHITE,
            (true, true) => palette::PILL_CATALYST_DARK,
            (true, false) => palette::PILL_TOUCH_DARK,
        };
        PillPalette {
            background,
            title: palette::PILL_TITLE,
            shadow: palette::SHADOW,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Insets;

    #[test]
    fn notched_surface_rests_lower() {
        let plain = Surface::new(390.0, 844.0);
        let notched = plain.with_safe_area(Insets::new(47.0, 34.0));

        assert_eq!(Touch::default().edge_offset(&plain, 0.0), DEFAULT_EDGE_OFFSET);
        assert_eq!(Touch::default().edge_offset(&notched, 0.0), NOTCH_EDGE_OFFSET);
    }

    #[test]
    fn catalyst_dark_background_differs() {
        let phone = Touch::default().palette(true);
        let catalyst = Touch::catalyst().palette(true);
        assert_ne!(phone.background, catalyst.background);
        assert_eq!(Touch::default().palette(false).background, palette::WHITE);
    }

    #[test]
    fn title_colour_ignores_appearance() {
        let touch = Touch::default();
        assert_eq!(touch.palette(true).title, touch.palette(false).title);
    }
}
