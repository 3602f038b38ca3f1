// SPDX-License-Identifier: MPL-2.0
//! Construction-time settings of a pill.

use crate::config::{DEFAULT_EDGE_OFFSET, DEFAULT_PILL_HEIGHT, DEFAULT_PILL_WIDTH, DEFAULT_TEXT_SIZE};
use crate::error::{Error, Result};
use crate::platform::Edge;
use iced::Font;

/// Symbol drawn in the indicator slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Circled checkmark.
    Checkmark,
    /// Circled cross.
    Cross,
    /// Warning triangle with an exclamation mark.
    Exclamation,
}

/// Size, font and placement settings of a pill.
///
/// Options are validated when the pill is created, see
/// [`Controller::create`](super::Controller::create).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillOptions {
    pub width: f32,
    pub height: f32,
    pub text_size: f32,
    pub font: Font,
    /// A navigation bar covers the top edge; rest further down.
    pub navigation_bar: bool,
    pub edge: Edge,
    /// Resting distance from the edge on platforms with a fixed offset.
    pub offset_from_edge: f32,
    pub success_glyph: Glyph,
    pub failure_glyph: Glyph,
    pub error_glyph: Glyph,
}

impl Default for PillOptions {
    fn default() -> Self {
        Self {
            width: DEFAULT_PILL_WIDTH,
            height: DEFAULT_PILL_HEIGHT,
            text_size: DEFAULT_TEXT_SIZE,
            font: Font::DEFAULT,
            navigation_bar: false,
            edge: Edge::Top,
            offset_from_edge: DEFAULT_EDGE_OFFSET,
            success_glyph: Glyph::Checkmark,
            failure_glyph: Glyph::Cross,
            error_glyph: Glyph::Exclamation,
        }
    }
}

impl PillOptions {
    #[must_use]
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_font(mut self, font: Font, text_size: f32) -> Self {
        self.font = font;
        self.text_size = text_size;
        self
    }

    #[must_use]
    pub fn with_navigation_bar(mut self, present: bool) -> Self {
        self.navigation_bar = present;
        self
    }

    #[must_use]
    pub fn with_edge(mut self, edge: Edge, offset_from_edge: f32) -> Self {
        self.edge = edge;
        self.offset_from_edge = offset_from_edge;
        self
    }

    /// Replaces the glyphs drawn for success, failure and errors.
    #[must_use]
    pub fn with_glyphs(mut self, success: Glyph, failure: Glyph, error: Glyph) -> Self {
        self.success_glyph = success;
        self.failure_glyph = failure;
        self.error_glyph = error;
        self
    }

    /// Checks that the pill has an area and that its text fits inside it.
    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(Error::InvalidSize {
                width: self.width,
                height: self.height,
            });
        }
        if self.text_size > self.height {
            return Err(Error::FontTooLarge {
                text_size: self.text_size,
                height: self.height,
            });
        }
        Ok(())
    }
}
