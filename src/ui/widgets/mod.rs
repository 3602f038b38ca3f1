// SPDX-License-Identifier: MPL-2.0
pub mod glyphs;
pub mod pill_canvas;

pub use pill_canvas::PillCanvas;
