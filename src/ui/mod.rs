// SPDX-License-Identifier: MPL-2.0
//! User interface pieces used to draw pills.
//!
//! - [`widgets`] - Canvas program and glyph geometry
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod theming;
pub mod widgets;
