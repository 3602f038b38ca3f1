// SPDX-License-Identifier: MPL-2.0
//! Rendering backends for the supported target platforms.
//!
//! Each backend answers the handful of questions whose answers differ between
//! touch devices and desktop windows: where a pill rests, how far off-screen
//! it hides, which curve the slides follow and which colours it is drawn in.
//! A backend is picked once at composition time and handed to the
//! [`Controller`](crate::pill::Controller).

mod desktop;
mod touch;

pub use desktop::Desktop;
pub use touch::Touch;

use crate::animation::Easing;
use crate::domain::Surface;
use iced::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Surface edge a pill slides in from and rests against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Edge {
    #[default]
    Top,
    Bottom,
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Top => write!(f, "top"),
            Edge::Bottom => write!(f, "bottom"),
        }
    }
}

impl std::str::FromStr for Edge {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "top" => Ok(Edge::Top),
            "bottom" => Ok(Edge::Bottom),
            other => Err(format!("invalid edge: {}", other)),
        }
    }
}

/// Colours the pill chrome is drawn with.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PillPalette {
    pub background: Color,
    pub title: Color,
    pub shadow: Color,
}

/// Platform-specific layout and styling decisions.
pub trait Platform: fmt::Debug {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Distance between the entry edge and the resting pill, before any
    /// navigation bar adjustment.
    fn edge_offset(&self, surface: &Surface, offset_from_edge: f32) -> f32;

    /// How far beyond the edge a hidden pill's leading side sits.
    fn hidden_distance(&self, pill_height: f32) -> f32;

    /// Curve used by entrance and exit slides.
    fn slide_easing(&self) -> Easing;

    /// Chrome colours for the current appearance.
    fn palette(&self, dark: bool) -> PillPalette;
}

/// Backend selector used by configuration and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlatformKind {
    Touch,
    #[default]
    Desktop,
}

impl PlatformKind {
    /// Builds the backend for this platform.
    #[must_use]
    pub fn backend(self) -> Box<dyn Platform> {
        match self {
            PlatformKind::Touch => Box::new(Touch::default()),
            PlatformKind::Desktop => Box::new(Desktop),
        }
    }
}

impl std::str::FromStr for PlatformKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "touch" => Ok(PlatformKind::Touch),
            "desktop" => Ok(PlatformKind::Desktop),
            other => Err(format!("invalid platform: {}", other)),
        }
    }
}
