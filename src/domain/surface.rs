// SPDX-License-Identifier: MPL-2.0
//! Host surfaces that pills attach to.
//!
//! Pills never own the surface they are shown on. They keep a [`SurfaceId`]
//! and resolve it through [`Surfaces`] every time geometry is needed, so a
//! surface the host has removed is simply no longer found.

use std::collections::HashMap;
use std::fmt;

/// Unique identifier for a host surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SurfaceId(u64);

impl SurfaceId {
    /// Creates a new unique surface ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for SurfaceId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SurfaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "surface#{}", self.0)
    }
}

/// Obstructions reported by the platform at the surface edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Insets {
    pub top: f32,
    pub bottom: f32,
}

impl Insets {
    #[must_use]
    pub fn new(top: f32, bottom: f32) -> Self {
        Self { top, bottom }
    }

    /// Returns true on notched devices, recognised by their home-indicator
    /// inset at the bottom edge.
    #[must_use]
    pub fn has_notch(&self) -> bool {
        self.bottom > 0.0
    }
}

/// Geometry of a container a pill can be attached to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Surface {
    id: SurfaceId,
    pub width: f32,
    pub height: f32,
    pub safe_area: Insets,
}

impl Surface {
    /// Creates a surface with a fresh ID and no safe-area insets.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            id: SurfaceId::new(),
            width,
            height,
            safe_area: Insets::default(),
        }
    }

    /// Sets the safe-area insets.
    #[must_use]
    pub fn with_safe_area(mut self, safe_area: Insets) -> Self {
        self.safe_area = safe_area;
        self
    }

    /// Returns the surface's unique ID.
    #[must_use]
    pub fn id(&self) -> SurfaceId {
        self.id
    }

    /// Returns true if the surface has no area.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Horizontal centre of the surface.
    #[must_use]
    pub fn mid_x(&self) -> f32 {
        self.width / 2.0
    }
}

/// Non-owning lookup of the surfaces currently known to the host.
#[derive(Debug, Default)]
pub struct Surfaces {
    entries: HashMap<SurfaceId, Surface>,
}

impl Surfaces {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches a surface, replacing any previous geometry with the same ID.
    pub fn attach(&mut self, surface: Surface) -> SurfaceId {
        let id = surface.id();
        self.entries.insert(id, surface);
        id
    }

    /// Updates the size of an attached surface.
    ///
    /// Returns `false` if the surface is not attached.
    pub fn resize(&mut self, id: SurfaceId, width: f32, height: f32) -> bool {
        match self.entries.get_mut(&id) {
            Some(surface) => {
                surface.width = width;
                surface.height = height;
                true
            }
            None => false,
        }
    }

    /// Updates the safe-area insets of an attached surface.
    pub fn set_safe_area(&mut self, id: SurfaceId, safe_area: Insets) -> bool {
        match self.entries.get_mut(&id) {
            Some(surface) => {
                surface.safe_area = safe_area;
                true
            }
            None => false,
        }
    }

    /// Detaches a surface. Pills still shown on it are torn down on the next tick.
    pub fn detach(&mut self, id: SurfaceId) -> Option<Surface> {
        self.entries.remove(&id)
    }

    #[must_use]
    pub fn get(&self, id: SurfaceId) -> Option<&Surface> {
        self.entries.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: SurfaceId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
