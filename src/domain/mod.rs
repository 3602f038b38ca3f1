// SPDX-License-Identifier: MPL-2.0
//! Framework-independent domain types.
//!
//! - [`pill`] - Clamped timing values for the pill lifecycle
//! - [`surface`] - Host surfaces and their non-owning lookup

pub mod pill;
pub mod surface;

pub use surface::{Insets, Surface, SurfaceId, Surfaces};
