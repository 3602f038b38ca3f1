// SPDX-License-Identifier: MPL-2.0
//! Pill domain types.
//!
//! Value objects describing how long pills stay visible, independent of any
//! presentation framework.

pub mod newtypes;

pub use newtypes::{ExitDelay, MinDisplayTime};
