// SPDX-License-Identifier: MPL-2.0
//! `pillbox` draws "pill" notifications: rounded banners that slide in from a
//! window edge, show a title with a spinner while a task runs, swap the
//! spinner for a result glyph and slide back out.
//!
//! The lifecycle lives in [`pill`], independent of any renderer; the Iced
//! canvas in [`ui::widgets`] draws its frames and [`app`] hosts a demo window.

pub mod animation;
pub mod app;
pub mod config;
pub mod domain;
pub mod error;
pub mod pill;
pub mod platform;
pub mod ui;

#[cfg(test)]
mod test_utils;
