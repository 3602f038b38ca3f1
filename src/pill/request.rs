// SPDX-License-Identifier: MPL-2.0
//! Arguments of the show and completion operations.
//!
//! Each request carries the required arguments in its constructor and the
//! optional ones as builder methods.

use super::Callback;
use crate::domain::pill::{ExitDelay, MinDisplayTime};
use crate::domain::SurfaceId;
use iced::Color;
use std::fmt;
use std::time::Duration;

/// Shows a pill with a spinner while a task runs.
pub struct TaskRequest {
    pub(super) message: String,
    pub(super) surface: SurfaceId,
    pub(super) tint: Option<Color>,
    pub(super) on_shown: Option<Callback>,
}

impl TaskRequest {
    pub fn new(message: impl Into<String>, surface: SurfaceId) -> Self {
        Self {
            message: message.into(),
            surface,
            tint: None,
            on_shown: None,
        }
    }

    /// Colour of the spinner.
    #[must_use]
    pub fn tint(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    /// Called once the entrance slide has finished.
    #[must_use]
    pub fn on_shown(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_shown = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for TaskRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskRequest")
            .field("message", &self.message)
            .field("surface", &self.surface)
            .field("tint", &self.tint)
            .field("on_shown", &self.on_shown.is_some())
            .finish()
    }
}

/// Shows a self-dismissing error pill.
pub struct ErrorRequest {
    pub(super) message: String,
    pub(super) surface: SurfaceId,
    pub(super) tint: Option<Color>,
    pub(super) min_display_time: MinDisplayTime,
    pub(super) on_done: Option<Callback>,
}

impl ErrorRequest {
    pub fn new(message: impl Into<String>, surface: SurfaceId) -> Self {
        Self {
            message: message.into(),
            surface,
            tint: None,
            min_display_time: MinDisplayTime::default(),
            on_done: None,
        }
    }

    /// Colour of the error glyph.
    #[must_use]
    pub fn tint(mut self, color: Color) -> Self {
        self.tint = Some(color);
        self
    }

    /// Time the pill stays visible; values under two seconds are raised to two.
    #[must_use]
    pub fn min_display_time(mut self, duration: impl Into<MinDisplayTime>) -> Self {
        self.min_display_time = duration.into();
        self
    }

    /// Called once the pill has been torn down.
    #[must_use]
    pub fn on_done(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_done = Some(Box::new(callback));
        self
    }
}

impl fmt::Debug for ErrorRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ErrorRequest")
            .field("message", &self.message)
            .field("surface", &self.surface)
            .field("tint", &self.tint)
            .field("min_display_time", &self.min_display_time)
            .field("on_done", &self.on_done.is_some())
            .finish()
    }
}

/// Acknowledges the task behind a pill.
pub struct Completion {
    pub(super) success: bool,
    pub(super) message: Option<String>,
    pub(super) delay: ExitDelay,
    pub(super) on_done: Option<Callback>,
}

impl Completion {
    #[must_use]
    pub fn new(success: bool) -> Self {
        Self {
            success,
            message: None,
            delay: ExitDelay::default(),
            on_done: None,
        }
    }

    /// The task succeeded.
    #[must_use]
    pub fn success() -> Self {
        Self::new(true)
    }

    /// The task failed.
    #[must_use]
    pub fn failure() -> Self {
        Self::new(false)
    }

    /// Replaces the title when the glyph appears.
    #[must_use]
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Pause between the glyph swap and the exit slide.
    #[must_use]
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = ExitDelay::new(delay);
        self
    }

    /// Called once the pill has been torn down.
    #[must_use]
    pub fn on_done(mut self, callback: impl FnOnce() + Send + 'static) -> Self {
        self.on_done = Some(Box::new(callback));
        self
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        self.success
    }
}

impl fmt::Debug for Completion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Completion")
            .field("success", &self.success)
            .field("message", &self.message)
            .field("delay", &self.delay)
            .field("on_done", &self.on_done.is_some())
            .finish()
    }
}
