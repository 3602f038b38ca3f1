// SPDX-License-Identifier: MPL-2.0
//! Pill notifications: a rounded banner that slides in from a surface edge,
//! shows a title with a spinner or a result glyph, then slides back out.
//!
//! # Components
//!
//! - [`Controller`] - Owns every pill and drives its lifecycle from `tick`
//! - [`ActiveRegistry`] - Set of pills currently attached to a surface
//! - [`timeline`] - Ordered `{deadline, action}` stages per pill
//! - [`layout`] - Centering and edge-distance math
//! - [`PillHandle`] - `Send` handle for acknowledging tasks off the UI thread
//!
//! # Usage
//!
//! ```
//! use pillbox::domain::Surface;
//! use pillbox::pill::{Completion, Controller, PillOptions, TaskRequest};
//! use pillbox::platform::Touch;
//! use std::time::{Duration, Instant};
//!
//! let mut controller = Controller::new(Box::new(Touch::default()));
//! let surface = controller.surfaces_mut().attach(Surface::new(390.0, 844.0));
//! let pill = controller.create(PillOptions::default()).unwrap();
//!
//! let start = Instant::now();
//! controller
//!     .show_task(pill, TaskRequest::new("Refreshing Data", surface), start)
//!     .unwrap();
//! controller.tick(start + Duration::from_secs(1));
//!
//! assert!(controller.completed_task(pill, Completion::success(), start + Duration::from_secs(6)));
//! ```
//!
//! # Lifecycle
//!
//! ```text
//! Detached --show--> Entering --1s--> Resting
//! Resting --completed_task--> ExitingSuccess|ExitingFailure --0.25s + delay + 1s--> Removed
//! Resting(Error) --1s + min display--> ExitingError --until 5s + min display--> Removed
//! Removed --show--> Entering
//! ```

mod controller;
mod handle;
mod instance;
pub mod layout;
mod options;
mod registry;
mod request;
pub mod timeline;

pub use controller::Controller;
pub use handle::PillHandle;
pub use instance::{GlyphFrame, IndicatorFrame, Pill, PillFrame, SpinnerFrame};
pub use options::{Glyph, PillOptions};
pub use registry::ActiveRegistry;
pub use request::{Completion, ErrorRequest, TaskRequest};

use std::fmt;

/// Invoked once when a lifecycle milestone is reached.
pub type Callback = Box<dyn FnOnce() + Send + 'static>;

/// Unique identifier for a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PillId(u64);

impl PillId {
    /// Creates a new unique pill ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for PillId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for PillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "pill#{}", self.0)
    }
}

/// What a pill is currently showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// A background task is running; a spinner is shown until completion.
    AwaitingTask,
    /// An error message that dismisses itself.
    Error,
}

/// Visual lifecycle state. Determines which stages and operations are legal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VisualState {
    /// Never shown.
    #[default]
    Detached,
    /// Sliding in from the edge.
    Entering,
    /// Held at the resting position.
    Resting,
    /// Task succeeded; glyph swap, pause and exit slide in progress.
    ExitingSuccess,
    /// Task failed; glyph swap, pause and exit slide in progress.
    ExitingFailure,
    /// Error display time elapsed; sliding out.
    ExitingError,
    /// Torn down. The pill can be shown again.
    Removed,
}

impl VisualState {
    /// Returns true if a new show call may start a cycle from this state.
    #[must_use]
    pub fn is_idle(self) -> bool {
        matches!(self, VisualState::Detached | VisualState::Removed)
    }
}

/// How a showing cycle ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Failure,
    Error,
    Cancelled,
    /// The host surface was detached while the pill was showing.
    SurfaceLost,
}

/// Lifecycle milestones reported by [`Controller::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PillEvent {
    /// The entrance slide finished.
    Shown(PillId),
    /// A `dismiss` slide finished.
    Dismissed(PillId),
    /// A `reveal` slide finished.
    Revealed(PillId),
    /// The pill was torn down.
    Done { id: PillId, outcome: Outcome },
}
