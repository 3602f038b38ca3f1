// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo host.

use crate::platform::{Edge, PlatformKind};
use iced::Size;
use std::time::Instant;

/// Messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    ShowTask,
    UpdateTask,
    CompleteSuccess,
    CompleteFailure,
    /// Starts a task that completes from the executor through a handle.
    RunBackgroundJob,
    /// Whether the background job's completion reached the controller.
    BackgroundJobFinished(bool),
    ShowError,
    Dismiss,
    Reveal,
    Cancel,
    CycleTheme,
    WindowResized(Size),
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default, Clone)]
pub struct Flags {
    /// Optional config directory override (from --config-dir or PILLBOX_CONFIG_DIR).
    pub config_dir: Option<String>,
    /// Overrides the platform backend from the settings file.
    pub platform: Option<PlatformKind>,
    /// Overrides the entry edge from the settings file.
    pub edge: Option<Edge>,
}
