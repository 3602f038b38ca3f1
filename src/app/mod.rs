// SPDX-License-Identifier: MPL-2.0
//! Demo host: a window with buttons that drive the pill lifecycle.
//!
//! The `App` owns a [`Controller`] with one window-sized surface, a task pill
//! and an error pill. Every button maps to one controller operation; a tick
//! subscription runs while a pill is on screen and the view draws the
//! controller's frames over the controls.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, TimingConfig};
use crate::domain::{Surface, SurfaceId};
use crate::pill::{
    Completion, Controller, ErrorRequest, Outcome, PillEvent, PillId, PillOptions, TaskRequest,
};
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: f32 = 800.0;
pub const WINDOW_DEFAULT_HEIGHT: f32 = 600.0;
pub const MIN_WINDOW_WIDTH: f32 = 480.0;
pub const MIN_WINDOW_HEIGHT: f32 = 360.0;

/// Time the background job sleeps before completing through its handle.
const BACKGROUND_JOB_DURATION: Duration = Duration::from_secs(3);

const TASK_TITLE: &str = "Refreshing Data";
const BACKGROUND_TITLE: &str = "Syncing";
const ERROR_TITLE: &str = "No Connection";

/// Root Iced application state.
pub struct App {
    controller: Controller,
    surface: SurfaceId,
    task_pill: Option<PillId>,
    error_pill: Option<PillId>,
    theme_mode: ThemeMode,
    timing: TimingConfig,
    /// Number of `UpdateTask` presses during the current task.
    progress: u32,
    /// Last lifecycle event or rejected operation.
    status: String,
    /// Problem met while loading settings.
    warning: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("surface", &self.surface)
            .field("task_pill", &self.task_pill)
            .field("error_pill", &self.error_pill)
            .field("theme_mode", &self.theme_mode)
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT),
        min_size: Some(iced::Size::new(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT)),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a Fn boot function; flags are consumed on first call
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, applies CLI overrides and creates the pills.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (mut config, mut warning) = config::load();
        if let Some(platform) = flags.platform {
            config.general.platform = platform;
        }
        if let Some(edge) = flags.edge {
            config.pill.edge = edge;
        }

        let mut options = config.pill.to_options();
        if let Err(err) = options.validate() {
            tracing::warn!(error = %err, "invalid pill settings, using defaults");
            warning = Some(format!("Invalid pill settings: {err}"));
            options = PillOptions::default();
        }

        let mut controller = Controller::new(config.general.platform.backend());
        controller.set_dark(config.general.theme_mode.is_dark());
        let surface = controller
            .surfaces_mut()
            .attach(Surface::new(WINDOW_DEFAULT_WIDTH, WINDOW_DEFAULT_HEIGHT));

        let task_pill = create_pill(&mut controller, options.clone(), &mut warning);
        let error_pill = create_pill(&mut controller, options, &mut warning);

        tracing::info!(
            platform = controller.platform().name(),
            edge = %config.pill.edge,
            "demo host ready"
        );

        let app = App {
            controller,
            surface,
            task_pill,
            error_pill,
            theme_mode: config.general.theme_mode,
            timing: config.timing,
            progress: 0,
            status: String::from("Idle"),
            warning,
        };
        (app, Task::none())
    }

    fn title(&self) -> String {
        format!("Pillbox ({})", self.controller.platform().name())
    }

    fn theme(&self) -> Theme {
        self.theme_mode.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.controller.is_animating()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let now = Instant::now();
        match message {
            Message::ShowTask => {
                if let Some(id) = self.task_pill {
                    self.progress = 0;
                    let request = TaskRequest::new(TASK_TITLE, self.surface);
                    let result = self.controller.show_task(id, request, now);
                    self.report(result);
                }
            }
            Message::UpdateTask => {
                if let Some(id) = self.task_pill {
                    let step = self.progress + 1;
                    if self
                        .controller
                        .update_task(id, format!("{TASK_TITLE} ({step})"))
                    {
                        self.progress = step;
                    } else {
                        self.status = String::from("No task to update");
                    }
                }
            }
            Message::CompleteSuccess => self.complete(Completion::success()),
            Message::CompleteFailure => {
                self.complete(Completion::failure().message("Refresh Failed"));
            }
            Message::RunBackgroundJob => return self.run_background_job(now),
            Message::BackgroundJobFinished(delivered) => {
                if !delivered {
                    tracing::warn!("background job could not report its completion");
                    self.status = String::from("Background job result was dropped");
                }
            }
            Message::ShowError => {
                if let Some(id) = self.error_pill {
                    let request = ErrorRequest::new(ERROR_TITLE, self.surface)
                        .min_display_time(self.timing.min_error_display());
                    let result = self.controller.show_error(id, request, now);
                    self.report(result);
                }
            }
            Message::Dismiss => {
                if let Some(id) = self.task_pill {
                    let delay = self.timing.exit_delay().as_duration();
                    if !self.controller.dismiss(id, Some(delay), None, now) {
                        self.status = String::from("Nothing to dismiss");
                    }
                }
            }
            Message::Reveal => {
                if let Some(id) = self.task_pill {
                    if !self.controller.reveal(id, None, now) {
                        self.status = String::from("Nothing to reveal");
                    }
                }
            }
            Message::Cancel => {
                let cancelled = [self.task_pill, self.error_pill]
                    .into_iter()
                    .flatten()
                    .filter(|id| self.controller.cancel(*id))
                    .count();
                if cancelled == 0 {
                    self.status = String::from("Nothing to cancel");
                }
            }
            Message::CycleTheme => {
                self.theme_mode = self.theme_mode.cycle();
                self.controller.set_dark(self.theme_mode.is_dark());
            }
            Message::WindowResized(size) => {
                self.controller
                    .surfaces_mut()
                    .resize(self.surface, size.width, size.height);
            }
            Message::Tick(now) => {
                for event in self.controller.tick(now) {
                    self.status = describe(event);
                }
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            frames: self.controller.frames(self.surface, Instant::now()),
            theme_mode: self.theme_mode,
            status: &self.status,
            warning: self.warning.as_deref(),
        })
    }

    fn complete(&mut self, completion: Completion) {
        let Some(id) = self.task_pill else {
            return;
        };
        let completion = completion.delay(self.timing.exit_delay().as_duration());
        if !self.controller.completed_task(id, completion, Instant::now()) {
            self.status = String::from("No task to complete");
        }
    }

    /// Shows the task pill and completes it from the async executor through a
    /// [`PillHandle`](crate::pill::PillHandle).
    fn run_background_job(&mut self, now: Instant) -> Task<Message> {
        let Some(id) = self.task_pill else {
            return Task::none();
        };
        let showing = self
            .controller
            .pill(id)
            .is_some_and(|pill| !pill.visual_state().is_idle());
        if showing {
            self.status = String::from("Task pill is busy");
            return Task::none();
        }
        let request = TaskRequest::new(BACKGROUND_TITLE, self.surface);
        if let Err(err) = self.controller.show_task(id, request, now) {
            self.report(Err(err));
            return Task::none();
        }

        let handle = self.controller.handle();
        let delay = self.timing.exit_delay().as_duration();
        self.status = String::from("Background job started");
        Task::perform(
            async move {
                tokio::time::sleep(BACKGROUND_JOB_DURATION).await;
                let completion = Completion::success().message("Synced").delay(delay);
                handle.completed_task(id, completion)
            },
            Message::BackgroundJobFinished,
        )
    }

    fn report(&mut self, result: crate::error::Result<()>) {
        if let Err(err) = result {
            tracing::warn!(error = %err, "pill operation failed");
            self.status = format!("Error: {err}");
        }
    }
}

fn create_pill(
    controller: &mut Controller,
    options: PillOptions,
    warning: &mut Option<String>,
) -> Option<PillId> {
    match controller.create(options) {
        Ok(id) => Some(id),
        Err(err) => {
            tracing::warn!(error = %err, "could not create pill");
            *warning = Some(format!("Could not create pill: {err}"));
            None
        }
    }
}

/// Status line for a lifecycle event.
fn describe(event: PillEvent) -> String {
    match event {
        PillEvent::Shown(id) => format!("{id} shown"),
        PillEvent::Dismissed(id) => format!("{id} dismissed"),
        PillEvent::Revealed(id) => format!("{id} revealed"),
        PillEvent::Done { id, outcome } => {
            let outcome = match outcome {
                Outcome::Success => "succeeded",
                Outcome::Failure => "failed",
                Outcome::Error => "finished showing its error",
                Outcome::Cancelled => "was cancelled",
                Outcome::SurfaceLost => "lost its surface",
            };
            format!("{id} {outcome}")
        }
    }
}
