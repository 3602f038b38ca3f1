// SPDX-License-Identifier: MPL-2.0
//! Owner of every pill and driver of their lifecycles.
//!
//! The controller is plain state. Operations record what should happen and
//! when; [`Controller::tick`] runs whatever is due. Hosts call `tick` from a
//! periodic subscription and draw [`Controller::frames`] in between.

use super::handle::{Command, COMMAND_CHANNEL_CAPACITY};
use super::instance::Env;
use super::{
    layout, ActiveRegistry, Callback, Completion, ErrorRequest, Mode, Outcome, Pill, PillEvent,
    PillFrame, PillHandle, PillId, PillOptions, TaskRequest,
};
use crate::domain::pill::ExitDelay;
use crate::domain::{SurfaceId, Surfaces};
use crate::error::{Error, Result};
use crate::platform::Platform;
use crossbeam_channel::{bounded, Receiver, Sender};
use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Lifecycle controller for a set of pills sharing one platform backend.
#[derive(Debug)]
pub struct Controller {
    platform: Box<dyn Platform>,
    registry: ActiveRegistry,
    surfaces: Surfaces,
    pills: BTreeMap<PillId, Pill>,
    /// Sender stored to create handles.
    command_tx: Sender<Command>,
    command_rx: Receiver<Command>,
    /// Events produced outside `tick`, reported by the next one.
    events: Vec<PillEvent>,
    dark: bool,
}

impl Controller {
    #[must_use]
    pub fn new(platform: Box<dyn Platform>) -> Self {
        Self::with_registry(platform, ActiveRegistry::new())
    }

    /// Creates a controller that tracks active pills in `registry`.
    #[must_use]
    pub fn with_registry(platform: Box<dyn Platform>, registry: ActiveRegistry) -> Self {
        let (command_tx, command_rx) = bounded(COMMAND_CHANNEL_CAPACITY);
        tracing::debug!(platform = platform.name(), "pill controller created");
        Self {
            platform,
            registry,
            surfaces: Surfaces::new(),
            pills: BTreeMap::new(),
            command_tx,
            command_rx,
            events: Vec::new(),
            dark: false,
        }
    }

    #[must_use]
    pub fn platform(&self) -> &dyn Platform {
        self.platform.as_ref()
    }

    #[must_use]
    pub fn surfaces(&self) -> &Surfaces {
        &self.surfaces
    }

    /// Host surfaces. Detaching a surface tears down its pills at the next
    /// tick.
    pub fn surfaces_mut(&mut self) -> &mut Surfaces {
        &mut self.surfaces
    }

    #[must_use]
    pub fn registry(&self) -> &ActiveRegistry {
        &self.registry
    }

    #[must_use]
    pub fn pill(&self, id: PillId) -> Option<&Pill> {
        self.pills.get(&id)
    }

    pub fn pills(&self) -> impl Iterator<Item = &Pill> {
        self.pills.values()
    }

    /// Switches the palette used by [`frames`](Self::frames).
    pub fn set_dark(&mut self, dark: bool) {
        self.dark = dark;
    }

    #[must_use]
    pub fn is_dark(&self) -> bool {
        self.dark
    }

    /// Creates a handle for driving pills from other threads.
    #[must_use]
    pub fn handle(&self) -> PillHandle {
        PillHandle::new(self.command_tx.clone())
    }

    // ------------------------------------------------------------------
    // Instances
    // ------------------------------------------------------------------

    /// Creates a detached pill.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] for a pill without area and
    /// [`Error::FontTooLarge`] if the text is taller than the pill.
    pub fn create(&mut self, options: PillOptions) -> Result<PillId> {
        options.validate()?;
        let pill = Pill::new(options);
        let id = pill.id();
        self.pills.insert(id, pill);
        tracing::debug!(%id, "pill created");
        Ok(id)
    }

    /// Removes a pill from the controller. Pending callbacks are dropped
    /// without running.
    pub fn release(&mut self, id: PillId) -> Option<Pill> {
        self.registry.remove(id);
        self.pills.remove(&id)
    }

    // ------------------------------------------------------------------
    // Show
    // ------------------------------------------------------------------

    /// Slides in a pill with a spinner.
    ///
    /// Ignored if the pill is already showing.
    ///
    /// # Errors
    ///
    /// Fails if the pill or the surface is unknown, or if the surface has no
    /// area.
    pub fn show_task(&mut self, id: PillId, request: TaskRequest, now: Instant) -> Result<()> {
        let pill = self.pills.get_mut(&id).ok_or(Error::UnknownPill(id))?;
        if !pill.visual_state().is_idle() {
            tracing::debug!(%id, state = ?pill.visual_state(), "show_task ignored, pill is showing");
            return Ok(());
        }
        let surface = self
            .surfaces
            .get(request.surface)
            .ok_or(Error::UnknownSurface(request.surface))?;
        layout::origin_for_center(surface, pill.options().width)?;

        self.registry.insert(id, Mode::AwaitingTask);
        tracing::info!(%id, surface = %request.surface, message = %request.message, "showing task pill");
        pill.begin_task(request, surface, self.platform.as_ref(), now);
        Ok(())
    }

    /// Slides in an error pill that removes itself after its display time.
    ///
    /// Ignored if the pill is already showing.
    ///
    /// # Errors
    ///
    /// Fails if the pill or the surface is unknown, or if the surface has no
    /// area.
    pub fn show_error(&mut self, id: PillId, request: ErrorRequest, now: Instant) -> Result<()> {
        let pill = self.pills.get_mut(&id).ok_or(Error::UnknownPill(id))?;
        if !pill.visual_state().is_idle() {
            tracing::debug!(%id, state = ?pill.visual_state(), "show_error ignored, pill is showing");
            return Ok(());
        }
        let surface = self
            .surfaces
            .get(request.surface)
            .ok_or(Error::UnknownSurface(request.surface))?;
        layout::origin_for_center(surface, pill.options().width)?;

        self.registry.insert(id, Mode::Error);
        tracing::info!(
            %id,
            surface = %request.surface,
            message = %request.message,
            display_secs = request.min_display_time.as_duration().as_secs_f32(),
            "showing error pill"
        );
        pill.begin_error(request, surface, self.platform.as_ref(), now);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Task progress
    // ------------------------------------------------------------------

    /// Replaces the title of a pill waiting for its task.
    ///
    /// Returns false, leaving the title unchanged, in any other state.
    pub fn update_task(&mut self, id: PillId, message: impl Into<String>) -> bool {
        match self.pills.get_mut(&id) {
            Some(pill) if pill.is_awaiting_completion() => {
                pill.set_message(message.into());
                true
            }
            _ => {
                tracing::debug!(%id, "update_task ignored, pill is not awaiting completion");
                false
            }
        }
    }

    /// Acknowledges the task behind a pill and starts its exit.
    ///
    /// The pill leaves the registry, crossfades its spinner into the result
    /// glyph, waits for the completion delay, slides out and is torn down.
    /// If the entrance is still running the exit starts when it ends.
    ///
    /// Returns false if the pill is not waiting for a completion, including a
    /// second acknowledgement of the same task.
    pub fn completed_task(&mut self, id: PillId, completion: Completion, now: Instant) -> bool {
        let Some(pill) = self.pills.get_mut(&id) else {
            tracing::debug!(%id, "completed_task ignored, unknown pill");
            return false;
        };
        let success = completion.is_success();
        if pill.acknowledge(completion, &mut self.registry, now) {
            tracing::info!(%id, success, "task completed");
            true
        } else {
            tracing::debug!(%id, state = ?pill.visual_state(), "completed_task ignored");
            false
        }
    }

    // ------------------------------------------------------------------
    // Slides
    // ------------------------------------------------------------------

    /// Slides a resting pill off-screen after `delay` (1.5s by default),
    /// keeping its mode and registry entry.
    pub fn dismiss(
        &mut self,
        id: PillId,
        delay: Option<Duration>,
        on_done: Option<Callback>,
        now: Instant,
    ) -> bool {
        let delay = delay.map_or_else(ExitDelay::default, ExitDelay::new);
        let accepted = self
            .pills
            .get_mut(&id)
            .is_some_and(|pill| pill.begin_dismiss(delay.as_duration(), on_done, now));
        if !accepted {
            tracing::debug!(%id, "dismiss ignored");
        }
        accepted
    }

    /// Brings a dismissed pill back to its resting position.
    pub fn reveal(&mut self, id: PillId, on_done: Option<Callback>, now: Instant) -> bool {
        let accepted = self
            .pills
            .get_mut(&id)
            .is_some_and(|pill| pill.begin_reveal(on_done, now));
        if !accepted {
            tracing::debug!(%id, "reveal ignored");
        }
        accepted
    }

    /// Tears a showing pill down immediately.
    ///
    /// Pending stages are dropped and the done callback runs with
    /// [`Outcome::Cancelled`]; the event is reported by the next `tick`.
    pub fn cancel(&mut self, id: PillId) -> bool {
        match self.pills.get_mut(&id) {
            Some(pill) if !pill.visual_state().is_idle() => {
                pill.teardown(Outcome::Cancelled, &mut self.registry, &mut self.events);
                true
            }
            _ => {
                tracing::debug!(%id, "cancel ignored, pill is not showing");
                false
            }
        }
    }

    // ------------------------------------------------------------------
    // Driving
    // ------------------------------------------------------------------

    /// Applies queued handle commands, removes pills whose surface is gone
    /// and runs every due stage.
    pub fn tick(&mut self, now: Instant) -> Vec<PillEvent> {
        self.process_commands(now);
        self.resolve_lost_surfaces();

        let mut env = Env {
            platform: self.platform.as_ref(),
            surfaces: &self.surfaces,
            registry: &mut self.registry,
            events: &mut self.events,
        };
        for pill in self.pills.values_mut() {
            pill.run_due(now, &mut env);
        }

        std::mem::take(&mut self.events)
    }

    fn process_commands(&mut self, now: Instant) {
        while let Ok(command) = self.command_rx.try_recv() {
            match command {
                Command::UpdateTask { id, message } => {
                    self.update_task(id, message);
                }
                Command::CompletedTask { id, completion } => {
                    self.completed_task(id, completion, now);
                }
                Command::Cancel { id } => {
                    self.cancel(id);
                }
            }
        }
    }

    fn resolve_lost_surfaces(&mut self) {
        for pill in self.pills.values_mut() {
            let Some(surface) = pill.surface() else {
                continue;
            };
            if !pill.visual_state().is_idle() && !self.surfaces.contains(surface) {
                tracing::warn!(id = %pill.id(), %surface, "host surface lost, removing pill");
                pill.teardown(Outcome::SurfaceLost, &mut self.registry, &mut self.events);
            }
        }
    }

    /// Earliest pending stage across all pills.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pills.values().filter_map(Pill::next_deadline).min()
    }

    /// Returns true while any pill is on screen.
    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.pills
            .values()
            .any(|pill| !pill.visual_state().is_idle())
    }

    /// Render snapshots of the pills attached to `surface`.
    #[must_use]
    pub fn frames(&self, surface: SurfaceId, now: Instant) -> Vec<PillFrame> {
        let Some(host) = self.surfaces.get(surface) else {
            return Vec::new();
        };
        let colors = self.platform.palette(self.dark);
        self.pills
            .values()
            .filter(|pill| pill.surface() == Some(surface))
            .filter_map(|pill| pill.frame(host, colors, now))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::MIN_ERROR_DISPLAY;
    use crate::domain::{Insets, Surface};
    use crate::pill::{Glyph, VisualState};
    use crate::platform::{Desktop, Edge, Touch};
    use crate::test_utils::{after, assert_abs_diff_eq, F32_EPSILON};
    use crate::ui::design_tokens::palette;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn setup() -> (Controller, SurfaceId, PillId) {
        let mut controller = Controller::new(Box::new(Touch::default()));
        let surface = controller.surfaces_mut().attach(Surface::new(390.0, 844.0));
        let pill = controller.create(PillOptions::default()).unwrap();
        (controller, surface, pill)
    }

    fn counter() -> (Arc<AtomicUsize>, impl FnOnce() + Send + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let clone = Arc::clone(&count);
        (count, move || {
            clone.fetch_add(1, Ordering::SeqCst);
        })
    }

    fn done_outcome(events: &[PillEvent], id: PillId) -> Option<Outcome> {
        events.iter().find_map(|event| match event {
            PillEvent::Done { id: done, outcome } if *done == id => Some(*outcome),
            _ => None,
        })
    }

    /// Shows a task pill at `t0` and ticks it to rest.
    fn resting_task(controller: &mut Controller, surface: SurfaceId, pill: PillId, t0: Instant) {
        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();
        controller.tick(after(t0, 1.0));
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::Resting
        );
    }

    #[test]
    fn create_rejects_text_taller_than_pill() {
        let mut controller = Controller::new(Box::new(Desktop));
        let options = PillOptions::default().with_font(iced::Font::DEFAULT, 60.0);
        assert!(matches!(
            controller.create(options),
            Err(Error::FontTooLarge { .. })
        ));
    }

    #[test]
    fn show_task_registers_and_awaits_completion() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();

        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();

        let state = controller.pill(pill).unwrap();
        assert!(controller.registry().contains(pill));
        assert_eq!(state.mode(), Some(Mode::AwaitingTask));
        assert!(state.is_awaiting_completion());
        assert_eq!(state.visual_state(), VisualState::Entering);
        assert_eq!(state.surface(), Some(surface));
    }

    #[test]
    fn pill_enters_from_beyond_the_edge_and_rests_centred() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        let (shown, on_shown) = counter();

        controller
            .show_task(
                pill,
                TaskRequest::new("Refreshing Data", surface).on_shown(on_shown),
                t0,
            )
            .unwrap();

        let start = &controller.frames(surface, t0)[0];
        assert_abs_diff_eq!(start.y, -300.0, epsilon = F32_EPSILON);

        let events = controller.tick(after(t0, 0.999));
        assert!(events.is_empty());
        assert_eq!(shown.load(Ordering::SeqCst), 0);

        let events = controller.tick(after(t0, 1.0));
        assert_eq!(events, vec![PillEvent::Shown(pill)]);
        assert_eq!(shown.load(Ordering::SeqCst), 1);

        let frame = &controller.frames(surface, after(t0, 1.0))[0];
        assert_abs_diff_eq!(frame.x + frame.width / 2.0, 195.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frame.y, 25.0, epsilon = F32_EPSILON);
        assert_eq!(frame.title, "Refreshing Data");
        assert!(frame.indicator.spinner.is_some());
        assert!(frame.indicator.glyph.is_none());
    }

    #[test]
    fn notched_surface_with_navigation_bar_rests_lower() {
        let mut controller = Controller::new(Box::new(Touch::default()));
        let surface = controller
            .surfaces_mut()
            .attach(Surface::new(390.0, 844.0).with_safe_area(Insets::new(47.0, 34.0)));
        let pill = controller
            .create(PillOptions::default().with_navigation_bar(true))
            .unwrap();
        let t0 = Instant::now();

        controller
            .show_task(pill, TaskRequest::new("Syncing", surface), t0)
            .unwrap();
        controller.tick(after(t0, 1.0));

        let frame = &controller.frames(surface, after(t0, 1.0))[0];
        assert_abs_diff_eq!(frame.y, 85.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn safe_area_change_applies_to_the_next_show() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);
        assert_abs_diff_eq!(
            controller.frames(surface, after(t0, 1.0))[0].y,
            25.0,
            epsilon = F32_EPSILON
        );
        assert!(controller.cancel(pill));

        assert!(controller
            .surfaces_mut()
            .set_safe_area(surface, Insets::new(47.0, 34.0)));
        let t1 = after(t0, 2.0);
        resting_task(&mut controller, surface, pill, t1);
        assert_abs_diff_eq!(
            controller.frames(surface, after(t1, 1.0))[0].y,
            45.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn bottom_edge_pill_rests_above_the_bottom() {
        let mut controller = Controller::new(Box::new(Desktop));
        let surface = controller.surfaces_mut().attach(Surface::new(800.0, 600.0));
        let pill = controller
            .create(PillOptions::default().with_edge(Edge::Bottom, 30.0))
            .unwrap();
        let t0 = Instant::now();

        controller
            .show_task(pill, TaskRequest::new("Exporting", surface), t0)
            .unwrap();
        assert_abs_diff_eq!(
            controller.frames(surface, t0)[0].y,
            650.0,
            epsilon = F32_EPSILON
        );

        controller.tick(after(t0, 1.0));
        let frame = &controller.frames(surface, after(t0, 1.0))[0];
        assert_abs_diff_eq!(frame.y, 525.0, epsilon = F32_EPSILON);
        assert_abs_diff_eq!(frame.x, 300.0, epsilon = F32_EPSILON);
    }

    #[test]
    fn update_task_only_applies_while_awaiting() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);

        assert!(controller.update_task(pill, "Refreshing 2 of 3"));
        assert_eq!(controller.pill(pill).unwrap().message(), "Refreshing 2 of 3");

        assert!(controller.completed_task(pill, Completion::success(), after(t0, 2.0)));
        assert!(!controller.update_task(pill, "too late"));
        assert_eq!(controller.pill(pill).unwrap().message(), "Refreshing 2 of 3");
    }

    #[test]
    fn update_task_is_ignored_for_error_pills() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_error(pill, ErrorRequest::new("Network error", surface), t0)
            .unwrap();

        assert!(!controller.update_task(pill, "changed"));
        assert_eq!(controller.pill(pill).unwrap().message(), "Network error");
    }

    #[test]
    fn completed_task_runs_the_full_exit_sequence() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);

        let (done, on_done) = counter();
        let called = after(t0, 6.0);
        assert!(controller.completed_task(pill, Completion::success().on_done(on_done), called));

        // Registry removal comes first.
        let state = controller.pill(pill).unwrap();
        assert!(!controller.registry().contains(pill));
        assert!(!state.is_awaiting_completion());
        assert_eq!(state.mode(), Some(Mode::AwaitingTask));
        assert_eq!(state.visual_state(), VisualState::ExitingSuccess);

        // Crossfade.
        let indicator = controller.frames(surface, after(called, 0.1))[0].indicator;
        assert!(indicator.spinner.is_some());
        let glyph = indicator.glyph.unwrap();
        assert_eq!(glyph.glyph, Glyph::Checkmark);
        assert_eq!(glyph.color, palette::SUCCESS_500);

        controller.tick(after(called, 0.25));
        let indicator = controller.frames(surface, after(called, 0.25))[0].indicator;
        assert!(indicator.spinner.is_none());
        assert!(indicator.glyph.is_some());

        // Pause, still at rest.
        controller.tick(after(called, 1.7));
        assert_abs_diff_eq!(
            controller.frames(surface, after(called, 1.7))[0].y,
            25.0,
            epsilon = F32_EPSILON
        );

        // Exit slide.
        controller.tick(after(called, 1.75));
        assert!(controller.frames(surface, after(called, 2.5))[0].y < 25.0);

        let events = controller.tick(after(called, 2.749));
        assert!(events.is_empty());
        assert_eq!(done.load(Ordering::SeqCst), 0);

        let events = controller.tick(after(called, 2.75));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Success));
        assert_eq!(done.load(Ordering::SeqCst), 1);

        let state = controller.pill(pill).unwrap();
        assert_eq!(state.mode(), None);
        assert_eq!(state.visual_state(), VisualState::Removed);
        assert_eq!(state.surface(), None);
        assert!(controller.frames(surface, after(called, 2.75)).is_empty());
    }

    #[test]
    fn failure_uses_failure_glyph_and_replacement_message() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);

        let completion = Completion::failure()
            .message("Upload failed")
            .delay(Duration::ZERO);
        assert!(controller.completed_task(pill, completion, after(t0, 2.0)));

        let state = controller.pill(pill).unwrap();
        assert_eq!(state.visual_state(), VisualState::ExitingFailure);
        assert_eq!(state.message(), "Upload failed");

        let frame = &controller.frames(surface, after(t0, 2.25))[0];
        let glyph = frame.indicator.glyph.unwrap();
        assert_eq!(glyph.glyph, Glyph::Cross);
        assert_eq!(glyph.color, palette::ERROR_500);

        let events = controller.tick(after(t0, 3.25));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Failure));
    }

    #[test]
    fn second_completion_is_ignored() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);
        let (done, on_done) = counter();
        let (other, on_other) = counter();

        assert!(controller.completed_task(pill, Completion::success().on_done(on_done), after(t0, 2.0)));
        assert!(!controller.completed_task(pill, Completion::failure().on_done(on_other), after(t0, 2.1)));

        let events = controller.tick(after(t0, 10.0));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Success));
        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert_eq!(other.load(Ordering::SeqCst), 0);

        assert!(!controller.completed_task(pill, Completion::success(), after(t0, 11.0)));
    }

    #[test]
    fn completion_after_error_is_ignored() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_error(pill, ErrorRequest::new("Network error", surface), t0)
            .unwrap();
        controller.tick(after(t0, 1.0));

        assert!(!controller.completed_task(pill, Completion::success(), after(t0, 1.5)));
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::Resting
        );
    }

    #[test]
    fn completion_during_entrance_waits_for_rest() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();

        assert!(controller.completed_task(pill, Completion::success(), after(t0, 0.5)));
        let state = controller.pill(pill).unwrap();
        assert!(!state.is_awaiting_completion());
        assert_eq!(state.visual_state(), VisualState::Entering);
        assert!(!controller.registry().contains(pill));
        assert!(controller.registry().is_empty());

        let events = controller.tick(after(t0, 1.0));
        assert_eq!(events, vec![PillEvent::Shown(pill)]);
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::ExitingSuccess
        );
        assert!(!controller.registry().contains(pill));

        assert!(controller.tick(after(t0, 3.749)).is_empty());
        let events = controller.tick(after(t0, 3.75));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Success));
    }

    #[test]
    fn long_exit_delay_is_honoured() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);

        let completion = Completion::success().delay(Duration::from_secs(90));
        assert!(controller.completed_task(pill, completion, after(t0, 2.0)));

        // 2 + 0.25 crossfade + 90 pause + 1 slide
        assert!(done_outcome(&controller.tick(after(t0, 70.0)), pill).is_none());
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::ExitingSuccess
        );
        assert!(controller.tick(after(t0, 93.249)).is_empty());
        let events = controller.tick(after(t0, 93.25));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Success));
    }

    #[test]
    fn late_tick_runs_every_stage_in_order() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();
        controller.completed_task(pill, Completion::success(), after(t0, 0.2));

        let events = controller.tick(after(t0, 30.0));
        assert_eq!(
            events,
            vec![
                PillEvent::Shown(pill),
                PillEvent::Done {
                    id: pill,
                    outcome: Outcome::Success
                }
            ]
        );
        assert!(controller.next_deadline().is_none());
    }

    #[test]
    fn error_pill_is_held_for_the_minimum_display_time() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        let (done, on_done) = counter();

        controller
            .show_error(
                pill,
                ErrorRequest::new("Network error", surface)
                    .min_display_time(Duration::from_secs(1))
                    .on_done(on_done),
                t0,
            )
            .unwrap();

        let state = controller.pill(pill).unwrap();
        assert_eq!(state.mode(), Some(Mode::Error));
        assert!(!state.is_awaiting_completion());
        assert_eq!(controller.registry().mode_of(pill), Some(Mode::Error));

        let glyph = controller.frames(surface, t0)[0].indicator.glyph.unwrap();
        assert_eq!(glyph.glyph, Glyph::Exclamation);

        controller.tick(after(t0, 2.999));
        assert!(controller.registry().contains(pill));
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::Resting
        );

        controller.tick(after(t0, 3.0));
        assert!(!controller.registry().contains(pill));
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::ExitingError
        );

        let teardown = 5.0 + MIN_ERROR_DISPLAY.as_secs_f64();
        assert!(controller.tick(after(t0, teardown - 0.001)).is_empty());
        assert_eq!(done.load(Ordering::SeqCst), 0);

        let events = controller.tick(after(t0, teardown));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Error));
        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert_eq!(controller.pill(pill).unwrap().mode(), None);
    }

    #[test]
    fn long_error_display_time_is_honoured() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_error(
                pill,
                ErrorRequest::new("Maintenance window", surface)
                    .min_display_time(Duration::from_secs(120)),
                t0,
            )
            .unwrap();

        let events = controller.tick(after(t0, 70.0));
        assert_eq!(events, vec![PillEvent::Shown(pill)]);
        assert!(controller.registry().contains(pill));

        controller.tick(after(t0, 121.0));
        assert_eq!(
            controller.pill(pill).unwrap().visual_state(),
            VisualState::ExitingError
        );
        assert!(controller.tick(after(t0, 124.999)).is_empty());
        let events = controller.tick(after(t0, 125.0));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Error));
    }

    #[test]
    fn second_show_leaves_registry_unchanged() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_task(pill, TaskRequest::new("First", surface), t0)
            .unwrap();
        controller
            .show_task(pill, TaskRequest::new("Second", surface), after(t0, 0.5))
            .unwrap();
        controller
            .show_error(pill, ErrorRequest::new("Third", surface), after(t0, 0.6))
            .unwrap();

        assert_eq!(controller.registry().len(), 1);
        assert_eq!(controller.registry().mode_of(pill), Some(Mode::AwaitingTask));
        assert_eq!(controller.pill(pill).unwrap().message(), "First");
    }

    #[test]
    fn removed_pill_can_be_shown_again() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);
        controller.completed_task(pill, Completion::success(), after(t0, 1.0));
        controller.tick(after(t0, 10.0));

        controller
            .show_error(pill, ErrorRequest::new("Network error", surface), after(t0, 11.0))
            .unwrap();
        let state = controller.pill(pill).unwrap();
        assert_eq!(state.mode(), Some(Mode::Error));
        assert_eq!(state.visual_state(), VisualState::Entering);
    }

    #[test]
    fn show_fails_on_unknown_or_degenerate_surface() {
        let (mut controller, _surface, pill) = setup();
        let t0 = Instant::now();

        let stray = SurfaceId::new();
        assert_eq!(
            controller.show_task(pill, TaskRequest::new("x", stray), t0),
            Err(Error::UnknownSurface(stray))
        );

        let flat = controller.surfaces_mut().attach(Surface::new(0.0, 0.0));
        assert!(matches!(
            controller.show_error(pill, ErrorRequest::new("x", flat), t0),
            Err(Error::DegenerateSurface { .. })
        ));
        assert!(controller.registry().is_empty());
        assert!(controller.pill(pill).unwrap().visual_state().is_idle());

        let unknown = PillId::new();
        assert_eq!(
            controller.show_task(unknown, TaskRequest::new("x", flat), t0),
            Err(Error::UnknownPill(unknown))
        );
    }

    #[test]
    fn dismiss_and_reveal_round_trip() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);
        let (dismissed, on_dismissed) = counter();

        assert!(!controller.reveal(pill, None, after(t0, 1.0)));
        assert!(controller.dismiss(pill, None, Some(Box::new(on_dismissed)), after(t0, 1.0)));
        assert!(!controller.dismiss(pill, None, None, after(t0, 1.1)));

        controller.tick(after(t0, 2.5));
        assert_abs_diff_eq!(
            controller.frames(surface, after(t0, 2.5))[0].y,
            25.0,
            epsilon = F32_EPSILON
        );

        let events = controller.tick(after(t0, 3.5));
        assert_eq!(events, vec![PillEvent::Dismissed(pill)]);
        assert_eq!(dismissed.load(Ordering::SeqCst), 1);
        let state = controller.pill(pill).unwrap();
        assert!(state.is_parked());
        assert!(controller.registry().contains(pill));
        assert_eq!(state.mode(), Some(Mode::AwaitingTask));
        assert_abs_diff_eq!(
            controller.frames(surface, after(t0, 3.5))[0].y,
            -300.0,
            epsilon = F32_EPSILON
        );

        assert!(controller.reveal(pill, None, after(t0, 4.0)));
        let events = controller.tick(after(t0, 6.749));
        assert!(events.is_empty());
        let events = controller.tick(after(t0, 6.75));
        assert_eq!(events, vec![PillEvent::Revealed(pill)]);
        assert!(!controller.pill(pill).unwrap().is_parked());
        assert_abs_diff_eq!(
            controller.frames(surface, after(t0, 6.75))[0].y,
            25.0,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn dismiss_requires_a_resting_pill() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        assert!(!controller.dismiss(pill, None, None, t0));

        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();
        assert!(!controller.dismiss(pill, None, None, after(t0, 0.5)));
    }

    #[test]
    fn exit_drops_pending_dismiss() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);
        let (dismissed, on_dismissed) = counter();

        controller.dismiss(
            pill,
            Some(Duration::from_secs(5)),
            Some(Box::new(on_dismissed)),
            after(t0, 1.0),
        );
        controller.completed_task(
            pill,
            Completion::success().delay(Duration::ZERO),
            after(t0, 1.0),
        );

        let events = controller.tick(after(t0, 20.0));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Success));
        assert!(!events.contains(&PillEvent::Dismissed(pill)));
        assert_eq!(dismissed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn cancel_tears_down_immediately() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        let (done, on_done) = counter();
        controller
            .show_error(pill, ErrorRequest::new("Network error", surface).on_done(on_done), t0)
            .unwrap();

        assert!(controller.cancel(pill));
        assert!(!controller.cancel(pill));
        assert_eq!(done.load(Ordering::SeqCst), 1);
        assert!(controller.registry().is_empty());
        assert!(controller.next_deadline().is_none());

        let events = controller.tick(after(t0, 0.1));
        assert_eq!(done_outcome(&events, pill), Some(Outcome::Cancelled));
    }

    #[test]
    fn cancel_during_entrance_runs_deferred_callback() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        let (done, on_done) = counter();
        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();
        controller.completed_task(pill, Completion::success().on_done(on_done), after(t0, 0.5));

        assert!(controller.cancel(pill));
        assert_eq!(done.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn lost_surface_removes_its_pills() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);

        controller.surfaces_mut().detach(surface);
        let events = controller.tick(after(t0, 1.5));

        assert_eq!(done_outcome(&events, pill), Some(Outcome::SurfaceLost));
        assert!(controller.registry().is_empty());
        assert!(!controller.is_animating());
    }

    #[test]
    fn handle_commands_apply_on_tick() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        resting_task(&mut controller, surface, pill, t0);
        let handle = controller.handle();

        std::thread::spawn(move || {
            handle.update_task(pill, "Almost done");
            handle.completed_task(pill, Completion::success());
        })
        .join()
        .unwrap();

        assert!(controller.pill(pill).unwrap().is_awaiting_completion());
        controller.tick(after(t0, 2.0));

        let state = controller.pill(pill).unwrap();
        assert_eq!(state.message(), "Almost done");
        assert_eq!(state.visual_state(), VisualState::ExitingSuccess);
        assert_eq!(
            controller.next_deadline(),
            Some(after(t0, 2.25))
        );
    }

    #[test]
    fn pills_on_one_surface_are_independent() {
        let (mut controller, surface, first) = setup();
        let second = controller.create(PillOptions::default()).unwrap();
        let t0 = Instant::now();

        controller
            .show_task(first, TaskRequest::new("One", surface), t0)
            .unwrap();
        controller
            .show_error(second, ErrorRequest::new("Two", surface), after(t0, 0.5))
            .unwrap();
        assert_eq!(controller.registry().with_mode(Mode::AwaitingTask), vec![first]);
        assert_eq!(controller.registry().with_mode(Mode::Error), vec![second]);
        assert_eq!(controller.frames(surface, after(t0, 0.6)).len(), 2);

        controller.tick(after(t0, 1.0));
        assert_eq!(
            controller.pill(second).unwrap().visual_state(),
            VisualState::Entering
        );
        assert!(controller.is_animating());
    }

    #[test]
    fn dark_palette_changes_background() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();

        let light = controller.frames(surface, t0)[0].background;
        controller.set_dark(true);
        let dark = controller.frames(surface, t0)[0].background;
        assert_ne!(light, dark);
        assert_eq!(dark, palette::PILL_TOUCH_DARK);
    }

    #[test]
    fn release_forgets_the_pill() {
        let (mut controller, surface, pill) = setup();
        let t0 = Instant::now();
        controller
            .show_task(pill, TaskRequest::new("Refreshing Data", surface), t0)
            .unwrap();

        assert!(controller.release(pill).is_some());
        assert!(controller.pill(pill).is_none());
        assert!(controller.registry().is_empty());
        assert!(!controller.completed_task(pill, Completion::success(), t0));
    }
}
