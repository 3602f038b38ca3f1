// SPDX-License-Identifier: MPL-2.0
//! State of a single pill and the interpretation of its timeline stages.

use super::layout;
use super::timeline::Timeline;
use super::{
    ActiveRegistry, Callback, Completion, ErrorRequest, Glyph, Mode, Outcome, PillEvent, PillId,
    PillOptions, TaskRequest, VisualState,
};
use crate::animation::{Crossfade, Slide};
use crate::config::{
    CROSSFADE_DURATION, ERROR_EXIT_START_OFFSET, ERROR_TEARDOWN_OFFSET, REVEAL_DELAY, REVEAL_LEAD,
    SLIDE_DURATION, SPINNER_PERIOD,
};
use crate::domain::{Surface, SurfaceId, Surfaces};
use crate::platform::{PillPalette, Platform};
use crate::ui::design_tokens::palette;
use iced::{Color, Font};
use std::f32::consts::TAU;
use std::fmt;
use std::time::{Duration, Instant};

/// A timeline stage of a pill.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Action {
    /// The entrance slide reached the resting position.
    EntranceFinished,
    /// The spinner to glyph crossfade is over.
    GlyphShown,
    /// Start sliding off-screen for good.
    ExitSlide,
    /// Error display time is over: leave the registry and slide out.
    ErrorExit,
    DismissSlide,
    DismissFinished,
    RevealSlide,
    RevealFinished,
    Teardown(Outcome),
}

impl Action {
    /// Stages of a `dismiss` or `reveal` excursion.
    fn is_excursion(&self) -> bool {
        matches!(
            self,
            Action::DismissSlide
                | Action::DismissFinished
                | Action::RevealSlide
                | Action::RevealFinished
        )
    }
}

/// What the indicator slot shows.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Indicator {
    Hidden,
    Spinner {
        started: Instant,
        color: Color,
    },
    Glyph {
        glyph: Glyph,
        color: Color,
    },
    /// Spinner fading out while a glyph fades in.
    Swap {
        spinner_started: Instant,
        spinner_color: Color,
        glyph: Glyph,
        color: Color,
        fade: Crossfade,
    },
}

/// Spinner as drawn in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpinnerFrame {
    /// Rotation in radians, `0.0..TAU`.
    pub rotation: f32,
    pub color: Color,
    pub alpha: f32,
}

/// Glyph as drawn in one frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphFrame {
    pub glyph: Glyph,
    pub color: Color,
    pub alpha: f32,
}

/// Contents of the indicator slot. Both parts are present during a crossfade.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IndicatorFrame {
    pub spinner: Option<SpinnerFrame>,
    pub glyph: Option<GlyphFrame>,
}

/// Render snapshot of one pill at one instant.
#[derive(Debug, Clone, PartialEq)]
pub struct PillFrame {
    pub id: PillId,
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub text_size: f32,
    pub font: Font,
    pub background: Color,
    pub title_color: Color,
    pub shadow: Color,
    pub indicator: IndicatorFrame,
}

/// Collaborators a stage may touch besides the pill itself.
pub(super) struct Env<'a> {
    pub platform: &'a dyn Platform,
    pub surfaces: &'a Surfaces,
    pub registry: &'a mut ActiveRegistry,
    pub events: &'a mut Vec<PillEvent>,
}

/// One pill notification.
///
/// Pills are owned by a [`Controller`](super::Controller); this type exposes
/// read-only accessors for inspection.
pub struct Pill {
    id: PillId,
    options: PillOptions,
    mode: Option<Mode>,
    message: String,
    awaiting_completion: bool,
    surface: Option<SurfaceId>,
    state: VisualState,
    tint: Option<Color>,
    indicator: Indicator,
    /// Distance from the entry edge over time.
    slide: Option<Slide>,
    /// Moved off-screen by `dismiss` and not yet revealed.
    parked: bool,
    timeline: Timeline<Action>,
    /// Completion acknowledged while the entrance was still running.
    pending_completion: Option<Completion>,
    on_shown: Option<Callback>,
    on_done: Option<Callback>,
    on_dismissed: Option<Callback>,
    on_revealed: Option<Callback>,
}

impl Pill {
    pub(super) fn new(options: PillOptions) -> Self {
        Self {
            id: PillId::new(),
            options,
            mode: None,
            message: String::new(),
            awaiting_completion: false,
            surface: None,
            state: VisualState::Detached,
            tint: None,
            indicator: Indicator::Hidden,
            slide: None,
            parked: false,
            timeline: Timeline::new(),
            pending_completion: None,
            on_shown: None,
            on_done: None,
            on_dismissed: None,
            on_revealed: None,
        }
    }

    #[must_use]
    pub fn id(&self) -> PillId {
        self.id
    }

    #[must_use]
    pub fn options(&self) -> &PillOptions {
        &self.options
    }

    /// Mode of the current showing cycle; `None` before the first show and
    /// after teardown.
    #[must_use]
    pub fn mode(&self) -> Option<Mode> {
        self.mode
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn is_awaiting_completion(&self) -> bool {
        self.awaiting_completion
    }

    #[must_use]
    pub fn surface(&self) -> Option<SurfaceId> {
        self.surface
    }

    #[must_use]
    pub fn visual_state(&self) -> VisualState {
        self.state
    }

    #[must_use]
    pub fn tint(&self) -> Option<Color> {
        self.tint
    }

    /// Returns true if `dismiss` moved the pill off-screen.
    #[must_use]
    pub fn is_parked(&self) -> bool {
        self.parked
    }

    /// Current distance from the entry edge.
    #[must_use]
    pub fn distance(&self, now: Instant) -> Option<f32> {
        self.slide.map(|slide| slide.value(now))
    }

    pub(super) fn next_deadline(&self) -> Option<Instant> {
        self.timeline.next_deadline()
    }

    pub(super) fn set_message(&mut self, message: String) {
        self.message = message;
    }

    // ------------------------------------------------------------------
    // Show
    // ------------------------------------------------------------------

    pub(super) fn begin_task(
        &mut self,
        request: TaskRequest,
        surface: &Surface,
        platform: &dyn Platform,
        now: Instant,
    ) {
        let TaskRequest {
            message,
            tint,
            on_shown,
            ..
        } = request;
        self.begin_cycle(Mode::AwaitingTask, message, surface, tint, platform, now);
        self.awaiting_completion = true;
        self.indicator = Indicator::Spinner {
            started: now,
            color: tint.unwrap_or(palette::NEUTRAL_500),
        };
        self.on_shown = on_shown;
    }

    pub(super) fn begin_error(
        &mut self,
        request: ErrorRequest,
        surface: &Surface,
        platform: &dyn Platform,
        now: Instant,
    ) {
        let ErrorRequest {
            message,
            tint,
            min_display_time,
            on_done,
            ..
        } = request;
        self.begin_cycle(Mode::Error, message, surface, tint, platform, now);
        self.indicator = Indicator::Glyph {
            glyph: self.options.error_glyph,
            color: tint.unwrap_or(palette::ERROR_500),
        };
        self.on_done = on_done;

        let shown_for = min_display_time.as_duration();
        self.timeline
            .schedule(now + ERROR_EXIT_START_OFFSET + shown_for, Action::ErrorExit);
        self.timeline.schedule(
            now + ERROR_TEARDOWN_OFFSET + shown_for,
            Action::Teardown(Outcome::Error),
        );
    }

    fn begin_cycle(
        &mut self,
        mode: Mode,
        message: String,
        surface: &Surface,
        tint: Option<Color>,
        platform: &dyn Platform,
        now: Instant,
    ) {
        let hidden = layout::hidden_distance(platform, &self.options);
        let rest = layout::resting_distance(platform, surface, &self.options);

        self.mode = Some(mode);
        self.message = message;
        self.surface = Some(surface.id());
        self.state = VisualState::Entering;
        self.tint = tint;
        self.parked = false;
        self.slide = Some(Slide::new(
            hidden,
            rest,
            now,
            SLIDE_DURATION,
            platform.slide_easing(),
        ));
        self.timeline
            .schedule(now + SLIDE_DURATION, Action::EntranceFinished);
    }

    // ------------------------------------------------------------------
    // Completion
    // ------------------------------------------------------------------

    /// Records a completion acknowledgement. Returns false if the pill is not
    /// waiting for one.
    pub(super) fn acknowledge(
        &mut self,
        mut completion: Completion,
        registry: &mut ActiveRegistry,
        now: Instant,
    ) -> bool {
        if self.mode != Some(Mode::AwaitingTask) || !self.awaiting_completion {
            return false;
        }
        self.awaiting_completion = false;
        registry.remove(self.id);

        if self.state == VisualState::Entering {
            // Visual exit starts when the entrance finishes.
            self.on_done = completion.on_done.take();
            self.pending_completion = Some(completion);
        } else {
            self.begin_completion(completion, registry, now);
        }
        true
    }

    fn begin_completion(
        &mut self,
        completion: Completion,
        registry: &mut ActiveRegistry,
        at: Instant,
    ) {
        registry.remove(self.id);

        let Completion {
            success,
            message,
            delay,
            on_done,
        } = completion;
        if let Some(message) = message {
            self.message = message;
        }
        if on_done.is_some() {
            self.on_done = on_done;
        }

        let (glyph, color, outcome, state) = if success {
            (
                self.options.success_glyph,
                palette::SUCCESS_500,
                Outcome::Success,
                VisualState::ExitingSuccess,
            )
        } else {
            (
                self.options.failure_glyph,
                palette::ERROR_500,
                Outcome::Failure,
                VisualState::ExitingFailure,
            )
        };
        let (spinner_started, spinner_color) = match self.indicator {
            Indicator::Spinner { started, color } => (started, color),
            _ => (at, palette::NEUTRAL_500),
        };
        self.indicator = Indicator::Swap {
            spinner_started,
            spinner_color,
            glyph,
            color,
            fade: Crossfade::new(at, CROSSFADE_DURATION),
        };
        self.state = state;

        let exit_at = at + CROSSFADE_DURATION + delay.as_duration();
        self.timeline
            .schedule(at + CROSSFADE_DURATION, Action::GlyphShown);
        self.timeline.schedule(exit_at, Action::ExitSlide);
        self.timeline
            .schedule(exit_at + SLIDE_DURATION, Action::Teardown(outcome));
        tracing::debug!(id = %self.id, ?outcome, "pill completion started");
    }

    // ------------------------------------------------------------------
    // Dismiss / reveal
    // ------------------------------------------------------------------

    fn excursion_pending(&self) -> bool {
        self.timeline.contains(Action::is_excursion)
    }

    pub(super) fn begin_dismiss(
        &mut self,
        delay: Duration,
        on_done: Option<Callback>,
        now: Instant,
    ) -> bool {
        if self.state != VisualState::Resting || self.parked || self.excursion_pending() {
            return false;
        }
        self.on_dismissed = on_done;
        self.timeline.schedule(now + delay, Action::DismissSlide);
        self.timeline
            .schedule(now + delay + SLIDE_DURATION, Action::DismissFinished);
        true
    }

    pub(super) fn begin_reveal(&mut self, on_done: Option<Callback>, now: Instant) -> bool {
        if self.state != VisualState::Resting || !self.parked || self.excursion_pending() {
            return false;
        }
        let start = now + REVEAL_DELAY + REVEAL_LEAD;
        self.on_revealed = on_done;
        self.timeline.schedule(start, Action::RevealSlide);
        self.timeline
            .schedule(start + SLIDE_DURATION, Action::RevealFinished);
        true
    }

    // ------------------------------------------------------------------
    // Stage interpretation
    // ------------------------------------------------------------------

    /// Runs every stage due at `now`, each anchored at its own deadline.
    pub(super) fn run_due(&mut self, now: Instant, env: &mut Env<'_>) {
        while let Some(stage) = self.timeline.pop_due(now) {
            tracing::debug!(id = %self.id, action = ?stage.action, "running pill stage");
            self.apply(stage.action, stage.at, env);
        }
    }

    fn apply(&mut self, action: Action, at: Instant, env: &mut Env<'_>) {
        match action {
            Action::EntranceFinished => {
                self.state = VisualState::Resting;
                if let Some(callback) = self.on_shown.take() {
                    callback();
                }
                env.events.push(PillEvent::Shown(self.id));
                if let Some(completion) = self.pending_completion.take() {
                    self.begin_completion(completion, env.registry, at);
                }
            }
            Action::GlyphShown => {
                if let Indicator::Swap { glyph, color, .. } = self.indicator {
                    self.indicator = Indicator::Glyph { glyph, color };
                }
            }
            Action::ExitSlide => self.slide_out(at, env.platform),
            Action::ErrorExit => {
                env.registry.remove(self.id);
                self.state = VisualState::ExitingError;
                self.slide_out(at, env.platform);
            }
            Action::DismissSlide => {
                let hidden = layout::hidden_distance(env.platform, &self.options);
                self.slide_to(hidden, at, env.platform);
            }
            Action::DismissFinished => {
                self.parked = true;
                if let Some(callback) = self.on_dismissed.take() {
                    callback();
                }
                env.events.push(PillEvent::Dismissed(self.id));
            }
            Action::RevealSlide => {
                let Some(surface) = self.surface.and_then(|id| env.surfaces.get(id)) else {
                    return;
                };
                let rest = layout::resting_distance(env.platform, surface, &self.options);
                self.slide_to(rest, at, env.platform);
            }
            Action::RevealFinished => {
                self.parked = false;
                if let Some(callback) = self.on_revealed.take() {
                    callback();
                }
                env.events.push(PillEvent::Revealed(self.id));
            }
            Action::Teardown(outcome) => self.teardown(outcome, env.registry, env.events),
        }
    }

    fn slide_out(&mut self, at: Instant, platform: &dyn Platform) {
        if self.excursion_pending() {
            tracing::debug!(id = %self.id, "dropping dismiss/reveal overtaken by exit");
            self.timeline.retain(|action| !action.is_excursion());
            self.on_dismissed = None;
            self.on_revealed = None;
        }
        let hidden = layout::hidden_distance(platform, &self.options);
        self.slide_to(hidden, at, platform);
    }

    fn slide_to(&mut self, target: f32, at: Instant, platform: &dyn Platform) {
        let from = self.distance(at).unwrap_or(target);
        self.slide = Some(Slide::new(
            from,
            target,
            at,
            SLIDE_DURATION,
            platform.slide_easing(),
        ));
    }

    /// Detaches the pill and resets it for the next cycle. Does nothing if the
    /// pill is not showing.
    pub(super) fn teardown(
        &mut self,
        outcome: Outcome,
        registry: &mut ActiveRegistry,
        events: &mut Vec<PillEvent>,
    ) {
        if self.state.is_idle() {
            return;
        }
        self.timeline.clear();
        registry.remove(self.id);

        self.mode = None;
        self.awaiting_completion = false;
        self.surface = None;
        self.state = VisualState::Removed;
        self.message.clear();
        self.tint = None;
        self.indicator = Indicator::Hidden;
        self.slide = None;
        self.parked = false;
        self.pending_completion = None;
        self.on_shown = None;
        self.on_dismissed = None;
        self.on_revealed = None;

        if let Some(callback) = self.on_done.take() {
            callback();
        }
        events.push(PillEvent::Done {
            id: self.id,
            outcome,
        });
        tracing::info!(id = %self.id, ?outcome, "pill removed");
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Snapshot for drawing on `surface`, or `None` if the pill is not
    /// showing or the surface has no area.
    pub(super) fn frame(
        &self,
        surface: &Surface,
        colors: PillPalette,
        now: Instant,
    ) -> Option<PillFrame> {
        if self.state.is_idle() {
            return None;
        }
        let distance = self.distance(now)?;
        let x = layout::origin_for_center(surface, self.options.width).ok()?;
        let y = layout::distance_to_y(surface, self.options.edge, self.options.height, distance);

        Some(PillFrame {
            id: self.id,
            x,
            y,
            width: self.options.width,
            height: self.options.height,
            title: self.message.clone(),
            text_size: self.options.text_size,
            font: self.options.font,
            background: colors.background,
            title_color: colors.title,
            shadow: colors.shadow,
            indicator: self.indicator_frame(now),
        })
    }

    fn indicator_frame(&self, now: Instant) -> IndicatorFrame {
        match self.indicator {
            Indicator::Hidden => IndicatorFrame::default(),
            Indicator::Spinner { started, color } => IndicatorFrame {
                spinner: Some(SpinnerFrame {
                    rotation: spinner_rotation(started, now),
                    color,
                    alpha: 1.0,
                }),
                glyph: None,
            },
            Indicator::Glyph { glyph, color } => IndicatorFrame {
                spinner: None,
                glyph: Some(GlyphFrame {
                    glyph,
                    color,
                    alpha: 1.0,
                }),
            },
            Indicator::Swap {
                spinner_started,
                spinner_color,
                glyph,
                color,
                fade,
            } => {
                let incoming = fade.incoming(now);
                IndicatorFrame {
                    spinner: Some(SpinnerFrame {
                        rotation: spinner_rotation(spinner_started, now),
                        color: spinner_color,
                        alpha: 1.0 - incoming,
                    }),
                    glyph: Some(GlyphFrame {
                        glyph,
                        color,
                        alpha: incoming,
                    }),
                }
            }
        }
    }
}

fn spinner_rotation(started: Instant, now: Instant) -> f32 {
    let turns =
        now.saturating_duration_since(started).as_secs_f32() / SPINNER_PERIOD.as_secs_f32();
    turns.fract() * TAU
}

impl fmt::Debug for Pill {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Pill")
            .field("id", &self.id)
            .field("mode", &self.mode)
            .field("message", &self.message)
            .field("awaiting_completion", &self.awaiting_completion)
            .field("surface", &self.surface)
            .field("state", &self.state)
            .field("parked", &self.parked)
            .field("pending_stages", &self.timeline.len())
            .finish_non_exhaustive()
    }
}
