// SPDX-License-Identifier: MPL-2.0
//! Canvas program drawing pill frames.
//!
//! The canvas covers the whole host surface and draws every pill snapshot
//! produced by [`Controller::frames`](crate::pill::Controller::frames):
//! shadow, rounded background, title, then the indicator (spinner arc and/or
//! result glyph, each with its own opacity during a crossfade).

use super::glyphs;
use crate::pill::{GlyphFrame, PillFrame, SpinnerFrame};
use crate::ui::design_tokens::{opacity, radius, shadow, sizing, spacing};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, LineCap, LineJoin, Path, Stroke, Text};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Size, Theme};
use std::f32::consts::PI;

/// Approximate advance of one character, as a fraction of the text size.
const CHAR_WIDTH_RATIO: f32 = 0.55;

/// Number of segments used to approximate the spinner arc.
const ARC_SEGMENTS: usize = 30;

/// Vertical offset of the drop shadow.
const SHADOW_OFFSET: f32 = 3.0;

/// Draws a set of pill frames.
pub struct PillCanvas {
    frames: Vec<PillFrame>,
}

impl PillCanvas {
    #[must_use]
    pub fn new(frames: Vec<PillFrame>) -> Self {
        Self { frames }
    }

    /// Creates a Canvas widget filling its container.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'static, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for PillCanvas {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        for pill in &self.frames {
            draw_pill(&mut frame, pill);
        }
        vec![frame.into_geometry()]
    }
}

fn draw_pill(frame: &mut Frame, pill: &PillFrame) {
    let size = Size::new(pill.width, pill.height);

    // Shadow: a few widening translucent layers approximate the blur.
    let layers = 3;
    for layer in 1..=layers {
        #[allow(clippy::cast_precision_loss)]
        let spread = shadow::BLUR * layer as f32 / layers as f32 / 2.0;
        let path = Path::rounded_rectangle(
            Point::new(pill.x - spread, pill.y + SHADOW_OFFSET - spread),
            Size::new(size.width + spread * 2.0, size.height + spread * 2.0),
            (radius::PILL + spread).into(),
        );
        #[allow(clippy::cast_precision_loss)]
        frame.fill(
            &path,
            Color {
                a: pill.shadow.a / layers as f32,
                ..pill.shadow
            },
        );
    }

    let background = Path::rounded_rectangle(Point::new(pill.x, pill.y), size, radius::PILL.into());
    frame.fill(&background, pill.background);

    let title_width = pill.width - spacing::TITLE_LEADING - spacing::INDICATOR_COLUMN;
    frame.fill_text(Text {
        content: fit_title(&pill.title, title_width, pill.text_size),
        position: Point::new(
            pill.x + spacing::TITLE_LEADING,
            pill.y + (pill.height - pill.text_size) / 2.0,
        ),
        color: pill.title_color,
        size: pill.text_size.into(),
        font: pill.font,
        ..Text::default()
    });

    let center = indicator_center(pill);
    if let Some(spinner) = pill.indicator.spinner {
        draw_spinner(frame, center, spinner);
    }
    if let Some(glyph) = pill.indicator.glyph {
        draw_glyph(frame, center, glyph);
    }
}

fn draw_spinner(frame: &mut Frame, center: Point, spinner: SpinnerFrame) {
    let radius = sizing::INDICATOR / 2.0 - sizing::STROKE;

    let track = Path::circle(center, radius);
    frame.stroke(
        &track,
        Stroke::default()
            .with_width(sizing::STROKE)
            .with_color(faded(spinner.color, opacity::SPINNER_TRACK * spinner.alpha)),
    );

    let arc = polyline(&arc_points(center, radius, spinner.rotation));
    frame.stroke(
        &arc,
        Stroke::default()
            .with_width(sizing::STROKE)
            .with_color(faded(spinner.color, spinner.alpha))
            .with_line_cap(LineCap::Round),
    );
}

fn draw_glyph(frame: &mut Frame, center: Point, glyph: GlyphFrame) {
    let color = faded(glyph.color, glyph.alpha);

    if glyphs::has_ring(glyph.glyph) {
        let ring = Path::circle(center, sizing::INDICATOR / 2.0 - sizing::STROKE / 2.0);
        frame.stroke(&ring, glyph_pen(color));
    }
    for points in glyphs::strokes(glyph.glyph, center, sizing::INDICATOR) {
        frame.stroke(&polyline(&points), glyph_pen(color));
    }
}

fn glyph_pen(color: Color) -> Stroke<'static> {
    Stroke::default()
        .with_width(sizing::STROKE)
        .with_color(color)
        .with_line_cap(LineCap::Round)
        .with_line_join(LineJoin::Round)
}

fn polyline(points: &[Point]) -> Path {
    Path::new(|builder| {
        if let Some((first, rest)) = points.split_first() {
            builder.move_to(*first);
            for point in rest {
                builder.line_to(*point);
            }
        }
    })
}

fn faded(color: Color, alpha: f32) -> Color {
    Color {
        a: color.a * alpha.clamp(0.0, 1.0),
        ..color
    }
}

/// Centre of the indicator slot near the trailing edge of the pill.
fn indicator_center(pill: &PillFrame) -> Point {
    Point::new(
        pill.x + pill.width - spacing::INDICATOR_TRAILING - sizing::INDICATOR / 2.0,
        pill.y + pill.height / 2.0,
    )
}

/// Half-circle arc starting at the top, rotated by `rotation` radians.
fn arc_points(center: Point, radius: f32, rotation: f32) -> Vec<Point> {
    let start = rotation - PI / 2.0;
    (0..=ARC_SEGMENTS)
        .map(|i| {
            #[allow(clippy::cast_precision_loss)]
            let t = i as f32 / ARC_SEGMENTS as f32;
            let angle = start + PI * t;
            Point::new(
                center.x + radius * angle.cos(),
                center.y + radius * angle.sin(),
            )
        })
        .collect()
}

/// Truncates `title` with an ellipsis so it fits in `max_width`.
fn fit_title(title: &str, max_width: f32, text_size: f32) -> String {
    let char_width = text_size * CHAR_WIDTH_RATIO;
    if char_width <= 0.0 {
        return title.to_string();
    }
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let capacity = (max_width / char_width).floor().max(0.0) as usize;
    if title.chars().count() <= capacity {
        return title.to_string();
    }
    let kept: String = title.chars().take(capacity.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
