// SPDX-License-Identifier: MPL-2.0
//! View rendering for the demo host.
//!
//! A column of buttons driving the pill operations, with the pill canvas
//! stacked on top of it so pills slide over the content.

use super::Message;
use crate::pill::PillFrame;
use crate::ui::theming::ThemeMode;
use crate::ui::widgets::PillCanvas;
use iced::widget::{button, Column, Container, Row, Stack, Text};
use iced::{Alignment, Element, Length};

/// Spacing between controls.
const CONTROL_SPACING: f32 = 8.0;

/// Context required to render the host view.
pub struct ViewContext<'a> {
    pub frames: Vec<PillFrame>,
    pub theme_mode: ThemeMode,
    pub status: &'a str,
    pub warning: Option<&'a str>,
}

/// Renders the controls with the pill overlay.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let task_row = Row::new()
        .spacing(CONTROL_SPACING)
        .push(button("Show task").on_press(Message::ShowTask))
        .push(button("Update").on_press(Message::UpdateTask))
        .push(button("Succeed").on_press(Message::CompleteSuccess))
        .push(button("Fail").on_press(Message::CompleteFailure))
        .push(button("Background job").on_press(Message::RunBackgroundJob));

    let pill_row = Row::new()
        .spacing(CONTROL_SPACING)
        .push(button("Show error").on_press(Message::ShowError))
        .push(button("Dismiss").on_press(Message::Dismiss))
        .push(button("Reveal").on_press(Message::Reveal))
        .push(button("Cancel").on_press(Message::Cancel));

    let theme_row = Row::new()
        .spacing(CONTROL_SPACING)
        .align_y(Alignment::Center)
        .push(button("Theme").on_press(Message::CycleTheme))
        .push(Text::new(format!("Theme: {}", ctx.theme_mode)));

    let mut controls = Column::new()
        .spacing(CONTROL_SPACING)
        .align_x(Alignment::Center)
        .push(task_row)
        .push(pill_row)
        .push(theme_row)
        .push(Text::new(ctx.status).size(14.0));

    if let Some(warning) = ctx.warning {
        controls = controls.push(Text::new(warning).size(12.0));
    }

    let content = Container::new(controls)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    Stack::new()
        .push(content)
        .push(PillCanvas::new(ctx.frames).into_element())
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
