// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the demo host.

use super::Message;
use iced::{event, time, Subscription};
use std::time::Duration;

/// Frame interval while a pill is animating (~60 FPS).
const TICK_INTERVAL: Duration = Duration::from_millis(16);

/// Routes window resizes so the host surface follows the window.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Window(iced::window::Event::Resized(size)) = event {
            return Some(Message::WindowResized(size));
        }
        None
    })
}

/// Creates the periodic tick subscription.
///
/// Ticks only run while at least one pill is showing, so an idle window does
/// not wake up.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(TICK_INTERVAL).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
