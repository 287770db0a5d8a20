// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the gallery.

use super::Message;
use iced::keyboard::{self, key};
use iced::{event, time, Subscription};
use std::time::Duration;

/// Routes Escape to the notification layer when nothing else captured it.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, status, _window_id| match (event, status) {
        (
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(key::Named::Escape),
                ..
            }),
            event::Status::Ignored,
        ) => Some(Message::EscapePressed),
        _ => None,
    })
}

/// Creates the countdown tick, active only while notifications are shown.
pub fn create_tick_subscription(
    has_notifications: bool,
    interval: Duration,
) -> Subscription<Message> {
    if has_notifications {
        time::every(interval).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
