// SPDX-License-Identifier: MPL-2.0
//! Notification set management for Iced views.
//!
//! The `Manager` owns one [`Lifecycle`] per visible notification and forwards
//! ticks and dismissals to them. Instances are independent: there is no
//! queue and no limit, and an instance is only removed after it reports
//! [`Event::Closed`].

use super::lifecycle::{Event, Lifecycle, Phase, Trigger};
use super::notification::{Notification, NotificationId};
use crate::config::DEFAULT_EXIT_DURATION_MS;
use std::time::{Duration, Instant};

/// Messages for notification state changes.
#[derive(Debug, Clone)]
pub enum Message {
    /// Close button pressed on a specific notification.
    Dismiss(NotificationId),
    /// Escape pressed while the notifications are shown.
    Escape,
    /// Countdown tick.
    Tick(Instant),
}

/// Manages the visible notifications.
#[derive(Debug)]
pub struct Manager {
    /// Visible notifications (newest first).
    visible: Vec<Lifecycle>,
    /// Exit transition length applied to new notifications.
    exit_duration: Duration,
}

impl Default for Manager {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_EXIT_DURATION_MS))
    }
}

impl Manager {
    #[must_use]
    pub fn new(exit_duration: Duration) -> Self {
        Self {
            visible: Vec::new(),
            exit_duration,
        }
    }

    /// Shows a notification, starting its countdown at `now`.
    pub fn push(&mut self, notification: Notification, now: Instant) -> NotificationId {
        self.push_lifecycle(Lifecycle::new(notification, self.exit_duration, now))
    }

    /// Shows a prepared lifecycle, e.g. one carrying an `on_close` callback.
    pub fn push_lifecycle(&mut self, lifecycle: Lifecycle) -> NotificationId {
        let id = lifecycle.id();
        self.visible.insert(0, lifecycle);
        id
    }

    /// Requests dismissal of a notification by its ID.
    ///
    /// Returns `true` if the notification was found and started closing.
    pub fn dismiss(&mut self, id: NotificationId, trigger: Trigger, now: Instant) -> bool {
        self.visible
            .iter_mut()
            .find(|lifecycle| lifecycle.id() == id)
            .is_some_and(|lifecycle| lifecycle.request_dismiss(trigger, now))
    }

    /// Dismisses the newest notification that is still active and dismissible.
    pub fn dismiss_latest(&mut self, trigger: Trigger, now: Instant) -> Option<NotificationId> {
        self.visible
            .iter_mut()
            .filter(|lifecycle| {
                lifecycle.phase() == Phase::Active && lifecycle.notification().is_dismissible()
            })
            .find_map(|lifecycle| {
                lifecycle
                    .request_dismiss(trigger, now)
                    .then(|| lifecycle.id())
            })
    }

    /// Advances every countdown and drops the notifications that finished.
    ///
    /// Returns the IDs of the notifications removed by this tick.
    pub fn tick(&mut self, now: Instant) -> Vec<NotificationId> {
        let mut closed = Vec::new();
        for lifecycle in &mut self.visible {
            if lifecycle.advance(now).contains(&Event::Closed) {
                closed.push(lifecycle.id());
            }
        }
        self.visible.retain(|lifecycle| !lifecycle.is_closed());
        closed
    }

    /// Handles a notification message.
    ///
    /// Returns whether it changed anything, so a host can fall through to
    /// another manager when Escape found nothing to close.
    pub fn handle_message(&mut self, message: &Message) -> bool {
        match message {
            Message::Dismiss(id) => self.dismiss(*id, Trigger::CloseButton, Instant::now()),
            Message::Escape => self
                .dismiss_latest(Trigger::Escape, Instant::now())
                .is_some(),
            Message::Tick(now) => !self.tick(*now).is_empty(),
        }
    }

    /// Returns the currently visible notifications.
    pub fn visible(&self) -> impl Iterator<Item = &Lifecycle> {
        self.visible.iter()
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.visible.len()
    }

    /// Returns whether anything still needs ticks.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty()
    }

    /// Tears down every notification without firing close callbacks.
    pub fn clear(&mut self) {
        for lifecycle in &mut self.visible {
            lifecycle.teardown();
        }
        self.visible.clear();
    }
}
