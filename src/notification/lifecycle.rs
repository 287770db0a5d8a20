// SPDX-License-Identifier: MPL-2.0
//! Countdown and dismissal state machine for a single notification.
//!
//! A [`Lifecycle`] moves through three phases and never goes back:
//!
//! ```text
//! Active --(expiry | dismissal)--> Closing --(exit duration)--> Closed
//! ```
//!
//! Time is always passed in by the caller, so the same object can be driven
//! by an Iced `time::every` subscription, by the tokio [`Countdown`] driver,
//! or by a test with hand-picked instants.
//!
//! [`Countdown`]: super::Countdown

use super::notification::{Notification, NotificationId};
use std::fmt;
use std::time::{Duration, Instant};

/// Discrete lifecycle stage of a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Counting down (or waiting indefinitely when the duration is zero).
    Active,
    /// Exit transition running; the countdown is frozen.
    Closing,
    /// Terminal. The close signal has been delivered.
    Closed,
}

/// What asked a notification to close.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// The countdown ran out. Ignores `dismissible`.
    Expired,
    /// The owning code closed it programmatically. Ignores `dismissible`.
    Caller,
    /// The user pressed the close button.
    CloseButton,
    /// The user pressed Escape.
    Escape,
}

impl Trigger {
    /// User-initiated triggers only apply to dismissible notifications.
    #[must_use]
    pub fn is_user(self) -> bool {
        matches!(self, Trigger::CloseButton | Trigger::Escape)
    }
}

/// Phase transitions reported by [`Lifecycle::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Closing(Trigger),
    Closed,
}

#[derive(Debug, Clone, Copy)]
enum State {
    Active { started_at: Instant },
    Closing { since: Instant },
    Closed,
}

/// Callback fired once when a notification reaches [`Phase::Closed`].
pub type OnClose = Box<dyn FnOnce() + Send>;

/// Owns the countdown and the phase of exactly one notification.
pub struct Lifecycle {
    notification: Notification,
    exit_duration: Duration,
    state: State,
    /// Cached on every tick; frozen once Closing begins.
    remaining_fraction: f32,
    on_close: Option<OnClose>,
}

impl fmt::Debug for Lifecycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Lifecycle")
            .field("notification", &self.notification)
            .field("phase", &self.phase())
            .field("remaining_fraction", &self.remaining_fraction)
            .field("has_on_close", &self.on_close.is_some())
            .finish()
    }
}

impl Lifecycle {
    /// Starts the countdown for `notification` at `now`.
    pub fn new(notification: Notification, exit_duration: Duration, now: Instant) -> Self {
        log::debug!(
            "notification {:?} active for {:?}",
            notification.id(),
            notification.duration()
        );
        Self {
            notification,
            exit_duration,
            state: State::Active { started_at: now },
            remaining_fraction: 1.0,
            on_close: None,
        }
    }

    /// Registers the callback fired when the notification reaches Closed.
    #[must_use]
    pub fn with_on_close(mut self, on_close: impl FnOnce() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(on_close));
        self
    }

    #[must_use]
    pub fn notification(&self) -> &Notification {
        &self.notification
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.notification.id()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        match self.state {
            State::Active { .. } => Phase::Active,
            State::Closing { .. } => Phase::Closing,
            State::Closed => Phase::Closed,
        }
    }

    #[must_use]
    pub fn is_closed(&self) -> bool {
        matches!(self.state, State::Closed)
    }

    /// Share of the countdown still left, in `[0, 1]`, as of the last tick.
    #[must_use]
    pub fn remaining_fraction(&self) -> f32 {
        self.remaining_fraction
    }

    /// Runs one tick.
    ///
    /// Expiry is measured from the creation instant, so late or skipped ticks
    /// never stretch the countdown. A tick arriving after both deadlines
    /// reports both transitions.
    pub fn advance(&mut self, now: Instant) -> Vec<Event> {
        let mut events = Vec::new();

        if let State::Active { started_at } = self.state {
            let duration = self.notification.duration();
            if !duration.is_zero() {
                let elapsed = now.saturating_duration_since(started_at);
                self.refresh_fraction(duration, elapsed);
                if elapsed >= duration {
                    self.enter_closing(started_at + duration, Trigger::Expired);
                    events.push(Event::Closing(Trigger::Expired));
                }
            }
        }

        if let State::Closing { since } = self.state {
            if now.saturating_duration_since(since) >= self.exit_duration {
                self.enter_closed();
                events.push(Event::Closed);
            }
        }

        events
    }

    /// Asks the notification to close.
    ///
    /// Only the first successful request has an effect. Returns `false` when
    /// the notification is already closing or closed, when its countdown ran
    /// out before `now`, or when a user trigger hits a notification that is
    /// not dismissible.
    pub fn request_dismiss(&mut self, trigger: Trigger, now: Instant) -> bool {
        let State::Active { started_at } = self.state else {
            return false;
        };

        // Expiry that has passed but not been ticked yet still wins.
        let duration = self.notification.duration();
        if !duration.is_zero() && now.saturating_duration_since(started_at) >= duration {
            self.refresh_fraction(duration, duration);
            self.enter_closing(started_at + duration, Trigger::Expired);
            return false;
        }

        if trigger.is_user() && !self.notification.is_dismissible() {
            log::debug!(
                "notification {:?} ignored {trigger:?}: not dismissible",
                self.id()
            );
            return false;
        }

        if !duration.is_zero() {
            self.refresh_fraction(duration, now.saturating_duration_since(started_at));
        }
        self.enter_closing(now, trigger);
        true
    }

    /// Releases the close callback without firing it and stops all further
    /// transitions.
    pub fn teardown(&mut self) {
        if !self.is_closed() {
            log::debug!("notification {:?} torn down", self.id());
        }
        self.on_close = None;
        self.state = State::Closed;
    }

    fn refresh_fraction(&mut self, duration: Duration, elapsed: Duration) {
        let left = duration.saturating_sub(elapsed).as_secs_f64() / duration.as_secs_f64();
        self.remaining_fraction = self.remaining_fraction.min(left as f32).max(0.0);
    }

    fn enter_closing(&mut self, since: Instant, trigger: Trigger) {
        log::debug!("notification {:?} closing ({trigger:?})", self.id());
        self.state = State::Closing { since };
    }

    fn enter_closed(&mut self) {
        log::debug!("notification {:?} closed", self.id());
        self.state = State::Closed;
        if let Some(on_close) = self.on_close.take() {
            on_close();
        }
    }
}
