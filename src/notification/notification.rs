// SPDX-License-Identifier: MPL-2.0
//! Core notification data structures.
//!
//! A [`Notification`] is the immutable configuration of one toast or banner:
//! what it says, how it is tagged, how long it counts down and whether the
//! user may close it.

use crate::config::DEFAULT_NOTIFICATION_DURATION_MS;
use crate::ui::design_tokens::palette;
use iced::Color;
use std::time::Duration;

/// Unique identifier for a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NotificationId(u64);

impl NotificationId {
    /// Creates a new unique notification ID.
    pub fn new() -> Self {
        use std::sync::atomic::{AtomicU64, Ordering};
        static COUNTER: AtomicU64 = AtomicU64::new(0);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }
}

impl Default for NotificationId {
    fn default() -> Self {
        Self::new()
    }
}

/// Informational tag. The lifecycle never looks at it; only rendering does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub const ALL: [Severity; 4] = [
        Severity::Info,
        Severity::Success,
        Severity::Warning,
        Severity::Error,
    ];

    /// Returns the accent color for this severity level.
    #[must_use]
    pub fn color(&self) -> Color {
        match self {
            Severity::Info => palette::INFO_500,
            Severity::Success => palette::SUCCESS_500,
            Severity::Warning => palette::WARNING_500,
            Severity::Error => palette::ERROR_500,
        }
    }

    /// Returns the glyph drawn in front of the message.
    #[must_use]
    pub fn glyph(&self) -> &'static str {
        match self {
            Severity::Info => "ℹ",
            Severity::Success => "✔",
            Severity::Warning => "⚠",
            Severity::Error => "✖",
        }
    }

    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Success => "Success",
            Severity::Warning => "Warning",
            Severity::Error => "Error",
        }
    }
}

/// A notification to be displayed to the user.
#[derive(Debug, Clone)]
pub struct Notification {
    id: NotificationId,
    severity: Severity,
    message: String,
    /// Countdown length. Zero disables automatic dismissal.
    duration: Duration,
    /// Whether the close button and Escape may end it.
    dismissible: bool,
}

impl Notification {
    /// Creates a dismissible notification with the default countdown.
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            id: NotificationId::new(),
            severity,
            message: message.into(),
            duration: Duration::from_millis(DEFAULT_NOTIFICATION_DURATION_MS),
            dismissible: true,
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(Severity::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(Severity::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Severity::Error, message)
    }

    /// Sets the countdown length. `Duration::ZERO` keeps it open until dismissed.
    #[must_use]
    pub fn with_duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Disables automatic dismissal.
    #[must_use]
    pub fn persistent(self) -> Self {
        self.with_duration(Duration::ZERO)
    }

    #[must_use]
    pub fn dismissible(mut self, dismissible: bool) -> Self {
        self.dismissible = dismissible;
        self
    }

    #[must_use]
    pub fn id(&self) -> NotificationId {
        self.id
    }

    #[must_use]
    pub fn severity(&self) -> Severity {
        self.severity
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    #[must_use]
    pub fn duration(&self) -> Duration {
        self.duration
    }

    #[must_use]
    pub fn is_dismissible(&self) -> bool {
        self.dismissible
    }

    /// Returns whether the countdown will ever expire on its own.
    #[must_use]
    pub fn auto_dismisses(&self) -> bool {
        !self.duration.is_zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notification_ids_are_unique() {
        let n1 = Notification::success("test");
        let n2 = Notification::success("test");
        assert_ne!(n1.id(), n2.id());
    }

    #[test]
    fn severity_colors_are_distinct() {
        for (i, a) in Severity::ALL.iter().enumerate() {
            for b in &Severity::ALL[i + 1..] {
                assert_ne!(a.color(), b.color(), "{a:?} and {b:?} share a color");
            }
        }
    }

    #[test]
    fn defaults_match_toast_defaults() {
        let notification = Notification::new(Severity::default(), "hello");
        assert_eq!(notification.severity(), Severity::Info);
        assert_eq!(notification.duration(), Duration::from_millis(5000));
        assert!(notification.is_dismissible());
        assert!(notification.auto_dismisses());
    }

    #[test]
    fn persistent_notification_never_auto_dismisses() {
        let notification = Notification::error("disk full").persistent();
        assert_eq!(notification.duration(), Duration::ZERO);
        assert!(!notification.auto_dismisses());
    }

    #[test]
    fn constructors_set_correct_severity() {
        assert_eq!(Notification::success("").severity(), Severity::Success);
        assert_eq!(Notification::info("").severity(), Severity::Info);
        assert_eq!(Notification::warning("").severity(), Severity::Warning);
        assert_eq!(Notification::error("").severity(), Severity::Error);
    }

    #[test]
    fn builder_keeps_message_and_flags() {
        let notification = Notification::warning("low battery")
            .with_duration(Duration::from_millis(1200))
            .dismissible(false);

        assert_eq!(notification.message(), "low battery");
        assert_eq!(notification.duration(), Duration::from_millis(1200));
        assert!(!notification.is_dismissible());
    }
}
