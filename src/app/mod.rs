// SPDX-License-Identifier: MPL-2.0
//! Gallery application showing every primitive of the kit.
//!
//! The `App` struct owns two notification managers (toasts and banners) and a
//! file upload field, and turns button presses into notifications. Ticks are
//! only subscribed to while a notification is visible.

mod message;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::config::{self, Config, Position};
use crate::notification::{Manager, Notification, NotificationMessage, Severity};
use crate::ui::alert_banner::BannerSize;
use crate::ui::file_upload::{self, Event as UploadEvent};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::{Duration, Instant};

pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 700;

const REQUIRED_FILE: &str = "Please choose a file.";

/// Root Iced application state.
pub struct App {
    config: Config,
    toasts: Manager,
    banners: Manager,
    upload: file_upload::State,
    position: Position,
    banner_size: BannerSize,
    /// New notifications get a zero duration.
    persistent: bool,
    /// New notifications accept the close button and Escape.
    dismissible: bool,
    /// Last upload outcome shown under the page.
    status: Option<String>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("toasts", &self.toasts.visible_count())
            .field("banners", &self.banners.visible_count())
            .field("position", &self.position)
            .finish()
    }
}

impl Default for App {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // iced 0.14 requires a `Fn` boot closure; the flags are consumed once.
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

fn sample_message(severity: Severity) -> &'static str {
    match severity {
        Severity::Info => "A new version is available.",
        Severity::Success => "Your changes have been saved.",
        Severity::Warning => "Your session expires in five minutes.",
        Severity::Error => "The upload could not be completed.",
    }
}

impl App {
    fn with_config(config: Config) -> Self {
        let exit = config.notifications.exit_duration();
        Self {
            toasts: Manager::new(exit),
            banners: Manager::new(exit),
            upload: file_upload::State::new(&config.upload),
            position: config.notifications.position,
            banner_size: BannerSize::default(),
            persistent: config.notifications.duration_ms == 0,
            dismissible: config.notifications.dismissible,
            status: None,
            config,
        }
    }

    fn new(flags: Flags) -> (Self, Task<Message>) {
        config::paths::init_cli_override(flags.config_dir);
        let (config, warning) = config::load();

        let mut app = Self::with_config(config);
        if let Some(position) = flags.position {
            app.position = position;
        }
        if let Some(warning) = warning {
            app.push_toast(Notification::warning(warning).persistent());
        }
        (app, Task::none())
    }

    fn title(&self) -> String {
        match self.toasts.visible_count() {
            0 => "Design Kit".to_string(),
            n => format!("Design Kit ({n})"),
        }
    }

    fn theme(&self) -> Theme {
        Theme::Light
    }

    fn subscription(&self) -> Subscription<Message> {
        let has_notifications = self.toasts.has_notifications() || self.banners.has_notifications();
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(
                has_notifications,
                self.config.notifications.tick_interval(),
            ),
        ])
    }

    fn countdown(&self) -> Duration {
        if self.persistent {
            Duration::ZERO
        } else {
            self.config.notifications.duration()
        }
    }

    fn sample(&self, severity: Severity) -> Notification {
        Notification::new(severity, sample_message(severity))
            .with_duration(self.countdown())
            .dismissible(self.dismissible)
    }

    fn push_toast(&mut self, notification: Notification) {
        log::debug!(
            "showing {:?} toast: {}",
            notification.severity(),
            notification.message()
        );
        self.toasts.push(notification, Instant::now());
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::ShowToast(severity) => {
                let notification = self.sample(severity);
                self.push_toast(notification);
            }
            Message::ShowBanner(severity) => {
                let notification = self.sample(severity);
                self.banners.push(notification, Instant::now());
            }
            Message::TogglePersistent => self.persistent = !self.persistent,
            Message::ToggleDismissible => self.dismissible = !self.dismissible,
            Message::CyclePosition => {
                let index = Position::ALL
                    .iter()
                    .position(|p| *p == self.position)
                    .unwrap_or(0);
                self.position = Position::ALL[(index + 1) % Position::ALL.len()];
            }
            Message::CycleBannerSize => {
                let index = BannerSize::ALL
                    .iter()
                    .position(|s| *s == self.banner_size)
                    .unwrap_or(0);
                self.banner_size = BannerSize::ALL[(index + 1) % BannerSize::ALL.len()];
            }
            Message::ClearAll => {
                self.toasts.clear();
                self.banners.clear();
            }
            Message::Toast(message) => {
                self.toasts.handle_message(&message);
            }
            Message::Banner(message) => {
                self.banners.handle_message(&message);
            }
            Message::Tick(now) => {
                let tick = NotificationMessage::Tick(now);
                self.toasts.handle_message(&tick);
                self.banners.handle_message(&tick);
            }
            Message::EscapePressed => {
                // Toasts float above the page, so they get Escape first.
                if !self.toasts.handle_message(&NotificationMessage::Escape) {
                    self.banners.handle_message(&NotificationMessage::Escape);
                }
            }
            Message::Upload(message) => return self.handle_upload(message),
        }
        Task::none()
    }

    fn handle_upload(&mut self, message: file_upload::Message) -> Task<Message> {
        match self.upload.update(message) {
            UploadEvent::None => {}
            UploadEvent::OpenDialog { multiple, accept } => {
                return Task::perform(file_upload::pick_files(multiple, accept), |files| {
                    Message::Upload(file_upload::Message::Picked(files))
                });
            }
            UploadEvent::Selected(selection) => {
                let empty = selection.files().is_empty();
                self.upload.set_error_message(
                    (empty && self.config.upload.required).then(|| REQUIRED_FILE.to_string()),
                );
                self.status = Some(if empty {
                    "No file selected".to_string()
                } else {
                    format!("Selected {} file(s)", selection.files().len())
                });
            }
            UploadEvent::Rejected(reason) => {
                self.status = None;
                self.push_toast(
                    Notification::error(reason)
                        .with_duration(self.config.notifications.duration()),
                );
            }
        }
        Task::none()
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            toasts: &self.toasts,
            banners: &self.banners,
            upload: &self.upload,
            position: self.position,
            banner_size: self.banner_size,
            persistent: self.persistent,
            dismissible: self.dismissible,
            status: self.status.as_deref(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::Phase;
    use crate::upload::FileCandidate;

    #[test]
    fn show_toast_uses_configured_countdown() {
        let mut app = App::default();
        let _ = app.update(Message::ShowToast(Severity::Success));

        let toast = app.toasts.visible().next().expect("toast shown");
        assert_eq!(toast.notification().severity(), Severity::Success);
        assert_eq!(
            toast.notification().duration(),
            Duration::from_millis(config::DEFAULT_NOTIFICATION_DURATION_MS)
        );
    }

    #[test]
    fn persistent_toggle_creates_zero_duration_notifications() {
        let mut app = App::default();
        let _ = app.update(Message::TogglePersistent);
        let _ = app.update(Message::ShowBanner(Severity::Warning));

        let banner = app.banners.visible().next().expect("banner shown");
        assert!(!banner.notification().auto_dismisses());
    }

    #[test]
    fn escape_prefers_toasts_over_banners() {
        let mut app = App::default();
        let _ = app.update(Message::ShowBanner(Severity::Info));
        let _ = app.update(Message::ShowToast(Severity::Info));

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.toasts.visible().next().map(|t| t.phase()), Some(Phase::Closing));
        assert_eq!(app.banners.visible().next().map(|b| b.phase()), Some(Phase::Active));

        let _ = app.update(Message::EscapePressed);
        assert_eq!(app.banners.visible().next().map(|b| b.phase()), Some(Phase::Closing));
    }

    #[test]
    fn non_dismissible_toast_ignores_close_button() {
        let mut app = App::default();
        let _ = app.update(Message::ToggleDismissible);
        let _ = app.update(Message::ShowToast(Severity::Error));
        let id = app.toasts.visible().next().map(|t| t.id()).expect("toast shown");

        let _ = app.update(Message::Toast(NotificationMessage::Dismiss(id)));
        assert_eq!(app.toasts.visible().next().map(|t| t.phase()), Some(Phase::Active));
    }

    #[test]
    fn tick_removes_finished_toasts() {
        let mut app = App::default();
        let _ = app.update(Message::ShowToast(Severity::Info));
        let _ = app.update(Message::ShowBanner(Severity::Info));

        let later = Instant::now() + Duration::from_secs(60);
        let _ = app.update(Message::Tick(later));
        assert_eq!(app.toasts.visible_count(), 0);
        assert_eq!(app.banners.visible_count(), 0);
    }

    #[test]
    fn rejected_upload_raises_error_toast() {
        let mut app = App::with_config(Config {
            upload: config::UploadConfig {
                max_size_bytes: Some(1000),
                multiple: true,
                required: false,
                accept: None,
            },
            ..Config::default()
        });

        let _ = app.update(Message::Upload(file_upload::Message::Picked(vec![
            FileCandidate::new("a", 500),
            FileCandidate::new("b", 1500),
        ])));

        let toast = app.toasts.visible().next().expect("error toast shown");
        assert_eq!(toast.notification().severity(), Severity::Error);
        assert!(toast.notification().message().contains("1000 Bytes"));
    }

    #[test]
    fn accepted_upload_updates_status() {
        let mut app = App::default();
        let _ = app.update(Message::Upload(file_upload::Message::Picked(vec![
            FileCandidate::new("a", 500),
        ])));
        assert_eq!(app.status.as_deref(), Some("Selected 1 file(s)"));
        assert_eq!(app.toasts.visible_count(), 0);
    }

    #[test]
    fn required_field_complains_about_empty_selection() {
        let mut app = App::with_config(Config {
            upload: config::UploadConfig {
                required: true,
                ..config::UploadConfig::default()
            },
            ..Config::default()
        });

        let _ = app.update(Message::Upload(file_upload::Message::Picked(Vec::new())));
        assert_eq!(app.upload.displayed_error(), Some(REQUIRED_FILE));

        let _ = app.update(Message::Upload(file_upload::Message::Picked(vec![
            FileCandidate::new("a", 1),
        ])));
        assert_eq!(app.upload.displayed_error(), None);
    }

    #[test]
    fn position_cycles_through_all_corners() {
        let mut app = App::default();
        let start = app.position;
        for _ in 0..Position::ALL.len() {
            let _ = app.update(Message::CyclePosition);
        }
        assert_eq!(app.position, start);
    }

    #[test]
    fn clear_all_removes_everything() {
        let mut app = App::default();
        let _ = app.update(Message::ShowToast(Severity::Info));
        let _ = app.update(Message::ShowBanner(Severity::Info));
        let _ = app.update(Message::ClearAll);
        assert!(!app.toasts.has_notifications());
        assert!(!app.banners.has_notifications());
    }
}
