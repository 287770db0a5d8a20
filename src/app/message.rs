// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the gallery.

use crate::config::Position;
use crate::notification::{NotificationMessage, Severity};
use crate::ui::file_upload;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    ShowToast(Severity),
    ShowBanner(Severity),
    TogglePersistent,
    ToggleDismissible,
    CyclePosition,
    CycleBannerSize,
    ClearAll,
    Toast(NotificationMessage),
    Banner(NotificationMessage),
    Upload(file_upload::Message),
    Tick(Instant), // Countdown tick, only subscribed while something is shown
    EscapePressed,
}

/// Runtime flags passed from the command line.
#[derive(Debug, Clone, Default)]
pub struct Flags {
    /// Optional directory holding `settings.toml`.
    pub config_dir: Option<String>,
    /// Toast corner override.
    pub position: Option<Position>,
}
