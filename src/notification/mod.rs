// SPDX-License-Identifier: MPL-2.0
//! Transient notification lifecycle.
//!
//! Toasts and alert banners share the same lifecycle: a countdown that can be
//! cut short by the user, a fixed exit transition, and a single close signal.
//!
//! # Components
//!
//! - [`notification`] - Immutable `Notification` configuration and `Severity`
//! - [`lifecycle`] - `Lifecycle` state machine (Active → Closing → Closed)
//! - [`manager`] - `Manager` holding the notifications of an Iced view
//! - [`countdown`] - `Countdown` tokio driver for hosts without a tick source
//!
//! # Usage
//!
//! ```ignore
//! use design_kit::notification::{Manager, Notification};
//! use std::time::Instant;
//!
//! let mut manager = Manager::default();
//! manager.push(Notification::success("Profile saved"), Instant::now());
//!
//! // From the app's `time::every` subscription:
//! manager.tick(Instant::now());
//! ```

mod countdown;
mod lifecycle;
mod manager;
#[allow(clippy::module_inception)]
mod notification;

pub use countdown::{Countdown, Snapshot};
pub use lifecycle::{Event, Lifecycle, OnClose, Phase, Trigger};
pub use manager::{Manager, Message as NotificationMessage};
pub use notification::{Notification, NotificationId, Severity};
