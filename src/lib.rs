// SPDX-License-Identifier: MPL-2.0
//! `design_kit` is a small set of notification and form primitives built with
//! the Iced GUI framework.
//!
//! The interesting parts are UI-independent: the notification
//! [`Lifecycle`](notification::Lifecycle) state machine, its tokio-backed
//! [`Countdown`](notification::Countdown) driver, and the upload
//! [`SizeGuard`](upload::SizeGuard). The [`ui`] module renders them as toasts,
//! alert banners and a file field, and [`app`] wires everything into a gallery.

pub mod app;
pub mod config;
pub mod error;
pub mod notification;
pub mod ui;
pub mod upload;
