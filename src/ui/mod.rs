// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: they
//! render borrowed state and emit messages that the parent routes back.
//!
//! - [`toast`] - Floating notifications anchored to a window corner
//! - [`alert_banner`] - Full-width inline notifications
//! - [`file_upload`] - File picker with a size ceiling
//! - [`styles`] - Style closures shared by the components
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)

pub mod alert_banner;
pub mod design_tokens;
pub mod file_upload;
pub mod styles;
pub mod toast;
