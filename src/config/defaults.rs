// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Notifications**: Countdown, exit transition and tick cadence
//! - **Upload**: File selection defaults

// ==========================================================================
// Notification Defaults
// ==========================================================================

/// Default time a toast stays active before it starts closing (in milliseconds).
pub const DEFAULT_NOTIFICATION_DURATION_MS: u64 = 5000;

/// Default length of the exit transition (in milliseconds).
pub const DEFAULT_EXIT_DURATION_MS: u64 = 300;

/// Minimum exit transition length. Zero closes on the next tick.
pub const MIN_EXIT_DURATION_MS: u64 = 0;

/// Maximum exit transition length.
pub const MAX_EXIT_DURATION_MS: u64 = 5000;

/// Default interval between countdown ticks (in milliseconds).
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 50;

/// Minimum tick interval.
pub const MIN_TICK_INTERVAL_MS: u64 = 10;

/// Maximum tick interval.
pub const MAX_TICK_INTERVAL_MS: u64 = 1000;

// ==========================================================================
// Upload Defaults
// ==========================================================================

/// Label shown on the file picker button.
pub const DEFAULT_UPLOAD_LABEL: &str = "Choose File";

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MAX_EXIT_DURATION_MS >= MIN_EXIT_DURATION_MS);
    assert!(DEFAULT_EXIT_DURATION_MS >= MIN_EXIT_DURATION_MS);
    assert!(DEFAULT_EXIT_DURATION_MS <= MAX_EXIT_DURATION_MS);

    assert!(MIN_TICK_INTERVAL_MS > 0);
    assert!(MAX_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS >= MIN_TICK_INTERVAL_MS);
    assert!(DEFAULT_TICK_INTERVAL_MS <= MAX_TICK_INTERVAL_MS);

    // A tick must fit inside the countdown or the progress bar never moves.
    assert!(DEFAULT_TICK_INTERVAL_MS < DEFAULT_NOTIFICATION_DURATION_MS);
};

/// Keeps a configured tick interval inside the supported range.
#[must_use]
pub fn clamp_tick_interval_ms(value: u64) -> u64 {
    value.clamp(MIN_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS)
}

/// Keeps a configured exit duration inside the supported range.
#[must_use]
pub fn clamp_exit_duration_ms(value: u64) -> u64 {
    value.clamp(MIN_EXIT_DURATION_MS, MAX_EXIT_DURATION_MS)
}
