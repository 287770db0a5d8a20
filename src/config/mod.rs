// SPDX-License-Identifier: MPL-2.0
//! This module handles the crate's configuration, including loading and saving
//! preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[notifications]` - Countdown length, exit transition, tick cadence, placement
//! - `[upload]` - File size ceiling and selection multiplicity
//!
//! # Examples
//!
//! ```no_run
//! use design_kit::config::{self, Config};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Modify a setting
//! config.upload.max_size_bytes = Some(2 * 1024 * 1024);
//!
//! // Save the modified configuration
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Enums
// =============================================================================

/// Screen corner where toasts are stacked.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Position {
    #[default]
    TopRight,
    TopLeft,
    BottomRight,
    BottomLeft,
}

impl Position {
    pub const ALL: [Position; 4] = [
        Position::TopRight,
        Position::TopLeft,
        Position::BottomRight,
        Position::BottomLeft,
    ];

    fn as_str(self) -> &'static str {
        match self {
            Position::TopRight => "top-right",
            Position::TopLeft => "top-left",
            Position::BottomRight => "bottom-right",
            Position::BottomLeft => "bottom-left",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Position {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == s.to_lowercase())
            .ok_or_else(|| Error::Config(format!("invalid position: {s}")))
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Toast and banner timing settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NotificationConfig {
    /// Countdown length in milliseconds. Zero disables automatic dismissal.
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,

    /// Exit transition length in milliseconds.
    #[serde(default = "default_exit_duration_ms")]
    pub exit_duration_ms: u64,

    /// Countdown tick cadence in milliseconds.
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,

    /// Whether users may close notifications by hand.
    #[serde(default = "default_dismissible")]
    pub dismissible: bool,

    /// Corner used for the toast stack.
    #[serde(default)]
    pub position: Position,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            duration_ms: DEFAULT_NOTIFICATION_DURATION_MS,
            exit_duration_ms: DEFAULT_EXIT_DURATION_MS,
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            dismissible: true,
            position: Position::default(),
        }
    }
}

impl NotificationConfig {
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    #[must_use]
    pub fn exit_duration(&self) -> Duration {
        Duration::from_millis(clamp_exit_duration_ms(self.exit_duration_ms))
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(clamp_tick_interval_ms(self.tick_interval_ms))
    }
}

/// File upload settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct UploadConfig {
    /// Largest accepted file in bytes. Unset or zero means no ceiling.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_size_bytes: Option<u64>,

    /// Accept several files per selection.
    #[serde(default)]
    pub multiple: bool,

    /// Mark the field as required.
    #[serde(default)]
    pub required: bool,

    /// File extensions offered by the dialog (`"png"` or `".png"`). Unset
    /// shows every file.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<Vec<String>>,
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub notifications: NotificationConfig,

    #[serde(default)]
    pub upload: UploadConfig,
}

fn default_duration_ms() -> u64 {
    DEFAULT_NOTIFICATION_DURATION_MS
}

fn default_exit_duration_ms() -> u64 {
    DEFAULT_EXIT_DURATION_MS
}

fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

fn default_dismissible() -> bool {
    true
}

// =============================================================================
// Load / Save
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// the default config with a warning explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("falling back to default config: {err}");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {err}", path.display())),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    Ok(toml::from_str(&content)?)
}

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration into a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    match config_path_with_override(base_dir) {
        Some(path) => save_to_path(config, &path),
        None => Err(Error::Config("no config directory available".into())),
    }
}

/// Saves configuration to a specific path, creating parent directories.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_sections() {
        let config = Config {
            notifications: NotificationConfig {
                duration_ms: 0,
                exit_duration_ms: 150,
                tick_interval_ms: 100,
                dismissible: false,
                position: Position::BottomLeft,
            },
            upload: UploadConfig {
                max_size_bytes: Some(1000),
                multiple: true,
                required: true,
                accept: Some(vec!["png".to_string(), "jpg".to_string()]),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join(CONFIG_FILE);

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str("[upload]\nmultiple = true\n").expect("valid toml");
        assert_eq!(config.notifications, NotificationConfig::default());
        assert!(config.upload.multiple);
        assert!(config.upload.max_size_bytes.is_none());
        assert!(config.upload.accept.is_none());
    }

    #[test]
    fn load_with_override_warns_on_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "not = valid = toml")
            .expect("failed to write invalid toml");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_some());
    }

    #[test]
    fn load_with_override_is_silent_without_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn durations_are_clamped() {
        let config = NotificationConfig {
            tick_interval_ms: 1,
            exit_duration_ms: 60_000,
            ..NotificationConfig::default()
        };
        assert_eq!(
            config.tick_interval(),
            Duration::from_millis(MIN_TICK_INTERVAL_MS)
        );
        assert_eq!(
            config.exit_duration(),
            Duration::from_millis(MAX_EXIT_DURATION_MS)
        );
    }

    #[test]
    fn position_parses_kebab_case() {
        assert_eq!("bottom-left".parse::<Position>().ok(), Some(Position::BottomLeft));
        assert_eq!("Top-Right".parse::<Position>().ok(), Some(Position::TopRight));
        assert!("middle".parse::<Position>().is_err());
    }
}
