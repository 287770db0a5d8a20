// SPDX-License-Identifier: MPL-2.0
//! Config directory resolution.
//!
//! # Resolution Order
//!
//! 1. **Explicit override** - parameter to [`config_dir_with_override`] (for tests)
//! 2. **CLI argument** (`--config-dir`) - set via [`init_cli_override`]
//! 3. **Environment variable** (`DESIGN_KIT_CONFIG_DIR`)
//! 4. **Platform default** - via `dirs` crate, with the app name appended

use std::path::PathBuf;
use std::sync::OnceLock;

/// Application name used for directory naming.
const APP_NAME: &str = "DesignKit";

/// Environment variable to override the config directory.
pub const ENV_CONFIG_DIR: &str = "DESIGN_KIT_CONFIG_DIR";

/// Global CLI override for the config directory (set once at startup).
static CLI_CONFIG_DIR: OnceLock<Option<PathBuf>> = OnceLock::new();

/// Records the `--config-dir` argument.
///
/// Only the first call takes effect; later calls are logged and ignored.
pub fn init_cli_override(config_dir: Option<String>) {
    if CLI_CONFIG_DIR.set(config_dir.map(PathBuf::from)).is_err() {
        log::warn!("config dir override already initialized, ignoring");
    }
}

fn cli_config_dir() -> Option<PathBuf> {
    CLI_CONFIG_DIR.get().and_then(Clone::clone)
}

/// Returns the config directory, honoring CLI and environment overrides.
pub fn config_dir() -> Option<PathBuf> {
    config_dir_with_override(None)
}

/// Returns the config directory with an optional explicit override.
///
/// Returns `None` only when no override is set and the platform has no
/// config directory.
pub fn config_dir_with_override(override_path: Option<PathBuf>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        return Some(path);
    }

    if let Some(path) = cli_config_dir() {
        return Some(path);
    }

    if let Ok(env_path) = std::env::var(ENV_CONFIG_DIR) {
        if !env_path.is_empty() {
            return Some(PathBuf::from(env_path));
        }
    }

    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_override_wins() {
        let dir = PathBuf::from("/tmp/design-kit-override");
        assert_eq!(config_dir_with_override(Some(dir.clone())), Some(dir));
    }

    #[test]
    fn default_dir_ends_with_app_name() {
        // Skip when the environment already redirects the directory.
        if std::env::var(ENV_CONFIG_DIR).is_ok() || cli_config_dir().is_some() {
            return;
        }
        if let Some(path) = config_dir() {
            assert!(path.ends_with(APP_NAME));
        }
    }
}
