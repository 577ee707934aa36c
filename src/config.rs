//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `$XDG_CONFIG_HOME/koans/koans.toml`, or an explicit `--config` file
//! 3. Environment variables: `KOANS_*` prefix
//! 4. Command line flags (applied by the CLI layer)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::ApplicationError;

/// Unified configuration for koans.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Shop fixture file (default: built-in sample shop)
    pub fixture: Option<PathBuf>,
    /// Width of the separator line printed around command output
    pub separator_width: usize,
    /// Colored terminal output
    pub color: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            fixture: None,
            separator_width: 78,
            color: true,
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, keep base).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default, deny_unknown_fields)]
pub struct RawSettings {
    pub fixture: Option<PathBuf>,
    pub separator_width: Option<usize>,
    pub color: Option<bool>,
}

/// Get the XDG config directory for koans.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "koans").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("koans.toml"))
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

/// Expand `~`, `$VAR` and `${VAR}`; unexpandable input is returned unchanged.
pub fn expand_env_vars(path: &str) -> String {
    shellexpand::full(path)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| path.to_string())
}

impl Settings {
    /// Overlay wins where it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            fixture: overlay.fixture.clone().or_else(|| self.fixture.clone()),
            separator_width: overlay.separator_width.unwrap_or(self.separator_width),
            color: overlay.color.unwrap_or(self.color),
        }
    }

    fn expand_paths(&mut self) {
        if let Some(fixture) = &self.fixture {
            let expanded = expand_env_vars(fixture.to_string_lossy().as_ref());
            self.fixture = Some(PathBuf::from(expanded));
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Explicit config file; replaces the global one when given.
    ///   An explicit file must exist, the global one is optional.
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        match config_file {
            Some(path) => {
                debug!("load: explicit config {}", path.display());
                current = current.merge_with(&load_raw_settings(path)?);
            }
            None => {
                if let Some(global_path) = global_config_path() {
                    if global_path.exists() {
                        debug!("load: global config {}", global_path.display());
                        current = current.merge_with(&load_raw_settings(&global_path)?);
                    }
                }
            }
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths();

        Ok(current)
    }

    /// Apply KOANS_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("KOANS")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Some(val) = present(config.get_string("fixture"))? {
            settings.fixture = Some(PathBuf::from(val));
        }
        if let Some(val) = present(config.get_int("separator_width"))? {
            settings.separator_width = usize::try_from(val).map_err(|_| ApplicationError::Config {
                message: format!("KOANS_SEPARATOR_WIDTH must not be negative: {val}"),
            })?;
        }
        if let Some(val) = present(config.get_bool("color"))? {
            settings.color = val;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# koans configuration
#
# Locations (by precedence, lowest to highest):
#   File:  ~/.config/koans/koans.toml  (or --config <file>)
#   Env:   KOANS_* environment variables
#   Flags: --fixture on the command line

# Shop fixture used by `koans shop ...` (default: built-in sample shop)
# fixture = "~/shop.toml"

# Width of the separator line around command output
# separator_width = 78

# Colored output
# color = true
"#
        .to_string()
    }
}

/// An unset key is `None`; a set key that does not convert is an error.
fn present<T>(value: Result<T, ConfigError>) -> Result<Option<T>, ApplicationError> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
