// SPDX-License-Identifier: MPL-2.0
//! This module handles the application's configuration, read from a
//! `settings.toml` file at startup.
//!
//! The file only seeds the in-memory player owner and the overlay layout.
//! Nothing is ever written back: changes made through the overlay live for
//! the duration of the session.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language, theme mode and log level
//! - `[layout]` - Portal context and initial bar visibility
//! - `[controls]` - Initial player flags and numeric settings
//! - `[session]` - In-memory owner behavior (artificial latency)
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()` with explicit path
//! 2. Set `PLAYER_OVERLAY_CONFIG_DIR` environment variable
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use player_overlay::app::config;
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (config, _warning) = config::load();
//! assert!(config.layout.portal.unwrap_or(true));
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::error::Result;
use crate::session::{Options, Props};
use crate::ui::theming::ThemeMode;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default)]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,

    /// Maximum log level (`off`, `error`, `warn`, `info`, `debug`, `trace`).
    #[serde(default = "default_log_level")]
    pub log_level: Option<String>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
            log_level: default_log_level(),
        }
    }
}

impl GeneralConfig {
    /// Parsed log level, falling back to the default on unknown names.
    #[must_use]
    pub fn log_level_filter(&self) -> log::LevelFilter {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(log::LevelFilter::Warn)
    }
}

/// Overlay layout settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LayoutConfig {
    /// Whether popovers may expand inline.
    #[serde(default = "default_portal")]
    pub portal: Option<bool>,

    /// Whether the action bar starts visible.
    #[serde(default = "default_action_bar")]
    pub action_bar: Option<bool>,

    /// Whether the side bar starts open.
    #[serde(default)]
    pub side_bar: Option<bool>,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            portal: default_portal(),
            action_bar: default_action_bar(),
            side_bar: Some(DEFAULT_SIDE_BAR),
        }
    }
}

/// Initial player state.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Mouse sensitivity seed.
    #[serde(default = "default_sensitivity")]
    pub sensitivity: Option<f64>,

    /// Virtual-control scale seed.
    #[serde(default = "default_scale_controls")]
    pub scale_controls: Option<f64>,

    /// Whether the pointer is captured automatically.
    #[serde(default)]
    pub autolock: Option<bool>,

    /// Whether mobile virtual controls are shown.
    #[serde(default)]
    pub mobile_controls: Option<bool>,

    /// Whether virtual controls are mirrored.
    #[serde(default)]
    pub mirrored_controls: Option<bool>,

    /// Whether the host forbids fullscreen.
    #[serde(default)]
    pub no_fullscreen: Option<bool>,

    /// Whether a mouse-sync command interface is attached.
    #[serde(default = "default_mouse_sync")]
    pub mouse_sync: Option<bool>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            sensitivity: default_sensitivity(),
            scale_controls: default_scale_controls(),
            autolock: Some(DEFAULT_AUTOLOCK),
            mobile_controls: Some(false),
            mirrored_controls: Some(false),
            no_fullscreen: Some(false),
            mouse_sync: default_mouse_sync(),
        }
    }
}

/// In-memory owner settings.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct SessionConfig {
    /// Artificial latency before each request is applied (milliseconds).
    #[serde(default = "default_latency_ms")]
    pub latency_ms: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            latency_ms: default_latency_ms(),
        }
    }
}

impl SessionConfig {
    /// Latency clamped to the supported range.
    #[must_use]
    pub fn latency(&self) -> Duration {
        let ms = self
            .latency_ms
            .unwrap_or(DEFAULT_LATENCY_MS)
            .min(MAX_LATENCY_MS);
        Duration::from_millis(ms)
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Deserialize, PartialEq, Default)]
pub struct Config {
    /// General application settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Overlay layout settings.
    #[serde(default)]
    pub layout: LayoutConfig,

    /// Initial player state.
    #[serde(default)]
    pub controls: ControlsConfig,

    /// In-memory owner settings.
    #[serde(default)]
    pub session: SessionConfig,
}

impl Config {
    /// Builds the initial player snapshot from the configured seeds.
    #[must_use]
    pub fn initial_props(&self) -> Props {
        let controls = &self.controls;
        Props {
            autolock: controls.autolock.unwrap_or(DEFAULT_AUTOLOCK),
            mobile_controls: controls.mobile_controls.unwrap_or(false),
            mirrored_controls: controls.mirrored_controls.unwrap_or(false),
            sensitivity: controls.sensitivity.unwrap_or(DEFAULT_SENSITIVITY),
            scale_controls: controls.scale_controls.unwrap_or(DEFAULT_SCALE_CONTROLS),
            action_bar: self.layout.action_bar.unwrap_or(DEFAULT_ACTION_BAR),
            side_bar: self.layout.side_bar.unwrap_or(DEFAULT_SIDE_BAR),
            ..Props::default()
        }
    }

    /// Builds the host capabilities.
    #[must_use]
    pub fn options(&self) -> Options {
        Options {
            no_fullscreen: self.controls.no_fullscreen.unwrap_or(false),
        }
    }
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_log_level() -> Option<String> {
    Some(DEFAULT_LOG_LEVEL.to_string())
}

fn default_portal() -> Option<bool> {
    Some(DEFAULT_PORTAL)
}

fn default_action_bar() -> Option<bool> {
    Some(DEFAULT_ACTION_BAR)
}

fn default_sensitivity() -> Option<f64> {
    Some(DEFAULT_SENSITIVITY)
}

fn default_scale_controls() -> Option<f64> {
    Some(DEFAULT_SCALE_CONTROLS)
}

fn default_mouse_sync() -> Option<bool> {
    Some(DEFAULT_MOUSE_SYNC)
}

fn default_latency_ms() -> Option<u64> {
    Some(DEFAULT_LATENCY_MS)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

/// Returns the config file path with an optional override.
fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load Functions
// =============================================================================

/// Loads the configuration from the default path.
///
/// Returns a tuple of (config, optional_warning). If loading fails, returns
/// default config with a warning message key explaining what went wrong.
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    log::warn!("ignoring {}: {err}", path.display());
                    return (
                        Config::default(),
                        Some("notification-config-load-error".to_string()),
                    );
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
///
/// # Errors
///
/// Returns an error if the file cannot be read or is not valid TOML.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str(&content)?;
    Ok(config)
}
