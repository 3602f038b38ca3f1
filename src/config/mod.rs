// SPDX-License-Identifier: MPL-2.0
//! Settings of the demo host, stored in a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Theme mode and platform backend
//! - `[pill]` - Pill size, text size and placement
//! - `[timing]` - Exit delay and error display time
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. Pass `--config-dir` or set `PILLBOX_CONFIG_DIR`
//! 3. Falls back to platform-specific config directory
//!
//! # Examples
//!
//! ```no_run
//! use pillbox::config;
//! use pillbox::platform::Edge;
//!
//! let (mut config, _warning) = config::load();
//! config.pill.edge = Edge::Bottom;
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::pill::{ExitDelay, MinDisplayTime};
use crate::error::{Error, Result};
use crate::pill::PillOptions;
use crate::platform::{Edge, PlatformKind};
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GeneralConfig {
    /// Application theme mode (light, dark, or system).
    #[serde(default)]
    pub theme_mode: ThemeMode,

    /// Backend deciding offsets, easing and colours.
    #[serde(default)]
    pub platform: PlatformKind,
}

/// Pill geometry and placement.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PillConfig {
    #[serde(default = "default_width")]
    pub width: f32,

    #[serde(default = "default_height")]
    pub height: f32,

    #[serde(default = "default_text_size")]
    pub text_size: f32,

    /// Whether a navigation bar covers the top edge.
    #[serde(default)]
    pub navigation_bar: bool,

    #[serde(default)]
    pub edge: Edge,

    /// Resting distance from the edge on desktop.
    #[serde(default = "default_offset_from_edge")]
    pub offset_from_edge: f32,
}

impl Default for PillConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_PILL_WIDTH,
            height: DEFAULT_PILL_HEIGHT,
            text_size: DEFAULT_TEXT_SIZE,
            navigation_bar: false,
            edge: Edge::default(),
            offset_from_edge: DEFAULT_EDGE_OFFSET,
        }
    }
}

impl PillConfig {
    /// Pill options described by this section.
    #[must_use]
    pub fn to_options(&self) -> PillOptions {
        let mut options = PillOptions::default()
            .with_size(self.width, self.height)
            .with_navigation_bar(self.navigation_bar)
            .with_edge(self.edge, self.offset_from_edge);
        options.text_size = self.text_size;
        options
    }
}

/// Lifecycle timing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TimingConfig {
    /// Pause between the result glyph and the exit slide (seconds).
    #[serde(
        default = "default_exit_delay_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub exit_delay_secs: Option<f64>,

    /// Time an error pill stays visible (seconds, at least 2).
    #[serde(
        default = "default_min_error_display_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub min_error_display_secs: Option<f64>,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            exit_delay_secs: default_exit_delay_secs(),
            min_error_display_secs: default_min_error_display_secs(),
        }
    }
}

impl TimingConfig {
    /// Exit delay from the settings, capped at [`MAX_EXIT_DELAY`].
    #[must_use]
    pub fn exit_delay(&self) -> ExitDelay {
        self.exit_delay_secs
            .map_or_else(ExitDelay::default, ExitDelay::from_secs_f64)
            .min(ExitDelay::new(MAX_EXIT_DELAY))
    }

    /// Error display time from the settings, capped at [`MAX_ERROR_DISPLAY`].
    #[must_use]
    pub fn min_error_display(&self) -> MinDisplayTime {
        self.min_error_display_secs
            .map_or_else(MinDisplayTime::default, MinDisplayTime::from_secs_f64)
            .min(MinDisplayTime::new(MAX_ERROR_DISPLAY))
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Application configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub pill: PillConfig,

    #[serde(default)]
    pub timing: TimingConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_width() -> f32 {
    DEFAULT_PILL_WIDTH
}

fn default_height() -> f32 {
    DEFAULT_PILL_HEIGHT
}

fn default_text_size() -> f32 {
    DEFAULT_TEXT_SIZE
}

fn default_offset_from_edge() -> f32 {
    DEFAULT_EDGE_OFFSET
}

fn default_exit_delay_secs() -> Option<f64> {
    Some(DEFAULT_EXIT_DELAY.as_secs_f64())
}

fn default_min_error_display_secs() -> Option<f64> {
    Some(MIN_ERROR_DISPLAY.as_secs_f64())
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::config_dir_with_override(base_dir).map(|mut path| {
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
/// default config with a warning message explaining what went wrong.
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
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (
                        Config::default(),
                        Some(format!("Could not read {}: {}", path.display(), err)),
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
    let config: Config = toml::from_str(&content)?;
    Ok(config)
}

// =============================================================================
// Save Functions
// =============================================================================

/// Saves the configuration to the default path.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config).map_err(Error::from)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
