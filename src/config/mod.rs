// SPDX-License-Identifier: MPL-2.0
//! This module handles the player's configuration, including loading and
//! saving preferences to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[playback]` - Speed profile, keyboard skip and volume steps
//! - `[controls]` - Overlay auto-hide delay
//!
//! # Speed Profiles
//!
//! The player ships in two variants that differ only in their speed range:
//! [`SpeedProfile::Standard`] (0.25x-3x, ten presets) and
//! [`SpeedProfile::Extended`] (0.25x-12x, every quarter step). Neither is
//! the default: the profile comes from the settings file or from the host.
//!
//! # Examples
//!
//! ```no_run
//! use speedplay::config::{self, SpeedProfile};
//!
//! // Load existing configuration (returns tuple with optional warning)
//! let (mut config, _warning) = config::load();
//!
//! // Pin the extended profile
//! config.playback.speed_profile = Some(SpeedProfile::Extended);
//!
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;
pub mod paths;

pub use defaults::*;

use crate::domain::video::SpeedBounds;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILE: &str = "settings.toml";

// =============================================================================
// Speed Profile
// =============================================================================

/// Speed range variant of the player.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SpeedProfile {
    /// 0.25x to 3x with a ten-entry preset menu.
    Standard,
    /// 0.25x to 12x, every quarter step selectable.
    Extended,
}

impl SpeedProfile {
    /// Fastest rate allowed by this profile.
    #[must_use]
    pub fn max_speed(self) -> f64 {
        match self {
            Self::Standard => STANDARD_MAX_PLAYBACK_SPEED,
            Self::Extended => EXTENDED_MAX_PLAYBACK_SPEED,
        }
    }

    /// Clamp range and quantization step.
    #[must_use]
    pub fn bounds(self) -> SpeedBounds {
        SpeedBounds {
            min: MIN_PLAYBACK_SPEED,
            max: self.max_speed(),
            step: PLAYBACK_SPEED_STEP,
        }
    }

    /// Speeds offered in the preset menu.
    #[must_use]
    pub fn presets(self) -> Vec<f64> {
        match self {
            Self::Standard => STANDARD_SPEED_PRESETS.to_vec(),
            Self::Extended => self.bounds().steps().collect(),
        }
    }

    /// One-click presets shown next to the speed slider.
    #[must_use]
    pub fn quick_presets(self) -> &'static [f64] {
        match self {
            Self::Standard => STANDARD_SPEED_PRESETS,
            Self::Extended => EXTENDED_QUICK_PRESETS,
        }
    }

    /// Labelled markers along the speed slider.
    #[must_use]
    pub fn slider_markers(self) -> &'static [f64] {
        match self {
            Self::Standard => STANDARD_SLIDER_MARKERS,
            Self::Extended => EXTENDED_SLIDER_MARKERS,
        }
    }
}

// =============================================================================
// Section Structs
// =============================================================================

/// Playback settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PlaybackConfig {
    /// Speed range variant; the host decides when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_profile: Option<SpeedProfile>,

    /// Arrow-key skip distance in seconds.
    #[serde(default = "default_skip_secs", skip_serializing_if = "Option::is_none")]
    pub skip_secs: Option<f64>,

    /// Arrow-key volume step.
    #[serde(
        default = "default_volume_step",
        skip_serializing_if = "Option::is_none"
    )]
    pub volume_step: Option<f64>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            speed_profile: None,
            skip_secs: default_skip_secs(),
            volume_step: default_volume_step(),
        }
    }
}

/// Overlay controls settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ControlsConfig {
    /// Inactivity delay before controls hide during playback (milliseconds).
    #[serde(
        default = "default_hide_delay_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub hide_delay_ms: Option<u32>,
}

impl Default for ControlsConfig {
    fn default() -> Self {
        Self {
            hide_delay_ms: default_hide_delay_ms(),
        }
    }
}

// =============================================================================
// Main Config Struct (Sectioned)
// =============================================================================

/// Player configuration with logical sections.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    /// Playback settings.
    #[serde(default)]
    pub playback: PlaybackConfig,

    /// Overlay controls settings.
    #[serde(default)]
    pub controls: ControlsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_skip_secs() -> Option<f64> {
    Some(DEFAULT_SKIP_SECS)
}

fn default_volume_step() -> Option<f64> {
    Some(DEFAULT_VOLUME_STEP)
}

fn default_hide_delay_ms() -> Option<u32> {
    Some(DEFAULT_CONTROLS_HIDE_DELAY_MS)
}

// =============================================================================
// Load Functions
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
/// default config with a warning message key explaining what went wrong.
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
                    log::warn!("ignoring unreadable config {}: {err}", path.display());
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

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            playback: PlaybackConfig {
                speed_profile: Some(SpeedProfile::Extended),
                skip_secs: Some(10.0),
                volume_step: Some(0.05),
            },
            controls: ControlsConfig {
                hide_delay_ms: Some(1_500),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn profile_is_written_in_kebab_case() {
        let mut config = Config::default();
        config.playback.speed_profile = Some(SpeedProfile::Standard);
        let content = toml::to_string_pretty(&config).unwrap();
        assert!(content.contains("[playback]"));
        assert!(content.contains("speed_profile = \"standard\""));
    }

    #[test]
    fn missing_sections_use_defaults() {
        let config: Config = toml::from_str("[playback]\nspeed_profile = \"extended\"\n").unwrap();
        assert_eq!(config.playback.speed_profile, Some(SpeedProfile::Extended));
        assert_eq!(config.playback.skip_secs, Some(DEFAULT_SKIP_SECS));
        assert_eq!(config.controls, ControlsConfig::default());
    }

    #[test]
    fn default_config_leaves_profile_to_host() {
        assert!(Config::default().playback.speed_profile.is_none());
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        let result = load_from_path(&config_path);
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn load_with_override_falls_back_with_warning() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[playback]\nspeed_profile = \"turbo\"\n")
            .expect("failed to write config");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some("notification-config-load-error"));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        save_with_override(&Config::default(), Some(temp_dir.path().to_path_buf()))
            .expect("save should succeed");
        assert!(temp_dir.path().join(CONFIG_FILE).exists());
    }

    #[test]
    fn profile_ranges_and_presets() {
        assert_eq!(SpeedProfile::Standard.max_speed(), 3.0);
        assert_eq!(SpeedProfile::Extended.max_speed(), 12.0);
        assert_eq!(SpeedProfile::Standard.presets().len(), 10);
        assert_eq!(SpeedProfile::Extended.presets().len(), 48);
        assert_eq!(SpeedProfile::Extended.slider_markers().last(), Some(&12.0));
        assert_eq!(SpeedProfile::Standard.slider_markers(), STANDARD_SLIDER_MARKERS);
        assert_eq!(SpeedProfile::Standard.slider_markers().last(), Some(&3.0));
        assert_eq!(SpeedProfile::Extended.quick_presets().len(), 6);
    }
}
