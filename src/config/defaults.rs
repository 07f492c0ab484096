// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Speed**: Playback rate bounds and quantization step
//! - **Volume**: Output level bounds and keyboard step
//! - **Seek**: Keyboard skip distance and seek bar fallback
//! - **Controls**: Overlay auto-hide delay

// ==========================================================================
// Speed Defaults
// ==========================================================================

/// Slowest playback rate of every profile.
pub const MIN_PLAYBACK_SPEED: f64 = 0.25;

/// Fastest playback rate of the standard profile.
pub const STANDARD_MAX_PLAYBACK_SPEED: f64 = 3.0;

/// Fastest playback rate of the extended profile.
pub const EXTENDED_MAX_PLAYBACK_SPEED: f64 = 12.0;

/// Speeds are snapped to multiples of this step.
pub const PLAYBACK_SPEED_STEP: f64 = 0.25;

/// Speed change per `+`/`-` key press.
pub const PLAYBACK_SPEED_KEY_STEP: f64 = 0.25;

/// Preset menu of the standard profile.
pub const STANDARD_SPEED_PRESETS: &[f64] = &[0.25, 0.5, 0.75, 1.0, 1.25, 1.5, 1.75, 2.0, 2.5, 3.0];

/// Labelled markers along the standard speed slider.
pub const STANDARD_SLIDER_MARKERS: &[f64] = &[0.25, 1.0, 2.0, 3.0];

/// One-click presets shown under the extended slider.
pub const EXTENDED_QUICK_PRESETS: &[f64] = &[0.5, 0.75, 1.0, 1.5, 2.0, 3.0];

/// Labelled markers along the extended slider.
pub const EXTENDED_SLIDER_MARKERS: &[f64] = &[0.25, 0.5, 1.0, 2.0, 4.0, 8.0, 12.0];

// ==========================================================================
// Volume Defaults
// ==========================================================================

/// Volume assigned to a freshly loaded source.
pub const DEFAULT_VOLUME: f64 = 1.0;

/// Volume adjustment step per key press (10%).
pub const DEFAULT_VOLUME_STEP: f64 = 0.1;

/// Smallest configurable volume step.
pub const MIN_VOLUME_STEP: f64 = 0.01;

/// Largest configurable volume step.
pub const MAX_VOLUME_STEP: f64 = 0.5;

// ==========================================================================
// Seek Defaults
// ==========================================================================

/// Default arrow-key skip distance in seconds.
pub const DEFAULT_SKIP_SECS: f64 = 5.0;

/// Seek bar range used until the duration is known.
pub const SEEK_BAR_FALLBACK_MAX_SECS: f64 = 100.0;

// ==========================================================================
// Controls Defaults
// ==========================================================================

/// Default inactivity delay before overlay controls hide (milliseconds).
pub const DEFAULT_CONTROLS_HIDE_DELAY_MS: u32 = 3_000;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    assert!(MIN_PLAYBACK_SPEED > 0.0);
    assert!(STANDARD_MAX_PLAYBACK_SPEED > MIN_PLAYBACK_SPEED);
    assert!(EXTENDED_MAX_PLAYBACK_SPEED > STANDARD_MAX_PLAYBACK_SPEED);
    assert!(PLAYBACK_SPEED_STEP > 0.0);
    assert!(PLAYBACK_SPEED_KEY_STEP >= PLAYBACK_SPEED_STEP);

    assert!(DEFAULT_VOLUME >= 0.0);
    assert!(DEFAULT_VOLUME <= 1.0);
    assert!(DEFAULT_VOLUME_STEP >= MIN_VOLUME_STEP);
    assert!(DEFAULT_VOLUME_STEP <= MAX_VOLUME_STEP);

    assert!(DEFAULT_SKIP_SECS > 0.0);
    assert!(SEEK_BAR_FALLBACK_MAX_SECS > 0.0);
    assert!(DEFAULT_CONTROLS_HIDE_DELAY_MS > 0);
};
