// SPDX-License-Identifier: MPL-2.0
//! Video playback newtypes.
//!
//! This module provides type-safe wrappers for playback values, plus the
//! pure transformation functions behind them (`clamp_volume`,
//! `quantize_speed`) so the rules can be tested without a controller.

use std::time::Duration;

// =============================================================================
// Volume
// =============================================================================

/// Volume bounds (0.0 to 1.0, where 1.0 = 100%).
pub mod volume_bounds {
    /// Minimum volume level.
    pub const MIN: f64 = 0.0;
    /// Maximum volume level.
    pub const MAX: f64 = 1.0;
    /// Volume assigned to a freshly loaded source.
    pub const DEFAULT: f64 = 1.0;
    /// Volume adjustment step per key press (10%).
    pub const STEP: f64 = 0.1;
}

/// Clamps a raw volume level into `[0, 1]`.
///
/// NaN is treated as silence so the result is always a valid level.
#[must_use]
pub fn clamp_volume(volume: f64) -> f64 {
    if volume.is_nan() {
        return volume_bounds::MIN;
    }
    volume.clamp(volume_bounds::MIN, volume_bounds::MAX)
}

/// Volume level, guaranteed to be within valid range (0.0–1.0).
///
/// # Example
///
/// ```
/// use speedplay::domain::video::Volume;
///
/// let vol = Volume::new(0.5);
/// assert_eq!(vol.value(), 0.5);
///
/// // Values outside range are clamped
/// assert_eq!(Volume::new(1.5).value(), 1.0);
/// assert_eq!(Volume::new(-0.5).value(), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Volume(f64);

impl Volume {
    /// Creates a new volume level, clamping to valid range.
    #[must_use]
    pub fn new(volume: f64) -> Self {
        Self(clamp_volume(volume))
    }

    /// Returns the volume value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the volume shifted by `delta`, clamped.
    #[must_use]
    pub fn adjust(self, delta: f64) -> Self {
        Self::new(self.0 + delta)
    }

    /// Returns true if the level is effectively zero (below audible threshold).
    #[must_use]
    pub fn is_silent(self) -> bool {
        self.0 < 0.001
    }

    /// Returns true if this is the minimum volume.
    #[must_use]
    pub fn is_min(self) -> bool {
        self.0 <= volume_bounds::MIN
    }

    /// Returns true if this is the maximum volume.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= volume_bounds::MAX
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self(volume_bounds::DEFAULT)
    }
}

// =============================================================================
// PlaybackSpeed
// =============================================================================

/// Speed bounds shared by every profile.
pub mod speed_bounds {
    /// Slowest supported rate.
    pub const MIN: f64 = 0.25;
    /// Fastest rate of the standard profile.
    pub const STANDARD_MAX: f64 = 3.0;
    /// Fastest rate of the extended profile.
    pub const EXTENDED_MAX: f64 = 12.0;
    /// Quantization step; every valid speed is a multiple of it.
    pub const STEP: f64 = 0.25;
    /// Default playback speed (1.0 = normal speed).
    pub const DEFAULT: f64 = 1.0;
}

/// Inclusive speed range plus the step speeds are snapped to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedBounds {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SpeedBounds {
    /// Range `[0.25, max]` with the standard 0.25 step.
    #[must_use]
    pub const fn up_to(max: f64) -> Self {
        Self {
            min: speed_bounds::MIN,
            max,
            step: speed_bounds::STEP,
        }
    }

    /// Every step multiple between `min` and `max`, inclusive.
    pub fn steps(self) -> impl Iterator<Item = f64> {
        let count = ((self.max - self.min) / self.step).round() as usize + 1;
        (0..count).map(move |i| self.min + i as f64 * self.step)
    }

    /// Number of distinct speeds reachable in this range.
    #[must_use]
    pub fn step_count(self) -> usize {
        self.steps().count()
    }
}

/// Clamps `speed` to `bounds`, then snaps it to the nearest step multiple.
///
/// With the 0.25 step this is `round(speed * 4) / 4`. NaN maps to the
/// default speed.
///
/// ```
/// use speedplay::domain::video::{quantize_speed, SpeedBounds};
///
/// let bounds = SpeedBounds::up_to(3.0);
/// assert_eq!(quantize_speed(1.3, bounds), 1.25);
/// assert_eq!(quantize_speed(7.0, bounds), 3.0);
/// ```
#[must_use]
pub fn quantize_speed(speed: f64, bounds: SpeedBounds) -> f64 {
    let speed = if speed.is_nan() {
        speed_bounds::DEFAULT
    } else {
        speed
    };
    let clamped = speed.clamp(bounds.min, bounds.max);
    (clamped / bounds.step).round() * bounds.step
}

/// Playback speed, always inside the bounds it was built with and
/// always a multiple of the quantization step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackSpeed(f64);

impl PlaybackSpeed {
    /// Creates a speed, clamping and quantizing against `bounds`.
    #[must_use]
    pub fn new(speed: f64, bounds: SpeedBounds) -> Self {
        Self(quantize_speed(speed, bounds))
    }

    /// Returns the speed value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the speed shifted by `delta`, clamped and quantized.
    #[must_use]
    pub fn adjust(self, delta: f64, bounds: SpeedBounds) -> Self {
        Self::new(self.0 + delta, bounds)
    }

    /// Returns true if this is the minimum speed of `bounds`.
    #[must_use]
    pub fn is_min(self, bounds: SpeedBounds) -> bool {
        (self.0 - bounds.min).abs() < 0.001
    }

    /// Returns true if this is the maximum speed of `bounds`.
    #[must_use]
    pub fn is_max(self, bounds: SpeedBounds) -> bool {
        (self.0 - bounds.max).abs() < 0.001
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        Self(speed_bounds::DEFAULT)
    }
}

// =============================================================================
// SkipStep
// =============================================================================

/// Keyboard skip bounds (0.5 to 30.0 seconds).
pub mod skip_step_bounds {
    /// Minimum skip in seconds.
    pub const MIN: f64 = 0.5;
    /// Maximum skip in seconds.
    pub const MAX: f64 = 30.0;
    /// Default skip in seconds.
    pub const DEFAULT: f64 = 5.0;
}

/// Distance in seconds jumped by the arrow-key skip shortcuts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SkipStep(f64);

impl SkipStep {
    /// Creates a new skip step, clamping to valid range.
    ///
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(skip_step_bounds::MIN, skip_step_bounds::MAX))
    }

    /// Returns the value as f64.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }

    /// Returns the step as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_secs_f64(self.0)
    }
}

impl Default for SkipStep {
    fn default() -> Self {
        Self(skip_step_bounds::DEFAULT)
    }
}

// =============================================================================
// ControlsHideDelay
// =============================================================================

/// Controls auto-hide delay bounds in milliseconds.
pub mod hide_delay_bounds {
    /// Minimum delay.
    pub const MIN_MS: u32 = 500;
    /// Maximum delay.
    pub const MAX_MS: u32 = 30_000;
    /// Default delay.
    pub const DEFAULT_MS: u32 = 3_000;
}

/// Inactivity period after which overlay controls hide during playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlsHideDelay(u32);

impl ControlsHideDelay {
    /// Creates a new delay, clamping to valid range.
    #[must_use]
    pub fn from_millis(ms: u32) -> Self {
        Self(ms.clamp(hide_delay_bounds::MIN_MS, hide_delay_bounds::MAX_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u32 {
        self.0
    }

    /// Returns the delay as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(u64::from(self.0))
    }
}

impl Default for ControlsHideDelay {
    fn default() -> Self {
        Self(hide_delay_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// Tests
// =============================================================================
