// SPDX-License-Identifier: MPL-2.0
//! Speed classification used by the speed display.

use super::newtypes::SpeedBounds;

/// Coarse bucket a playback speed falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpeedTier {
    Slow,
    Normal,
    Fast,
    VeryFast,
    Extreme,
}

impl SpeedTier {
    /// Buckets `speed`: below 1x slow, exactly 1x normal, then fast below 2x,
    /// very fast below 4x, extreme from 4x upward.
    #[must_use]
    pub fn classify(speed: f64) -> Self {
        if speed < 1.0 {
            Self::Slow
        } else if speed == 1.0 {
            Self::Normal
        } else if speed < 2.0 {
            Self::Fast
        } else if speed < 4.0 {
            Self::VeryFast
        } else {
            Self::Extreme
        }
    }

    /// English display label.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Slow => "Slow",
            Self::Normal => "Normal",
            Self::Fast => "Fast",
            Self::VeryFast => "Very Fast",
            Self::Extreme => "Extreme",
        }
    }

    /// Returns the i18n message key for this tier.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Slow => "speed-tier-slow",
            Self::Normal => "speed-tier-normal",
            Self::Fast => "speed-tier-fast",
            Self::VeryFast => "speed-tier-very-fast",
            Self::Extreme => "speed-tier-extreme",
        }
    }
}

/// Emphasis factor in `[0, 1]` for a speed within `bounds`.
///
/// Reaches 1.0 two thirds of the way up the range and stays there.
#[must_use]
pub fn speed_intensity(speed: f64, bounds: SpeedBounds) -> f64 {
    let span = bounds.max - bounds.min;
    if span <= 0.0 {
        return 0.0;
    }
    let normalized = ((speed - bounds.min) / span).max(0.0);
    (normalized * 1.5).min(1.0)
}
