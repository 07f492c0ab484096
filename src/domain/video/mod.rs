// SPDX-License-Identifier: MPL-2.0
//! Video playback domain types.
//!
//! This module contains playback value objects and the pure rules that
//! govern them, independent of any host or presentation concerns.

pub mod newtypes;
pub mod playback;
pub mod tier;

// Re-export commonly used types
pub use newtypes::{
    clamp_volume, quantize_speed, ControlsHideDelay, PlaybackSpeed, SkipStep, SpeedBounds, Volume,
};
pub use playback::PlaybackStatus;
pub use tier::{speed_intensity, SpeedTier};
