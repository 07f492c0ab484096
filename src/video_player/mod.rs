// SPDX-License-Identifier: MPL-2.0
//! Video playback controls.
//!
//! This module owns the player controller and the pieces it is built from:
//! the overlay hide timer, keyboard shortcuts, time and speed formatting,
//! and per-instance settings. Decoding and rendering stay with the host,
//! reached through [`MediaSurface`](crate::application::port::MediaSurface).

pub mod settings;
pub mod shortcuts;
mod state;
pub mod time_format;
pub mod visibility;

pub use settings::PlayerSettings;
pub use shortcuts::{KeyOutcome, ScopeGuard, Shortcut, ShortcutHelp, ShortcutScope, SHORTCUT_HELP};
pub use state::{clamp_position, PlaybackState, VideoPlayer};
pub use time_format::{format_speed, format_time, speed_label, time_label};
pub use visibility::{ControlsTimer, Visibility};
