// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core playback rules with ZERO external dependencies.
//!
//! This module contains pure domain types, value objects, and business rules.
//! It has no dependencies on external crates (except `std`) to ensure
//! testability.
//!
//! # Modules
//!
//! - [`error`]: Domain error types ([`PlaybackError`](error::PlaybackError))
//! - [`video`]: Playback types ([`PlaybackStatus`](video::PlaybackStatus),
//!   [`Volume`](video::Volume), [`PlaybackSpeed`](video::PlaybackSpeed),
//!   [`SpeedTier`](video::SpeedTier))

pub mod error;
pub mod video;
