// SPDX-License-Identifier: MPL-2.0
//! Media surface port definition.
//!
//! This module defines the [`MediaSurface`] trait: the host-provided playable
//! element (a browser `<video>`, a GStreamer pipeline, a test double). The
//! controller is a pure consumer of it.
//!
//! # Design Notes
//!
//! - Methods are synchronous; hosts resolve async play requests themselves
//!   and report the outcome through [`MediaEvent`]s
//! - Only `play()` can fail; every setter is fire-and-forget
//! - Uses domain types only ([`PlaybackError`])

use crate::domain::error::PlaybackError;

// =============================================================================
// MediaSurface Trait
// =============================================================================

/// Port for the element that decodes and renders the loaded source.
///
/// # Example
///
/// ```ignore
/// use speedplay::application::port::MediaSurface;
///
/// fn restart(surface: &mut impl MediaSurface) {
///     surface.set_current_time(0.0);
///     if let Err(e) = surface.play() {
///         eprintln!("Autoplay blocked: {e}");
///     }
/// }
/// ```
pub trait MediaSurface {
    /// Points the surface at a source URL, or detaches it with `None`.
    fn set_source(&mut self, url: Option<&str>);

    /// Requests playback start.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::PlayRejected`] when the host refuses to play
    /// (autoplay policy, no decodable stream).
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Requests playback stop at the current position.
    fn pause(&mut self);

    /// Current position in seconds.
    fn current_time(&self) -> f64;

    /// Jumps to `seconds`.
    fn set_current_time(&mut self, seconds: f64);

    /// Media duration once metadata has loaded.
    fn duration(&self) -> Option<f64>;

    /// Sets output level in `[0, 1]`.
    fn set_volume(&mut self, volume: f64);

    /// Suppresses or restores audio output without touching the level.
    fn set_muted(&mut self, muted: bool);

    /// Current playback rate.
    fn playback_rate(&self) -> f64;

    /// Sets the playback rate.
    fn set_playback_rate(&mut self, rate: f64);
}

// =============================================================================
// MediaEvent
// =============================================================================

/// Lifecycle notifications emitted by a [`MediaSurface`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Metadata is available; duration in seconds.
    LoadedMetadata { duration: f64 },
    /// Playback position advanced.
    TimeUpdate { current_time: f64 },
    /// Playback reached the end of the media.
    Ended,
}
