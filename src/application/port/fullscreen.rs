// SPDX-License-Identifier: MPL-2.0
//! Fullscreen capability port definition.

use crate::domain::error::PlaybackError;

/// Port for the host's fullscreen capability on the player container.
///
/// Requests may be refused (no user gesture, permission denied); the
/// controller logs and swallows such failures.
pub trait FullscreenHost {
    /// Returns true if some element is fullscreen right now.
    fn is_fullscreen(&self) -> bool;

    /// Requests fullscreen on the player container.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::FullscreenRejected`] if the host refuses.
    fn request_fullscreen(&mut self) -> Result<(), PlaybackError>;

    /// Leaves fullscreen.
    ///
    /// # Errors
    ///
    /// Returns [`PlaybackError::FullscreenRejected`] if the host refuses.
    fn exit_fullscreen(&mut self) -> Result<(), PlaybackError>;
}

