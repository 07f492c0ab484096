// SPDX-License-Identifier: MPL-2.0
//! Transport status of the media surface.

/// What the media surface is doing right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackStatus {
    /// Not playing. Initial status after a source is assigned.
    #[default]
    Paused,
    /// The surface is actively playing.
    Playing,
    /// The surface reached the end of the media.
    Ended,
}

impl PlaybackStatus {
    /// Returns true if the video is currently playing.
    #[must_use]
    pub fn is_playing(self) -> bool {
        matches!(self, Self::Playing)
    }

    /// Returns true if playback stopped at the end of the media.
    #[must_use]
    pub fn is_ended(self) -> bool {
        matches!(self, Self::Ended)
    }
}
