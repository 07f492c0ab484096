// SPDX-License-Identifier: MPL-2.0
//! Playback error type shared by the controller and its ports.

use std::fmt;

/// Failure conditions reported by playback operations.
///
/// None of these are fatal. The controller either reports them to the
/// caller (`NoSource`) or logs and swallows them (host rejections).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaybackError {
    /// An operation that needs a loaded source was invoked without one.
    NoSource,

    /// The media surface refused to start playback (e.g. autoplay policy).
    PlayRejected(String),

    /// The host refused to enter or leave fullscreen.
    FullscreenRejected(String),

    /// A playable handle could not be created for the selected file.
    SourceUnavailable(String),
}

impl PlaybackError {
    /// Returns the i18n message key for this error type.
    pub fn i18n_key(&self) -> &'static str {
        match self {
            PlaybackError::NoSource => "error-playback-no-source",
            PlaybackError::PlayRejected(_) => "error-playback-play-rejected",
            PlaybackError::FullscreenRejected(_) => "error-playback-fullscreen-rejected",
            PlaybackError::SourceUnavailable(_) => "error-playback-source-unavailable",
        }
    }
}

impl fmt::Display for PlaybackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackError::NoSource => write!(f, "No video source loaded"),
            PlaybackError::PlayRejected(msg) => write!(f, "Playback rejected: {}", msg),
            PlaybackError::FullscreenRejected(msg) => {
                write!(f, "Fullscreen request rejected: {}", msg)
            }
            PlaybackError::SourceUnavailable(msg) => write!(f, "Source unavailable: {}", msg),
        }
    }
}

impl std::error::Error for PlaybackError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn i18n_keys_are_distinct() {
        let keys = [
            PlaybackError::NoSource.i18n_key(),
            PlaybackError::PlayRejected(String::new()).i18n_key(),
            PlaybackError::FullscreenRejected(String::new()).i18n_key(),
            PlaybackError::SourceUnavailable(String::new()).i18n_key(),
        ];
        for (i, a) in keys.iter().enumerate() {
            for b in &keys[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn display_includes_host_message() {
        let err = PlaybackError::PlayRejected("NotAllowedError".to_string());
        assert!(err.to_string().contains("NotAllowedError"));
        assert_eq!(PlaybackError::NoSource.to_string(), "No video source loaded");
    }
}
