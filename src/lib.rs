// SPDX-License-Identifier: MPL-2.0
//! `speedplay` is a playback controller for embedded video players.
//!
//! It keeps the state behind a player's overlay controls (play/pause, seek,
//! volume and mute, speed presets, fullscreen, auto-hiding controls and
//! keyboard shortcuts) and drives a host-provided media surface through the
//! ports in [`application::port`]. Two speed profiles are supported: a
//! standard one topping out at 3x and an extended one reaching 12x.

#![doc(html_root_url = "https://docs.rs/speedplay/0.1.0")]

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod video_player;

#[cfg(test)]
mod test_utils;
