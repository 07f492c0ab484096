// SPDX-License-Identifier: MPL-2.0
//! Port definitions (traits) for dependency inversion.
//!
//! This module defines the host capabilities the playback controller
//! consumes. Hosts (a GUI toolkit, a WASM shell, a test harness) implement
//! these traits; the controller never sees concrete element types.
//!
//! # Available Ports
//!
//! - [`media_surface`]: The playable element and its lifecycle events
//! - [`fullscreen`]: Fullscreen request/exit on the player container
//! - [`source`]: File intake producing revocable source handles
//!
//! # Design Notes
//!
//! - All traits use domain types only
//! - Methods are synchronous; the controller runs inside host callbacks
//! - Fallible methods return [`PlaybackError`](crate::domain::error::PlaybackError)

pub mod fullscreen;
pub mod media_surface;
pub mod source;

// Re-export main types for convenience
pub use fullscreen::FullscreenHost;
pub use media_surface::{MediaEvent, MediaSurface};
pub use source::{SourceHandle, SourceStore};
