// SPDX-License-Identifier: MPL-2.0
//! Application layer - host-facing interfaces.
//!
//! - [`port`]: Trait definitions (interfaces) for dependency inversion
//!
//! # Dependency Rule
//!
//! - Application layer depends on domain layer (uses domain types)
//! - Hosts implement application layer ports
//! - The playback controller consumes the ports
//!
//! # Example
//!
//! ```ignore
//! use speedplay::application::port::MediaSurface;
//!
//! // A host wraps its native element
//! struct HtmlVideo { /* ... */ }
//! impl MediaSurface for HtmlVideo { /* ... */ }
//! ```

pub mod port;
