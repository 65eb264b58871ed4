// SPDX-License-Identifier: MPL-2.0
//! Port definitions.
//!
//! Ports are the seams between the carousel core and its host: media
//! elements, the engagement endpoint, the clipboard, and the link opener.
//! Hosts and tests supply their own implementations; reference adapters live
//! in [`crate::infrastructure`].

pub mod engagement;
pub mod media;
pub mod share;

pub use engagement::EngagementSink;
pub use media::MediaElement;
pub use share::{Clipboard, LinkOpener};
