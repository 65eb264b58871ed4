// SPDX-License-Identifier: MPL-2.0
//! `reel_carousel` is the playback and engagement core of a social-video
//! gallery modal.
//!
//! Given a list of videos fetched from a REST backend, it manages one
//! carousel session at a time: which media element is playing, bounds-checked
//! navigation with a timed transition window, optimistic like/share state
//! persisted locally and mirrored to the backend fire-and-forget, and the
//! share flow (deep links, clipboard copy, toast).
//!
//! The crate is UI-toolkit agnostic: media elements, the clipboard, the link
//! opener, and the mutation endpoint are all ports (`application::port`)
//! implemented by the host, with reference adapters in `infrastructure`.

pub mod application;
pub mod catalog;
pub mod config;
pub mod domain;
pub mod engagement;
pub mod error;
pub mod infrastructure;
pub mod navigation;
pub mod playback;
pub mod prefs;
pub mod session;
pub mod share;

#[cfg(test)]
pub(crate) mod test_utils;
