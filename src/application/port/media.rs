// SPDX-License-Identifier: MPL-2.0
//! Media element port definition.
//!
//! This module defines the [`MediaElement`] trait for the per-video playable
//! handles the synchronizer drives. In a browser host this wraps an HTML
//! `<video>` element; in tests it is a scripted fake.
//!
//! # Design Notes
//!
//! - Elements are **stateful**: they remember their own play/mute state
//! - `play()` may be refused (media not buffered, autoplay policy); the
//!   synchronizer swallows rejections, so implementations must not panic
//! - `duration()` is `None` until the element knows its media length

use crate::domain::playback::PlayRejection;

/// Port for a single playable media element.
///
/// The synchronizer owns an index-addressed collection of these, aligned
/// with the session's video list.
pub trait MediaElement {
    /// Requests playback to start.
    ///
    /// # Errors
    ///
    /// Returns a [`PlayRejection`] when the element cannot start (media not
    /// ready, host policy). Callers in this crate never propagate it.
    fn play(&mut self) -> Result<(), PlayRejection>;

    /// Pauses playback. Always succeeds; pausing a paused element is a no-op.
    fn pause(&mut self);

    /// Applies the muted flag.
    fn set_muted(&mut self, muted: bool);

    /// Current playback position in seconds.
    fn current_time(&self) -> f64;

    /// Total media length in seconds, when known.
    fn duration(&self) -> Option<f64>;
}
