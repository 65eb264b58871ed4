// SPDX-License-Identifier: MPL-2.0
//! Playback synchronization across the session's media elements.

pub mod progress;
pub mod synchronizer;

pub use progress::progress_percent;
pub use synchronizer::{PlaybackSynchronizer, VISIBILITY_THRESHOLD};
