// SPDX-License-Identifier: MPL-2.0
//! Playback session state.
//!
//! [`PlaybackState`] is ephemeral: it lives for one modal-open session and is
//! discarded on close, unlike the engagement state which is persisted.

/// Per-session playback flags and progress.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackState {
    /// Whether the active video should be playing.
    pub playing: bool,
    /// Whether the active video is muted.
    pub muted: bool,
    /// Playback progress of the active video, 0–100.
    pub progress: f32,
}

impl Default for PlaybackState {
    fn default() -> Self {
        // Sessions open with autoplay on and sound enabled.
        Self {
            playing: true,
            muted: false,
            progress: 0.0,
        }
    }
}

/// Layout mode of the hosting view.
///
/// Desktop presents a fixed-center carousel where exactly one video plays;
/// compact presents a vertically scrollable feed where visibility drives
/// playback per element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutMode {
    Desktop,
    Compact,
}

impl LayoutMode {
    /// Derives the layout mode from the viewport width.
    #[must_use]
    pub fn from_viewport_width(width_px: u32, breakpoint_px: u32) -> Self {
        if width_px <= breakpoint_px {
            LayoutMode::Compact
        } else {
            LayoutMode::Desktop
        }
    }

    #[must_use]
    pub fn is_compact(self) -> bool {
        matches!(self, LayoutMode::Compact)
    }
}

/// Reason a play request was refused by the underlying media element.
///
/// Rejections are always swallowed by the synchronizer; this type exists so
/// adapters can report the cause for logging.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayRejection {
    /// The media is not loaded far enough to start.
    NotReady,
    /// The host (e.g. a browser autoplay policy) refused playback.
    PolicyBlocked,
    /// Any other element-level failure.
    Other(String),
}

impl std::fmt::Display for PlayRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlayRejection::NotReady => write!(f, "media not ready"),
            PlayRejection::PolicyBlocked => write!(f, "playback blocked by host policy"),
            PlayRejection::Other(msg) => write!(f, "{}", msg),
        }
    }
}
