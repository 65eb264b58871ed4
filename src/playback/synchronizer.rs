// SPDX-License-Identifier: MPL-2.0
//! Playback synchronizer.
//!
//! Owns the session's index-addressed collection of media elements and keeps
//! their play/pause/mute state consistent with the session:
//!
//! - **Desktop**: exactly one element (the one at the current index) plays
//!   (when the session says so) and carries the session's mute flag; every
//!   other element is paused. [`PlaybackSynchronizer::sync`] re-establishes
//!   this whenever index, playing, or muted change.
//! - **Compact**: playback is driven by visibility reports. An element plays
//!   once it is at least 80% visible and pauses when it drops below. Each
//!   element drives itself independently; during a fast scroll several
//!   elements can be ≥80% visible and all of them play. There is no mutual
//!   exclusion in compact mode.
//!
//! All operations are side-effect only. Play rejections from elements whose
//! media is not ready are logged at debug level and otherwise ignored.

use crate::application::port::MediaElement;
use crate::domain::playback::{LayoutMode, PlaybackState};
use crate::playback::progress::progress_percent;
use log::debug;

/// Visible fraction at which a compact-mode element starts playing.
pub const VISIBILITY_THRESHOLD: f32 = 0.8;

/// Keeps a collection of media elements in sync with session state.
#[derive(Debug)]
pub struct PlaybackSynchronizer<E: MediaElement> {
    elements: Vec<E>,
    mode: LayoutMode,
}

impl<E: MediaElement> PlaybackSynchronizer<E> {
    /// Creates a synchronizer with no elements attached.
    #[must_use]
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            elements: Vec::new(),
            mode,
        }
    }

    /// Replaces the element collection.
    ///
    /// Resizing is an explicit operation performed alongside changes to the
    /// video list, never an implicit side effect of rendering.
    pub fn set_elements(&mut self, elements: Vec<E>) {
        self.elements = elements;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    #[must_use]
    pub fn mode(&self) -> LayoutMode {
        self.mode
    }

    /// Borrows the element at `index`, if attached.
    #[must_use]
    pub fn element(&self, index: usize) -> Option<&E> {
        self.elements.get(index)
    }

    /// Enforces the desktop contract: the element at `current_index` plays
    /// iff `state.playing`, carries `state.muted`, and everything else is
    /// paused.
    ///
    /// In compact mode this is a no-op; visibility reports drive playback.
    pub fn sync(&mut self, current_index: usize, state: &PlaybackState) {
        if self.mode.is_compact() {
            return;
        }
        for (index, element) in self.elements.iter_mut().enumerate() {
            if index == current_index {
                element.set_muted(state.muted);
                if state.playing {
                    if let Err(rejection) = element.play() {
                        debug!("play request for element {index} refused: {rejection}");
                    }
                } else {
                    element.pause();
                }
            } else {
                element.pause();
            }
        }
    }

    /// Applies a visibility report for the element at `index`.
    ///
    /// Compact mode only; desktop ignores visibility entirely. `fraction` is
    /// the visible portion of the element, 0.0–1.0.
    pub fn observe_visibility(&mut self, index: usize, fraction: f32) {
        if !self.mode.is_compact() {
            return;
        }
        let Some(element) = self.elements.get_mut(index) else {
            return;
        };
        if fraction >= VISIBILITY_THRESHOLD {
            if let Err(rejection) = element.play() {
                debug!("play request for visible element {index} refused: {rejection}");
            }
        } else {
            element.pause();
        }
    }

    /// Progress percentage of the element at `index`, from the element's own
    /// time-update signal. `0.0` for detached indices or unknown durations.
    #[must_use]
    pub fn progress_of(&self, index: usize) -> f32 {
        self.elements
            .get(index)
            .map(|element| progress_percent(element.current_time(), element.duration()))
            .unwrap_or(0.0)
    }
}
