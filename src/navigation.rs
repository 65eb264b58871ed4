// SPDX-License-Identifier: MPL-2.0
//! Carousel navigation state machine.
//!
//! Two states: `Idle` and `Transitioning`. A valid `next`/`prev` request in
//! `Idle` arms a fixed 300 ms transition window; the index swap is committed
//! when [`CarouselNavigator::tick`] observes the deadline has passed. The
//! delay lets the fade/slide animation finish before the underlying index
//! changes, so the content never visibly pops.
//!
//! Requests made while a transition is in flight, or at a boundary (first
//! index for `prev`, last for `next`), are ignored, not queued.
//!
//! Time is injected: requests and ticks take an [`Instant`], so tests drive
//! the machine without sleeping.

use std::time::{Duration, Instant};

/// Length of the index-change animation window.
pub const TRANSITION_WINDOW: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Idle,
    Transitioning { target: usize, deadline: Instant },
}

/// Bounds-checked prev/next navigation with a timed transition window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CarouselNavigator {
    current_index: usize,
    len: usize,
    phase: Phase,
}

impl CarouselNavigator {
    /// Creates a navigator over `len` items, starting at `start_index`
    /// (clamped into bounds; an empty carousel sits at index 0).
    #[must_use]
    pub fn new(len: usize, start_index: usize) -> Self {
        let current_index = if len == 0 {
            0
        } else {
            start_index.min(len - 1)
        };
        Self {
            current_index,
            len,
            phase: Phase::Idle,
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Whether the 300 ms transition window is currently open.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.len > 0 && self.current_index < self.len - 1
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.current_index > 0
    }

    /// Requests navigation to the next item.
    ///
    /// Returns `true` when the request was accepted and a transition window
    /// opened; the caller should reset visible progress immediately. At the
    /// last index, or while already transitioning, the request is ignored.
    pub fn request_next(&mut self, now: Instant) -> bool {
        if self.is_transitioning() || !self.has_next() {
            return false;
        }
        self.begin(self.current_index + 1, now);
        true
    }

    /// Requests navigation to the previous item. Same contract as
    /// [`CarouselNavigator::request_next`], ignored at index 0.
    pub fn request_prev(&mut self, now: Instant) -> bool {
        if self.is_transitioning() || !self.has_prev() {
            return false;
        }
        self.begin(self.current_index - 1, now);
        true
    }

    /// Commits a due transition.
    ///
    /// Returns the new current index when a transition window has elapsed,
    /// `None` otherwise. The machine returns to `Idle` after the commit and
    /// keeps cycling for the session's lifetime.
    pub fn tick(&mut self, now: Instant) -> Option<usize> {
        if let Phase::Transitioning { target, deadline } = self.phase {
            if now >= deadline {
                self.current_index = target;
                self.phase = Phase::Idle;
                return Some(target);
            }
        }
        None
    }

    fn begin(&mut self, target: usize, now: Instant) {
        self.phase = Phase::Transitioning {
            target,
            deadline: now + TRANSITION_WINDOW,
        };
    }
}
