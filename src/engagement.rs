// SPDX-License-Identifier: MPL-2.0
//! Engagement state reducer.
//!
//! Owns the session's local copy of the video list and the persisted liked
//! set, and applies optimistic like/share mutations:
//!
//! 1. mutate local state (liked-set membership, clamped like count, appended
//!    share record),
//! 2. persist to the preference store **synchronously**, before any network
//!    activity,
//! 3. dispatch the mutation through the [`EngagementSink`] fire-and-forget.
//!
//! Sink failures are the sink's problem (logged there, never surfaced);
//! local state is never rolled back, so the server may drift from the local
//! counters until the next full fetch.

use crate::application::port::EngagementSink;
use crate::domain::video::{LikedSet, Share, SharePlatform, Video};
use crate::prefs::{keys, PreferenceStore};
use chrono::{DateTime, Utc};
use log::warn;

/// Local engagement state for one video list.
#[derive(Debug, Clone)]
pub struct Engagement {
    videos: Vec<Video>,
    liked: LikedSet,
}

impl Engagement {
    /// Creates the reducer from an explicit liked set.
    #[must_use]
    pub fn new(videos: Vec<Video>, liked: LikedSet) -> Self {
        Self { videos, liked }
    }

    /// Creates the reducer, restoring the liked set from the store.
    ///
    /// A missing or corrupt liked set reads as empty.
    #[must_use]
    pub fn from_store(videos: Vec<Video>, store: &PreferenceStore) -> Self {
        let liked = store.get(keys::LIKED_VIDEOS).unwrap_or_default();
        Self { videos, liked }
    }

    #[must_use]
    pub fn videos(&self) -> &[Video] {
        &self.videos
    }

    #[must_use]
    pub fn video(&self, index: usize) -> Option<&Video> {
        self.videos.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.videos.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.videos.is_empty()
    }

    /// Whether the video at `index` is currently marked liked.
    #[must_use]
    pub fn is_liked(&self, index: usize) -> bool {
        self.videos
            .get(index)
            .is_some_and(|video| self.liked.contains(&video.id))
    }

    /// Like count displayed for the video at `index` (0 when out of range).
    #[must_use]
    pub fn like_count(&self, index: usize) -> u64 {
        self.videos.get(index).map_or(0, |video| video.likes)
    }

    /// Share count displayed for the video at `index` (0 when out of range).
    #[must_use]
    pub fn share_count(&self, index: usize) -> usize {
        self.videos.get(index).map_or(0, Video::share_count)
    }

    /// Toggles the like state of the video at `index`.
    ///
    /// Inverts liked-set membership, adjusts the like count (+1 on like, −1
    /// clamped at 0 on unlike), persists both the liked set and the video
    /// list, then dispatches the mutation. Returns the new liked state, or
    /// `None` for an out-of-range index.
    pub fn toggle_like(
        &mut self,
        index: usize,
        store: &PreferenceStore,
        sink: &dyn EngagementSink,
    ) -> Option<bool> {
        let video = self.videos.get_mut(index)?;
        let video_id = video.id.clone();

        let liked = self.liked.toggle(&video_id);
        video.likes = if liked {
            video.likes.saturating_add(1)
        } else {
            video.likes.saturating_sub(1)
        };

        self.persist(store);
        sink.like(&video_id, liked);
        Some(liked)
    }

    /// Appends a share record to the video at `index`.
    ///
    /// Returns the new share count (the visible counter value), or `None`
    /// for an out-of-range index. Share sequences are append-only.
    pub fn record_share(
        &mut self,
        index: usize,
        platform: SharePlatform,
        shared_at: DateTime<Utc>,
        store: &PreferenceStore,
        sink: &dyn EngagementSink,
    ) -> Option<usize> {
        let video = self.videos.get_mut(index)?;
        let video_id = video.id.clone();

        video.shares.push(Share {
            platform,
            shared_at,
        });
        let count = video.shares.len();

        self.persist(store);
        sink.share(&video_id, platform);
        Some(count)
    }

    /// Writes the current video list and liked set to the store.
    ///
    /// Write failures are logged and swallowed: local state remains the
    /// source of truth for the running session.
    fn persist(&self, store: &PreferenceStore) {
        let entries = match (
            serde_json::to_value(&self.videos),
            serde_json::to_value(&self.liked),
        ) {
            (Ok(videos), Ok(liked)) => {
                vec![(keys::VIDEO_DATA, videos), (keys::LIKED_VIDEOS, liked)]
            }
            _ => {
                warn!("engagement state could not be serialized; skipping persist");
                return;
            }
        };
        if let Err(error) = store.merge(entries) {
            warn!("failed to persist engagement state: {error}");
        }
    }
}
