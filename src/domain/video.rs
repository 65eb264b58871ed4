// SPDX-License-Identifier: MPL-2.0
//! Video catalog domain types.
//!
//! These mirror the documents the backend stores: a video with counters and
//! append-only share/comment sequences. The backend sometimes exposes the
//! document identifier as `_id` and sometimes as the virtual `id`; the serde
//! alias on [`Video::id`] is the single adapter that maps either incoming key
//! to the canonical field, so nothing downstream branches on it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Platform a video was shared to.
///
/// Unknown platform tags from older cache blobs or other clients map to
/// [`SharePlatform::Other`] instead of failing deserialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SharePlatform {
    Whatsapp,
    Instagram,
    Copy,
    #[serde(other)]
    Other,
}

/// One share event. Append-only; share records are never removed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub platform: SharePlatform,
    pub shared_at: DateTime<Utc>,
}

/// A viewer comment on a video.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    #[serde(default = "default_comment_user")]
    pub user: String,
    pub text: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

fn default_comment_user() -> String {
    "Anonymous".to_string()
}

/// A video as stored by the backend and cached locally.
///
/// Invariant: `likes` is never negative; enforced by the unsigned type and
/// by the engagement reducer clamping decrements at zero.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    /// Canonical identifier. Accepts the raw document `_id` on input.
    #[serde(alias = "_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    #[serde(default)]
    pub likes: u64,
    #[serde(default)]
    pub comments: Vec<Comment>,
    #[serde(default)]
    pub shares: Vec<Share>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Video {
    /// Number of times this video was shared.
    #[must_use]
    pub fn share_count(&self) -> usize {
        self.shares.len()
    }
}

/// Insertion-ordered set of video ids the local client has marked liked.
///
/// Membership is the sole source of truth for like toggling: an id is in the
/// set exactly when a +1 optimistic delta from this client has been applied
/// to the corresponding video and not reverted. Serialized as a plain JSON
/// array of id strings so it round-trips through the preference store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LikedSet(Vec<String>);

impl LikedSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns whether the given video id is marked liked.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|liked| liked == id)
    }

    /// Inverts membership of `id` and returns the new liked state.
    pub fn toggle(&mut self, id: &str) -> bool {
        if let Some(pos) = self.0.iter().position(|liked| liked == id) {
            self.0.remove(pos);
            false
        } else {
            self.0.push(id.to_string());
            true
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}
