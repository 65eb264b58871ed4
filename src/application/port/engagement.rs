// SPDX-License-Identifier: MPL-2.0
//! Engagement dispatch port definition.
//!
//! The carousel applies like/share mutations optimistically: local state and
//! the preference store are updated first, then the mutation is handed to an
//! [`EngagementSink`] and forgotten. The sink is the single place the
//! eventual-sync contract lives, so tests can substitute a recording fake and
//! assert dispatch payloads without network I/O.

use crate::domain::video::SharePlatform;

/// Port for fire-and-forget engagement mutations.
///
/// Implementations must return immediately and must never surface failures
/// to the caller: transport errors are logged, not retried, and local state
/// is never rolled back.
pub trait EngagementSink {
    /// Reports that `video_id` was liked (`liked == true`) or unliked.
    fn like(&self, video_id: &str, liked: bool);

    /// Reports that `video_id` was shared to `platform`.
    fn share(&self, video_id: &str, platform: SharePlatform);
}

/// Sink that drops every mutation. Useful for offline or read-only hosts.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullEngagementSink;

impl EngagementSink for NullEngagementSink {
    fn like(&self, _video_id: &str, _liked: bool) {}

    fn share(&self, _video_id: &str, _platform: SharePlatform) {}
}
