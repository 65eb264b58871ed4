// SPDX-License-Identifier: MPL-2.0
//! Initial video-list loading.
//!
//! Cache-first: a well-formed cached list in the preference store is used
//! as-is (no revalidation); only a miss, or a cache that fails to parse,
//! triggers the remote fetch. The fetched list is cached for the next
//! session; a cache write failure is logged and otherwise ignored.
//!
//! This is the one path in the crate where a transport failure reaches the
//! caller: with no cache and no reachable backend there is nothing to show.

use crate::domain::video::Video;
use crate::error::Result;
use crate::prefs::{keys, PreferenceStore};
use log::{debug, warn};
use std::future::Future;

/// Loads the video list, preferring the local cache over `fetch`.
///
/// `fetch` is only awaited on a cache miss. Pass the HTTP client's fetch,
/// e.g. `load_videos(&store, || api.fetch_videos())`.
///
/// # Errors
///
/// Returns the fetch error when the cache is empty and the fetch fails.
pub async fn load_videos<F, Fut>(store: &PreferenceStore, fetch: F) -> Result<Vec<Video>>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<Vec<Video>>>,
{
    if let Some(cached) = store.get::<Vec<Video>>(keys::VIDEO_DATA) {
        debug!("loaded {} videos from the preference store", cached.len());
        return Ok(cached);
    }

    let videos = fetch().await?;
    if let Err(error) = store.set(keys::VIDEO_DATA, &videos) {
        warn!("failed to cache fetched video list: {error}");
    }
    Ok(videos)
}
