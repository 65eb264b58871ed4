// SPDX-License-Identifier: MPL-2.0
//! HTTP adapters for the backend's REST surface.
//!
//! [`VideoApi`] performs the initial `GET /api/videos`; it is the only
//! network call whose failure reaches the caller. [`HttpEngagementSink`]
//! implements the fire-and-forget mutation port: each call spawns the POST
//! onto a Tokio runtime and returns immediately, logging failures. Responses
//! are never read back into state, no retries, no client-side timeout, and
//! in-flight requests are not cancelled when a session closes.

use crate::application::port::EngagementSink;
use crate::domain::video::{SharePlatform, Video};
use crate::error::Result;
use log::warn;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct LikeRequest<'a> {
    video_id: &'a str,
    liked: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ShareRequest<'a> {
    video_id: &'a str,
    platform: SharePlatform,
}

/// Client for the video catalog endpoint.
#[derive(Debug, Clone)]
pub struct VideoApi {
    base_url: String,
    client: reqwest::Client,
}

impl VideoApi {
    /// Creates a client against `base_url`.
    ///
    /// An empty `base_url` produces relative request URLs, which only a
    /// browser-like embedder with a same-origin fetch environment can
    /// resolve. Native embedders must configure an absolute `api_base_url`;
    /// `reqwest` rejects relative URLs at request time.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
        }
    }

    /// Fetches the full video list.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn fetch_videos(&self) -> Result<Vec<Video>> {
        let url = format!("{}/api/videos", self.base_url);
        let response = self.client.get(&url).send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// [`EngagementSink`] that POSTs mutations to the backend without awaiting.
#[derive(Debug, Clone)]
pub struct HttpEngagementSink {
    base_url: String,
    client: reqwest::Client,
    runtime: tokio::runtime::Handle,
}

impl HttpEngagementSink {
    /// Creates a sink dispatching onto the given runtime handle.
    #[must_use]
    pub fn new(base_url: impl Into<String>, runtime: tokio::runtime::Handle) -> Self {
        Self {
            base_url: base_url.into(),
            client: reqwest::Client::new(),
            runtime,
        }
    }
}

impl EngagementSink for HttpEngagementSink {
    fn like(&self, video_id: &str, liked: bool) {
        // The body is serialized before spawning, so the borrow ends here.
        let request = self
            .client
            .post(format!("{}/api/videos/like", self.base_url))
            .json(&LikeRequest { video_id, liked });
        let video_id = video_id.to_string();
        self.runtime.spawn(async move {
            if let Err(error) = request.send().await {
                warn!("like dispatch for {video_id} failed: {error}");
            }
        });
    }

    fn share(&self, video_id: &str, platform: SharePlatform) {
        let request = self
            .client
            .post(format!("{}/api/videos/{video_id}/share", self.base_url))
            .json(&ShareRequest { video_id, platform });
        let video_id = video_id.to_string();
        self.runtime.spawn(async move {
            if let Err(error) = request.send().await {
                warn!("share dispatch for {video_id} failed: {error}");
            }
        });
    }
}
