// SPDX-License-Identifier: MPL-2.0
//! Share flow: panel state, platform dispatch, and the copy-link toast.
//!
//! The panel opens on share-icon activation and closes only on explicit
//! close. Platform actions leave it open, including copy-link, so a viewer
//! can share to several platforms in a row.
//!
//! The toast uses the same polled-deadline pattern as the navigation
//! transition window: showing it records an [`Instant`], and
//! [`ShareFlow::tick`] hides it once [`TOAST_DURATION`] has elapsed.

use crate::application::port::{Clipboard, LinkOpener};
use crate::domain::video::SharePlatform;
use log::warn;
use std::time::{Duration, Instant};

/// How long the "link copied" toast stays visible.
pub const TOAST_DURATION: Duration = Duration::from_millis(3000);

/// WhatsApp deep-link prefix; the URL-encoded video URL is appended.
pub const WHATSAPP_SHARE_URL: &str = "https://api.whatsapp.com/send?text=";
/// Instagram has no text deep link; sharing opens the site.
pub const INSTAGRAM_URL: &str = "https://www.instagram.com";

/// Ephemeral share UI state for one session.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShareFlow {
    panel_open: bool,
    toast_shown_at: Option<Instant>,
}

impl ShareFlow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_panel(&mut self) {
        self.panel_open = true;
    }

    pub fn close_panel(&mut self) {
        self.panel_open = false;
    }

    #[must_use]
    pub fn is_panel_open(&self) -> bool {
        self.panel_open
    }

    #[must_use]
    pub fn is_toast_visible(&self) -> bool {
        self.toast_shown_at.is_some()
    }

    /// Executes the platform-specific side effect for sharing `video_url`.
    ///
    /// Deep-link platforms open an external URL through the [`LinkOpener`];
    /// copy-link writes the URL to the [`Clipboard`] and shows the toast.
    /// Failures from either port are logged and swallowed; there is no
    /// user-visible error for a failed share action. The panel stays open
    /// regardless of the action.
    pub fn dispatch(
        &mut self,
        platform: SharePlatform,
        video_url: &str,
        now: Instant,
        clipboard: &mut dyn Clipboard,
        links: &dyn LinkOpener,
    ) {
        match platform {
            SharePlatform::Whatsapp => {
                let url = format!("{WHATSAPP_SHARE_URL}{}", urlencoding::encode(video_url));
                if let Err(error) = links.open(&url) {
                    warn!("failed to open WhatsApp share link: {error}");
                }
            }
            SharePlatform::Instagram => {
                if let Err(error) = links.open(INSTAGRAM_URL) {
                    warn!("failed to open Instagram: {error}");
                }
            }
            SharePlatform::Copy => {
                if let Err(error) = clipboard.set_text(video_url) {
                    warn!("failed to copy video link: {error}");
                }
                self.toast_shown_at = Some(now);
            }
            // No launchable target; the share is still recorded by the caller.
            SharePlatform::Other => {}
        }
    }

    /// Hides the toast once its display window has elapsed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(shown_at) = self.toast_shown_at {
            if now.duration_since(shown_at) >= TOAST_DURATION {
                self.toast_shown_at = None;
            }
        }
    }
}
