// SPDX-License-Identifier: MPL-2.0
//! One modal-open carousel session.
//!
//! [`CarouselSession`] wires the engagement reducer, the navigation state
//! machine, the playback synchronizer, and the share flow together behind
//! the operations a host view calls: like, share, navigate, toggle
//! play/mute, report element time updates and visibility, and a periodic
//! `tick` that commits due transitions and hides the toast.
//!
//! Everything here is ephemeral except engagement state: playback flags and
//! share UI state are discarded when the session is dropped, while the liked
//! set and mutated video list were already persisted synchronously by the
//! reducer.

use crate::application::port::{Clipboard, EngagementSink, LinkOpener, MediaElement};
use crate::config::Config;
use crate::domain::playback::{LayoutMode, PlaybackState};
use crate::domain::video::{SharePlatform, Video};
use crate::engagement::Engagement;
use crate::navigation::CarouselNavigator;
use crate::playback::PlaybackSynchronizer;
use crate::prefs::PreferenceStore;
use crate::share::ShareFlow;
use chrono::Utc;
use std::time::Instant;

/// A running carousel modal session.
pub struct CarouselSession<E: MediaElement> {
    engagement: Engagement,
    navigator: CarouselNavigator,
    playback: PlaybackState,
    share_flow: ShareFlow,
    synchronizer: PlaybackSynchronizer<E>,
    store: PreferenceStore,
    sink: Box<dyn EngagementSink>,
    clipboard: Box<dyn Clipboard>,
    links: Box<dyn LinkOpener>,
}

impl<E: MediaElement> CarouselSession<E> {
    /// Opens a session over `videos`, starting at `start_index` (clamped).
    ///
    /// The liked set is restored from `store`. Media elements are attached
    /// separately with [`CarouselSession::attach_elements`] once the host has
    /// created them for this video list.
    pub fn new(
        videos: Vec<Video>,
        start_index: usize,
        mode: LayoutMode,
        store: PreferenceStore,
        sink: Box<dyn EngagementSink>,
        clipboard: Box<dyn Clipboard>,
        links: Box<dyn LinkOpener>,
    ) -> Self {
        let navigator = CarouselNavigator::new(videos.len(), start_index);
        let engagement = Engagement::from_store(videos, &store);
        Self {
            engagement,
            navigator,
            playback: PlaybackState::default(),
            share_flow: ShareFlow::new(),
            synchronizer: PlaybackSynchronizer::new(mode),
            store,
            sink,
            clipboard,
            links,
        }
    }

    /// Applies session-start preferences from the user configuration and
    /// re-syncs any attached elements with the new playing/muted flags.
    pub fn apply_config(&mut self, config: &Config) {
        self.playback.playing = config.video_autoplay();
        self.playback.muted = config.start_muted();
        self.resync();
    }

    /// Attaches the media elements for this session's video list and
    /// performs an initial sync.
    pub fn attach_elements(&mut self, elements: Vec<E>) {
        self.synchronizer.set_elements(elements);
        self.resync();
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigator.current_index()
    }

    #[must_use]
    pub fn current_video(&self) -> Option<&Video> {
        self.engagement.video(self.navigator.current_index())
    }

    #[must_use]
    pub fn videos(&self) -> &[Video] {
        self.engagement.videos()
    }

    #[must_use]
    pub fn playback(&self) -> PlaybackState {
        self.playback
    }

    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    #[must_use]
    pub fn has_next(&self) -> bool {
        self.navigator.has_next()
    }

    #[must_use]
    pub fn has_prev(&self) -> bool {
        self.navigator.has_prev()
    }

    /// Whether the current video is marked liked.
    #[must_use]
    pub fn is_liked(&self) -> bool {
        self.engagement.is_liked(self.navigator.current_index())
    }

    /// Like counter displayed for the current video.
    #[must_use]
    pub fn like_count(&self) -> u64 {
        self.engagement.like_count(self.navigator.current_index())
    }

    /// Share counter displayed for the current video.
    #[must_use]
    pub fn share_count(&self) -> usize {
        self.engagement.share_count(self.navigator.current_index())
    }

    #[must_use]
    pub fn is_share_panel_open(&self) -> bool {
        self.share_flow.is_panel_open()
    }

    #[must_use]
    pub fn is_toast_visible(&self) -> bool {
        self.share_flow.is_toast_visible()
    }

    /// Toggles the like state of the current video. Returns the new liked
    /// state, or `None` for an empty session.
    pub fn like(&mut self) -> Option<bool> {
        self.engagement.toggle_like(
            self.navigator.current_index(),
            &self.store,
            self.sink.as_ref(),
        )
    }

    pub fn open_share_panel(&mut self) {
        self.share_flow.open_panel();
    }

    pub fn close_share_panel(&mut self) {
        self.share_flow.close_panel();
    }

    /// Shares the current video to `platform`.
    ///
    /// Records the share (appended record, persisted, dispatched) and then
    /// performs the platform side effect: deep link, or clipboard copy with
    /// toast. Returns the new share count, or `None` for an empty session.
    pub fn share(&mut self, platform: SharePlatform, now: Instant) -> Option<usize> {
        let index = self.navigator.current_index();
        let video_url = self.engagement.video(index)?.video_url.clone();

        let count = self.engagement.record_share(
            index,
            platform,
            Utc::now(),
            &self.store,
            self.sink.as_ref(),
        )?;
        self.share_flow.dispatch(
            platform,
            &video_url,
            now,
            self.clipboard.as_mut(),
            self.links.as_ref(),
        );
        Some(count)
    }

    /// Requests navigation to the next video. Accepted requests reset the
    /// visible progress immediately; ignored at the last index or during a
    /// transition.
    pub fn next(&mut self, now: Instant) -> bool {
        if self.navigator.request_next(now) {
            self.playback.progress = 0.0;
            return true;
        }
        false
    }

    /// Requests navigation to the previous video. Same contract as
    /// [`CarouselSession::next`], ignored at index 0.
    pub fn prev(&mut self, now: Instant) -> bool {
        if self.navigator.request_prev(now) {
            self.playback.progress = 0.0;
            return true;
        }
        false
    }

    pub fn toggle_play(&mut self) {
        self.playback.playing = !self.playback.playing;
        self.resync();
    }

    pub fn toggle_mute(&mut self) {
        self.playback.muted = !self.playback.muted;
        self.resync();
    }

    /// Handles the active element's time-update signal by recomputing the
    /// progress percentage from the element's own position.
    pub fn time_update(&mut self) {
        self.playback.progress = self
            .synchronizer
            .progress_of(self.navigator.current_index());
    }

    /// Forwards a visibility report to the synchronizer (compact mode).
    pub fn visibility_changed(&mut self, index: usize, fraction: f32) {
        self.synchronizer.observe_visibility(index, fraction);
    }

    /// Advances time-driven state: commits a due navigation transition and
    /// hides an expired toast. Hosts call this from their frame/timer loop.
    pub fn tick(&mut self, now: Instant) {
        if self.navigator.tick(now).is_some() {
            self.playback.progress = 0.0;
            self.resync();
        }
        self.share_flow.tick(now);
    }

    /// Re-applies the desktop playback contract after index/playing/muted
    /// changes.
    fn resync(&mut self) {
        self.synchronizer
            .sync(self.navigator.current_index(), &self.playback);
    }
}
