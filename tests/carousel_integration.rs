// SPDX-License-Identifier: MPL-2.0
//! End-to-end tests of a carousel session driven through its public API,
//! with fake ports standing in for media elements, the clipboard, the link
//! opener, and the engagement endpoint.

use reel_carousel::application::port::{Clipboard, EngagementSink, LinkOpener, MediaElement};
use reel_carousel::catalog;
use reel_carousel::domain::playback::{LayoutMode, PlayRejection};
use reel_carousel::domain::video::{LikedSet, SharePlatform, Video};
use reel_carousel::error::Result;
use reel_carousel::navigation::TRANSITION_WINDOW;
use reel_carousel::prefs::{keys, PreferenceStore};
use reel_carousel::session::CarouselSession;
use reel_carousel::share::TOAST_DURATION;
use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};
use tempfile::tempdir;

#[derive(Debug, Default)]
struct ElementState {
    playing: bool,
    muted: bool,
    position: f64,
    length: Option<f64>,
}

/// Media element whose state stays observable after moving into a session.
#[derive(Clone, Default)]
struct FakeElement {
    state: Rc<RefCell<ElementState>>,
}

impl FakeElement {
    fn with_length(length: f64) -> Self {
        let element = Self::default();
        element.state.borrow_mut().length = Some(length);
        element
    }
}

impl MediaElement for FakeElement {
    fn play(&mut self) -> std::result::Result<(), PlayRejection> {
        self.state.borrow_mut().playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.state.borrow_mut().playing = false;
    }

    fn set_muted(&mut self, muted: bool) {
        self.state.borrow_mut().muted = muted;
    }

    fn current_time(&self) -> f64 {
        self.state.borrow().position
    }

    fn duration(&self) -> Option<f64> {
        self.state.borrow().length
    }
}

#[derive(Debug, PartialEq)]
enum Dispatched {
    Like { video_id: String, liked: bool },
    Share { video_id: String, platform: SharePlatform },
}

#[derive(Clone, Default)]
struct RecordingSink {
    events: Rc<RefCell<Vec<Dispatched>>>,
}

impl EngagementSink for RecordingSink {
    fn like(&self, video_id: &str, liked: bool) {
        self.events.borrow_mut().push(Dispatched::Like {
            video_id: video_id.to_string(),
            liked,
        });
    }

    fn share(&self, video_id: &str, platform: SharePlatform) {
        self.events.borrow_mut().push(Dispatched::Share {
            video_id: video_id.to_string(),
            platform,
        });
    }
}

#[derive(Clone, Default)]
struct FakeClipboard {
    text: Rc<RefCell<Option<String>>>,
}

impl Clipboard for FakeClipboard {
    fn set_text(&mut self, text: &str) -> Result<()> {
        *self.text.borrow_mut() = Some(text.to_string());
        Ok(())
    }
}

#[derive(Clone, Default)]
struct FakeOpener {
    opened: Rc<RefCell<Vec<String>>>,
}

impl LinkOpener for FakeOpener {
    fn open(&self, url: &str) -> Result<()> {
        self.opened.borrow_mut().push(url.to_string());
        Ok(())
    }
}

fn video(id: &str, likes: u64) -> Video {
    Video {
        id: id.to_string(),
        title: format!("Video {id}"),
        description: String::new(),
        video_url: format!("https://cdn.example/{id}.mp4"),
        thumbnail_url: format!("https://cdn.example/{id}.jpg"),
        likes,
        comments: Vec::new(),
        shares: Vec::new(),
        created_at: None,
        updated_at: None,
    }
}

struct Harness {
    _dir: tempfile::TempDir,
    store: PreferenceStore,
    sink: RecordingSink,
    clipboard: FakeClipboard,
    opener: FakeOpener,
    elements: Vec<FakeElement>,
    session: CarouselSession<FakeElement>,
}

fn open_session(videos: Vec<Video>, start_index: usize) -> Harness {
    let dir = tempdir().expect("failed to create temp dir");
    let store = PreferenceStore::at_path(dir.path().join("preferences.json"));
    open_session_with_store(videos, start_index, dir, store)
}

fn open_session_with_store(
    videos: Vec<Video>,
    start_index: usize,
    dir: tempfile::TempDir,
    store: PreferenceStore,
) -> Harness {
    let sink = RecordingSink::default();
    let clipboard = FakeClipboard::default();
    let opener = FakeOpener::default();
    let elements: Vec<FakeElement> = videos
        .iter()
        .map(|_| FakeElement::with_length(10.0))
        .collect();

    let mut session = CarouselSession::new(
        videos,
        start_index,
        LayoutMode::Desktop,
        store.clone(),
        Box::new(sink.clone()),
        Box::new(clipboard.clone()),
        Box::new(opener.clone()),
    );
    session.attach_elements(elements.clone());

    Harness {
        _dir: dir,
        store,
        sink,
        clipboard,
        opener,
        elements,
        session,
    }
}

#[test]
fn like_toggle_round_trip_matches_observable_contract() {
    let mut h = open_session(vec![video("a", 3), video("b", 0)], 0);

    // First toggle: optimistic +1, membership, dispatched payload
    assert_eq!(h.session.like(), Some(true));
    assert_eq!(h.session.like_count(), 4);
    assert!(h.session.is_liked());
    let liked: LikedSet = h.store.get(keys::LIKED_VIDEOS).expect("liked set persisted");
    assert!(liked.contains("a"));

    // Second toggle: back to the original state
    assert_eq!(h.session.like(), Some(false));
    assert_eq!(h.session.like_count(), 3);
    assert!(!h.session.is_liked());
    let liked: LikedSet = h.store.get(keys::LIKED_VIDEOS).expect("liked set persisted");
    assert!(liked.is_empty());

    assert_eq!(
        *h.sink.events.borrow(),
        vec![
            Dispatched::Like {
                video_id: "a".to_string(),
                liked: true
            },
            Dispatched::Like {
                video_id: "a".to_string(),
                liked: false
            },
        ]
    );
}

#[test]
fn navigation_commits_after_the_transition_window() {
    let mut h = open_session(vec![video("a", 3), video("b", 0)], 0);
    let now = Instant::now();

    // Seed some visible progress first
    h.elements[0].state.borrow_mut().position = 5.0;
    h.session.time_update();
    assert_eq!(h.session.playback().progress, 50.0);

    assert!(h.session.next(now));
    assert!(h.session.is_transitioning());
    assert_eq!(h.session.playback().progress, 0.0);
    assert_eq!(h.session.current_index(), 0);

    // A second request inside the window is dropped, not queued
    assert!(!h.session.next(now + Duration::from_millis(50)));

    h.session.tick(now + TRANSITION_WINDOW);
    assert_eq!(h.session.current_index(), 1);
    assert!(!h.session.is_transitioning());
    assert_eq!(h.session.playback().progress, 0.0);

    // Exactly one request was honored
    h.session.tick(now + TRANSITION_WINDOW * 2);
    assert_eq!(h.session.current_index(), 1);
}

#[test]
fn navigation_is_bounded_at_both_ends() {
    let mut h = open_session(vec![video("a", 3), video("b", 0)], 0);
    let now = Instant::now();

    assert!(!h.session.prev(now));
    assert_eq!(h.session.current_index(), 0);

    assert!(h.session.next(now));
    h.session.tick(now + TRANSITION_WINDOW);
    assert_eq!(h.session.current_index(), 1);

    assert!(!h.session.next(now + TRANSITION_WINDOW));
    assert_eq!(h.session.current_index(), 1);
}

#[test]
fn desktop_playback_follows_the_committed_index() {
    let mut h = open_session(vec![video("a", 0), video("b", 0), video("c", 0)], 0);
    assert!(h.elements[0].state.borrow().playing);
    assert!(!h.elements[1].state.borrow().playing);

    let now = Instant::now();
    h.session.next(now);
    h.session.tick(now + TRANSITION_WINDOW);

    assert!(!h.elements[0].state.borrow().playing);
    assert!(h.elements[1].state.borrow().playing);
    assert!(!h.elements[2].state.borrow().playing);
}

#[test]
fn copy_link_share_copies_url_and_toast_auto_hides() {
    let mut h = open_session(vec![video("a", 3)], 0);
    let now = Instant::now();
    h.session.open_share_panel();

    let count = h.session.share(SharePlatform::Copy, now);

    assert_eq!(count, Some(1));
    assert_eq!(h.session.share_count(), 1);
    assert_eq!(
        h.clipboard.text.borrow().as_deref(),
        Some("https://cdn.example/a.mp4")
    );
    assert!(h.session.is_toast_visible());
    // Panel stays open after copy-link
    assert!(h.session.is_share_panel_open());

    let video = h.session.current_video().expect("video present");
    assert_eq!(video.shares.len(), 1);
    assert_eq!(video.shares[0].platform, SharePlatform::Copy);

    h.session.tick(now + TOAST_DURATION - Duration::from_millis(1));
    assert!(h.session.is_toast_visible());
    h.session.tick(now + TOAST_DURATION);
    assert!(!h.session.is_toast_visible());
}

#[test]
fn whatsapp_share_records_and_opens_encoded_link() {
    let mut h = open_session(vec![video("a", 3), video("b", 0)], 1);
    let now = Instant::now();

    let count = h.session.share(SharePlatform::Whatsapp, now);

    assert_eq!(count, Some(1));
    assert_eq!(h.session.share_count(), 1);
    let video = h.session.current_video().expect("video present");
    assert_eq!(video.shares[0].platform, SharePlatform::Whatsapp);

    assert_eq!(
        *h.opener.opened.borrow(),
        vec![format!(
            "https://api.whatsapp.com/send?text={}",
            "https%3A%2F%2Fcdn.example%2Fb.mp4"
        )]
    );
    assert_eq!(
        *h.sink.events.borrow(),
        vec![Dispatched::Share {
            video_id: "b".to_string(),
            platform: SharePlatform::Whatsapp
        }]
    );
}

#[test]
fn unlike_on_zero_count_never_goes_negative() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = PreferenceStore::at_path(dir.path().join("preferences.json"));
    // A previous client liked "b", but the cached count is already 0
    let mut liked = LikedSet::new();
    liked.toggle("b");
    store
        .set(keys::LIKED_VIDEOS, &liked)
        .expect("failed to seed store");

    let mut h = open_session_with_store(vec![video("b", 0)], 0, dir, store);

    assert_eq!(h.session.like(), Some(false));
    assert_eq!(h.session.like_count(), 0);
}

#[tokio::test]
async fn engagement_survives_across_sessions_via_the_store() {
    let dir = tempdir().expect("failed to create temp dir");
    let store = PreferenceStore::at_path(dir.path().join("preferences.json"));

    // First session: fetch, like, close
    let videos = catalog::load_videos(&store, || async { Ok(vec![video("a", 3)]) })
        .await
        .expect("initial load should succeed");
    {
        let mut session: CarouselSession<FakeElement> = CarouselSession::new(
            videos,
            0,
            LayoutMode::Desktop,
            store.clone(),
            Box::new(RecordingSink::default()),
            Box::new(FakeClipboard::default()),
            Box::new(FakeOpener::default()),
        );
        session.attach_elements(vec![FakeElement::with_length(10.0)]);
        session.like();
        assert_eq!(session.like_count(), 4);
    }

    // Second session: cache hit, fetch must not run, state restored
    let videos = catalog::load_videos(&store, || async {
        panic!("fetch must not run on a cache hit")
    })
    .await
    .expect("cached load should succeed");
    assert_eq!(videos[0].likes, 4);

    let sink = RecordingSink::default();
    let mut session: CarouselSession<FakeElement> = CarouselSession::new(
        videos,
        0,
        LayoutMode::Desktop,
        store,
        Box::new(sink),
        Box::new(FakeClipboard::default()),
        Box::new(FakeOpener::default()),
    );
    session.attach_elements(vec![FakeElement::with_length(10.0)]);

    assert!(session.is_liked());
    assert_eq!(session.like_count(), 4);
}
