// src/domain/slideshow/session.rs
//
// Slideshow session - pure state machine over one gallery's file list
//
// STATES: Closed (no session), OpenPaused, OpenAutoplay, OpenManualVideo
//
// INVARIANTS:
// - 0 <= current_index < files.len() (a session over zero files cannot exist)
// - Manual navigation always returns to OpenAutoplay and re-arms the timer
// - A timer tick only advances when its epoch is the current one, the state
//   is OpenAutoplay and there is more than one file
//
// Timer ownership lives in SlideshowController; this type only tracks the
// epoch so stale ticks are rejected deterministically.

use serde::Serialize;

use crate::domain::gallery::{Gallery, MediaKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SlideshowState {
    Closed,
    OpenPaused,
    OpenAutoplay,
    OpenManualVideo,
}

impl SlideshowState {
    pub fn is_open(self) -> bool {
        !matches!(self, SlideshowState::Closed)
    }
}

/// Why the current index moved
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AdvanceCause {
    Next,
    Prev,
    Jump,
    Timer,
}

impl AdvanceCause {
    pub fn as_str(self) -> &'static str {
        match self {
            AdvanceCause::Next => "next",
            AdvanceCause::Prev => "prev",
            AdvanceCause::Jump => "jump",
            AdvanceCause::Timer => "timer",
        }
    }
}

/// An index transition, reported so the caller can swap mounted media
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideChange {
    pub from: usize,
    pub to: usize,
    pub cause: AdvanceCause,
}

/// The item at a given position
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    pub index: usize,
    pub url: String,
    pub kind: MediaKind,
}

#[derive(Debug, Clone)]
pub struct SlideshowSession {
    gallery: Gallery,
    current_index: usize,
    state: SlideshowState,
    is_playing: bool,
    is_muted: bool,
    timer_epoch: u64,
}

impl SlideshowSession {
    /// Start a session; `None` when the gallery has no files
    ///
    /// `start_index` wraps modulo the file count.
    pub fn open(gallery: Gallery, start_index: usize) -> Option<Self> {
        if gallery.files.is_empty() {
            return None;
        }
        let current_index = start_index % gallery.files.len();
        Some(Self {
            gallery,
            current_index,
            state: SlideshowState::OpenAutoplay,
            is_playing: false,
            is_muted: false,
            timer_epoch: 1,
        })
    }

    pub fn gallery(&self) -> &Gallery {
        &self.gallery
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn state(&self) -> SlideshowState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    pub fn is_muted(&self) -> bool {
        self.is_muted
    }

    pub fn len(&self) -> usize {
        self.gallery.files.len()
    }

    /// Always false; kept for the `len` convention
    pub fn is_empty(&self) -> bool {
        self.gallery.files.is_empty()
    }

    /// Epoch the currently armed timer must present
    pub fn timer_epoch(&self) -> u64 {
        self.timer_epoch
    }

    /// Whether an autoplay timer should be armed at all
    pub fn wants_timer(&self) -> bool {
        self.len() > 1
    }

    pub fn current_item(&self) -> MediaItem {
        let url = &self.gallery.files[self.current_index];
        MediaItem {
            index: self.current_index,
            url: url.clone(),
            kind: MediaKind::from_url(url),
        }
    }

    pub fn next(&mut self) -> SlideChange {
        let to = (self.current_index + 1) % self.len();
        self.navigate(to, AdvanceCause::Next)
    }

    pub fn prev(&mut self) -> SlideChange {
        let len = self.len();
        let to = (self.current_index + len - 1) % len;
        self.navigate(to, AdvanceCause::Prev)
    }

    /// Jump to an explicit index (thumbnail strip); wraps modulo the file count
    pub fn go_to(&mut self, index: usize) -> SlideChange {
        let to = index % self.len();
        self.navigate(to, AdvanceCause::Jump)
    }

    /// Manual navigation re-arms autoplay and invalidates the pending tick
    fn navigate(&mut self, to: usize, cause: AdvanceCause) -> SlideChange {
        let from = self.current_index;
        self.current_index = to;
        self.state = SlideshowState::OpenAutoplay;
        self.is_playing = false;
        self.timer_epoch += 1;
        SlideChange { from, to, cause }
    }

    /// Apply a timer firing armed under `epoch`
    pub fn tick(&mut self, epoch: u64) -> Option<SlideChange> {
        if epoch != self.timer_epoch
            || self.state != SlideshowState::OpenAutoplay
            || !self.wants_timer()
        {
            return None;
        }
        let from = self.current_index;
        self.current_index = (from + 1) % self.len();
        self.is_playing = false;
        Some(SlideChange {
            from,
            to: self.current_index,
            cause: AdvanceCause::Timer,
        })
    }

    /// Toggle local playback of the current video
    ///
    /// Returns false (and changes nothing) when the current item is an image.
    pub fn toggle_play_pause(&mut self) -> bool {
        if self.current_item().kind != MediaKind::Video {
            return false;
        }
        self.is_playing = !self.is_playing;
        self.state = SlideshowState::OpenManualVideo;
        true
    }

    pub fn toggle_mute(&mut self) -> bool {
        self.is_muted = !self.is_muted;
        self.is_muted
    }

    /// Gallery-level pause: OpenAutoplay <-> OpenPaused
    ///
    /// Resuming bumps the epoch; the caller re-arms the timer.
    pub fn toggle_autoplay(&mut self) -> SlideshowState {
        self.state = match self.state {
            SlideshowState::OpenAutoplay => SlideshowState::OpenPaused,
            _ => {
                self.timer_epoch += 1;
                SlideshowState::OpenAutoplay
            }
        };
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn gallery(files: &[&str]) -> Gallery {
        Gallery::new(
            "g".to_string(),
            "CAMPUS".to_string(),
            "Campus".to_string(),
            "Tour".to_string(),
            files.iter().map(|f| f.to_string()).collect(),
            Utc::now(),
        )
    }

    #[test]
    fn test_open_rejects_empty_gallery() {
        assert!(SlideshowSession::open(gallery(&[]), 0).is_none());
    }

    #[test]
    fn test_open_starts_in_autoplay_at_wrapped_index() {
        let s = SlideshowSession::open(gallery(&["a.jpg", "b.jpg", "c.jpg"]), 4).unwrap();
        assert_eq!(s.state(), SlideshowState::OpenAutoplay);
        assert_eq!(s.current_index(), 1);
    }

    #[test]
    fn test_next_wraps_after_n_steps() {
        let mut s = SlideshowSession::open(gallery(&["a.jpg", "b.jpg", "c.jpg"]), 0).unwrap();
        for _ in 0..3 {
            s.next();
        }
        assert_eq!(s.current_index(), 0);
    }

    #[test]
    fn test_prev_from_zero_wraps_to_last() {
        let mut s = SlideshowSession::open(gallery(&["a.jpg", "b.jpg", "c.jpg"]), 0).unwrap();
        let change = s.prev();
        assert_eq!(change, SlideChange { from: 0, to: 2, cause: AdvanceCause::Prev });
        assert_eq!(s.current_index(), 2);
    }

    #[test]
    fn test_navigation_invalidates_pending_tick() {
        let mut s = SlideshowSession::open(gallery(&["a.jpg", "b.jpg", "c.jpg"]), 0).unwrap();
        let armed = s.timer_epoch();
        s.next();
        assert_eq!(s.tick(armed), None);
        assert_eq!(s.current_index(), 1);

        let rearmed = s.timer_epoch();
        assert_eq!(s.tick(rearmed).map(|c| c.to), Some(2));
    }

    #[test]
    fn test_tick_never_fires_for_single_file() {
        let mut s = SlideshowSession::open(gallery(&["a.jpg"]), 0).unwrap();
        assert!(!s.wants_timer());
        let epoch = s.timer_epoch();
        assert_eq!(s.tick(epoch), None);
    }

    #[test]
    fn test_video_toggle_moves_to_manual_and_blocks_ticks() {
        let mut s = SlideshowSession::open(gallery(&["a.mp4", "b.jpg"]), 0).unwrap();
        let epoch = s.timer_epoch();

        assert!(s.toggle_play_pause());
        assert!(s.is_playing());
        assert_eq!(s.state(), SlideshowState::OpenManualVideo);
        assert_eq!(s.tick(epoch), None);

        // Manual navigation re-arms autoplay
        s.next();
        assert_eq!(s.state(), SlideshowState::OpenAutoplay);
        assert!(!s.is_playing());
    }

    #[test]
    fn test_play_pause_on_image_is_noop() {
        let mut s = SlideshowSession::open(gallery(&["a.jpg", "b.mp4"]), 0).unwrap();
        assert!(!s.toggle_play_pause());
        assert_eq!(s.state(), SlideshowState::OpenAutoplay);
    }

    #[test]
    fn test_toggle_autoplay_pauses_and_resumes() {
        let mut s = SlideshowSession::open(gallery(&["a.jpg", "b.jpg"]), 0).unwrap();
        let epoch = s.timer_epoch();
        assert_eq!(s.toggle_autoplay(), SlideshowState::OpenPaused);
        assert_eq!(s.tick(epoch), None);

        assert_eq!(s.toggle_autoplay(), SlideshowState::OpenAutoplay);
        assert_ne!(s.timer_epoch(), epoch);
    }

    #[test]
    fn test_mute_toggles() {
        let mut s = SlideshowSession::open(gallery(&["a.mp4"]), 0).unwrap();
        assert!(s.toggle_mute());
        assert!(!s.toggle_mute());
    }
}
