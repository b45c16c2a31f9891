// src/services/slideshow_service.rs
//
// Slideshow Controller - owns the session and its auto-advance timer
//
// CRITICAL RULES:
// - One session at a time; opening a gallery with no files is rejected (false)
// - The timer task is owned by the controller and aborted on close, re-arm and drop
// - Every tick is validated against the session epoch under the session lock,
//   so a stale or post-close tick can never move the index
// - Re-arming re-checks the epoch under the timer lock, so a late caller never
//   replaces the timer of a newer navigation
// - The outgoing item is unmounted before the incoming one is mounted
// - Events are emitted after the session lock is released

use log::debug;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;
use tokio::task::JoinHandle;

use crate::domain::gallery::Gallery;
use crate::domain::slideshow::{MediaItem, SlideChange, SlideshowSession, SlideshowState};
use crate::events::{EventBus, SlideChanged, SlideshowClosed, SlideshowOpened};
use crate::integrations::MediaSink;

type SharedSession = Arc<Mutex<Option<SlideshowSession>>>;

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Read-only view of the open session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlideshowSnapshot {
    pub gallery_id: String,
    pub current_index: usize,
    pub file_count: usize,
    pub state: SlideshowState,
    pub is_playing: bool,
    pub is_muted: bool,
    pub item: MediaItem,
}

/// What a timer firing did
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum TickOutcome {
    Advanced { gallery_id: String, change: SlideChange },
    /// Armed timer, but the session is paused or a video is under manual control
    Idle,
    /// Session closed or timer superseded; the task must stop
    Stale,
}

/// Swap mounted media for an index change; remount is skipped when the index did not move
fn swap_media(media: &dyn MediaSink, session: &SlideshowSession, outgoing: &MediaItem, was_playing: bool) {
    let incoming = session.current_item();
    if incoming.index != outgoing.index {
        media.unmount(outgoing);
        media.mount(&incoming, session.is_muted());
    } else if was_playing {
        media.set_playing(&incoming, false);
    }
}

/// Apply one timer firing armed under `epoch`
pub(crate) fn apply_tick(session: &Mutex<Option<SlideshowSession>>, media: &dyn MediaSink, epoch: u64) -> TickOutcome {
    let mut guard = lock(session);
    let Some(s) = guard.as_mut() else {
        return TickOutcome::Stale;
    };
    if s.timer_epoch() != epoch {
        return TickOutcome::Stale;
    }

    let outgoing = s.current_item();
    let was_playing = s.is_playing();
    match s.tick(epoch) {
        Some(change) => {
            swap_media(media, s, &outgoing, was_playing);
            TickOutcome::Advanced {
                gallery_id: s.gallery().id.clone(),
                change,
            }
        }
        None => TickOutcome::Idle,
    }
}

pub struct SlideshowController {
    interval: Duration,
    media: Arc<dyn MediaSink>,
    event_bus: Arc<EventBus>,
    session: SharedSession,
    timer: Mutex<Option<JoinHandle<()>>>,
}

impl SlideshowController {
    pub fn new(interval: Duration, media: Arc<dyn MediaSink>, event_bus: Arc<EventBus>) -> Self {
        Self {
            interval,
            media,
            event_bus,
            session: Arc::new(Mutex::new(None)),
            timer: Mutex::new(None),
        }
    }

    /// Open `gallery` at `start_index` (wrapped) and start autoplay
    ///
    /// Returns false, leaving any current session untouched, when the gallery
    /// has no files. Must be called inside a tokio runtime.
    pub fn open(&self, gallery: &Gallery, start_index: usize) -> bool {
        let Some(session) = SlideshowSession::open(gallery.clone(), start_index) else {
            debug!("Rejected open of gallery {}: no files", gallery.id);
            return false;
        };

        self.close();

        let (epoch, wants_timer, index) = {
            let mut guard = lock(&self.session);
            self.media.mount(&session.current_item(), session.is_muted());
            let armed = (session.timer_epoch(), session.wants_timer(), session.current_index());
            *guard = Some(session);
            armed
        };

        if wants_timer {
            self.arm_timer(epoch);
        }

        debug!("Opened gallery {} at #{}", gallery.id, index);
        self.event_bus
            .emit(SlideshowOpened::new(gallery.id.clone(), index, gallery.files.len()));
        true
    }

    /// Close the session; returns false when nothing was open
    pub fn close(&self) -> bool {
        let closed = {
            let mut guard = lock(&self.session);
            guard.take().map(|s| {
                self.media.unmount(&s.current_item());
                (s.gallery().id.clone(), s.current_index())
            })
        };

        self.cancel_timer();

        match closed {
            Some((gallery_id, last_index)) => {
                debug!("Closed gallery {}", gallery_id);
                self.event_bus.emit(SlideshowClosed::new(gallery_id, last_index));
                true
            }
            None => false,
        }
    }

    pub fn next(&self) -> Option<usize> {
        self.navigate(SlideshowSession::next)
    }

    pub fn prev(&self) -> Option<usize> {
        self.navigate(SlideshowSession::prev)
    }

    /// Jump to `index` (wrapped), e.g. from the thumbnail strip
    pub fn go_to(&self, index: usize) -> Option<usize> {
        self.navigate(|s| s.go_to(index))
    }

    /// Toggle playback of the current video; false when closed or on an image
    pub fn toggle_play_pause(&self) -> bool {
        let mut guard = lock(&self.session);
        let Some(s) = guard.as_mut() else {
            return false;
        };
        if !s.toggle_play_pause() {
            return false;
        }
        self.media.set_playing(&s.current_item(), s.is_playing());
        true
    }

    /// Returns the new muted flag, `None` when closed
    pub fn toggle_mute(&self) -> Option<bool> {
        let mut guard = lock(&self.session);
        let s = guard.as_mut()?;
        let muted = s.toggle_mute();
        self.media.set_muted(&s.current_item(), muted);
        Some(muted)
    }

    /// Gallery-level pause/resume of autoplay
    pub fn toggle_autoplay(&self) -> Option<SlideshowState> {
        let (state, epoch, wants_timer) = {
            let mut guard = lock(&self.session);
            let s = guard.as_mut()?;
            let state = s.toggle_autoplay();
            (state, s.timer_epoch(), s.wants_timer())
        };

        if state == SlideshowState::OpenAutoplay && wants_timer {
            self.arm_timer(epoch);
        }
        Some(state)
    }

    pub fn state(&self) -> SlideshowState {
        lock(&self.session)
            .as_ref()
            .map(SlideshowSession::state)
            .unwrap_or(SlideshowState::Closed)
    }

    pub fn is_open(&self) -> bool {
        self.state().is_open()
    }

    pub fn current_index(&self) -> Option<usize> {
        lock(&self.session).as_ref().map(SlideshowSession::current_index)
    }

    pub fn current_item(&self) -> Option<MediaItem> {
        lock(&self.session).as_ref().map(SlideshowSession::current_item)
    }

    pub fn snapshot(&self) -> Option<SlideshowSnapshot> {
        lock(&self.session).as_ref().map(|s| SlideshowSnapshot {
            gallery_id: s.gallery().id.clone(),
            current_index: s.current_index(),
            file_count: s.len(),
            state: s.state(),
            is_playing: s.is_playing(),
            is_muted: s.is_muted(),
            item: s.current_item(),
        })
    }

    fn navigate<F>(&self, step: F) -> Option<usize>
    where
        F: FnOnce(&mut SlideshowSession) -> SlideChange,
    {
        let (gallery_id, change, epoch, wants_timer) = {
            let mut guard = lock(&self.session);
            let s = guard.as_mut()?;
            let outgoing = s.current_item();
            let was_playing = s.is_playing();
            let change = step(s);
            swap_media(self.media.as_ref(), s, &outgoing, was_playing);
            (s.gallery().id.clone(), change, s.timer_epoch(), s.wants_timer())
        };

        if wants_timer {
            self.arm_timer(epoch);
        }

        self.event_bus.emit(SlideChanged::new(
            gallery_id,
            change.from,
            change.to,
            change.cause.as_str().to_string(),
        ));
        Some(change.to)
    }

    /// Replace the running timer with one armed under `epoch`
    ///
    /// Lock order is timer, then session. A caller whose epoch was superseded
    /// before it got the timer lock leaves the newer timer in place.
    pub(crate) fn arm_timer(&self, epoch: u64) {
        let mut timer = lock(&self.timer);
        let current = lock(&self.session).as_ref().map(SlideshowSession::timer_epoch);
        if current != Some(epoch) {
            debug!("Skipping re-arm for superseded epoch {}", epoch);
            return;
        }

        if let Some(old) = timer.take() {
            old.abort();
        }

        let session = Arc::clone(&self.session);
        let media = Arc::clone(&self.media);
        let event_bus = Arc::clone(&self.event_bus);
        let interval = self.interval;

        *timer = Some(tokio::spawn(async move {
            loop {
                tokio::time::sleep(interval).await;

                match apply_tick(&session, media.as_ref(), epoch) {
                    TickOutcome::Advanced { gallery_id, change } => {
                        event_bus.emit(SlideChanged::new(
                            gallery_id,
                            change.from,
                            change.to,
                            change.cause.as_str().to_string(),
                        ));
                    }
                    TickOutcome::Idle => {}
                    TickOutcome::Stale => break,
                }
            }
        }));
    }

    fn cancel_timer(&self) {
        if let Some(handle) = lock(&self.timer).take() {
            handle.abort();
        }
    }
}

impl Drop for SlideshowController {
    fn drop(&mut self) {
        self.cancel_timer();
    }
}
