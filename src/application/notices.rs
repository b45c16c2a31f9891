// src/application/notices.rs
//
// NoticeBoard - collects non-blocking notices raised by degraded paths
//
// Subscribes to the events that carry user-visible degradation (source
// unavailable, batch with failures) so services never talk to the view.

use std::sync::{Arc, Mutex, PoisonError};

use super::error_handling::{Notice, NoticeKind};
use crate::error::AppError;
use crate::events::{EventBus, GallerySourceUnavailable, TransferCompleted};

#[derive(Clone, Default)]
pub struct NoticeBoard {
    pending: Arc<Mutex<Vec<Notice>>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a board fed by `event_bus`
    pub fn attach(event_bus: &EventBus) -> Self {
        let board = Self::new();

        let sink = board.clone();
        event_bus.subscribe::<GallerySourceUnavailable, _>(move |event| {
            sink.push(Notice::from_app_error(&AppError::SourceUnavailable(
                event.reason.clone(),
            )));
        });

        let sink = board.clone();
        event_bus.subscribe::<TransferCompleted, _>(move |event| {
            if event.failed > 0 {
                sink.push(
                    Notice::new(
                        NoticeKind::TransferFailed,
                        format!(
                            "{} of {} files could not be downloaded",
                            event.failed, event.total
                        ),
                    )
                    .retryable(),
                );
            }
        });

        board
    }

    pub fn push(&self, notice: Notice) {
        self.lock().push(notice);
    }

    /// Take every pending notice, oldest first
    pub fn drain(&self) -> Vec<Notice> {
        std::mem::take(&mut *self.lock())
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_collects_degradation_events() {
        let bus = EventBus::new();
        let board = NoticeBoard::attach(&bus);

        bus.emit(GallerySourceUnavailable::new("timeout".to_string()));
        bus.emit(TransferCompleted::new("1".to_string(), 3, 3, 0, false));
        bus.emit(TransferCompleted::new("1".to_string(), 3, 2, 1, false));

        let notices = board.drain();
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].kind, NoticeKind::SourceUnavailable);
        assert_eq!(notices[1].message, "1 of 3 files could not be downloaded");
        assert!(board.is_empty());
    }
}
