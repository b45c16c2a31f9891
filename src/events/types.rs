// src/events/types.rs
//
// All domain events in the system.
// Each event represents an immutable fact that has already occurred.
//
// CRITICAL RULES:
// - Events are facts, not commands
// - Events are immutable
// - Events carry only the data needed to react

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Trait that all domain events must implement
pub trait DomainEvent: std::fmt::Debug + Clone {
    /// Unique identifier for this event instance
    fn event_id(&self) -> Uuid;

    /// When this event occurred
    fn occurred_at(&self) -> DateTime<Utc>;

    /// Human-readable event type name
    fn event_type(&self) -> &'static str;
}

// ============================================================================
// CATALOG EVENTS
// ============================================================================

/// Emitted after a successful fetch + normalization
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleriesLoaded {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub count: usize,
}

impl GalleriesLoaded {
    pub fn new(count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            count,
        }
    }
}

impl DomainEvent for GalleriesLoaded {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "GalleriesLoaded" }
}

/// Emitted when the content API could not be reached; the catalog is now empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GallerySourceUnavailable {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub reason: String,
}

impl GallerySourceUnavailable {
    pub fn new(reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            reason,
        }
    }
}

impl DomainEvent for GallerySourceUnavailable {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "GallerySourceUnavailable" }
}

// ============================================================================
// FAVORITES EVENTS
// ============================================================================

/// Emitted after a toggle has been persisted
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoriteToggled {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub is_favorite: bool,
}

impl FavoriteToggled {
    pub fn new(gallery_id: String, is_favorite: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            is_favorite,
        }
    }
}

impl DomainEvent for FavoriteToggled {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "FavoriteToggled" }
}

// ============================================================================
// SLIDESHOW EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowOpened {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub start_index: usize,
    pub file_count: usize,
}

impl SlideshowOpened {
    pub fn new(gallery_id: String, start_index: usize, file_count: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            start_index,
            file_count,
        }
    }
}

impl DomainEvent for SlideshowOpened {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SlideshowOpened" }
}

/// Emitted for every index change, manual or timer-driven
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideChanged {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub from_index: usize,
    pub to_index: usize,
    pub cause: String, // "next", "prev", "jump", "timer"
}

impl SlideChanged {
    pub fn new(gallery_id: String, from_index: usize, to_index: usize, cause: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            from_index,
            to_index,
            cause,
        }
    }
}

impl DomainEvent for SlideChanged {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SlideChanged" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlideshowClosed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub last_index: usize,
}

impl SlideshowClosed {
    pub fn new(gallery_id: String, last_index: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            last_index,
        }
    }
}

impl DomainEvent for SlideshowClosed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "SlideshowClosed" }
}

// ============================================================================
// TRANSFER EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferStarted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub total: usize,
}

impl TransferStarted {
    pub fn new(gallery_id: String, total: usize) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            total,
        }
    }
}

impl DomainEvent for TransferStarted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TransferStarted" }
}

/// Progress tick, emitted after each attempted item
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferItemCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub index: usize,
    pub total: usize,
    pub ok: bool,
}

impl TransferItemCompleted {
    pub fn new(gallery_id: String, index: usize, total: usize, ok: bool) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            index,
            total,
            ok,
        }
    }
}

impl DomainEvent for TransferItemCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TransferItemCompleted" }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferItemFailed {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub url: String,
    pub reason: String,
}

impl TransferItemFailed {
    pub fn new(gallery_id: String, url: String, reason: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            url,
            reason,
        }
    }
}

impl DomainEvent for TransferItemFailed {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TransferItemFailed" }
}

/// Emitted once per batch, after every item was attempted or the job was cancelled
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferCompleted {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub cancelled: bool,
}

impl TransferCompleted {
    pub fn new(
        gallery_id: String,
        total: usize,
        succeeded: usize,
        failed: usize,
        cancelled: bool,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            total,
            succeeded,
            failed,
            cancelled,
        }
    }
}

impl DomainEvent for TransferCompleted {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "TransferCompleted" }
}

// ============================================================================
// SHARE EVENTS
// ============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GalleryShared {
    pub event_id: Uuid,
    pub occurred_at: DateTime<Utc>,
    pub gallery_id: String,
    pub channel: String, // "native" or "clipboard"
}

impl GalleryShared {
    pub fn new(gallery_id: String, channel: String) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
            gallery_id,
            channel,
        }
    }
}

impl DomainEvent for GalleryShared {
    fn event_id(&self) -> Uuid { self.event_id }
    fn occurred_at(&self) -> DateTime<Utc> { self.occurred_at }
    fn event_type(&self) -> &'static str { "GalleryShared" }
}
