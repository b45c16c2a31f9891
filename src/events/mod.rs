// src/events/mod.rs
//
// Internal Event System - Public API
//
// Services emit facts here; the view layer and the notice board subscribe.

pub mod bus;
pub mod types;

pub use types::DomainEvent;

pub use types::{
    // Catalog
    GalleriesLoaded,
    GallerySourceUnavailable,
    // Favorites
    FavoriteToggled,
    // Slideshow
    SlideChanged,
    SlideshowClosed,
    SlideshowOpened,
    // Transfer
    TransferCompleted,
    TransferItemCompleted,
    TransferItemFailed,
    TransferStarted,
    // Share
    GalleryShared,
};

pub use bus::{EventBus, EventLogEntry};
