// src/lib.rs
// GalleryHub - Media gallery engine for the school site
//
// Architecture:
// - Domain-centric: taxonomy, normalization, filtering and the slideshow state
//   machine are pure and live in domain/
// - Event-driven: services emit facts through the event bus
// - Explicit: collaborators (content API, file transport, share, clipboard,
//   media surface) are traits passed in, never globals
// - Degrading: no error is fatal; the view always stays navigable

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod db;
pub mod domain;
pub mod error;
pub mod events;
pub mod repositories;
pub mod services;

// ============================================================================
// APPLICATION LAYER
// ============================================================================

pub mod application;
pub mod integrations;

// ============================================================================
// PUBLIC API - Domain
// ============================================================================

pub use domain::{
    apply,
    group_by_layer,
    normalize,
    normalize_all,
    validate_gallery,
    // Taxonomy
    Category,
    // Filter
    CategoryFilter,
    FilterCriteria,
    // Gallery
    Gallery,
    Layer,
    LayerGroup,
    MediaItem,
    MediaKind,
    RawGalleryRecord,
    // Slideshow
    SlideshowState,
    SortKey,
    YearFilter,
};

// ============================================================================
// PUBLIC API - Error Types
// ============================================================================

pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Events
// ============================================================================

pub use events::{DomainEvent, EventBus};

// ============================================================================
// PUBLIC API - Services & Application
// ============================================================================

pub use application::{AppState, Collaborators, Notice, NoticeKind};
pub use config::EngineConfig;
pub use services::{
    BatchTransferEngine, FavoritesStore, GalleryCatalog, LoadOutcome, ShareOutcome, ShareService,
    SlideshowController, TransferJob, TransferReport,
};
