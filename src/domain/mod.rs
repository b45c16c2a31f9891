// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Everything under domain/ is pure: no I/O, no clocks except where an
// explicit instant is passed in, no shared state.

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod filter;
pub mod gallery;
pub mod slideshow;
pub mod taxonomy;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Taxonomy
pub use taxonomy::{Category, Layer, UNCATEGORIZED};

// Gallery
pub use gallery::{
    normalize, normalize_all, validate_gallery, Gallery, MediaKind, RawGalleryRecord,
};

// Filter/Sort Pipeline
pub use filter::{
    apply, available_years, group_by_layer, CategoryFilter, FilterCriteria, LayerGroup, SortKey,
    YearFilter,
};

// Slideshow
pub use slideshow::{AdvanceCause, MediaItem, SlideChange, SlideshowSession, SlideshowState};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
