pub mod entity;
pub mod invariants;
pub mod normalizer;

pub use entity::{Gallery, MediaKind, DEFAULT_DESCRIPTION, DEFAULT_TITLE};
pub use invariants::validate_gallery;
pub use normalizer::{normalize, normalize_all, normalize_at, RawGalleryRecord};
