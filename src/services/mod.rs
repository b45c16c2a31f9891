// src/services/mod.rs
//
// Services Module - Orchestration Layer

pub mod favorites_service;
pub mod gallery_service;
pub mod share_service;
pub mod slideshow_service;
pub mod transfer_service;


// Re-export all services and their types
pub use favorites_service::FavoritesStore;

pub use gallery_service::{
    GalleryCatalog,
    LoadOutcome,
};

pub use share_service::{
    ShareOutcome,
    ShareService,
};

pub use slideshow_service::{
    SlideshowController,
    SlideshowSnapshot,
};

pub use transfer_service::{
    file_name_for,
    BatchTransferEngine,
    TransferJob,
    TransferReport,
};
