pub mod client;

use async_trait::async_trait;

use crate::domain::RawGalleryRecord;
use crate::error::AppResult;

pub use client::ContentApiClient;

/// The only inbound boundary of the engine
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GallerySource: Send + Sync {
    async fn fetch_galleries(&self) -> AppResult<Vec<RawGalleryRecord>>;
}
