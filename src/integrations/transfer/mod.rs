pub mod http;

use async_trait::async_trait;
use std::path::PathBuf;

use crate::error::AppResult;

pub use http::HttpFileTransport;

/// Fetch-then-save primitive keyed by URL
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FileTransport: Send + Sync {
    /// Fetch the bytes behind `url`; network errors and non-2xx statuses are `Err`
    async fn fetch_bytes(&self, url: &str) -> AppResult<Vec<u8>>;

    /// Trigger the save of `bytes` under `file_name`; returns where it landed
    async fn save(&self, file_name: &str, bytes: &[u8]) -> AppResult<PathBuf>;
}
