// src/integrations/transfer/http.rs
//
// HTTP byte fetch + save into the download directory

use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::FileTransport;
use crate::error::{AppError, AppResult};

pub struct HttpFileTransport {
    http_client: Client,
    download_dir: PathBuf,
}

impl HttpFileTransport {
    pub fn new(download_dir: PathBuf, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http_client,
            download_dir,
        })
    }
}

/// First free path for `file_name`: `name.ext`, `name (1).ext`, `name (2).ext`, ...
async fn unique_path(dir: &Path, file_name: &str) -> PathBuf {
    let candidate = dir.join(file_name);
    if !tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
        return candidate;
    }

    let (stem, ext) = match file_name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, Some(ext)),
        _ => (file_name, None),
    };

    let mut n = 1;
    loop {
        let name = match ext {
            Some(ext) => format!("{} ({}).{}", stem, n, ext),
            None => format!("{} ({})", stem, n),
        };
        let candidate = dir.join(name);
        if !tokio::fs::try_exists(&candidate).await.unwrap_or(false) {
            return candidate;
        }
        n += 1;
    }
}

#[async_trait]
impl FileTransport for HttpFileTransport {
    async fn fetch_bytes(&self, url: &str) -> AppResult<Vec<u8>> {
        let response = self
            .http_client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::transfer_failed(url, e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::transfer_failed(url, format!("status {}", status)));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::transfer_failed(url, e.to_string()))?;

        debug!("Fetched {} bytes from {}", bytes.len(), url);
        Ok(bytes.to_vec())
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> AppResult<PathBuf> {
        tokio::fs::create_dir_all(&self.download_dir).await?;
        let path = unique_path(&self.download_dir, file_name).await;
        tokio::fs::write(&path, bytes).await?;
        debug!("Saved {}", path.display());
        Ok(path)
    }
}
