// src/integrations/content_api/client.rs
//
// Content API client
//
// CRITICAL RULES:
// - This is INFRASTRUCTURE, not DOMAIN
// - Returns raw records; normalization happens in the domain
// - Every failure is reported as AppError::SourceUnavailable

use async_trait::async_trait;
use log::debug;
use reqwest::{header, Client};
use serde::Deserialize;
use std::time::Duration;

use super::GallerySource;
use crate::domain::RawGalleryRecord;
use crate::error::{AppError, AppResult};

/// Accepted response shapes: a bare array or an envelope
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GalleryListResponse {
    List(Vec<RawGalleryRecord>),
    Envelope {
        #[serde(alias = "data", alias = "items")]
        galleries: Vec<RawGalleryRecord>,
    },
}

impl GalleryListResponse {
    fn into_records(self) -> Vec<RawGalleryRecord> {
        match self {
            GalleryListResponse::List(records) => records,
            GalleryListResponse::Envelope { galleries } => galleries,
        }
    }
}

pub struct ContentApiClient {
    base_url: String,
    http_client: Client,
}

impl ContentApiClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> AppResult<Self> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| AppError::Other(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            base_url: base_url.into(),
            http_client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn parse_body(body: &str) -> AppResult<Vec<RawGalleryRecord>> {
        serde_json::from_str::<GalleryListResponse>(body)
            .map(GalleryListResponse::into_records)
            .map_err(|e| AppError::SourceUnavailable(format!("Unreadable gallery list: {}", e)))
    }
}

#[async_trait]
impl GallerySource for ContentApiClient {
    async fn fetch_galleries(&self) -> AppResult<Vec<RawGalleryRecord>> {
        debug!("Fetching galleries from {}", self.base_url);

        let response = self
            .http_client
            .get(&self.base_url)
            .header(header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("Request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(AppError::SourceUnavailable(format!(
                "Content API returned status: {}",
                response.status()
            )));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::SourceUnavailable(format!("Failed to read body: {}", e)))?;

        Self::parse_body(&body)
    }
}
