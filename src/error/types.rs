// src/error/types.rs
use crate::domain::DomainError;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Pool error: {0}")]
    Pool(String),

    #[error("Domain error: {0}")]
    Domain(#[from] DomainError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Resource not found")]
    NotFound,

    /// Gallery list could not be fetched from the content API
    #[error("Gallery source unavailable: {0}")]
    SourceUnavailable(String),

    /// A single file of a transfer failed
    #[error("Transfer of {url} failed: {reason}")]
    ItemTransferFailed { url: String, reason: String },

    #[error("A transfer is already running for gallery {0}")]
    TransferInProgress(String),

    #[error("Native sharing is not available")]
    ShareUnavailable,

    #[error("Clipboard unavailable: {0}")]
    ClipboardUnavailable(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl AppError {
    pub fn transfer_failed(url: &str, reason: impl Into<String>) -> Self {
        AppError::ItemTransferFailed {
            url: url.to_string(),
            reason: reason.into(),
        }
    }
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl From<r2d2::Error> for AppError {
    fn from(err: r2d2::Error) -> Self {
        AppError::Pool(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
