// src/application/error_handling.rs
//
// Error -> user notice mapping
//
// ARCHITECTURE:
// - Nothing is fatal: every error becomes a dismissible notice
// - Internal details are logged, not shown
// - `retryable` tells the view whether to offer a retry action

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Notice categories for the view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeKind {
    /// Gallery or file not found
    NotFound,

    /// Gallery list could not be loaded
    SourceUnavailable,

    /// One or more files failed to download
    TransferFailed,

    /// A batch is already running for this gallery
    TransferBusy,

    /// Sharing or copying failed
    ShareFailed,

    /// Local persistence problem
    Storage,

    Configuration,

    Internal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
    pub details: Option<String>,
    pub retryable: bool,
}

impl Notice {
    pub fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            details: None,
            retryable: false,
        }
    }

    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }

    /// Build the notice for an error
    pub fn from_app_error(error: &AppError) -> Self {
        match error {
            AppError::NotFound => Self::new(NoticeKind::NotFound, "Gallery not found"),

            AppError::SourceUnavailable(reason) => {
                Self::new(NoticeKind::SourceUnavailable, "Galleries could not be loaded")
                    .with_details(reason.clone())
                    .retryable()
            }

            AppError::Http(e) => {
                Self::new(NoticeKind::SourceUnavailable, "Network request failed")
                    .with_details(e.to_string())
                    .retryable()
            }

            AppError::ItemTransferFailed { url, reason } => {
                Self::new(NoticeKind::TransferFailed, "File could not be downloaded")
                    .with_details(format!("{}: {}", url, reason))
                    .retryable()
            }

            AppError::TransferInProgress(_) => Self::new(
                NoticeKind::TransferBusy,
                "A download is already running for this gallery",
            ),

            AppError::ShareUnavailable => {
                Self::new(NoticeKind::ShareFailed, "Sharing is not available")
            }

            AppError::ClipboardUnavailable(reason) => {
                Self::new(NoticeKind::ShareFailed, "Link could not be copied")
                    .with_details(reason.clone())
                    .retryable()
            }

            AppError::Database(e) => {
                error!("Database error: {:?}", e);
                Self::new(NoticeKind::Storage, "Saved data could not be updated")
                    .with_details("Check logs for details")
                    .retryable()
            }

            AppError::Pool(e) => {
                error!("Connection pool error: {}", e);
                Self::new(NoticeKind::Storage, "Saved data could not be reached").retryable()
            }

            AppError::Io(e) => {
                error!("IO error: {:?}", e);
                Self::new(NoticeKind::Storage, "File system operation failed")
                    .with_details(e.to_string())
            }

            AppError::Config(reason) => {
                Self::new(NoticeKind::Configuration, "Invalid configuration")
                    .with_details(reason.clone())
            }

            AppError::Domain(e) => {
                error!("Domain error: {}", e);
                Self::new(NoticeKind::Internal, "Gallery data is inconsistent")
                    .with_details(e.to_string())
            }

            AppError::Serialization(e) => {
                error!("Serialization error: {:?}", e);
                Self::new(NoticeKind::Internal, "Data serialization failed")
            }

            AppError::Other(message) => {
                error!("Other error: {}", message);
                Self::new(NoticeKind::Internal, message.clone())
            }
        }
    }
}

/// Helper trait to convert Results into serialized notices at the command boundary
pub trait ToNotice<T> {
    fn to_notice(self) -> Result<T, String>;
}

impl<T> ToNotice<T> for Result<T, AppError> {
    fn to_notice(self) -> Result<T, String> {
        self.map_err(|e| {
            let notice = Notice::from_app_error(&e);
            serde_json::to_string(&notice).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_notice() {
        let notice = Notice::from_app_error(&AppError::NotFound);
        assert_eq!(notice.kind, NoticeKind::NotFound);
        assert!(!notice.retryable);
    }

    #[test]
    fn test_source_unavailable_is_retryable() {
        let notice = Notice::from_app_error(&AppError::SourceUnavailable("timeout".to_string()));
        assert_eq!(notice.kind, NoticeKind::SourceUnavailable);
        assert_eq!(notice.details.as_deref(), Some("timeout"));
        assert!(notice.retryable);
    }

    #[test]
    fn test_item_failure_names_the_file() {
        let err = AppError::transfer_failed("https://cdn.test/b.jpg", "status 500");
        let notice = Notice::from_app_error(&err);
        assert_eq!(notice.kind, NoticeKind::TransferFailed);
        assert_eq!(
            notice.details.as_deref(),
            Some("https://cdn.test/b.jpg: status 500")
        );
    }

    #[test]
    fn test_to_notice_serializes() {
        let result: Result<(), AppError> = Err(AppError::TransferInProgress("7".to_string()));
        let json = result.to_notice().unwrap_err();
        assert!(json.contains("transfer_busy"));
    }
}
