pub mod desktop;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::AppResult;

pub use desktop::{ArboardClipboard, UnavailableShareSurface};

/// A reference to share: what the native sheet shows, or what lands in the clipboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SharePayload {
    pub title: String,
    pub text: String,
    pub url: String,
}

impl SharePayload {
    /// Single-line clipboard form
    pub fn clipboard_text(&self) -> String {
        if self.text.is_empty() {
            self.url.clone()
        } else {
            format!("{} - {}", self.text, self.url)
        }
    }
}

/// Native share sheet; may be unavailable on the host
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ShareSurface: Send + Sync {
    fn is_available(&self) -> bool;

    async fn share(&self, payload: &SharePayload) -> AppResult<()>;
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Clipboard: Send + Sync {
    async fn write_text(&self, text: &str) -> AppResult<()>;
}
