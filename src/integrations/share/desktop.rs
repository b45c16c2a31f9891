// src/integrations/share/desktop.rs
//
// Desktop share and clipboard primitives
//
// There is no native share sheet on the desktop targets, so the share path
// always resolves to the system clipboard.

use async_trait::async_trait;
use log::debug;

use super::{Clipboard, SharePayload, ShareSurface};
use crate::error::{AppError, AppResult};

/// Share surface that is never available
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableShareSurface;

#[async_trait]
impl ShareSurface for UnavailableShareSurface {
    fn is_available(&self) -> bool {
        false
    }

    async fn share(&self, _payload: &SharePayload) -> AppResult<()> {
        Err(AppError::ShareUnavailable)
    }
}

/// System clipboard through `arboard`
///
/// A fresh handle is opened per write on the blocking pool; some platforms
/// tie the handle to the thread that created it.
#[derive(Debug, Default, Clone, Copy)]
pub struct ArboardClipboard;

impl ArboardClipboard {
    pub fn new() -> Self {
        Self
    }
}

fn clipboard_error(err: arboard::Error) -> AppError {
    AppError::ClipboardUnavailable(err.to_string())
}

#[async_trait]
impl Clipboard for ArboardClipboard {
    async fn write_text(&self, text: &str) -> AppResult<()> {
        let text = text.to_string();
        let len = text.len();

        tokio::task::spawn_blocking(move || {
            let mut clipboard = arboard::Clipboard::new().map_err(clipboard_error)?;
            clipboard.set_text(text).map_err(clipboard_error)
        })
        .await
        .map_err(|e| AppError::ClipboardUnavailable(e.to_string()))??;

        debug!("Copied {} chars to the clipboard", len);
        Ok(())
    }
}
