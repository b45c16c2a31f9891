// src/services/share_service.rs
//
// Share a gallery or a single file as a reference (link + text)
//
// RULES:
// - The channel is chosen once per call: native when offered, else clipboard
// - A native share that fails after being chosen is reported, not retried
// - Clipboard failure is the only error of the share path

use log::{debug, warn};
use reqwest::Url;
use std::sync::Arc;

use crate::domain::gallery::Gallery;
use crate::error::{AppError, AppResult};
use crate::events::{EventBus, GalleryShared};
use crate::integrations::{Clipboard, SharePayload, ShareSurface};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShareOutcome {
    /// Handed to the native share sheet
    Native,
    /// Native sharing was chosen but failed; nothing was copied
    NativeFailed(String),
    /// Copied to the clipboard
    Clipboard,
}

pub struct ShareService {
    surface: Arc<dyn ShareSurface>,
    clipboard: Arc<dyn Clipboard>,
    event_bus: Arc<EventBus>,
    base_url: String,
}

impl ShareService {
    pub fn new(
        surface: Arc<dyn ShareSurface>,
        clipboard: Arc<dyn Clipboard>,
        event_bus: Arc<EventBus>,
        base_url: String,
    ) -> Self {
        Self {
            surface,
            clipboard,
            event_bus,
            base_url,
        }
    }

    /// `<base_url>?id=<gallery id>`, appended to any query already present
    pub fn gallery_link(&self, gallery_id: &str) -> String {
        match Url::parse(&self.base_url) {
            Ok(mut url) => {
                url.query_pairs_mut().append_pair("id", gallery_id);
                url.to_string()
            }
            Err(_) => {
                let sep = if self.base_url.contains('?') { '&' } else { '?' };
                format!("{}{}id={}", self.base_url, sep, gallery_id)
            }
        }
    }

    pub fn payload_for_gallery(&self, gallery: &Gallery) -> SharePayload {
        SharePayload {
            title: gallery.title.clone(),
            text: gallery.description.clone(),
            url: self.gallery_link(&gallery.id),
        }
    }

    /// Payload pointing straight at one file; `None` for an out-of-range index
    pub fn payload_for_file(&self, gallery: &Gallery, index: usize) -> Option<SharePayload> {
        let url = gallery.files.get(index)?;
        Some(SharePayload {
            title: format!("{} ({}/{})", gallery.title, index + 1, gallery.files.len()),
            text: gallery.title.clone(),
            url: url.clone(),
        })
    }

    pub async fn share_gallery(&self, gallery: &Gallery) -> AppResult<ShareOutcome> {
        let payload = self.payload_for_gallery(gallery);
        self.share(&gallery.id, &payload).await
    }

    pub async fn share_file(&self, gallery: &Gallery, index: usize) -> AppResult<ShareOutcome> {
        let payload = self.payload_for_file(gallery, index).ok_or(AppError::NotFound)?;
        self.share(&gallery.id, &payload).await
    }

    /// Clipboard only, regardless of native availability
    pub async fn copy_link(&self, gallery: &Gallery) -> AppResult<()> {
        let link = self.gallery_link(&gallery.id);
        self.write_clipboard(&link).await?;
        self.event_bus
            .emit(GalleryShared::new(gallery.id.clone(), "clipboard".to_string()));
        Ok(())
    }

    async fn share(&self, gallery_id: &str, payload: &SharePayload) -> AppResult<ShareOutcome> {
        if self.surface.is_available() {
            return match self.surface.share(payload).await {
                Ok(()) => {
                    debug!("Shared {} natively", gallery_id);
                    self.event_bus
                        .emit(GalleryShared::new(gallery_id.to_string(), "native".to_string()));
                    Ok(ShareOutcome::Native)
                }
                Err(e) => {
                    warn!("Native share of {} failed: {}", gallery_id, e);
                    Ok(ShareOutcome::NativeFailed(e.to_string()))
                }
            };
        }

        warn!("Native share unavailable, copying {} to clipboard", gallery_id);
        self.write_clipboard(&payload.clipboard_text()).await?;
        self.event_bus
            .emit(GalleryShared::new(gallery_id.to_string(), "clipboard".to_string()));
        Ok(ShareOutcome::Clipboard)
    }

    async fn write_clipboard(&self, text: &str) -> AppResult<()> {
        self.clipboard.write_text(text).await.map_err(|e| match e {
            AppError::ClipboardUnavailable(_) => e,
            other => AppError::ClipboardUnavailable(other.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::share::{MockClipboard, MockShareSurface};
    use chrono::Utc;

    fn gallery() -> Gallery {
        Gallery::new(
            "42".to_string(),
            "GRADUATION".to_string(),
            "Graduation 2024".to_string(),
            "Class of 2024".to_string(),
            vec![
                "https://cdn.test/cap.jpg".to_string(),
                "https://cdn.test/speech.mp4".to_string(),
            ],
            Utc::now(),
        )
    }

    fn service(surface: MockShareSurface, clipboard: MockClipboard) -> (ShareService, Arc<EventBus>) {
        let bus = Arc::new(EventBus::new());
        let service = ShareService::new(
            Arc::new(surface),
            Arc::new(clipboard),
            bus.clone(),
            "https://school.test/gallery".to_string(),
        );
        (service, bus)
    }

    fn unavailable_surface() -> MockShareSurface {
        let mut surface = MockShareSurface::new();
        surface.expect_is_available().return_const(false);
        surface.expect_share().never();
        surface
    }

    #[test]
    fn test_gallery_link() {
        let (service, _) = service(MockShareSurface::new(), MockClipboard::new());
        assert_eq!(service.gallery_link("42"), "https://school.test/gallery?id=42");

        let with_query = ShareService::new(
            Arc::new(MockShareSurface::new()),
            Arc::new(MockClipboard::new()),
            Arc::new(EventBus::new()),
            "https://school.test/gallery?lang=en".to_string(),
        );
        assert_eq!(
            with_query.gallery_link("a b"),
            "https://school.test/gallery?lang=en&id=a+b"
        );
    }

    #[tokio::test]
    async fn test_native_share_when_available() {
        let mut surface = MockShareSurface::new();
        surface.expect_is_available().return_const(true);
        surface
            .expect_share()
            .withf(|p| p.url == "https://school.test/gallery?id=42" && p.title == "Graduation 2024")
            .times(1)
            .returning(|_| Ok(()));
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();

        let (service, bus) = service(surface, clipboard);
        let outcome = service.share_gallery(&gallery()).await.unwrap();

        assert_eq!(outcome, ShareOutcome::Native);
        assert_eq!(bus.emitted_count("GalleryShared"), 1);
    }

    #[tokio::test]
    async fn test_falls_back_to_clipboard_when_unavailable() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "Class of 2024 - https://school.test/gallery?id=42")
            .times(1)
            .returning(|_| Ok(()));

        let (service, _) = service(unavailable_surface(), clipboard);
        let outcome = service.share_gallery(&gallery()).await.unwrap();
        assert_eq!(outcome, ShareOutcome::Clipboard);
    }

    #[tokio::test]
    async fn test_native_failure_is_not_retried_on_clipboard() {
        let mut surface = MockShareSurface::new();
        surface.expect_is_available().return_const(true);
        surface
            .expect_share()
            .times(1)
            .returning(|_| Err(AppError::Other("dismissed".to_string())));
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().never();

        let (service, bus) = service(surface, clipboard);
        let outcome = service.share_gallery(&gallery()).await.unwrap();

        assert!(matches!(outcome, ShareOutcome::NativeFailed(_)));
        assert_eq!(bus.emitted_count("GalleryShared"), 0);
    }

    #[tokio::test]
    async fn test_clipboard_failure_is_the_error() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .returning(|_| Err(AppError::Other("no display".to_string())));

        let (service, _) = service(unavailable_surface(), clipboard);
        let err = service.share_gallery(&gallery()).await.unwrap_err();
        assert!(matches!(err, AppError::ClipboardUnavailable(_)));
    }

    #[tokio::test]
    async fn test_share_file_uses_file_url() {
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "Graduation 2024 - https://cdn.test/speech.mp4")
            .times(1)
            .returning(|_| Ok(()));

        let (service, _) = service(unavailable_surface(), clipboard);
        let g = gallery();
        assert_eq!(service.share_file(&g, 1).await.unwrap(), ShareOutcome::Clipboard);
        assert!(matches!(service.share_file(&g, 5).await, Err(AppError::NotFound)));
    }

    #[tokio::test]
    async fn test_copy_link_skips_native_surface() {
        let mut surface = MockShareSurface::new();
        surface.expect_is_available().never();
        let mut clipboard = MockClipboard::new();
        clipboard
            .expect_write_text()
            .withf(|text| text == "https://school.test/gallery?id=42")
            .times(1)
            .returning(|_| Ok(()));

        let (service, _) = service(surface, clipboard);
        service.copy_link(&gallery()).await.unwrap();
    }
}
