// src/application/commands/transfer_commands.rs

use crate::application::dto::TransferReportDto;
use crate::application::error_handling::ToNotice;
use crate::application::state::AppState;
use crate::error::AppError;
use crate::services::ShareOutcome;

pub async fn download_gallery(state: &AppState, gallery_id: &str) -> Result<TransferReportDto, String> {
    let gallery = state.catalog.find(gallery_id).ok_or(AppError::NotFound).to_notice()?;
    state
        .transfers
        .download_all(&gallery)
        .await
        .map(TransferReportDto::from)
        .to_notice()
}

pub async fn download_file(state: &AppState, url: &str) -> Result<String, String> {
    let path = state.transfers.download_one(url).await.to_notice()?;
    Ok(path.to_string_lossy().to_string())
}

/// Returns the channel used: "native", "clipboard", or "native_failed"
pub async fn share_gallery(state: &AppState, gallery_id: &str) -> Result<String, String> {
    let gallery = state.catalog.find(gallery_id).ok_or(AppError::NotFound).to_notice()?;
    let outcome = state.sharing.share_gallery(&gallery).await.to_notice()?;
    Ok(channel(&outcome).to_string())
}

pub async fn share_file(state: &AppState, gallery_id: &str, index: usize) -> Result<String, String> {
    let gallery = state.catalog.find(gallery_id).ok_or(AppError::NotFound).to_notice()?;
    let outcome = state.sharing.share_file(&gallery, index).await.to_notice()?;
    Ok(channel(&outcome).to_string())
}

pub async fn copy_gallery_link(state: &AppState, gallery_id: &str) -> Result<(), String> {
    let gallery = state.catalog.find(gallery_id).ok_or(AppError::NotFound).to_notice()?;
    state.sharing.copy_link(&gallery).await.to_notice()
}

fn channel(outcome: &ShareOutcome) -> &'static str {
    match outcome {
        ShareOutcome::Native => "native",
        ShareOutcome::NativeFailed(_) => "native_failed",
        ShareOutcome::Clipboard => "clipboard",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::commands::refresh_galleries;
    use crate::application::state::test_support::state;

    #[tokio::test(start_paused = true)]
    async fn test_download_gallery_reports_every_file() {
        let state = state();
        refresh_galleries(&state).await.unwrap();

        let report = download_gallery(&state, "1").await.unwrap();
        assert_eq!((report.total, report.succeeded, report.failed), (2, 2, 0));
        assert_eq!(report.saved, vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert!(state.notices.is_empty());
    }

    #[tokio::test]
    async fn test_share_without_native_uses_clipboard() {
        let state = state();
        refresh_galleries(&state).await.unwrap();

        assert_eq!(share_gallery(&state, "1").await.unwrap(), "clipboard");
        assert!(share_file(&state, "1", 9).await.is_err());
        copy_gallery_link(&state, "1").await.unwrap();
        assert_eq!(state.event_bus.emitted_count("GalleryShared"), 2);
    }
}
