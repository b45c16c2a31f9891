// src/services/transfer_service.rs
//
// Batch Transfer Engine - sequential, delay-spaced download of a gallery
//
// CRITICAL RULES:
// - Items run strictly one at a time, in file order
// - Item i+1 starts only after item i's save was issued and the delay elapsed
// - One failing item never aborts the batch; it is recorded and the loop moves on
// - Single-flight per gallery: a second batch for the same gallery is refused
// - Cancellation is checked between items, never mid-item

use log::{debug, info, warn};
use serde::Serialize;
use std::collections::{HashSet, VecDeque};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use crate::domain::gallery::{Gallery, MediaKind};
use crate::error::{AppError, AppResult};
use crate::events::{
    EventBus, TransferCompleted, TransferItemCompleted, TransferItemFailed, TransferStarted,
};
use crate::integrations::FileTransport;

/// Final summary of a batch
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransferReport {
    pub gallery_id: String,
    pub total: usize,
    pub succeeded: usize,
    pub failed: usize,
    pub failed_items: Vec<String>,
    pub saved: Vec<PathBuf>,
    /// Items never attempted because the job was cancelled
    pub skipped: usize,
    pub cancelled: bool,
}

impl TransferReport {
    fn new(gallery_id: String, total: usize) -> Self {
        Self {
            gallery_id,
            total,
            succeeded: 0,
            failed: 0,
            failed_items: Vec::new(),
            saved: Vec::new(),
            skipped: 0,
            cancelled: false,
        }
    }

    pub fn is_complete_success(&self) -> bool {
        self.succeeded == self.total
    }
}

/// Cancellation handle for a running batch
#[derive(Debug, Clone, Default)]
pub struct TransferJob {
    cancelled: Arc<AtomicBool>,
}

impl TransferJob {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stop before the next item; the one in progress finishes
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Holds a gallery id in the in-flight set until dropped
struct InFlightGuard<'a> {
    in_flight: &'a Mutex<HashSet<String>>,
    gallery_id: String,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&self.gallery_id);
    }
}

pub struct BatchTransferEngine {
    transport: Arc<dyn FileTransport>,
    event_bus: Arc<EventBus>,
    delay: Duration,
    in_flight: Mutex<HashSet<String>>,
}

impl BatchTransferEngine {
    pub fn new(transport: Arc<dyn FileTransport>, event_bus: Arc<EventBus>, delay: Duration) -> Self {
        Self {
            transport,
            event_bus,
            delay,
            in_flight: Mutex::new(HashSet::new()),
        }
    }

    pub async fn download_all(&self, gallery: &Gallery) -> AppResult<TransferReport> {
        self.download_all_with(gallery, &TransferJob::new()).await
    }

    /// Download every file of `gallery`, honoring `job` cancellation
    ///
    /// The only `Err` is `TransferInProgress`; per-item failures land in the report.
    pub async fn download_all_with(
        &self,
        gallery: &Gallery,
        job: &TransferJob,
    ) -> AppResult<TransferReport> {
        let _guard = self.claim(&gallery.id)?;

        let total = gallery.files.len();
        let mut report = TransferReport::new(gallery.id.clone(), total);
        self.event_bus
            .emit(TransferStarted::new(gallery.id.clone(), total));

        let mut queue: VecDeque<(usize, &String)> = gallery.files.iter().enumerate().collect();

        while let Some((index, url)) = queue.pop_front() {
            if job.is_cancelled() {
                report.cancelled = true;
                report.skipped = queue.len() + 1;
                debug!(
                    "Transfer of {} cancelled, {} items skipped",
                    gallery.id, report.skipped
                );
                break;
            }

            let file_name = file_name_for(&gallery.title, index, url);
            let ok = match self.transfer(url, &file_name).await {
                Ok(path) => {
                    debug!("Saved {} -> {}", url, path.display());
                    report.succeeded += 1;
                    report.saved.push(path);
                    true
                }
                Err(e) => {
                    let reason = failure_reason(e);
                    warn!("Skipping {}: {}", url, reason);
                    report.failed += 1;
                    report.failed_items.push(url.clone());
                    self.event_bus.emit(TransferItemFailed::new(
                        gallery.id.clone(),
                        url.clone(),
                        reason,
                    ));
                    false
                }
            };

            self.event_bus
                .emit(TransferItemCompleted::new(gallery.id.clone(), index, total, ok));

            if !queue.is_empty() {
                tokio::time::sleep(self.delay).await;
            }
        }

        info!(
            "Transfer of {} finished: {}/{} saved, {} failed",
            gallery.id, report.succeeded, report.total, report.failed
        );
        self.event_bus.emit(TransferCompleted::new(
            gallery.id.clone(),
            report.total,
            report.succeeded,
            report.failed,
            report.cancelled,
        ));

        Ok(report)
    }

    /// Single-file download; no batching, no delay, failure is the error
    pub async fn download_one(&self, url: &str) -> AppResult<PathBuf> {
        let file_name = file_name_for("download", 0, url);
        self.transfer(url, &file_name).await
    }

    pub fn is_in_flight(&self, gallery_id: &str) -> bool {
        self.in_flight
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(gallery_id)
    }

    fn claim(&self, gallery_id: &str) -> AppResult<InFlightGuard<'_>> {
        let mut in_flight = self.in_flight.lock().unwrap_or_else(PoisonError::into_inner);
        if !in_flight.insert(gallery_id.to_string()) {
            return Err(AppError::TransferInProgress(gallery_id.to_string()));
        }
        Ok(InFlightGuard {
            in_flight: &self.in_flight,
            gallery_id: gallery_id.to_string(),
        })
    }

    async fn transfer(&self, url: &str, file_name: &str) -> AppResult<PathBuf> {
        let bytes = self.transport.fetch_bytes(url).await?;
        self.transport.save(file_name, &bytes).await
    }
}

fn failure_reason(err: AppError) -> String {
    match err {
        AppError::ItemTransferFailed { reason, .. } => reason,
        other => other.to_string(),
    }
}

/// Name to save `url` under
///
/// The last path segment when it carries an extension, otherwise
/// `<sanitized title>-<n>.<jpg|mp4>` with `n` starting at 1.
pub fn file_name_for(title: &str, index: usize, url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    let segment = path.rsplit('/').next().unwrap_or_default();

    if let Some((stem, ext)) = segment.rsplit_once('.') {
        if !stem.is_empty() && !ext.is_empty() {
            return segment.replace('\\', "_");
        }
    }

    let ext = match MediaKind::from_url(url) {
        MediaKind::Video => "mp4",
        MediaKind::Image => "jpg",
    };
    format!("{}-{}.{}", sanitize(title), index + 1, ext)
}

fn sanitize(title: &str) -> String {
    let mut out = String::with_capacity(title.len());
    for c in title.chars() {
        if c.is_alphanumeric() {
            out.extend(c.to_lowercase());
        } else if !out.ends_with('-') {
            out.push('-');
        }
    }

    let trimmed = out.trim_matches('-');
    if trimmed.is_empty() {
        "gallery".to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_name_keeps_last_segment() {
        assert_eq!(
            file_name_for("Sports Day", 0, "https://cdn.test/media/track.jpg?w=800"),
            "track.jpg"
        );
    }

    #[test]
    fn test_file_name_falls_back_to_title() {
        assert_eq!(
            file_name_for("Sports Day 2023!", 2, "https://cdn.test/media/abc123"),
            "sports-day-2023-3.jpg"
        );
        assert_eq!(file_name_for("***", 0, "https://cdn.test/"), "gallery-1.jpg");
    }

    #[test]
    fn test_dotfile_segment_is_not_an_extension() {
        assert_eq!(file_name_for("Fest", 0, "https://cdn.test/.hidden"), "fest-1.jpg");
    }

    #[test]
    fn test_job_cancel_is_shared_between_clones() {
        let job = TransferJob::new();
        let handle = job.clone();
        assert!(!job.is_cancelled());
        handle.cancel();
        assert!(job.is_cancelled());
    }
}
