// src/services/gallery_service.rs
//
// Gallery Catalog - fetch, normalize once, serve filtered views
//
// RULES:
// - Normalization runs once per fetch, never per view
// - A failed fetch leaves an empty but functional catalog
// - Views are computed by the pure pipeline on a snapshot

use chrono::Utc;
use log::{info, warn};
use std::sync::{Arc, PoisonError, RwLock};

use crate::domain::filter::{apply, available_years, group_by_layer, FilterCriteria, LayerGroup};
use crate::domain::gallery::{normalize_all, validate_gallery, Gallery};
use crate::events::{EventBus, GalleriesLoaded, GallerySourceUnavailable};
use crate::integrations::GallerySource;
use crate::services::FavoritesStore;

/// Result of a refresh
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    Loaded(usize),
    /// The catalog is now empty; the caller may retry
    Unavailable(String),
}

pub struct GalleryCatalog {
    source: Arc<dyn GallerySource>,
    event_bus: Arc<EventBus>,
    galleries: RwLock<Arc<Vec<Gallery>>>,
}

impl GalleryCatalog {
    pub fn new(source: Arc<dyn GallerySource>, event_bus: Arc<EventBus>) -> Self {
        Self {
            source,
            event_bus,
            galleries: RwLock::new(Arc::new(Vec::new())),
        }
    }

    /// Fetch and normalize the full gallery list
    pub async fn refresh(&self) -> LoadOutcome {
        match self.source.fetch_galleries().await {
            Ok(records) => {
                let galleries: Vec<Gallery> = normalize_all(&records, Utc::now())
                    .into_iter()
                    .filter(|g| match validate_gallery(g) {
                        Ok(()) => true,
                        Err(e) => {
                            warn!("Dropping gallery {}: {}", g.id, e);
                            false
                        }
                    })
                    .collect();

                let count = galleries.len();
                self.replace(galleries);
                info!("Loaded {} galleries", count);
                self.event_bus.emit(GalleriesLoaded::new(count));
                LoadOutcome::Loaded(count)
            }
            Err(e) => {
                let reason = e.to_string();
                warn!("Gallery source unavailable: {}", reason);
                self.replace(Vec::new());
                self.event_bus
                    .emit(GallerySourceUnavailable::new(reason.clone()));
                LoadOutcome::Unavailable(reason)
            }
        }
    }

    fn replace(&self, galleries: Vec<Gallery>) {
        *self.galleries.write().unwrap_or_else(PoisonError::into_inner) = Arc::new(galleries);
    }

    /// Snapshot of every normalized gallery, in source order
    pub fn all(&self) -> Arc<Vec<Gallery>> {
        Arc::clone(&self.galleries.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn len(&self) -> usize {
        self.all().len()
    }

    pub fn is_empty(&self) -> bool {
        self.all().is_empty()
    }

    pub fn find(&self, id: &str) -> Option<Gallery> {
        self.all().iter().find(|g| g.id == id).cloned()
    }

    pub fn view(&self, criteria: &FilterCriteria) -> Vec<Gallery> {
        apply(&self.all(), criteria)
    }

    /// Grouped-by-theme view; `None` when the criteria do not allow grouping
    pub fn grouped(&self, criteria: &FilterCriteria) -> Option<Vec<LayerGroup>> {
        group_by_layer(&self.view(criteria), criteria)
    }

    /// Pipeline output restricted to favorited galleries
    pub fn favorites(&self, store: &FavoritesStore, criteria: &FilterCriteria) -> Vec<Gallery> {
        let ids = store.all();
        self.view(criteria)
            .into_iter()
            .filter(|g| ids.contains(&g.id))
            .collect()
    }

    pub fn years(&self) -> Vec<i32> {
        available_years(&self.all())
    }
}
