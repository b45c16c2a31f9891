// src/services/favorites_service.rs
//
// Favorites Store - persisted set of gallery ids
//
// RULES:
// - Write-through: every toggle is committed before it returns
// - Startup never fails: a missing or corrupt stored value means an empty set
// - Memory never diverges from durable state (a failed save is rolled back)
// - Passed explicitly (Arc) to whoever needs it; no ambient global

use log::{debug, warn};
use std::collections::BTreeSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::AppResult;
use crate::events::{EventBus, FavoriteToggled};
use crate::repositories::FavoritesRepository;

pub struct FavoritesStore {
    repo: Arc<dyn FavoritesRepository>,
    event_bus: Arc<EventBus>,
    ids: RwLock<BTreeSet<String>>,
}

impl FavoritesStore {
    /// Load the persisted set, degrading to empty on any read problem
    pub fn load(repo: Arc<dyn FavoritesRepository>, event_bus: Arc<EventBus>) -> Self {
        let ids = match repo.load_favorites() {
            Ok(Some(ids)) => {
                debug!("Loaded {} favorites", ids.len());
                ids
            }
            Ok(None) => BTreeSet::new(),
            Err(e) => {
                warn!("Favorites unreadable, starting empty: {}", e);
                BTreeSet::new()
            }
        };

        Self {
            repo,
            event_bus,
            ids: RwLock::new(ids),
        }
    }

    /// Flip membership of `id`; returns whether it is now a favorite
    pub fn toggle(&self, id: &str) -> AppResult<bool> {
        let is_favorite = {
            let mut ids = self.ids.write().unwrap_or_else(PoisonError::into_inner);

            let mut next = ids.clone();
            let is_favorite = if next.remove(id) {
                false
            } else {
                next.insert(id.to_string());
                true
            };

            // Commit to memory only once the write succeeded
            self.repo.save_favorites(&next)?;
            *ids = next;
            is_favorite
        };

        self.event_bus
            .emit(FavoriteToggled::new(id.to_string(), is_favorite));
        Ok(is_favorite)
    }

    pub fn has(&self, id: &str) -> bool {
        self.ids
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains(id)
    }

    pub fn all(&self) -> BTreeSet<String> {
        self.ids.read().unwrap_or_else(PoisonError::into_inner).clone()
    }

    pub fn len(&self) -> usize {
        self.ids.read().unwrap_or_else(PoisonError::into_inner).len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
