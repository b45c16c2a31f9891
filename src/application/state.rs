// src/application/state.rs

use log::info;
use std::sync::Arc;

use super::notices::NoticeBoard;
use crate::config::EngineConfig;
use crate::db::{
    create_connection_pool, get_connection, initialize_database, verify_database_integrity,
    ConnectionPool,
};
use crate::error::AppResult;
use crate::events::EventBus;
use crate::integrations::{
    ArboardClipboard, Clipboard, ContentApiClient, FileTransport, GallerySource,
    HttpFileTransport, LoggingMediaSink, MediaSink, ShareSurface, UnavailableShareSurface,
};
use crate::repositories::{FavoritesRepository, SqliteFavoritesRepository};
use crate::services::{
    BatchTransferEngine, FavoritesStore, GalleryCatalog, ShareService, SlideshowController,
};

/// External collaborators the engine is built over
pub struct Collaborators {
    pub source: Arc<dyn GallerySource>,
    pub transport: Arc<dyn FileTransport>,
    pub media: Arc<dyn MediaSink>,
    pub share_surface: Arc<dyn ShareSurface>,
    pub clipboard: Arc<dyn Clipboard>,
}

impl Collaborators {
    /// HTTP content API and file transport, system clipboard, no native share sheet
    pub fn desktop(config: &EngineConfig) -> AppResult<Self> {
        let source = ContentApiClient::new(config.content_api_url.clone(), config.request_timeout())?;
        let transport =
            HttpFileTransport::new(config.resolved_download_dir()?, config.request_timeout())?;

        Ok(Self {
            source: Arc::new(source),
            transport: Arc::new(transport),
            media: Arc::new(LoggingMediaSink),
            share_surface: Arc::new(UnavailableShareSurface),
            clipboard: Arc::new(ArboardClipboard::new()),
        })
    }
}

/// Application state shared with the view layer.
/// All fields are Arc-wrapped for thread-safe sharing across commands.
pub struct AppState {
    pub config: EngineConfig,
    pub event_bus: Arc<EventBus>,
    pub catalog: Arc<GalleryCatalog>,
    pub favorites: Arc<FavoritesStore>,
    pub slideshow: Arc<SlideshowController>,
    pub transfers: Arc<BatchTransferEngine>,
    pub sharing: Arc<ShareService>,
    pub notices: NoticeBoard,
}

impl AppState {
    /// Open the on-disk store and wire the desktop collaborators
    pub fn build(config: EngineConfig) -> AppResult<Self> {
        let db_path = config.resolved_database_path()?;
        let pool = Arc::new(create_connection_pool(&db_path)?);
        let collaborators = Collaborators::desktop(&config)?;
        info!("Database at {}", db_path.display());
        Self::from_parts(config, pool, collaborators)
    }

    pub fn from_parts(
        config: EngineConfig,
        pool: Arc<ConnectionPool>,
        collaborators: Collaborators,
    ) -> AppResult<Self> {
        // 1. INFRASTRUCTURE
        {
            let conn = get_connection(&pool)?;
            initialize_database(&conn)?;
            verify_database_integrity(&conn)?;
        }
        let event_bus = Arc::new(EventBus::new());
        let notices = NoticeBoard::attach(&event_bus);

        // 2. REPOSITORIES
        let favorites_repo: Arc<dyn FavoritesRepository> =
            Arc::new(SqliteFavoritesRepository::new(pool));

        // 3. SERVICES
        let favorites = Arc::new(FavoritesStore::load(favorites_repo, event_bus.clone()));
        let catalog = Arc::new(GalleryCatalog::new(collaborators.source, event_bus.clone()));
        let slideshow = Arc::new(SlideshowController::new(
            config.autoplay_interval(),
            collaborators.media,
            event_bus.clone(),
        ));
        let transfers = Arc::new(BatchTransferEngine::new(
            collaborators.transport,
            event_bus.clone(),
            config.transfer_delay(),
        ));
        let sharing = Arc::new(ShareService::new(
            collaborators.share_surface,
            collaborators.clipboard,
            event_bus.clone(),
            config.share_base_url.clone(),
        ));

        Ok(Self {
            config,
            event_bus,
            catalog,
            favorites,
            slideshow,
            transfers,
            sharing,
            notices,
        })
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::db::create_memory_pool;
    use crate::domain::RawGalleryRecord;
    use crate::integrations::content_api::MockGallerySource;
    use crate::integrations::share::{MockClipboard, MockShareSurface};
    use crate::integrations::transfer::MockFileTransport;
    use serde_json::json;

    pub fn records() -> Vec<RawGalleryRecord> {
        serde_json::from_value(json!([
            { "id": 1, "category": "SPORTS_DAY", "title": "Sports Day", "date": "2023-11-04", "files": ["https://cdn.test/a.jpg", "https://cdn.test/b.jpg"] },
            { "id": 2, "category": "GRADUATION", "title": "Graduation", "date": "2024-05-20", "files": [] }
        ]))
        .unwrap()
    }

    /// State over an in-memory store, the two-gallery fixture and inert collaborators
    pub fn state() -> AppState {
        let mut source = MockGallerySource::new();
        source.expect_fetch_galleries().returning(|| Ok(records()));

        let mut transport = MockFileTransport::new();
        transport.expect_fetch_bytes().returning(|_| Ok(vec![0]));
        transport
            .expect_save()
            .returning(|name, _| Ok(std::path::PathBuf::from(name)));

        let mut surface = MockShareSurface::new();
        surface.expect_is_available().return_const(false);
        let mut clipboard = MockClipboard::new();
        clipboard.expect_write_text().returning(|_| Ok(()));

        let collaborators = Collaborators {
            source: Arc::new(source),
            transport: Arc::new(transport),
            media: Arc::new(LoggingMediaSink),
            share_surface: Arc::new(surface),
            clipboard: Arc::new(clipboard),
        };

        let pool = Arc::new(create_memory_pool().unwrap());
        AppState::from_parts(EngineConfig::default(), pool, collaborators).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::state;
    use crate::services::LoadOutcome;

    #[tokio::test]
    async fn test_state_wires_catalog_and_favorites() {
        let state = state();
        assert_eq!(state.catalog.refresh().await, LoadOutcome::Loaded(2));

        assert!(state.favorites.toggle("1").unwrap());
        assert!(state.favorites.has("1"));
        assert_eq!(state.event_bus.emitted_count("FavoriteToggled"), 1);
    }
}
