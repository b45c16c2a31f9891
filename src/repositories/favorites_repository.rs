// src/repositories/favorites_repository.rs

use chrono::Utc;
use rusqlite::{params, OptionalExtension};
use std::collections::BTreeSet;
use std::sync::Arc;

use crate::db::ConnectionPool;
use crate::error::AppResult;

/// Key of the favorites entry in the key-value table
pub const FAVORITES_KEY: &str = "gallery_favorites";

/// Durable storage of the favorite gallery id set
pub trait FavoritesRepository: Send + Sync {
    /// `Ok(None)` when nothing was ever written; `Err` when the stored value
    /// cannot be read or decoded
    fn load_favorites(&self) -> AppResult<Option<BTreeSet<String>>>;

    /// Replace the stored set; returns once the write is committed
    fn save_favorites(&self, ids: &BTreeSet<String>) -> AppResult<()>;
}

/// Favorites stored as a JSON array in the `kv_store` table
pub struct SqliteFavoritesRepository {
    pool: Arc<ConnectionPool>,
}

impl SqliteFavoritesRepository {
    pub fn new(pool: Arc<ConnectionPool>) -> Self {
        Self { pool }
    }

    fn read_raw(&self) -> AppResult<Option<String>> {
        let conn = self.pool.get()?;
        let value = conn
            .query_row(
                "SELECT value FROM kv_store WHERE key = ?1",
                params![FAVORITES_KEY],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }
}

impl FavoritesRepository for SqliteFavoritesRepository {
    fn load_favorites(&self) -> AppResult<Option<BTreeSet<String>>> {
        match self.read_raw()? {
            Some(json) => Ok(Some(serde_json::from_str(&json)?)),
            None => Ok(None),
        }
    }

    fn save_favorites(&self, ids: &BTreeSet<String>) -> AppResult<()> {
        let conn = self.pool.get()?;
        let json = serde_json::to_string(ids)?;

        conn.execute(
            "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![FAVORITES_KEY, json, Utc::now().to_rfc3339()],
        )?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{create_memory_pool, initialize_database};

    fn repository() -> SqliteFavoritesRepository {
        let pool = create_memory_pool().unwrap();
        initialize_database(&pool.get().unwrap()).unwrap();
        SqliteFavoritesRepository::new(Arc::new(pool))
    }

    #[test]
    fn test_load_missing_returns_none() {
        assert!(repository().load_favorites().unwrap().is_none());
    }

    #[test]
    fn test_save_then_load() {
        let repo = repository();
        let ids: BTreeSet<String> = ["b", "a"].iter().map(|s| s.to_string()).collect();

        repo.save_favorites(&ids).unwrap();
        assert_eq!(repo.load_favorites().unwrap(), Some(ids.clone()));

        // Overwrite, not append
        let fewer: BTreeSet<String> = ["a"].iter().map(|s| s.to_string()).collect();
        repo.save_favorites(&fewer).unwrap();
        assert_eq!(repo.load_favorites().unwrap(), Some(fewer));
    }

    #[test]
    fn test_corrupt_value_is_an_error() {
        let repo = repository();
        repo.pool
            .get()
            .unwrap()
            .execute(
                "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, '{not json', '')",
                params![FAVORITES_KEY],
            )
            .unwrap();

        assert!(repo.load_favorites().is_err());
    }
}
