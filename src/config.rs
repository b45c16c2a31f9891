// src/config.rs
//
// Engine configuration
//
// Loaded from {CONFIG_DIR}/galleryhub/config.json. Every field has a default,
// so a missing file or a partial file is valid. A malformed file is an error.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::{AppError, AppResult};

const APP_DIR: &str = "galleryhub";
const CONFIG_FILE: &str = "config.json";

/// Environment variable overriding `content_api_url`
pub const API_URL_ENV: &str = "GALLERYHUB_API_URL";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Endpoint returning the gallery record list
    pub content_api_url: String,

    /// Slideshow auto-advance interval
    pub autoplay_interval_ms: u64,

    /// Fixed pause between two items of a batch transfer
    pub transfer_delay_ms: u64,

    pub request_timeout_secs: u64,

    /// Public gallery page; shared links are `<share_base_url>?id=<gallery id>`
    pub share_base_url: String,

    pub download_dir: Option<PathBuf>,

    pub database_path: Option<PathBuf>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            content_api_url: "http://localhost:5000/api/galleries".to_string(),
            autoplay_interval_ms: 4000,
            transfer_delay_ms: 500,
            request_timeout_secs: 30,
            share_base_url: "http://localhost:3000/gallery".to_string(),
            download_dir: None,
            database_path: None,
        }
    }
}

impl EngineConfig {
    /// Load from the default location, then apply environment overrides
    pub fn load() -> AppResult<Self> {
        let mut config = match default_config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };

        config.apply_api_url_override(std::env::var(API_URL_ENV).ok().as_deref());
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file; a missing file yields the defaults
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))?;

        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Replace `content_api_url` with a non-blank `GALLERYHUB_API_URL` value
    pub fn apply_api_url_override(&mut self, value: Option<&str>) {
        if let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) {
            debug!("{} overrides content_api_url", API_URL_ENV);
            self.content_api_url = url.to_string();
        }
    }

    pub fn validate(&self) -> AppResult<()> {
        if self.autoplay_interval_ms == 0 {
            return Err(AppError::Config(
                "autoplay_interval_ms must be greater than zero".to_string(),
            ));
        }
        if self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.content_api_url.trim().is_empty() {
            return Err(AppError::Config("content_api_url cannot be empty".to_string()));
        }
        Ok(())
    }

    pub fn autoplay_interval(&self) -> Duration {
        Duration::from_millis(self.autoplay_interval_ms)
    }

    pub fn transfer_delay(&self) -> Duration {
        Duration::from_millis(self.transfer_delay_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Configured download directory, else {DOWNLOADS}/galleryhub, else {DATA}/galleryhub/downloads
    pub fn resolved_download_dir(&self) -> AppResult<PathBuf> {
        if let Some(dir) = &self.download_dir {
            return Ok(dir.clone());
        }
        dirs::download_dir()
            .map(|d| d.join(APP_DIR))
            .or_else(|| dirs::data_dir().map(|d| d.join(APP_DIR).join("downloads")))
            .ok_or_else(|| AppError::Config("Could not determine a download directory".to_string()))
    }

    /// Configured database file, else {DATA}/galleryhub/galleryhub.db
    pub fn resolved_database_path(&self) -> AppResult<PathBuf> {
        if let Some(path) = &self.database_path {
            return Ok(path.clone());
        }
        dirs::data_dir()
            .map(|d| d.join(APP_DIR).join("galleryhub.db"))
            .ok_or_else(|| AppError::Config("Could not determine app data directory".to_string()))
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join(APP_DIR).join(CONFIG_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.autoplay_interval(), Duration::from_millis(4000));
        assert_eq!(config.transfer_delay(), Duration::from_millis(500));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = EngineConfig::load_from(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, EngineConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "transfer_delay_ms": 750, "download_dir": "/tmp/dl" }"#).unwrap();

        let config = EngineConfig::load_from(&path).unwrap();
        assert_eq!(config.transfer_delay_ms, 750);
        assert_eq!(config.autoplay_interval_ms, 4000);
        assert_eq!(config.resolved_download_dir().unwrap(), PathBuf::from("/tmp/dl"));
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ nope").unwrap();

        assert!(matches!(EngineConfig::load_from(&path), Err(AppError::Config(_))));
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = EngineConfig {
            autoplay_interval_ms: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = EngineConfig {
            request_timeout_secs: 0,
            ..EngineConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_api_url_override() {
        let mut config = EngineConfig::default();
        config.apply_api_url_override(Some("  https://school.test/api/galleries "));
        assert_eq!(config.content_api_url, "https://school.test/api/galleries");
    }

    #[test]
    fn test_blank_or_absent_override_keeps_file_value() {
        let mut config = EngineConfig::default();
        config.apply_api_url_override(Some("   "));
        config.apply_api_url_override(None);
        assert_eq!(config.content_api_url, EngineConfig::default().content_api_url);
    }
}
