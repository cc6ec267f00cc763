//! Configuration service implementation.
//!
//! Loads [`AppConfig`] from `~/.config/violetta/config.toml` and caches it.

use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::{debug, warn};
use violetta_core::Result;
use violetta_core::config::AppConfig;

use crate::paths::ViolettaPaths;

/// Configuration service that loads and caches the application configuration.
///
/// A missing or invalid file yields the defaults; configuration never blocks startup.
#[derive(Debug, Clone)]
pub struct ConfigService {
    /// Explicit file path; `None` uses the platform config file.
    path: Option<PathBuf>,
    /// Cached configuration, loaded lazily on first access.
    config: Arc<RwLock<Option<AppConfig>>>,
}

impl ConfigService {
    pub fn new() -> Self {
        Self {
            path: None,
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Reads configuration from `path` instead of the platform default.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
            config: Arc::new(RwLock::new(None)),
        }
    }

    /// Gets the configuration, loading from file if not cached.
    pub fn get_config(&self) -> AppConfig {
        {
            let read_lock = self.config.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(ref cached) = *read_lock {
                return cached.clone();
            }
        }

        let loaded = self.load_config().unwrap_or_else(|e| {
            warn!("[ConfigService] Failed to load config, using defaults: {}", e);
            AppConfig::default()
        });

        {
            let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
            *write_lock = Some(loaded.clone());
        }

        loaded
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        let mut write_lock = self.config.write().unwrap_or_else(PoisonError::into_inner);
        *write_lock = None;
    }

    fn load_config(&self) -> Result<AppConfig> {
        let path = match &self.path {
            Some(path) => path.clone(),
            None => ViolettaPaths::config_file()?,
        };
        if !path.exists() {
            debug!("[ConfigService] No config at {}, using defaults", path.display());
            return Ok(AppConfig::default());
        }
        let content = fs::read_to_string(&path)?;
        Ok(toml::from_str(&content)?)
    }
}

impl Default for ConfigService {
    fn default() -> Self {
        Self::new()
    }
}
