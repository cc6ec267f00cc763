//! Unified path management for Violetta files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/violetta/          # Config directory
//! └── config.toml              # Application configuration
//!
//! ~/.local/share/violetta/     # Data directory ($VIOLETTA_DATA_DIR overrides)
//! └── store/                   # One <key>.json per persisted store
//! ```

use std::path::{Path, PathBuf};

use violetta_core::{Result, ViolettaError};

use crate::backup::DEFAULT_BACKUP_FILE_NAME;

/// Environment variable that overrides the data directory.
pub const DATA_DIR_ENV: &str = "VIOLETTA_DATA_DIR";

const APP_DIR: &str = "violetta";

pub struct ViolettaPaths;

impl ViolettaPaths {
    /// `~/.config/violetta` (platform equivalent elsewhere).
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ViolettaError::config("Cannot find config directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Data directory: `$VIOLETTA_DATA_DIR`, else the platform data dir.
    pub fn data_dir() -> Result<PathBuf> {
        Self::resolve_data_dir(None)
    }

    /// Data directory with a configured fallback: `$VIOLETTA_DATA_DIR`, then
    /// `configured`, then the platform data dir.
    pub fn resolve_data_dir(configured: Option<&Path>) -> Result<PathBuf> {
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV).filter(|v| !v.is_empty()) {
            return Ok(PathBuf::from(dir));
        }
        if let Some(dir) = configured {
            return Ok(dir.to_path_buf());
        }
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ViolettaError::config("Cannot find data directory"))
    }

    /// Directory holding the persisted stores under a data directory.
    pub fn store_dir_in(data_dir: &Path) -> PathBuf {
        data_dir.join("store")
    }

    pub fn store_dir() -> Result<PathBuf> {
        Ok(Self::store_dir_in(&Self::data_dir()?))
    }

    /// Where an export goes when no path is given: the downloads folder,
    /// falling back to the current directory.
    pub fn default_backup_file() -> PathBuf {
        dirs::download_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(DEFAULT_BACKUP_FILE_NAME)
    }
}
