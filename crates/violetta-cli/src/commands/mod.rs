pub mod backup;
pub mod chat;
pub mod checkin;
pub mod contact;
pub mod disclaimer;
pub mod exercise;
pub mod goal;
pub mod help;
pub mod journal;
pub mod login;
pub mod network;
pub mod onboarding;
pub mod profile;
pub mod stats;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use violetta_application::Latency;
use violetta_core::config::AppConfig;
use violetta_infrastructure::{
    BackupService, FileStorage, SaveOutcome, ViolettaPaths, ViolettaStores,
};

/// Stores and services shared by every command.
pub struct App {
    pub stores: ViolettaStores,
    pub backup: BackupService,
    pub latency: Latency,
    pub data_dir: PathBuf,
}

impl App {
    /// Opens the stores under `data_dir`, falling back to `$VIOLETTA_DATA_DIR`,
    /// the configured directory, then the platform data directory.
    pub fn open(data_dir: Option<PathBuf>, config: &AppConfig) -> Result<Self> {
        let data_dir = match data_dir {
            Some(dir) => dir,
            None => ViolettaPaths::resolve_data_dir(config.data_dir.as_deref())
                .context("Failed to resolve data directory")?,
        };
        let store_dir = ViolettaPaths::store_dir_in(&data_dir);
        let storage = FileStorage::new(&store_dir)
            .with_context(|| format!("Failed to open store at {}", store_dir.display()))?
            .with_quota(config.quota_bytes());
        tracing::debug!("[App] Using store directory {}", store_dir.display());

        let storage = Arc::new(storage);
        Ok(Self {
            stores: ViolettaStores::open(storage.clone()),
            backup: BackupService::new(storage),
            latency: Latency::new(config.simulated_latency_ms),
            data_dir,
        })
    }
}

/// Tells the user when a change did not fully reach the disk.
pub fn report_outcome(outcome: SaveOutcome) {
    match outcome {
        SaveOutcome::Saved => {}
        SaveOutcome::Trimmed { kept, dropped } => println!(
            "⚠️  Storage is full: saved the newest {} items, {} older ones were left out",
            kept, dropped
        ),
        SaveOutcome::Abandoned => {
            println!("⚠️  This change could not be written to disk and will be lost")
        }
    }
}
