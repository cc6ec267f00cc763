pub mod backup;
pub mod config_service;
pub mod dto;
pub mod paths;
pub mod storage;
pub mod store;

pub use crate::backup::{BackupService, ImportReport};
pub use crate::config_service::ConfigService;
pub use crate::paths::ViolettaPaths;
pub use crate::storage::{FileStorage, MemoryStorage};
pub use crate::store::{PersistedStore, SaveOutcome, ViolettaStores};
