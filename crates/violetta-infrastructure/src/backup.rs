//! Export, import and reset of every known storage key.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value as JsonValue};
use tracing::{info, warn};
use violetta_core::datetime::now_iso;
use violetta_core::keys::KNOWN_KEYS;
use violetta_core::{KeyValueStorage, Result, ViolettaError};

use crate::dto::{BACKUP_APP, BACKUP_VERSION, Backup};

/// Default file name offered for exports.
pub const DEFAULT_BACKUP_FILE_NAME: &str = "violetta-backup.json";

/// What an import changed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    pub written: Vec<String>,
    pub removed: Vec<String>,
}

#[derive(Clone)]
pub struct BackupService {
    storage: Arc<dyn KeyValueStorage>,
}

impl BackupService {
    pub fn new(storage: Arc<dyn KeyValueStorage>) -> Self {
        Self { storage }
    }

    /// Collects every known key. Absent or unparsable values export as `null`.
    pub fn export_all(&self) -> Backup {
        let mut stores = Map::new();
        for key in KNOWN_KEYS {
            let value = match self.storage.get(key) {
                Ok(Some(raw)) => serde_json::from_str(&raw).unwrap_or_else(|e| {
                    warn!("[BackupService] '{}' is not valid JSON, exporting null: {}", key, e);
                    JsonValue::Null
                }),
                Ok(None) => JsonValue::Null,
                Err(e) => {
                    warn!("[BackupService] Failed to read '{}', exporting null: {}", key, e);
                    JsonValue::Null
                }
            };
            stores.insert(key.to_string(), value);
        }

        Backup {
            app: BACKUP_APP.to_string(),
            version: BACKUP_VERSION,
            exported_at: now_iso(),
            stores,
        }
    }

    pub fn to_json_pretty(backup: &Backup) -> Result<String> {
        Ok(serde_json::to_string_pretty(backup)?)
    }

    /// Exports to `path`. A directory gets [`DEFAULT_BACKUP_FILE_NAME`] appended.
    pub fn write_to_file(&self, path: &Path) -> Result<std::path::PathBuf> {
        let target = if path.is_dir() {
            path.join(DEFAULT_BACKUP_FILE_NAME)
        } else {
            path.to_path_buf()
        };
        let json = Self::to_json_pretty(&self.export_all())?;
        fs::write(&target, json)?;
        info!("[BackupService] Exported backup to {}", target.display());
        Ok(target)
    }

    /// Restores a backup. The whole document is checked before the first
    /// write, so an invalid file leaves storage untouched. Every known key is
    /// cleared before the writes start, so the old values never count
    /// against the quota of the new ones.
    pub fn import_str(&self, content: &str) -> Result<ImportReport> {
        let stores = Self::validate(content)?;

        let mut report = ImportReport::default();
        let mut writes = Vec::new();
        for key in KNOWN_KEYS {
            match stores.get(key) {
                None | Some(JsonValue::Null) => report.removed.push(key.to_string()),
                Some(value) => writes.push((key, serde_json::to_string(value)?)),
            }
        }

        self.reset_all()?;
        for (key, raw) in writes {
            self.storage.set(key, &raw)?;
            report.written.push(key.to_string());
        }

        info!(
            "[BackupService] Imported backup: {} written, {} removed",
            report.written.len(),
            report.removed.len()
        );
        Ok(report)
    }

    pub fn import_file(&self, path: &Path) -> Result<ImportReport> {
        let content = fs::read_to_string(path)?;
        self.import_str(&content)
    }

    /// Removes every known key.
    pub fn reset_all(&self) -> Result<()> {
        for key in KNOWN_KEYS {
            self.storage.remove(key)?;
        }
        info!("[BackupService] Removed all stored data");
        Ok(())
    }

    fn validate(content: &str) -> Result<Map<String, JsonValue>> {
        let invalid = || ViolettaError::invalid_backup("invalid file");
        let value: JsonValue = serde_json::from_str(content).map_err(|_| invalid())?;
        let JsonValue::Object(mut root) = value else {
            return Err(invalid());
        };
        if root.get("app").and_then(JsonValue::as_str) != Some(BACKUP_APP) {
            return Err(invalid());
        }
        match root.remove("stores") {
            Some(JsonValue::Object(stores)) => Ok(stores),
            _ => Err(invalid()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use tempfile::TempDir;
    use violetta_core::keys;

    fn service() -> (Arc<MemoryStorage>, BackupService) {
        let storage = Arc::new(MemoryStorage::new());
        (storage.clone(), BackupService::new(storage))
    }

    #[test]
    fn test_export_covers_every_known_key() {
        let (storage, service) = service();
        storage.set(keys::GOALS, r#"{"state":{"goals":[]},"version":0}"#).unwrap();
        storage.set(keys::CHAT, "{broken").unwrap();

        let backup = service.export_all();
        assert_eq!(backup.app, "Violetta");
        assert_eq!(backup.version, 1);
        assert_eq!(backup.stores.len(), KNOWN_KEYS.len());
        assert_eq!(backup.stores[keys::GOALS]["version"], 0);
        assert!(backup.stores[keys::CHAT].is_null());
        assert!(backup.stores[keys::SESSION].is_null());

        let json = BackupService::to_json_pretty(&backup).unwrap();
        assert!(json.contains("\"exportedAt\""));
    }

    #[test]
    fn test_import_rejects_wrong_app_without_writing() {
        let (storage, service) = service();
        storage.set(keys::GOALS, "[]").unwrap();

        for bad in [
            r#"{"app":"Other","stores":{}}"#,
            r#"{"app":"Violetta"}"#,
            r#"{"app":"Violetta","stores":null}"#,
            r#"[1,2]"#,
            "not json",
        ] {
            let err = service.import_str(bad).unwrap_err();
            assert!(err.is_invalid_backup(), "{bad}");
            assert_eq!(err.to_string(), "Invalid backup: invalid file");
        }
        assert_eq!(storage.get(keys::GOALS).unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_import_writes_and_removes() {
        let (storage, service) = service();
        storage.set(keys::CHAT, "[]").unwrap();

        let report = service
            .import_str(r#"{"app":"Violetta","stores":{"violetta-disclaimer-accepted":true,"violetta-chat":null}}"#)
            .unwrap();
        assert_eq!(report.written, vec![keys::DISCLAIMER_ACCEPTED]);
        assert_eq!(report.removed.len(), KNOWN_KEYS.len() - 1);
        assert_eq!(storage.get(keys::DISCLAIMER_ACCEPTED).unwrap().as_deref(), Some("true"));
        assert!(storage.get(keys::CHAT).unwrap().is_none());
    }

    #[test]
    fn test_import_clears_old_values_before_writing() {
        let storage = Arc::new(MemoryStorage::with_quota(1000));
        let service = BackupService::new(storage.clone());
        let old_chat = format!("[\"{}\"]", "c".repeat(600));
        storage.set(keys::CHAT, &old_chat).unwrap();

        let journal = serde_json::json!({ "state": { "items": ["j".repeat(600)] }, "version": 1 });
        let backup = serde_json::json!({
            "app": "Violetta",
            "stores": { "violetta-session": { "new": 1 }, "violetta-journal": journal },
        });

        let report = service.import_str(&backup.to_string()).unwrap();
        assert_eq!(report.written, vec![keys::SESSION, keys::JOURNAL]);
        assert!(storage.get(keys::CHAT).unwrap().is_none());
        assert_eq!(storage.get(keys::SESSION).unwrap().as_deref(), Some(r#"{"new":1}"#));
        assert!(storage.get(keys::JOURNAL).unwrap().unwrap().contains("jjj"));
    }

    #[test]
    fn test_round_trip_is_byte_identical() {
        let (storage, service) = service();
        let goals = r#"{"state":{"goals":[{"id":"g-1","text":"Walk","createdAt":1}]},"version":0}"#;
        let session = r#"{"state":{"session":null,"pendingMethod":null},"version":0}"#;
        storage.set(keys::GOALS, goals).unwrap();
        storage.set(keys::SESSION, session).unwrap();
        storage.set(keys::DISCLAIMER_ACCEPTED, "true").unwrap();

        let exported = BackupService::to_json_pretty(&service.export_all()).unwrap();
        service.reset_all().unwrap();
        assert!(storage.keys().unwrap().is_empty());

        service.import_str(&exported).unwrap();
        assert_eq!(storage.get(keys::GOALS).unwrap().as_deref(), Some(goals));
        assert_eq!(storage.get(keys::SESSION).unwrap().as_deref(), Some(session));
        assert_eq!(storage.get(keys::DISCLAIMER_ACCEPTED).unwrap().as_deref(), Some("true"));
    }

    #[test]
    fn test_file_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let (storage, service) = service();
        storage.set(keys::ONBOARDING, r#"{"state":{"goal":"sleep"},"version":0}"#).unwrap();

        let path = service.write_to_file(temp_dir.path()).unwrap();
        assert_eq!(path.file_name().unwrap(), DEFAULT_BACKUP_FILE_NAME);

        service.reset_all().unwrap();
        service.import_file(&path).unwrap();
        assert!(storage.get(keys::ONBOARDING).unwrap().is_some());
    }
}
