//! Directory-backed key/value storage with atomic writes.
//!
//! Each key is a `<key>.json` file. Writes go through a temporary file that is
//! fsynced and renamed into place while holding an exclusive lock on the
//! directory, so a crash never leaves a half-written value behind.

use std::fs::{self, File, OpenOptions};
use std::io::{ErrorKind, Write as IoWrite};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use violetta_core::{KeyValueStorage, Result, ViolettaError};

use super::{entry_size, validate_key};

const EXTENSION: &str = "json";
const LOCK_FILE: &str = ".violetta.lock";

#[derive(Debug, Clone)]
pub struct FileStorage {
    base_dir: PathBuf,
    quota_bytes: Option<usize>,
}

impl FileStorage {
    /// Opens (and creates) the storage directory.
    pub fn new(base_dir: impl Into<PathBuf>) -> Result<Self> {
        let base_dir = base_dir.into();
        fs::create_dir_all(&base_dir)?;
        Ok(Self {
            base_dir,
            quota_bytes: None,
        })
    }

    pub fn with_quota(mut self, bytes: usize) -> Self {
        self.quota_bytes = Some(bytes);
        self
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf> {
        validate_key(key)?;
        Ok(self.base_dir.join(format!("{}.{}", key, EXTENSION)))
    }

    fn temp_path_for(&self, key: &str) -> PathBuf {
        self.base_dir.join(format!(".{}.{}.tmp", key, EXTENSION))
    }

    /// Keys and sizes of every stored value.
    fn entries(&self) -> Result<Vec<(String, u64)>> {
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&self.base_dir)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(EXTENSION) {
                continue;
            }
            let Some(key) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            if validate_key(key).is_err() {
                continue;
            }
            entries.push((key.to_string(), dir_entry.metadata()?.len()));
        }
        entries.sort();
        Ok(entries)
    }

    fn used_bytes_excluding(&self, key: &str) -> Result<usize> {
        Ok(self
            .entries()?
            .into_iter()
            .filter(|(k, _)| k != key)
            .map(|(k, len)| k.len() + len as usize)
            .sum())
    }

    fn lock(&self) -> Result<DirLock> {
        DirLock::acquire(&self.base_dir.join(LOCK_FILE))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _lock = self.lock()?;

        if let Some(quota) = self.quota_bytes {
            let total = self.used_bytes_excluding(key)? + entry_size(key, value);
            if total > quota {
                return Err(ViolettaError::quota_exceeded(key, total));
            }
        }

        let tmp_path = self.temp_path_for(key);
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(value.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        let path = self.path_for(key)?;
        let _lock = self.lock()?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn keys(&self) -> Result<Vec<String>> {
        Ok(self.entries()?.into_iter().map(|(k, _)| k).collect())
    }
}

/// Exclusive lock on the storage directory, released on drop.
struct DirLock {
    file: File,
}

impl DirLock {
    fn acquire(lock_path: &Path) -> Result<Self> {
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(lock_path)?;
        file.lock_exclusive()
            .map_err(|e| ViolettaError::storage(format!("Failed to acquire lock: {}", e)))?;
        Ok(Self { file })
    }
}

impl Drop for DirLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
