//! Key/value storage trait.
//!
//! The on-device store is a flat map from string keys to JSON strings. Each
//! feature store owns exactly one key; nothing coordinates writes across keys.

use crate::error::Result;

/// String-keyed storage for serialized feature state.
///
/// Implementations must leave the previous value intact when `set` fails,
/// and must report a full backend with [`ViolettaError::QuotaExceeded`] so
/// callers can shrink the payload and retry.
///
/// [`ViolettaError::QuotaExceeded`]: crate::error::ViolettaError::QuotaExceeded
pub trait KeyValueStorage: Send + Sync {
    /// Returns the raw value stored under `key`, or `None` if absent.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Replaces the value stored under `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<()>;

    /// Lists all keys currently present.
    fn keys(&self) -> Result<Vec<String>>;
}
