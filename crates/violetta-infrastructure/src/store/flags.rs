//! Boolean flags stored as bare JSON `true` / `false`.

use tracing::warn;
use violetta_core::KeyValueStorage;

/// Reads a flag. Only a stored `true` reads as set; `fallback` applies when
/// the key is absent or unreadable.
pub fn get_boolean(storage: &dyn KeyValueStorage, key: &str, fallback: bool) -> bool {
    match storage.get(key) {
        Ok(Some(raw)) => raw.trim() == "true",
        Ok(None) => fallback,
        Err(e) => {
            warn!("[Flags] Failed to read '{}': {}", key, e);
            fallback
        }
    }
}

/// Writes a flag. Failures are logged and otherwise ignored.
pub fn set_boolean(storage: &dyn KeyValueStorage, key: &str, value: bool) {
    if let Err(e) = storage.set(key, if value { "true" } else { "false" }) {
        warn!("[Flags] Failed to write '{}': {}", key, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    #[test]
    fn test_round_trip_and_fallbacks() {
        let storage = MemoryStorage::new();
        assert!(get_boolean(&storage, "flag", true));
        set_boolean(&storage, "flag", false);
        assert_eq!(storage.get("flag").unwrap().as_deref(), Some("false"));
        assert!(!get_boolean(&storage, "flag", true));

        storage.set("flag", " true\n").unwrap();
        assert!(get_boolean(&storage, "flag", false));
    }

    #[test]
    fn test_non_true_values_read_as_unset() {
        let storage = MemoryStorage::new();
        for raw in ["\"yes\"", "1", "\"true\"", "TRUE", ""] {
            storage.set("flag", raw).unwrap();
            assert!(!get_boolean(&storage, "flag", true), "{raw}");
        }
    }

    #[test]
    fn test_write_failure_is_swallowed() {
        let storage = MemoryStorage::with_quota(1);
        set_boolean(&storage, "flag", true);
        assert!(!get_boolean(&storage, "flag", false));
    }
}
