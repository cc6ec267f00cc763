//! Contract between feature state and the persisted store.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value as JsonValue;

/// A list-shaped state whose oldest items can be dropped to fit a quota.
pub trait Trimmable {
    /// Number of items currently held.
    fn item_count(&self) -> usize;

    /// Keeps only the `n` newest items.
    fn keep_newest(&mut self, n: usize);
}

/// State that lives under a single storage key.
///
/// The persisted store hydrates it once, falls back to [`seed`](Self::seed)
/// on absence or corruption, and writes the whole value after every mutation.
pub trait PersistedState: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Storage key owned by this state.
    const KEY: &'static str;

    /// Envelope version written alongside the state.
    const VERSION: u32;

    /// Value used when nothing (or nothing readable) is stored.
    fn seed() -> Self;

    /// Decodes payloads written before the `{state, version}` envelope.
    fn from_legacy(_value: &JsonValue) -> Option<Self> {
        None
    }

    /// Normalizes freshly loaded data.
    fn after_load(self) -> Self {
        self
    }

    /// Exposes the state for quota trimming, if it is list-shaped.
    fn as_trimmable(&mut self) -> Option<&mut dyn Trimmable> {
        None
    }
}

/// Decodes the two pre-envelope list shapes: a bare array, or `{"v": N, "items": [...]}`.
pub fn legacy_items<T: DeserializeOwned>(value: &JsonValue) -> Option<Vec<T>> {
    let items = match value {
        JsonValue::Array(_) => value,
        JsonValue::Object(map) if map.contains_key("v") => map.get("items")?,
        _ => return None,
    };
    serde_json::from_value(items.clone()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_legacy_items_bare_array() {
        let items: Vec<u32> = legacy_items(&json!([1, 2, 3])).unwrap();
        assert_eq!(items, vec![1, 2, 3]);
    }

    #[test]
    fn test_legacy_items_versioned_object() {
        let items: Vec<u32> = legacy_items(&json!({"v": 1, "items": [4, 5]})).unwrap();
        assert_eq!(items, vec![4, 5]);
    }

    #[test]
    fn test_legacy_items_rejects_envelope() {
        let items: Option<Vec<u32>> = legacy_items(&json!({"state": {"items": []}, "version": 1}));
        assert!(items.is_none());
    }
}
