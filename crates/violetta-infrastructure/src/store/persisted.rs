//! A single feature state bound to its storage key.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::Serialize;
use tracing::{debug, warn};
use violetta_core::{KeyValueStorage, PersistedState, Result, ViolettaError};

use crate::dto::{decode, encode};

/// Result of writing the state back to storage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "camelCase")]
pub enum SaveOutcome {
    /// The full state was written.
    Saved,
    /// The quota forced a shorter list to be written. In-memory state is untouched.
    Trimmed { kept: usize, dropped: usize },
    /// Nothing was written.
    Abandoned,
}

impl SaveOutcome {
    pub fn is_abandoned(&self) -> bool {
        matches!(self, SaveOutcome::Abandoned)
    }
}

/// Owns the in-memory copy of `S` and writes all of it after every change.
///
/// Hydration never fails: a missing, unreadable or corrupt payload yields
/// `S::seed()`. Saves never fail either; quota errors on list states are
/// retried with fewer items, and anything else is logged and reported as
/// [`SaveOutcome::Abandoned`].
pub struct PersistedStore<S: PersistedState> {
    storage: Arc<dyn KeyValueStorage>,
    state: RwLock<S>,
}

impl<S: PersistedState> PersistedStore<S> {
    /// Hydrates the state from storage.
    pub fn open(storage: Arc<dyn KeyValueStorage>) -> Self {
        let state = Self::hydrate(storage.as_ref());
        Self {
            storage,
            state: RwLock::new(state),
        }
    }

    pub fn key(&self) -> &'static str {
        S::KEY
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> S {
        self.read_lock().clone()
    }

    /// Reads the state without cloning it.
    pub fn read<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        f(&self.read_lock())
    }

    /// Applies an action and saves the full state.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> (R, SaveOutcome) {
        let result = self.modify(f);
        (result, self.save())
    }

    /// Like [`mutate`](Self::mutate), but an abandoned save is returned as the
    /// storage error that caused it.
    pub fn try_mutate<R>(&self, f: impl FnOnce(&mut S) -> R) -> Result<(R, SaveOutcome)> {
        let result = self.modify(f);
        match self.save_inner() {
            (SaveOutcome::Abandoned, Some(err)) => Err(err),
            (outcome, _) => Ok((result, outcome)),
        }
    }

    /// Applies an action in memory only. Pair with [`save`](Self::save).
    pub fn modify<R>(&self, f: impl FnOnce(&mut S) -> R) -> R {
        f(&mut self.write_lock())
    }

    /// Writes the current state, trimming list states to fit the quota.
    pub fn save(&self) -> SaveOutcome {
        self.save_inner().0
    }

    /// Re-reads the state from storage.
    pub fn reload(&self) {
        let fresh = Self::hydrate(self.storage.as_ref());
        *self.write_lock() = fresh;
    }

    /// Replaces the state with its seed and saves it.
    pub fn reset(&self) -> SaveOutcome {
        *self.write_lock() = S::seed();
        self.save()
    }

    fn hydrate(storage: &dyn KeyValueStorage) -> S {
        match storage.get(S::KEY) {
            Ok(None) => {
                debug!("[PersistedStore] '{}' not found, using seed", S::KEY);
                S::seed()
            }
            Ok(Some(raw)) => match decode::<S>(&raw) {
                Ok(state) => {
                    debug!("[PersistedStore] Loaded '{}'", S::KEY);
                    state.after_load()
                }
                Err(e) => {
                    warn!("[PersistedStore] Failed to parse '{}', using seed: {}", S::KEY, e);
                    S::seed()
                }
            },
            Err(e) => {
                warn!("[PersistedStore] Failed to read '{}', using seed: {}", S::KEY, e);
                S::seed()
            }
        }
    }

    fn save_inner(&self) -> (SaveOutcome, Option<ViolettaError>) {
        let mut snapshot = self.state();
        let full_len = snapshot.as_trimmable().map(|t| t.item_count());

        loop {
            let payload = match encode(&snapshot) {
                Ok(payload) => payload,
                Err(e) => {
                    warn!("[PersistedStore] Failed to serialize '{}': {}", S::KEY, e);
                    return (SaveOutcome::Abandoned, Some(e));
                }
            };

            let err = match self.storage.set(S::KEY, &payload) {
                Ok(()) => {
                    let kept = snapshot.as_trimmable().map(|t| t.item_count());
                    return match (full_len, kept) {
                        (Some(full_len), Some(kept)) if kept < full_len => {
                            warn!(
                                "[PersistedStore] '{}' saved after trimming to {} of {} items",
                                S::KEY,
                                kept,
                                full_len
                            );
                            (
                                SaveOutcome::Trimmed {
                                    kept,
                                    dropped: full_len - kept,
                                },
                                None,
                            )
                        }
                        _ => {
                            debug!("[PersistedStore] Saved '{}' ({} bytes)", S::KEY, payload.len());
                            (SaveOutcome::Saved, None)
                        }
                    };
                }
                Err(err) => err,
            };

            if !err.is_quota_exceeded() {
                warn!("[PersistedStore] Failed to save '{}': {}", S::KEY, err);
                return (SaveOutcome::Abandoned, Some(err));
            }

            let Some(list) = snapshot.as_trimmable() else {
                warn!("[PersistedStore] '{}' exceeds the storage quota", S::KEY);
                return (SaveOutcome::Abandoned, Some(err));
            };
            let len = list.item_count();
            if len <= 1 {
                warn!(
                    "[PersistedStore] '{}' does not fit even with {} item(s), giving up",
                    S::KEY,
                    len
                );
                return (SaveOutcome::Abandoned, Some(err));
            }
            // floor(len * 0.9), never below one
            list.keep_newest((len * 9 / 10).max(1));
        }
    }

    fn read_lock(&self) -> RwLockReadGuard<'_, S> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_lock(&self) -> RwLockWriteGuard<'_, S> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use violetta_core::chat::{ChatMessage, ChatRole, ChatState};
    use violetta_core::goal::GoalState;
    use violetta_core::journal::{JournalEntry, JournalState};
    use violetta_core::keys;

    fn entry(i: usize) -> JournalEntry {
        JournalEntry {
            id: format!("e{i}"),
            title: format!("Entry {i}"),
            date_iso: format!("2025-09-{:02}", i % 28 + 1),
            text: "x".repeat(40),
            ..JournalEntry::default()
        }
    }

    fn journal_of(n: usize) -> JournalState {
        // newest first
        JournalState::new((0..n).rev().map(entry).collect())
    }

    #[test]
    fn test_open_absent_key_uses_seed() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PersistedStore::<JournalState>::open(storage);
        assert_eq!(store.state(), JournalState::seed());
    }

    #[test]
    fn test_open_corrupt_payload_uses_seed() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set(keys::JOURNAL, "{not json").unwrap();
        let store = PersistedStore::<JournalState>::open(storage.clone());
        assert_eq!(store.state(), JournalState::seed());
        // corrupt payload is left alone until the next save
        assert_eq!(storage.get(keys::JOURNAL).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn test_mutate_persists_full_state() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PersistedStore::<GoalState>::open(storage.clone());
        let (goal, outcome) = store.mutate(|s| s.add("Walk", 1));
        assert_eq!(outcome, SaveOutcome::Saved);
        assert!(goal.is_some());

        let reopened = PersistedStore::<GoalState>::open(storage);
        assert_eq!(reopened.state().goals.len(), 1);
    }

    #[test]
    fn test_quota_trims_persisted_copy_only() {
        let full = crate::dto::encode(&journal_of(20)).unwrap();
        let storage = Arc::new(MemoryStorage::with_quota(keys::JOURNAL.len() + full.len() / 2));
        let store = PersistedStore::<JournalState>::open(storage.clone());

        let (_, outcome) = store.mutate(|s| *s = journal_of(20));
        let SaveOutcome::Trimmed { kept, dropped } = outcome else {
            panic!("expected trim, got {outcome:?}");
        };
        assert_eq!(kept + dropped, 20);
        assert!(kept >= 1 && kept < 20);
        assert_eq!(store.state().items.len(), 20);

        let persisted = PersistedStore::<JournalState>::open(storage);
        let items = persisted.state().items;
        assert_eq!(items.len(), kept);
        // newest entries survive
        assert_eq!(items[0].id, "e19");
    }

    #[test]
    fn test_trim_sequence_follows_ninety_percent_rule() {
        // 10 -> 9 -> 8 -> 7: one 60-byte message per step
        let mut chat = ChatState::default();
        for i in 0..10 {
            chat.push(ChatMessage::new(ChatRole::User, "y".repeat(60), i));
        }
        let mut seven = chat.clone();
        seven.items.drain(..3);
        let budget = keys::CHAT.len() + crate::dto::encode(&seven).unwrap().len();

        let storage = Arc::new(MemoryStorage::with_quota(budget));
        let store = PersistedStore::<ChatState>::open(storage.clone());
        let (_, outcome) = store.mutate(|s| *s = chat.clone());
        assert_eq!(outcome, SaveOutcome::Trimmed { kept: 7, dropped: 3 });

        let persisted = PersistedStore::<ChatState>::open(storage).state();
        assert_eq!(persisted.items.first().unwrap().ts, 3);
    }

    #[test]
    fn test_single_item_over_quota_is_abandoned() {
        let storage = Arc::new(MemoryStorage::with_quota(20));
        let store = PersistedStore::<JournalState>::open(storage.clone());
        let (_, outcome) = store.mutate(|s| *s = journal_of(1));
        assert_eq!(outcome, SaveOutcome::Abandoned);
        assert!(storage.get(keys::JOURNAL).unwrap().is_none());
        assert_eq!(store.state().items.len(), 1);
    }

    #[test]
    fn test_untrimmable_state_surfaces_quota_error() {
        let storage = Arc::new(MemoryStorage::with_quota(10));
        let store = PersistedStore::<GoalState>::open(storage);
        let err = store.try_mutate(|s| s.add("A goal that will never fit", 1)).unwrap_err();
        assert!(err.is_quota_exceeded());
        assert_eq!(store.state().goals.len(), 1);
    }

    #[test]
    fn test_reload_and_reset() {
        let storage = Arc::new(MemoryStorage::new());
        let store = PersistedStore::<GoalState>::open(storage.clone());
        storage
            .set(keys::GOALS, r#"[{"id":"g-9","text":"Sleep","createdAt":9}]"#)
            .unwrap();
        store.reload();
        assert_eq!(store.state().goals[0].id, "g-9");

        assert_eq!(store.reset(), SaveOutcome::Saved);
        assert!(store.state().goals.is_empty());
        assert!(storage.get(keys::GOALS).unwrap().unwrap().starts_with(r#"{"state""#));
    }
}
