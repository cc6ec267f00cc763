//! Saves deferred to the next scheduler turn, coalescing bursts of changes.

use std::sync::{Arc, Mutex, PoisonError};

use tokio::task::JoinHandle;
use violetta_core::PersistedState;
use violetta_infrastructure::{PersistedStore, SaveOutcome};

/// Schedules background saves of one store. A newer schedule cancels the
/// pending one, so only the latest state is written.
pub struct DeferredSaver<S: PersistedState> {
    store: Arc<PersistedStore<S>>,
    pending: Mutex<Option<JoinHandle<SaveOutcome>>>,
}

impl<S: PersistedState> DeferredSaver<S> {
    pub fn new(store: Arc<PersistedStore<S>>) -> Self {
        Self {
            store,
            pending: Mutex::new(None),
        }
    }

    /// Queues a save. Must be called from within a tokio runtime.
    pub fn schedule(&self) {
        let store = self.store.clone();
        let handle = tokio::spawn(async move {
            tokio::task::yield_now().await;
            store.save()
        });
        let previous = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .replace(handle);
        if let Some(previous) = previous {
            previous.abort();
        }
    }

    /// Waits for the pending save, if any.
    pub async fn flush(&self) -> Option<SaveOutcome> {
        let pending = self
            .pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        match pending?.await {
            Ok(outcome) => Some(outcome),
            Err(e) => {
                tracing::warn!("[DeferredSaver] Pending save for '{}' failed: {}", S::KEY, e);
                Some(self.store.save())
            }
        }
    }
}

impl<S: PersistedState> Drop for DeferredSaver<S> {
    fn drop(&mut self) {
        let pending = self
            .pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        if let Some(handle) = pending {
            if !handle.is_finished() {
                handle.abort();
                self.store.save();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use violetta_core::KeyValueStorage;
    use violetta_core::goal::GoalState;
    use violetta_core::keys;
    use violetta_infrastructure::MemoryStorage;

    #[tokio::test]
    async fn test_latest_state_wins() {
        let storage = Arc::new(MemoryStorage::new());
        let store = Arc::new(PersistedStore::<GoalState>::open(storage.clone()));
        let saver = DeferredSaver::new(store.clone());

        store.modify(|g| g.add("one", 1));
        saver.schedule();
        store.modify(|g| g.add("two", 2));
        saver.schedule();
        assert!(storage.get(keys::GOALS).unwrap().is_none());

        assert_eq!(saver.flush().await, Some(SaveOutcome::Saved));
        let raw = storage.get(keys::GOALS).unwrap().unwrap();
        assert!(raw.contains("one") && raw.contains("two"));
        assert_eq!(saver.flush().await, None);
    }

    #[tokio::test]
    async fn test_drop_writes_pending_state() {
        let storage = Arc::new(MemoryStorage::new());
        let store = Arc::new(PersistedStore::<GoalState>::open(storage.clone()));
        {
            let saver = DeferredSaver::new(store.clone());
            store.modify(|g| g.add("keep me", 1));
            saver.schedule();
        }
        assert!(storage.get(keys::GOALS).unwrap().unwrap().contains("keep me"));
    }
}
