//! Journal editing with deferred persistence.

use std::sync::Arc;

use violetta_core::datetime::{now_iso, now_millis};
use violetta_core::journal::{DEFAULT_TITLE, JournalEntry, JournalState, infer_note};
use violetta_core::{Result, ViolettaError};
use violetta_infrastructure::{PersistedStore, SaveOutcome};

use crate::deferred::DeferredSaver;

/// Fields from the entry editor.
#[derive(Debug, Clone, Default)]
pub struct EntryDraft {
    pub title: String,
    pub text: String,
    pub emoji: Option<String>,
    pub mood: Option<u8>,
}

pub struct JournalService {
    store: Arc<PersistedStore<JournalState>>,
    saver: DeferredSaver<JournalState>,
}

impl JournalService {
    pub fn new(store: Arc<PersistedStore<JournalState>>) -> Self {
        Self {
            saver: DeferredSaver::new(store.clone()),
            store,
        }
    }

    pub fn entries(&self) -> Vec<JournalEntry> {
        self.store.read(|s| s.items.clone())
    }

    /// Creates an entry, or rewrites `editing_id` in place keeping its id and date.
    pub async fn save_entry(
        &self,
        draft: EntryDraft,
        editing_id: Option<&str>,
    ) -> Result<JournalEntry> {
        let text = draft.text.trim();
        if text.is_empty() {
            return Err(ViolettaError::validation("text", "Write something before saving"));
        }
        if let Some(mood) = draft.mood {
            if !(violetta_core::stats::MOOD_MIN..=violetta_core::stats::MOOD_MAX).contains(&mood) {
                return Err(ViolettaError::validation("mood", "Mood must be between 1 and 5"));
            }
        }
        let title = match draft.title.trim() {
            "" => DEFAULT_TITLE.to_string(),
            t => t.to_string(),
        };
        let note = infer_note(text);

        let saved = self.store.modify(|state| -> Result<JournalEntry> {
            match editing_id {
                Some(id) => {
                    let mut entry = state
                        .get(id)
                        .cloned()
                        .ok_or_else(|| ViolettaError::not_found("journal entry", id))?;
                    entry.title = title;
                    entry.text = text.to_string();
                    if draft.emoji.is_some() {
                        entry.emoji = draft.emoji;
                    }
                    entry.note = note;
                    if draft.mood.is_some() {
                        entry.mood = draft.mood;
                    }
                    state.update(entry.clone())?;
                    Ok(entry)
                }
                None => {
                    let base = format!("e-{}", now_millis());
                    let mut id = base.clone();
                    let mut suffix = 1;
                    while state.contains_id(&id) {
                        id = format!("{}-{}", base, suffix);
                        suffix += 1;
                    }
                    let entry = JournalEntry {
                        id,
                        title,
                        date_iso: now_iso(),
                        emoji: draft.emoji,
                        text: text.to_string(),
                        note,
                        mood: draft.mood,
                    };
                    state.add(entry.clone());
                    Ok(entry)
                }
            }
        })?;

        self.saver.schedule();
        Ok(saved)
    }

    pub async fn remove(&self, id: &str) -> Result<JournalEntry> {
        let removed = self
            .store
            .modify(|s| s.remove(id))
            .ok_or_else(|| ViolettaError::not_found("journal entry", id))?;
        self.saver.schedule();
        Ok(removed)
    }

    pub fn search(&self, query: &str) -> Vec<JournalEntry> {
        self.store
            .read(|s| s.search(query).into_iter().cloned().collect())
    }

    /// Writes any pending change now.
    pub async fn flush(&self) -> Option<SaveOutcome> {
        self.saver.flush().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use violetta_core::KeyValueStorage;
    use violetta_core::keys;
    use violetta_infrastructure::MemoryStorage;

    fn service() -> (Arc<MemoryStorage>, JournalService) {
        let storage = Arc::new(MemoryStorage::new());
        let store = Arc::new(PersistedStore::open(storage.clone()));
        (storage, JournalService::new(store))
    }

    fn draft(title: &str, text: &str) -> EntryDraft {
        EntryDraft {
            title: title.to_string(),
            text: text.to_string(),
            ..EntryDraft::default()
        }
    }

    #[tokio::test]
    async fn test_new_entry_defaults() {
        let (storage, service) = service();
        let entry = service
            .save_entry(draft("  ", "  Thank you, sun.  "), None)
            .await
            .unwrap();
        assert_eq!(entry.title, DEFAULT_TITLE);
        assert_eq!(entry.text, "Thank you, sun.");
        assert!(entry.id.starts_with("e-"));
        assert!(entry.note.is_some());
        assert_eq!(service.entries()[0].id, entry.id);

        assert!(storage.get(keys::JOURNAL).unwrap().is_none());
        assert_eq!(service.flush().await, Some(SaveOutcome::Saved));
        assert!(storage.get(keys::JOURNAL).unwrap().unwrap().contains(&entry.id));
    }

    #[tokio::test]
    async fn test_blank_text_rejected() {
        let (_, service) = service();
        let err = service.save_entry(draft("Title", "   "), None).await.unwrap_err();
        assert_eq!(err.field(), Some("text"));
        assert_eq!(service.entries().len(), 2);
    }

    #[tokio::test]
    async fn test_edit_keeps_id_and_date() {
        let (_, service) = service();
        let edited = service
            .save_entry(draft("New title", "I said no today."), Some("e1"))
            .await
            .unwrap();
        assert_eq!(edited.id, "e1");
        assert_eq!(edited.date_iso, "2025-10-12");
        assert_eq!(edited.title, "New title");
        assert!(edited.note.unwrap().contains("boundaries"));
        assert_eq!(edited.mood, Some(4));

        let err = service
            .save_entry(draft("x", "y"), Some("missing"))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_edit_without_emoji_keeps_previous() {
        let (_, service) = service();
        let edited = service
            .save_entry(draft("Still grateful", "Another calm day."), Some("e1"))
            .await
            .unwrap();
        assert_eq!(edited.emoji.as_deref(), Some("🌸"));

        let replaced = service
            .save_entry(
                EntryDraft {
                    emoji: Some("☀️".to_string()),
                    ..draft("Still grateful", "Another calm day.")
                },
                Some("e1"),
            )
            .await
            .unwrap();
        assert_eq!(replaced.emoji.as_deref(), Some("☀️"));
    }

    #[tokio::test]
    async fn test_remove_and_search() {
        let (_, service) = service();
        service.remove("e2").await.unwrap();
        assert!(service.remove("e2").await.unwrap_err().is_not_found());
        assert_eq!(service.search("GRATEFUL").len(), 1);
        assert_eq!(service.search("").len(), 1);
        assert!(service.search("boundaries").is_empty());
    }
}
