//! Journal domain models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::datetime::parse_local_day;
use crate::error::{Result, ViolettaError};
use crate::keys;
use crate::persist::{PersistedState, Trimmable, legacy_items};
use crate::stats::DatedEntry;

/// Title used when the user leaves it blank.
pub const DEFAULT_TITLE: &str = "My reflection";

/// A single journal entry.
///
/// `date_iso` holds either a `YYYY-MM-DD` day or a full RFC 3339 timestamp.
/// Fields default when missing so that one malformed entry from a restored
/// backup does not discard the whole list; [`JournalState::sanitized`]
/// drops such entries instead.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, rename = "dateISO")]
    pub date_iso: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emoji: Option<String>,
    #[serde(default)]
    pub text: String,
    /// Derived reflection note, recomputed on every save.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Mood on the 1..=5 scale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mood: Option<u8>,
}

impl JournalEntry {
    fn matches(&self, query: &str) -> bool {
        self.title.to_lowercase().contains(query)
            || self.text.to_lowercase().contains(query)
            || self
                .note
                .as_deref()
                .is_some_and(|n| n.to_lowercase().contains(query))
    }
}

impl DatedEntry for JournalEntry {
    fn day(&self) -> Option<NaiveDate> {
        parse_local_day(&self.date_iso)
    }

    fn mood(&self) -> Option<u8> {
        self.mood
    }
}

/// Persisted journal, newest entry first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct JournalState {
    #[serde(default)]
    pub items: Vec<JournalEntry>,
}

impl JournalState {
    pub fn new(items: Vec<JournalEntry>) -> Self {
        Self { items }
    }

    /// Prepends an entry.
    pub fn add(&mut self, entry: JournalEntry) {
        self.items.insert(0, entry);
    }

    /// Replaces the entry with the same id.
    pub fn update(&mut self, entry: JournalEntry) -> Result<()> {
        let slot = self
            .items
            .iter_mut()
            .find(|e| e.id == entry.id)
            .ok_or_else(|| ViolettaError::not_found("journal entry", entry.id.clone()))?;
        *slot = entry;
        Ok(())
    }

    /// Removes an entry, returning it if present.
    pub fn remove(&mut self, id: &str) -> Option<JournalEntry> {
        let pos = self.items.iter().position(|e| e.id == id)?;
        Some(self.items.remove(pos))
    }

    pub fn get(&self, id: &str) -> Option<&JournalEntry> {
        self.items.iter().find(|e| e.id == id)
    }

    pub fn contains_id(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Case-insensitive search over title, text and note. A blank query
    /// returns every entry.
    pub fn search(&self, query: &str) -> Vec<&JournalEntry> {
        let query = query.trim().to_lowercase();
        if query.is_empty() {
            return self.items.iter().collect();
        }
        self.items.iter().filter(|e| e.matches(&query)).collect()
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Drops entries without an id or text and orders the rest newest first.
    pub fn sanitized(mut self) -> Self {
        let before = self.items.len();
        self.items
            .retain(|e| !e.id.trim().is_empty() && !e.text.trim().is_empty());
        if self.items.len() != before {
            tracing::debug!(
                "[JournalState] Dropped {} malformed entries",
                before - self.items.len()
            );
        }
        self.items.sort_by(|a, b| b.date_iso.cmp(&a.date_iso));
        self
    }
}

impl Trimmable for JournalState {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn keep_newest(&mut self, n: usize) {
        self.items.truncate(n);
    }
}

impl PersistedState for JournalState {
    const KEY: &'static str = keys::JOURNAL;
    const VERSION: u32 = 1;

    fn seed() -> Self {
        Self::new(vec![
            JournalEntry {
                id: "e1".to_string(),
                title: "Feeling grateful today".to_string(),
                date_iso: "2025-10-12".to_string(),
                emoji: Some("🌸".to_string()),
                text: "Today I could see how far I've come. I feel more connected to myself and to my decisions.".to_string(),
                note: Some("You express gratitude and self-awareness. Keep going!".to_string()),
                mood: Some(4),
            },
            JournalEntry {
                id: "e2".to_string(),
                title: "Thinking about boundaries".to_string(),
                date_iso: "2025-10-11".to_string(),
                emoji: Some("🌙".to_string()),
                text: "I learned it's okay to say no. I don't have to please everyone to be worth something. It's a hard step but a necessary one.".to_string(),
                note: Some("Recurring theme: setting boundaries. Want to explore it further?".to_string()),
                mood: Some(3),
            },
        ])
    }

    fn from_legacy(value: &JsonValue) -> Option<Self> {
        legacy_items(value).map(Self::new)
    }

    fn after_load(self) -> Self {
        self.sanitized()
    }

    fn as_trimmable(&mut self) -> Option<&mut dyn Trimmable> {
        Some(self)
    }
}
