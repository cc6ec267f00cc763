use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use strum::Display;

use crate::keys;
use crate::persist::{PersistedState, Trimmable, legacy_items};

/// The assistant's only reply.
pub const CANNED_REPLY: &str = "Generic reply \u{1F916}\n\nIn an upcoming version, Violetta AI will answer you personally. For now, thank you for sharing. Would you like to write it in your journal or try a calming technique?";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub role: ChatRole,
    pub text: String,
    /// Unix milliseconds.
    pub ts: i64,
}

impl ChatMessage {
    /// Ids are `u-<ts>` for the user and `a-<ts>` for the assistant.
    pub fn new(role: ChatRole, text: impl Into<String>, ts: i64) -> Self {
        let prefix = match role {
            ChatRole::User => "u",
            ChatRole::Assistant => "a",
        };
        Self {
            id: format!("{}-{}", prefix, ts),
            role,
            text: text.into(),
            ts,
        }
    }
}

/// Transcript, oldest message first.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChatState {
    #[serde(default)]
    pub items: Vec<ChatMessage>,
}

impl ChatState {
    /// Demo conversation ending `now_millis`.
    pub fn seed_at(now_millis: i64) -> Self {
        let msg = |id: &str, role, ago: i64, text: &str| ChatMessage {
            id: id.to_string(),
            role,
            text: text.to_string(),
            ts: now_millis - ago,
        };
        use ChatRole::*;
        Self {
            items: vec![
                msg("m1", Assistant, 50_000, "Hi \u{1F44B} How are you feeling today?"),
                msg("m2", User, 40_000, "Hi Violetta... today I feel a bit confused and sad."),
                msg(
                    "m3",
                    Assistant,
                    35_000,
                    "I'm listening. I'm sorry you feel this way, it's completely valid. Is there anything about that confusion you'd like to share?",
                ),
                msg(
                    "m4",
                    User,
                    20_000,
                    "It's about my relationship. I feel like I give a lot and don't get the same back, and I don't know what to do anymore.",
                ),
                msg(
                    "m5",
                    Assistant,
                    10_000,
                    "I understand that feeling of imbalance. It's exhausting.\n\nRemember that your feelings matter. What would you like to do now? We can explore it together.",
                ),
            ],
        }
    }

    /// Appends a message, bumping its id when a message with the same id exists.
    pub fn push(&mut self, mut message: ChatMessage) -> ChatMessage {
        let base = message.id.clone();
        let mut suffix = 1;
        while self.items.iter().any(|m| m.id == message.id) {
            message.id = format!("{}-{}", base, suffix);
            suffix += 1;
        }
        self.items.push(message.clone());
        message
    }

    pub fn last(&self) -> Option<&ChatMessage> {
        self.items.last()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Trimmable for ChatState {
    fn item_count(&self) -> usize {
        self.items.len()
    }

    fn keep_newest(&mut self, n: usize) {
        let excess = self.items.len().saturating_sub(n);
        self.items.drain(..excess);
    }
}

impl PersistedState for ChatState {
    const KEY: &'static str = keys::CHAT;
    const VERSION: u32 = 1;

    fn seed() -> Self {
        Self::seed_at(crate::datetime::now_millis())
    }

    fn from_legacy(value: &JsonValue) -> Option<Self> {
        legacy_items(value).map(|items| Self { items })
    }

    fn after_load(self) -> Self {
        if self.items.is_empty() { Self::seed() } else { self }
    }

    fn as_trimmable(&mut self) -> Option<&mut dyn Trimmable> {
        Some(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_seed_is_oldest_first() {
        let state = ChatState::seed_at(100_000);
        assert_eq!(state.len(), 5);
        assert!(state.items.windows(2).all(|w| w[0].ts < w[1].ts));
        assert_eq!(state.last().unwrap().role, ChatRole::Assistant);
    }

    #[test]
    fn test_trim_drops_head() {
        let mut state = ChatState::seed_at(100_000);
        state.keep_newest(2);
        let ids: Vec<&str> = state.items.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["m4", "m5"]);
    }

    #[test]
    fn test_empty_loaded_transcript_is_reseeded() {
        let state = ChatState::default().after_load();
        assert_eq!(state.len(), 5);
    }

    #[test]
    fn test_push_keeps_ids_unique() {
        let mut state = ChatState::default();
        let a = state.push(ChatMessage::new(ChatRole::User, "hi", 7));
        let b = state.push(ChatMessage::new(ChatRole::User, "again", 7));
        assert_eq!(a.id, "u-7");
        assert_eq!(b.id, "u-7-1");
    }

    #[test]
    fn test_legacy_versioned_object() {
        let legacy = json!({"v": 1, "items": [{"id": "u-1", "role": "user", "text": "hola", "ts": 1}]});
        let state = ChatState::from_legacy(&legacy).unwrap();
        assert_eq!(state.items[0].role, ChatRole::User);
    }
}
