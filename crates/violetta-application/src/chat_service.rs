//! Conversation with the simulated assistant.

use std::sync::Arc;

use tokio::sync::Mutex;
use violetta_core::chat::{CANNED_REPLY, ChatMessage, ChatRole, ChatState};
use violetta_core::datetime::now_millis;
use violetta_core::{PersistedState, Result, ViolettaError};
use violetta_infrastructure::{PersistedStore, SaveOutcome};

use crate::deferred::DeferredSaver;
use crate::latency::Latency;

pub struct ChatService {
    store: Arc<PersistedStore<ChatState>>,
    saver: DeferredSaver<ChatState>,
    latency: Latency,
    /// Held while the assistant is "typing"; one exchange at a time.
    typing: Mutex<()>,
}

impl ChatService {
    pub fn new(store: Arc<PersistedStore<ChatState>>, latency: Latency) -> Self {
        Self {
            saver: DeferredSaver::new(store.clone()),
            store,
            latency,
            typing: Mutex::new(()),
        }
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.store.read(|s| s.items.clone())
    }

    pub fn is_typing(&self) -> bool {
        self.typing.try_lock().is_err()
    }

    /// Posts the user's message, waits the typing delay, then posts the reply.
    pub async fn send(&self, text: &str) -> Result<(ChatMessage, ChatMessage)> {
        let text = text.trim();
        if text.is_empty() {
            return Err(ViolettaError::validation("message", "Write a message first"));
        }
        let _typing = self.typing.lock().await;

        let sent = self
            .store
            .modify(|s| s.push(ChatMessage::new(ChatRole::User, text, now_millis())));
        self.saver.schedule();

        tokio::time::sleep(self.latency.typing_delay()).await;

        let reply = self.store.modify(|s| {
            s.push(ChatMessage::new(ChatRole::Assistant, CANNED_REPLY, now_millis()))
        });
        self.saver.schedule();
        Ok((sent, reply))
    }

    /// Replaces the transcript with the demo conversation.
    pub async fn clear(&self) {
        self.store.modify(|s| *s = ChatState::seed());
        self.saver.schedule();
    }

    pub async fn flush(&self) -> Option<SaveOutcome> {
        self.saver.flush().await
    }
}
