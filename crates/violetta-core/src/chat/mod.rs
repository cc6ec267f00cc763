//! Chat transcript with the simulated assistant.

mod model;

pub use model::{CANNED_REPLY, ChatMessage, ChatRole, ChatState};
