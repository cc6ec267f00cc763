pub mod chat;
pub mod checkin;
pub mod config;
pub mod contact;
pub mod datetime;
pub mod error;
pub mod exercise;
pub mod goal;
pub mod help;
pub mod journal;
pub mod keys;
pub mod onboarding;
pub mod persist;
pub mod session;
pub mod stats;
pub mod storage;
pub mod validation;

// Re-export common error type
pub use error::{Result, ViolettaError};
pub use persist::{PersistedState, Trimmable};
pub use storage::KeyValueStorage;
