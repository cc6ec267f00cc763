//! On-disk shape of a persisted state.
//!
//! Current format: `{"state": <S>, "version": <u32>}`. Two earlier list
//! shapes are still read: a bare JSON array and `{"v": N, "items": [...]}`.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use violetta_core::{PersistedState, Result, ViolettaError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PersistEnvelope<S> {
    pub state: S,
    pub version: u32,
}

/// Serializes `state` inside an envelope stamped with its current version.
pub fn encode<S: PersistedState>(state: &S) -> Result<String> {
    let envelope = PersistEnvelope {
        state,
        version: S::VERSION,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parses a stored payload in any supported shape.
pub fn decode<S: PersistedState>(raw: &str) -> Result<S> {
    let value: JsonValue = serde_json::from_str(raw)?;

    if let JsonValue::Object(map) = &value {
        if let Some(state) = map.get("state") {
            let version = map.get("version").and_then(JsonValue::as_u64);
            if version.is_some_and(|v| v > S::VERSION as u64) {
                tracing::debug!(
                    "[PersistEnvelope] '{}' written by newer version {:?}, reading as {}",
                    S::KEY,
                    version,
                    S::VERSION
                );
            }
            return Ok(serde_json::from_value(state.clone())?);
        }
    }

    S::from_legacy(&value).ok_or_else(|| ViolettaError::Serialization {
        format: "JSON".to_string(),
        message: format!("Unrecognized payload shape for '{}'", S::KEY),
    })
}
