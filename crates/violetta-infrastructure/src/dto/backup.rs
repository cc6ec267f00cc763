//! Backup file format.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

/// Application name every backup must carry.
pub const BACKUP_APP: &str = "Violetta";

pub const BACKUP_VERSION: u32 = 1;

/// A full export. `stores` maps every known key to its parsed payload,
/// or `null` when the key is absent or unreadable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Backup {
    pub app: String,
    pub version: u32,
    pub exported_at: String,
    pub stores: Map<String, JsonValue>,
}
