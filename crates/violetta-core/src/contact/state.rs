//! Persisted contact states.

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;
use uuid::Uuid;

use super::book::{ContactBook, TrustedContact};
use crate::keys;
use crate::persist::{PersistedState, legacy_items};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceLink {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Emergency screen state: the contacts to reach and quick resources.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyState {
    #[serde(default)]
    pub share_status_public: bool,
    #[serde(default)]
    pub contacts: ContactBook,
    #[serde(default)]
    pub resources: Vec<ResourceLink>,
}

impl EmergencyState {
    pub fn add_resource(&mut self, label: &str, url: &str) -> ResourceLink {
        let link = ResourceLink {
            id: Uuid::new_v4().to_string(),
            label: label.trim().to_string(),
            url: url.trim().to_string(),
        };
        self.resources.push(link.clone());
        link
    }

    pub fn remove_resource(&mut self, id: &str) -> bool {
        let before = self.resources.len();
        self.resources.retain(|r| r.id != id);
        self.resources.len() != before
    }

    pub fn set_share_status_public(&mut self, value: bool) {
        self.share_status_public = value;
    }

    /// Restores the seeded contact and resource.
    pub fn clear(&mut self) {
        *self = Self::seed();
    }
}

impl PersistedState for EmergencyState {
    const KEY: &'static str = keys::EMERGENCY;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self {
            share_status_public: false,
            contacts: ContactBook::new(vec![TrustedContact {
                id: "c1".to_string(),
                name: "Primary contact".to_string(),
                phone: None,
                notes: None,
                is_primary: true,
            }]),
            resources: vec![ResourceLink {
                id: "r1".to_string(),
                label: "Breathe now (this app)".to_string(),
                url: "/dashboard/emergency".to_string(),
            }],
        }
    }
}

/// The trusted-contacts network counted on the journey view.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TrustedContactsState {
    #[serde(default)]
    pub contacts: ContactBook,
}

impl PersistedState for TrustedContactsState {
    const KEY: &'static str = keys::TRUSTED_CONTACTS;
    const VERSION: u32 = 0;

    fn seed() -> Self {
        Self::default()
    }

    fn from_legacy(value: &JsonValue) -> Option<Self> {
        legacy_items(value).map(|contacts| Self {
            contacts: ContactBook::new(contacts),
        })
    }
}
