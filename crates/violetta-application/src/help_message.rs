//! Ready-to-send help message for the primary contact.

use std::sync::Arc;

use serde::Serialize;
use violetta_core::contact::{EmergencyState, TrustedContact};
use violetta_core::help::HelpMessageTemplate;
use violetta_infrastructure::{PersistedStore, SaveOutcome};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HelpMessage {
    pub contact: TrustedContact,
    pub text: String,
}

pub struct HelpMessageService {
    template: Arc<PersistedStore<HelpMessageTemplate>>,
    emergency: Arc<PersistedStore<EmergencyState>>,
}

impl HelpMessageService {
    pub fn new(
        template: Arc<PersistedStore<HelpMessageTemplate>>,
        emergency: Arc<PersistedStore<EmergencyState>>,
    ) -> Self {
        Self {
            template,
            emergency,
        }
    }

    pub fn template(&self) -> String {
        self.template.read(|t| t.text.clone())
    }

    pub fn set_template(&self, text: &str) -> SaveOutcome {
        self.template.mutate(|t| t.set_text(text)).1
    }

    /// The template filled in for the primary emergency contact, if any.
    pub fn for_primary_contact(&self) -> Option<HelpMessage> {
        let contact = self.emergency.read(|e| e.contacts.primary().cloned())?;
        let text = self.template.read(|t| t.render(&contact.name));
        Some(HelpMessage { contact, text })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use violetta_core::contact::ContactDraft;
    use violetta_infrastructure::MemoryStorage;

    fn service() -> HelpMessageService {
        let storage = Arc::new(MemoryStorage::new());
        HelpMessageService::new(
            Arc::new(PersistedStore::open(storage.clone())),
            Arc::new(PersistedStore::open(storage)),
        )
    }

    #[test]
    fn test_renders_for_primary() {
        let service = service();
        service.set_template("{name}, please call me.");
        let id = service
            .emergency
            .mutate(|e| {
                e.contacts.add(ContactDraft {
                    name: "Bea".to_string(),
                    is_primary: true,
                    ..ContactDraft::default()
                })
            })
            .0
            .unwrap()
            .id;

        let message = service.for_primary_contact().unwrap();
        assert_eq!(message.contact.id, id);
        assert_eq!(message.text, "Bea, please call me.");
    }

    #[test]
    fn test_no_contacts() {
        let service = service();
        service.emergency.mutate(|e| {
            let ids: Vec<String> = e.contacts.as_slice().iter().map(|c| c.id.clone()).collect();
            for id in ids {
                e.contacts.remove(&id);
            }
        });
        assert!(service.for_primary_contact().is_none());
    }
}
