//! A list of trusted contacts with at most one primary.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{Result, ViolettaError};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrustedContact {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_primary: bool,
}

/// Fields for a new contact; the id is assigned on insert.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactDraft {
    pub name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub is_primary: bool,
}

/// Partial update. `Some("")` clears `phone` or `notes`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactPatch {
    pub name: Option<String>,
    pub phone: Option<String>,
    pub notes: Option<String>,
    pub is_primary: Option<bool>,
}

fn non_blank(value: String) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContactBook(Vec<TrustedContact>);

impl ContactBook {
    pub fn new(contacts: Vec<TrustedContact>) -> Self {
        Self(contacts)
    }

    pub fn as_slice(&self) -> &[TrustedContact] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&TrustedContact> {
        self.0.iter().find(|c| c.id == id)
    }

    /// Appends a contact. Adding a primary contact demotes the others.
    pub fn add(&mut self, draft: ContactDraft) -> Result<TrustedContact> {
        let name = draft.name.trim();
        if name.is_empty() {
            return Err(ViolettaError::validation("name", "Contact name is required"));
        }
        let contact = TrustedContact {
            id: Uuid::new_v4().to_string(),
            name: name.to_string(),
            phone: draft.phone.and_then(non_blank),
            notes: draft.notes.and_then(non_blank),
            is_primary: draft.is_primary,
        };
        if contact.is_primary {
            self.demote_all();
        }
        self.0.push(contact.clone());
        Ok(contact)
    }

    pub fn update(&mut self, id: &str, patch: ContactPatch) -> Result<&TrustedContact> {
        let index = self
            .0
            .iter()
            .position(|c| c.id == id)
            .ok_or_else(|| ViolettaError::not_found("contact", id))?;

        if patch.is_primary == Some(true) {
            self.demote_all();
        }

        let contact = &mut self.0[index];
        if let Some(name) = patch.name.and_then(non_blank) {
            contact.name = name;
        }
        if let Some(phone) = patch.phone {
            contact.phone = non_blank(phone);
        }
        if let Some(notes) = patch.notes {
            contact.notes = non_blank(notes);
        }
        if let Some(is_primary) = patch.is_primary {
            contact.is_primary = is_primary;
        }
        Ok(&self.0[index])
    }

    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|c| c.id != id);
        self.0.len() != before
    }

    /// Marks `id` as the only primary contact.
    pub fn set_primary(&mut self, id: &str) -> Result<()> {
        if self.get(id).is_none() {
            return Err(ViolettaError::not_found("contact", id));
        }
        for contact in &mut self.0 {
            contact.is_primary = contact.id == id;
        }
        Ok(())
    }

    /// The flagged primary contact, or the first contact when none is flagged.
    pub fn primary(&self) -> Option<&TrustedContact> {
        self.0.iter().find(|c| c.is_primary).or_else(|| self.0.first())
    }

    fn demote_all(&mut self) {
        for contact in &mut self.0 {
            contact.is_primary = false;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, primary: bool) -> ContactDraft {
        ContactDraft {
            name: name.to_string(),
            is_primary: primary,
            ..ContactDraft::default()
        }
    }

    fn primaries(book: &ContactBook) -> usize {
        book.as_slice().iter().filter(|c| c.is_primary).count()
    }

    #[test]
    fn test_add_requires_name() {
        let mut book = ContactBook::default();
        let err = book.add(draft("  ", false)).unwrap_err();
        assert_eq!(err.field(), Some("name"));
    }

    #[test]
    fn test_set_primary_leaves_exactly_one() {
        let mut book = ContactBook::default();
        let a = book.add(draft("Ana", true)).unwrap();
        let b = book.add(draft("Bea", false)).unwrap();
        book.set_primary(&b.id).unwrap();
        assert_eq!(primaries(&book), 1);
        assert_eq!(book.primary().unwrap().id, b.id);
        assert!(!book.get(&a.id).unwrap().is_primary);
    }

    #[test]
    fn test_adding_primary_demotes_existing() {
        let mut book = ContactBook::default();
        book.add(draft("Ana", true)).unwrap();
        let b = book.add(draft("Bea", true)).unwrap();
        assert_eq!(primaries(&book), 1);
        assert_eq!(book.primary().unwrap().id, b.id);
    }

    #[test]
    fn test_primary_falls_back_to_first() {
        let mut book = ContactBook::default();
        assert!(book.primary().is_none());
        let a = book.add(draft("Ana", false)).unwrap();
        book.add(draft("Bea", false)).unwrap();
        assert_eq!(book.primary().unwrap().id, a.id);
    }

    #[test]
    fn test_update_patch() {
        let mut book = ContactBook::default();
        let a = book
            .add(ContactDraft {
                name: "Ana".to_string(),
                phone: Some("+5211111111".to_string()),
                ..ContactDraft::default()
            })
            .unwrap();
        let updated = book
            .update(
                &a.id,
                ContactPatch {
                    phone: Some(String::new()),
                    notes: Some("Sister".to_string()),
                    ..ContactPatch::default()
                },
            )
            .unwrap();
        assert_eq!(updated.phone, None);
        assert_eq!(updated.notes.as_deref(), Some("Sister"));
        assert_eq!(updated.name, "Ana");

        assert!(book.update("missing", ContactPatch::default()).unwrap_err().is_not_found());
    }

    #[test]
    fn test_set_primary_unknown_id() {
        let mut book = ContactBook::default();
        assert!(book.set_primary("nope").unwrap_err().is_not_found());
    }

    #[test]
    fn test_missing_is_primary_defaults_false() {
        let contact: TrustedContact =
            serde_json::from_str(r#"{"id":"x","name":"Ana"}"#).unwrap();
        assert!(!contact.is_primary);
    }
}
