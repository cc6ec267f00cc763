//! Emergency contacts, resource links, and the trusted-contacts network.

mod book;
mod state;

pub use book::{ContactBook, ContactDraft, ContactPatch, TrustedContact};
pub use state::{EmergencyState, ResourceLink, TrustedContactsState};
