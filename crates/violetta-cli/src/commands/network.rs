use anyhow::Result;
use violetta_core::contact::ContactDraft;

use super::contact::print_contact;
use super::{App, report_outcome};

pub fn add(app: &App, name: String, phone: Option<String>) -> Result<()> {
    let draft = ContactDraft {
        name,
        phone,
        ..ContactDraft::default()
    };
    let (added, outcome) = app.stores.trusted_contacts.mutate(|s| s.contacts.add(draft));
    let contact = added?;
    report_outcome(outcome);
    println!("🤝 {} joined your network", contact.name);
    Ok(())
}

pub fn list(app: &App) {
    let contacts = app.stores.trusted_contacts.read(|s| s.contacts.clone());
    if contacts.is_empty() {
        println!("Your network is empty. Add someone with `violetta network add`.");
        return;
    }
    for contact in contacts.as_slice() {
        print_contact(contact);
    }
}

pub fn remove(app: &App, id: &str) -> Result<()> {
    let (removed, outcome) = app.stores.trusted_contacts.mutate(|s| s.contacts.remove(id));
    if !removed {
        anyhow::bail!("No contact with id '{}'", id);
    }
    report_outcome(outcome);
    println!("🗑️  Removed {} from your network", id);
    Ok(())
}
