use anyhow::Result;
use violetta_core::contact::{ContactDraft, ContactPatch, TrustedContact};

use super::{App, report_outcome};

pub(super) fn print_contact(contact: &TrustedContact) {
    let star = if contact.is_primary { "⭐" } else { "  " };
    let phone = contact.phone.as_deref().unwrap_or("no phone");
    println!("{} [{}] {} ({})", star, contact.id, contact.name, phone);
    if let Some(notes) = &contact.notes {
        println!("     {}", notes);
    }
}

pub fn add(
    app: &App,
    name: String,
    phone: Option<String>,
    notes: Option<String>,
    primary: bool,
) -> Result<()> {
    let draft = ContactDraft {
        name,
        phone,
        notes,
        is_primary: primary,
    };
    let (added, outcome) = app.stores.emergency.mutate(|s| s.contacts.add(draft));
    let contact = added?;
    report_outcome(outcome);
    println!("✅ Added contact {}", contact.name);
    Ok(())
}

pub fn edit(app: &App, id: &str, patch: ContactPatch) -> Result<()> {
    let (updated, outcome) = app
        .stores
        .emergency
        .mutate(|s| s.contacts.update(id, patch).cloned());
    let contact = updated?;
    report_outcome(outcome);
    print_contact(&contact);
    Ok(())
}

pub fn list(app: &App) {
    let state = app.stores.emergency.state();
    println!("Contacts");
    for contact in state.contacts.as_slice() {
        print_contact(contact);
    }
    println!("\nResources");
    for link in &state.resources {
        println!("  [{}] {} → {}", link.id, link.label, link.url);
    }
    let sharing = if state.share_status_public { "on" } else { "off" };
    println!("\nStatus sharing: {}", sharing);
}

pub fn set_primary(app: &App, id: &str) -> Result<()> {
    let (result, outcome) = app.stores.emergency.mutate(|s| s.contacts.set_primary(id));
    result?;
    report_outcome(outcome);
    println!("⭐ {} is now your primary contact", id);
    Ok(())
}

pub fn remove(app: &App, id: &str) -> Result<()> {
    let (removed, outcome) = app.stores.emergency.mutate(|s| s.contacts.remove(id));
    if !removed {
        anyhow::bail!("No contact with id '{}'", id);
    }
    report_outcome(outcome);
    println!("🗑️  Removed contact {}", id);
    Ok(())
}

pub fn add_resource(app: &App, label: &str, url: &str) -> Result<()> {
    if label.trim().is_empty() || url.trim().is_empty() {
        anyhow::bail!("A resource needs both a label and a URL");
    }
    let (link, outcome) = app.stores.emergency.mutate(|s| s.add_resource(label, url));
    report_outcome(outcome);
    println!("🔗 Added resource {} ({})", link.label, link.id);
    Ok(())
}

pub fn remove_resource(app: &App, id: &str) -> Result<()> {
    let (removed, outcome) = app.stores.emergency.mutate(|s| s.remove_resource(id));
    if !removed {
        anyhow::bail!("No resource with id '{}'", id);
    }
    report_outcome(outcome);
    println!("🗑️  Removed resource {}", id);
    Ok(())
}

pub fn share(app: &App, enabled: bool) {
    let (_, outcome) = app
        .stores
        .emergency
        .mutate(|s| s.set_share_status_public(enabled));
    report_outcome(outcome);
    let state = if enabled { "on" } else { "off" };
    println!("Status sharing is now {}", state);
}
