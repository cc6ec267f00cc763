use anyhow::Result;
use violetta_application::{EntryDraft, JournalService};
use violetta_core::journal::JournalEntry;

use super::{App, report_outcome};

fn print_entry(entry: &JournalEntry) {
    let emoji = entry.emoji.as_deref().unwrap_or("📝");
    let mood = entry.mood.map(|m| format!(" (mood {})", m)).unwrap_or_default();
    println!("{} [{}] {} · {}{}", emoji, entry.id, entry.title, entry.date_iso, mood);
    println!("   {}", entry.text);
    if let Some(note) = &entry.note {
        println!("   💡 {}", note);
    }
}

pub async fn save(
    app: &App,
    editing_id: Option<&str>,
    title: String,
    text: String,
    emoji: Option<String>,
    mood: Option<u8>,
) -> Result<()> {
    let service = JournalService::new(app.stores.journal.clone());
    let draft = EntryDraft {
        title,
        text,
        emoji,
        mood,
    };
    let entry = service.save_entry(draft, editing_id).await?;
    if let Some(outcome) = service.flush().await {
        report_outcome(outcome);
    }

    let verb = if editing_id.is_some() { "Updated" } else { "Saved" };
    println!("✅ {} entry {}", verb, entry.id);
    Ok(())
}

pub fn list(app: &App) {
    let service = JournalService::new(app.stores.journal.clone());
    let entries = service.entries();
    if entries.is_empty() {
        println!("No entries yet. Write one with `violetta journal add`.");
        return;
    }
    for entry in &entries {
        print_entry(entry);
    }
}

pub async fn remove(app: &App, id: &str) -> Result<()> {
    let service = JournalService::new(app.stores.journal.clone());
    let removed = service.remove(id).await?;
    if let Some(outcome) = service.flush().await {
        report_outcome(outcome);
    }
    println!("🗑️  Removed \"{}\"", removed.title);
    Ok(())
}

pub fn search(app: &App, query: &str) {
    let service = JournalService::new(app.stores.journal.clone());
    let found = service.search(query);
    println!("🔍 {} matching entries", found.len());
    for entry in &found {
        print_entry(entry);
    }
}
