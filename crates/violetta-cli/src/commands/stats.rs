use anyhow::Result;
use violetta_application::Insights;
use violetta_core::datetime::today_local;

use super::App;

pub fn show(app: &App, json: bool) -> Result<()> {
    let entries = app.stores.journal.read(|s| s.items.clone());
    let contacts = app.stores.trusted_contacts.read(|s| s.contacts.len());
    let summary = Insights::summarize(&entries, contacts, today_local());

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }

    println!("🔥 Current streak: {} days", summary.current_streak);
    println!("🏆 Best streak:    {} days", summary.best_streak);
    println!("📓 {} entries over {} days", summary.entry_count, summary.days_with_entries);

    let week: String = summary
        .last_7_days
        .iter()
        .map(|day| if day.has_entry { '●' } else { '○' })
        .collect();
    println!("📅 Last 7 days:    {}", week);

    println!("\nMood");
    for (mood, count) in &summary.mood_histogram {
        println!("  {} {}", mood, "▇".repeat(*count));
    }

    println!("\nBadges");
    for badge in &summary.badges {
        let mark = if badge.achieved { "✅" } else { "⬜" };
        println!("  {} {}", mark, badge.kind.label());
    }
    Ok(())
}
