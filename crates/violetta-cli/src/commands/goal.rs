use anyhow::{Context, Result};
use violetta_core::datetime::now_millis;
use violetta_core::goal::SUGGESTED_GOALS;

use super::App;

pub fn add(app: &App, text: &str) -> Result<()> {
    let (goal, _) = app
        .stores
        .goals
        .try_mutate(|s| s.add(text, now_millis()))
        .context("Failed to save goals")?;
    match goal {
        Some(goal) => println!("🎯 Added goal {}: {}", goal.id, goal.text),
        None => anyhow::bail!("Goal text cannot be empty"),
    }
    Ok(())
}

pub fn list(app: &App) {
    let goals = app.stores.goals.read(|s| s.goals.clone());
    if goals.is_empty() {
        println!("No goals yet. See `violetta goal suggest` for ideas.");
        return;
    }
    for goal in &goals {
        println!("🎯 [{}] {}", goal.id, goal.text);
    }
}

pub fn remove(app: &App, id: &str) -> Result<()> {
    let (removed, _) = app
        .stores
        .goals
        .try_mutate(|s| s.remove(id))
        .context("Failed to save goals")?;
    if !removed {
        anyhow::bail!("No goal with id '{}'", id);
    }
    println!("🗑️  Removed goal {}", id);
    Ok(())
}

pub fn suggest() {
    for text in SUGGESTED_GOALS {
        println!("  - {}", text);
    }
}
