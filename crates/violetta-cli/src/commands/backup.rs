use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use violetta_infrastructure::ViolettaPaths;

use super::App;

pub fn export(app: &App, out: Option<PathBuf>) -> Result<()> {
    let target = out.unwrap_or_else(ViolettaPaths::default_backup_file);
    let written = app
        .backup
        .write_to_file(&target)
        .with_context(|| format!("Failed to write backup to {}", target.display()))?;
    println!("✅ Backup saved to {}", written.display());
    Ok(())
}

pub fn import(app: &App, file: &Path) -> Result<()> {
    let report = app
        .backup
        .import_file(file)
        .with_context(|| format!("Failed to import {}", file.display()))?;
    app.stores.reload_all();

    println!("✅ Backup restored from {}", file.display());
    println!("  - {} stores written", report.written.len());
    if !report.removed.is_empty() {
        println!("  - {} stores cleared: {}", report.removed.len(), report.removed.join(", "));
    }
    Ok(())
}

pub fn reset(app: &App, yes: bool) -> Result<()> {
    if !yes {
        anyhow::bail!(
            "This deletes every journal entry, check-in and contact in {}. Run again with --yes to confirm.",
            app.data_dir.display()
        );
    }
    app.backup.reset_all().context("Failed to reset local data")?;
    app.stores.reload_all();
    println!("🧹 All local data deleted");
    Ok(())
}
