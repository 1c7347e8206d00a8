use anyhow::{Context, Result};
use cantoria_press::{assemble_book, BookConfig};
use std::path::{Path, PathBuf};

pub fn run_build(config_path: PathBuf, output: Option<PathBuf>) -> Result<()> {
    log::info!("Loading songbook config {}", config_path.display());
    let config = BookConfig::load(&config_path)?;
    if let Some(title) = config.title() {
        log::info!("Building songbook: {title}");
    }

    // Relative input paths resolve against the config file's directory.
    let base = config_path.parent().unwrap_or_else(|| Path::new("."));
    let (songfile, report) = assemble_book(&config, base)?;

    let output = output.unwrap_or_else(|| PathBuf::from("songfile.sbd"));
    std::fs::write(&output, songfile)
        .with_context(|| format!("failed to write {}", output.display()))?;

    for skipped in &report.skipped {
        log::warn!("skipped {}: {}", skipped.path.display(), skipped.reason);
    }

    println!(
        "\n✓ Wrote {} ({} songs, {} skipped)",
        output.display(),
        report.songs,
        report.skipped.len()
    );
    Ok(())
}
