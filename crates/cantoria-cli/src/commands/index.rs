use anyhow::{Context, Result};
use cantoria_press::build_index;
use std::path::PathBuf;

pub fn run_index(file: PathBuf, output: Option<PathBuf>, flat: bool) -> Result<()> {
    log::info!("Building index for {}", file.display());
    let data = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;

    let index = build_index(&data, !flat)
        .with_context(|| format!("failed to build index from {}", file.display()))?;

    let output = output.unwrap_or_else(|| file.with_extension("sbx"));
    std::fs::write(&output, index)
        .with_context(|| format!("failed to write {}", output.display()))?;

    println!("✓ Wrote {}", output.display());
    Ok(())
}
