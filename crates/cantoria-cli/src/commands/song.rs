use anyhow::{Context, Result};
use cantoria_press::{parse_song, render_entry};
use std::path::PathBuf;

/// One-shot transcode of a single song document to stdout. Unlike a
/// book build, a rejected song is fatal here.
pub fn run_song(file: PathBuf) -> Result<()> {
    let xml = std::fs::read_to_string(&file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let song =
        parse_song(&xml).with_context(|| format!("failed to parse {}", file.display()))?;
    let entry =
        render_entry(&song).with_context(|| format!("failed to render {}", file.display()))?;

    print!("{entry}");
    Ok(())
}
