//! Songbook configuration.
//!
//! A songbook is described by one TOML file: free-form `[songbook]`
//! metadata (kept for the wrapper templates maintained outside this
//! tool), an optional verbatim song-file header, and an ordered list
//! of `[[section]]` tables naming the input files for each section of
//! the book. Relative paths resolve against the config file's
//! directory.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One complete songbook configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookConfig {
    /// Free-form songbook metadata (title, edition, ...). Required,
    /// even if empty.
    pub songbook: toml::Table,

    /// Verbatim text prepended to the assembled song file.
    #[serde(default)]
    pub header: Option<String>,

    /// Book sections, in book order.
    #[serde(default, rename = "section")]
    pub sections: Vec<Section>,
}

/// One section of the book: a name and the song files that belong to
/// it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Section {
    pub name: String,

    /// Song files and directories; directories expand to their
    /// immediate children.
    pub files: Vec<PathBuf>,

    /// Optional sort directive (`"filename"`); unknown values are
    /// logged and ignored.
    #[serde(default)]
    pub sort: Option<String>,
}

impl BookConfig {
    /// Load and parse a configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Self = toml::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// The songbook title from the metadata table, when present.
    #[must_use]
    pub fn title(&self) -> Option<&str> {
        self.songbook.get("title").and_then(toml::Value::as_str)
    }
}

/// Get the example config file content.
pub fn example_config() -> &'static str {
    r#"# Cantoria songbook configuration

[songbook]
title = "Example Songbook"
edition = "First"

# Text written verbatim at the top of the assembled song file.
header = """
% songfile.sbd - generated by cantoria, do not edit
"""

# Sections appear in the book in the order listed here. Entries in
# `files` may be single song files or directories; a directory adds
# every file directly inside it.
[[section]]
name = "Hymns"
files = ["hymns/"]
sort = "filename"

[[section]]
name = "Rounds"
files = ["rounds/morning.xml", "rounds/evening.xml"]
"#
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_example_config_parses() {
        let config: BookConfig = toml::from_str(example_config()).unwrap();
        assert_eq!(config.title(), Some("Example Songbook"));
        assert!(config.header.is_some());
        assert_eq!(config.sections.len(), 2);
        assert_eq!(config.sections[0].name, "Hymns");
        assert_eq!(config.sections[0].sort.as_deref(), Some("filename"));
        assert!(config.sections[1].sort.is_none());
    }

    #[test]
    fn test_missing_songbook_table_is_an_error() {
        let result: std::result::Result<BookConfig, _> =
            toml::from_str("[[section]]\nname = \"X\"\nfiles = []\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("book.toml");
        std::fs::write(&path, "[songbook]\ntitle = \"T\"\n").unwrap();

        let config = BookConfig::load(&path).unwrap();
        assert_eq!(config.title(), Some("T"));
        assert!(config.sections.is_empty());

        assert!(BookConfig::load(&dir.path().join("missing.toml")).is_err());
    }
}
