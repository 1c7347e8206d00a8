use serde::{Deserialize, Serialize};

/// The declared type of an index data file, fixing which strategy
/// processes its records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndexKind {
    Author,
    Title,
}

impl IndexKind {
    /// Resolve the kind from the data file's first line.
    ///
    /// The producer appends free text after the kind word, so this is
    /// a prefix match, not an equality check.
    #[must_use]
    pub fn from_declaration(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.starts_with("AUTHOR") {
            Some(Self::Author)
        } else if line.starts_with("TITLE") {
            Some(Self::Title)
        } else {
            None
        }
    }
}

/// One three-line record from an index data file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndexRecord {
    /// Author-list string or raw title, depending on the file kind.
    pub key: String,
    pub number: String,
    pub link: String,
}

/// One `(songNumber, link)` pair collected under an author key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongRef {
    pub number: String,
    pub link: String,
}

/// One normalized title-index entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TitleEntry {
    /// Article-relocated, first-letter-capitalized display title.
    pub title: String,
    pub number: String,
    pub link: String,

    /// Set when the raw title carried the leading `*` marker.
    pub alternate: bool,
}
