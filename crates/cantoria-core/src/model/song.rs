use serde::{Deserialize, Serialize};

/// Header metadata extracted once per song document.
///
/// Multi-valued fields keep document order; the first title is the
/// display title. A header with no titles rejects the song.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SongHeader {
    pub titles: Vec<String>,
    pub authors: Vec<String>,
    pub keywords: Vec<String>,

    /// Controlled-vocabulary themes. Parsed but not rendered; the
    /// songs markup has no key for them.
    pub themes: Vec<String>,

    pub copyright: Option<String>,
    pub tune: Option<String>,
    pub ccli_no: Option<String>,

    /// Render order as verse-name tokens. When absent, verses render
    /// in document order.
    pub verse_order: Option<Vec<String>>,
}

impl SongHeader {
    /// The display title, when one exists.
    #[must_use]
    pub fn primary_title(&self) -> Option<&str> {
        self.titles.first().map(String::as_str)
    }
}

/// Whether a named block of lines is a verse or a chorus.
///
/// Decided once at parse time from the verse name; a name starting
/// with `c` (case-insensitively) marks a chorus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum VerseKind {
    Verse,
    Chorus,
}

impl VerseKind {
    /// Classify a verse-name token such as `v1` or `c1`.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.to_lowercase().starts_with('c') {
            Self::Chorus
        } else {
            Self::Verse
        }
    }
}

/// One named verse or chorus: an ordered sequence of lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Verse {
    pub name: String,
    pub kind: VerseKind,
    pub lines: Vec<Line>,
}

impl Verse {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        let kind = VerseKind::from_name(&name);
        Self {
            name,
            kind,
            lines: Vec::new(),
        }
    }
}

/// One `lines` element: text interleaved with chords, inline comments
/// and explicit line breaks, in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub segments: Vec<Segment>,
}

/// A chord marker: root pitch plus an optional structure suffix
/// (`m7`, `sus4`, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chord {
    pub root: String,
    pub structure: Option<String>,
}

/// One run within a line. Text runs are whitespace-normalized at parse
/// time; embedded newlines in source text become explicit `Break`
/// markers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Text(String),
    Chord(Chord),
    Comment(String),
    Break,
}

/// A fully parsed song document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Song {
    pub header: SongHeader,

    /// Comment siblings appearing before the first verse, rendered as
    /// a leading note block ("Interlude", tuning hints, ...).
    pub leading_comments: Vec<String>,

    /// Verses in document order.
    pub verses: Vec<Verse>,
}

impl Song {
    /// Look up a verse by its name token.
    #[must_use]
    pub fn verse(&self, name: &str) -> Option<&Verse> {
        self.verses.iter().find(|v| v.name == name)
    }
}
