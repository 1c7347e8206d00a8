//! Author index strategy.
//!
//! Each AUTHOR record's key is a free-text author list: names
//! separated by commas, semicolons, or the literal word `and`, with
//! `~` (or the escaped space `\ `) standing in for spaces inside a
//! name to keep it from being split. Every name is resorted
//! surname-first, grouped across records, and emitted as one index
//! block sorted case-insensitively.

use cantoria_core::model::{IndexRecord, SongRef};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeMap;

/// One alternation: the word ` and `, or any run of characters that
/// are not ASCII letters, `~`, `.`, or space. Known ambiguity: runs
/// of other punctuation also separate, so hyphenated surnames split.
#[allow(clippy::unwrap_used)]
static NAME_SEPARATOR: Lazy<Regex> = Lazy::new(|| Regex::new(r" and |[^a-zA-Z~. ]+").unwrap());

/// A single author name, classified by word count.
#[derive(Debug, Clone, PartialEq, Eq)]
enum NameKey {
    /// Two or more words: the last is the surname, the rest the given
    /// name(s).
    SurnameGiven { surname: String, given: String },
    /// A single word, used verbatim ("Anonymous", "Traditional").
    Single(String),
}

impl NameKey {
    fn classify(token: &str) -> Self {
        let token = token.trim();
        match token.rsplit_once(|c: char| c.is_whitespace()) {
            Some((given, surname)) => Self::SurnameGiven {
                surname: surname.trim().to_string(),
                given: given.trim().to_string(),
            },
            None => Self::Single(token.to_string()),
        }
    }

    /// The display and sort key, with `~` restored to a literal space.
    fn display(&self) -> String {
        let key = match self {
            Self::SurnameGiven { surname, given } => format!("{surname}, {given}"),
            Self::Single(token) => token.clone(),
        };
        key.replace('~', " ").trim().to_string()
    }
}

/// Split a raw author-list string into name tokens.
fn split_names(raw: &str) -> Vec<String> {
    let unescaped = raw.replace("\\ ", "~");
    NAME_SEPARATOR
        .split(&unescaped)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// Build the author index block from AUTHOR records.
///
/// Authors sort case-insensitively; within one author, song links
/// sort numerically by song number. The whole index is one
/// `idxblock` with a blank heading, one line per author, multiple
/// song links joined with `\\`.
pub fn build_author_index(records: &[IndexRecord]) -> String {
    let mut authors: BTreeMap<String, Vec<SongRef>> = BTreeMap::new();
    for record in records {
        for token in split_names(&record.key) {
            authors
                .entry(NameKey::classify(&token).display())
                .or_default()
                .push(SongRef {
                    number: record.number.clone(),
                    link: record.link.clone(),
                });
        }
    }

    // Accumulation order must not leak into the output: sort keys by
    // their casefolded form in a separate pass.
    let mut entries: Vec<(String, Vec<SongRef>)> = authors.into_iter().collect();
    entries.sort_by_key(|(key, _)| key.to_lowercase());

    let mut out = String::from("\\begin{idxblock}{}\n");
    for (author, mut songs) in entries {
        // Non-numeric song numbers sort last.
        songs.sort_by_key(|song| song.number.parse::<u64>().unwrap_or(u64::MAX));
        let links: Vec<String> = songs
            .iter()
            .map(|song| format!("\\songlink{{{}}}{{{}}}", song.link, song.number))
            .collect();
        out.push_str(&format!("\\idxentry{{{author}}}{{{}}}\n", links.join("\\\\")));
    }
    out.push_str("\\end{idxblock}\n");
    out
}
