//! Title index strategy.
//!
//! TITLE records are normalized (alternate-title marker stripped,
//! leading article relocated to the end, first character
//! capitalized), sorted case-insensitively, and emitted as one index
//! block per leading letter — or as a flat list in non-grouped mode.

use cantoria_core::model::{IndexRecord, TitleEntry};

/// The leading articles eligible for relocation. Matched
/// case-sensitively against the first word; other capitalizations and
/// non-English articles stay in place.
const ARTICLES: [&str; 6] = ["a", "an", "the", "A", "An", "The"];

/// Normalize one raw title record.
fn normalize(record: &IndexRecord) -> TitleEntry {
    let raw = record.key.as_str();
    let alternate = raw.starts_with('*');
    let stripped = raw.trim_start_matches('*');

    TitleEntry {
        title: capitalize_first(&relocate_article(stripped)),
        number: record.number.clone(),
        link: record.link.clone(),
        alternate,
    }
}

/// Move a leading article to the end: `The Rose` → `Rose, The`.
fn relocate_article(title: &str) -> String {
    if let Some((first, rest)) = title.split_once(char::is_whitespace) {
        if ARTICLES.contains(&first) {
            return format!("{}, {first}", rest.trim_start());
        }
    }
    title.to_string()
}

/// Uppercase only the first character, leaving the rest unchanged.
fn capitalize_first(title: &str) -> String {
    let mut chars = title.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Build the title index from TITLE records.
///
/// With `letterblock` set (the default mode), entries group into
/// `idxblock`s keyed by the uppercased first character, breaking
/// whenever the first character changes case-insensitively. Without
/// it the entries emit as a flat, unblocked list.
pub fn build_title_index(records: &[IndexRecord], letterblock: bool) -> String {
    let mut titles: Vec<TitleEntry> = records.iter().map(normalize).collect();
    titles.sort_by_key(|entry| entry.title.to_lowercase());

    let mut out = String::new();
    let mut section: Option<String> = None;
    for entry in &titles {
        if letterblock {
            let first: String = entry.title.chars().take(1).collect();
            match &section {
                None => {
                    out.push_str(&format!("\\begin{{idxblock}}{{{first}}}\n"));
                    section = Some(first);
                }
                Some(open) if open.to_lowercase() != first.to_lowercase() => {
                    let heading = first.to_uppercase();
                    out.push_str("\\end{idxblock}\n");
                    out.push_str(&format!("\\begin{{idxblock}}{{{heading}}}\n"));
                    section = Some(heading);
                }
                Some(_) => {}
            }
        }
        let macro_name = if entry.alternate {
            "idxaltentry"
        } else {
            "idxentry"
        };
        out.push_str(&format!(
            "\\{macro_name}{{{}}}{{\\songlink{{{}}}{{{}}}}}\n",
            entry.title, entry.link, entry.number
        ));
    }
    if letterblock && section.is_some() {
        out.push_str("\\end{idxblock}\n");
    }
    out
}
