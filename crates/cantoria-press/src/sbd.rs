//! Song entry rendering.
//!
//! Turns a parsed [`Song`] into one songs-package markup entry: the
//! `\beginsong` header with its optional key/value clauses, leading
//! `\textnote` blocks, then each verse or chorus with chords and
//! inline comments interleaved into the lyric text.

use cantoria_core::model::{Chord, Segment, Song, Verse, VerseKind};
use cantoria_core::{Error, Result};

/// Render one song as a complete markup entry, from `\beginsong` to
/// `\endsong`.
///
/// Verses render in `verseOrder` when the header carries one, else in
/// document order.
///
/// # Errors
///
/// Returns [`Error::MissingTitle`] for a song with no title and
/// [`Error::UnknownVerse`] when the verse order names a verse the
/// document does not contain. Both reject this one song only.
pub fn render_entry(song: &Song) -> Result<String> {
    let title = song.header.primary_title().ok_or(Error::MissingTitle)?;

    let mut entry = format!("\\beginsong{{{title}}}[\n");
    if !song.header.authors.is_empty() {
        entry.push_str(&format!("by={{{}}},\n", song.header.authors.join(", ")));
    }
    if !song.header.keywords.is_empty() {
        entry.push_str(&format!("index={{{}}},\n", song.header.keywords.join(", ")));
    }
    if let Some(copyright) = &song.header.copyright {
        entry.push_str(&format!("cr={{{copyright}}},\n"));
    }
    if let Some(tune) = &song.header.tune {
        entry.push_str(&format!("tune={{{tune}}},\n"));
    }
    entry.push_str("]\n\n");

    for note in &song.leading_comments {
        entry.push_str(&format!("\\textnote{{{note}}}\n\n"));
    }

    for verse in render_order(song)? {
        render_verse(&mut entry, verse);
    }

    entry.push_str("\\endsong\n\n");
    Ok(entry)
}

/// Resolve the verse render order.
///
/// `verseOrder` tokens are used verbatim and are not validated up
/// front; a token naming an absent verse fails the lookup here.
fn render_order(song: &Song) -> Result<Vec<&Verse>> {
    match &song.header.verse_order {
        Some(tokens) => tokens
            .iter()
            .map(|name| {
                song.verse(name).ok_or_else(|| Error::UnknownVerse {
                    name: name.clone(),
                })
            })
            .collect(),
        None => Ok(song.verses.iter().collect()),
    }
}

fn render_verse(entry: &mut String, verse: &Verse) {
    entry.push_str(match verse.kind {
        VerseKind::Chorus => "\\beginchorus\n",
        VerseKind::Verse => "\\beginverse\n",
    });

    for line in &verse.lines {
        for segment in &line.segments {
            match segment {
                Segment::Text(text) => entry.push_str(text),
                Segment::Comment(text) => entry.push_str(&format!("\\textnote{{{text}}}")),
                Segment::Chord(chord) => entry.push_str(&format!(" \\[{}]", chord_token(chord))),
                Segment::Break => entry.push('\n'),
            }
        }
    }

    entry.push_str(match verse.kind {
        VerseKind::Chorus => "\n\\endchorus\n",
        VerseKind::Verse => "\n\\endverse\n",
    });
}

/// The chord marker body: root with the `&` flat encoding rewritten
/// to `b`, then the optional structure suffix.
fn chord_token(chord: &Chord) -> String {
    let mut token = chord.root.replace('&', "b");
    if let Some(structure) = &chord.structure {
        token.push_str(structure);
    }
    token
}
