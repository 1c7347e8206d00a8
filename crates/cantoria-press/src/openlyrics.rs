//! OpenLyrics document parsing.
//!
//! Parses one song document (namespace
//! `http://openlyrics.info/namespace/2009/song`) into the
//! [`Song`] entity model. Classification always goes through the
//! element's local tag name, so namespace prefixes never matter and
//! the parsed tree is never mutated; unrecognized elements and
//! attributes are skippable by contract.

use cantoria_core::model::{Chord, Line, Segment, Song, SongHeader, Verse};
use cantoria_core::{Error, Result};
use roxmltree::{Document, Node};

/// Parse one OpenLyrics XML string into a [`Song`].
///
/// # Errors
///
/// Returns [`Error::Xml`] when the document is not well-formed,
/// [`Error::MissingProperties`] when it has no `properties` element,
/// and [`Error::MissingTitle`] when the header declares no title. All
/// three reject this one song only.
pub fn parse_song(xml: &str) -> Result<Song> {
    let doc = Document::parse(xml)?;
    let root = doc.root_element();

    let header = extract_header(root)?;
    let leading_comments = collect_leading_comments(root);
    let verses = root
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "verse")
        .map(parse_verse)
        .collect();

    Ok(Song {
        header,
        leading_comments,
        verses,
    })
}

/// Walk the `properties` element and build the song header.
///
/// Multi-valued tags (`titles`, `authors`, `keywords`, `themes`)
/// collect their child elements' text in document order; single-valued
/// tags (`ccliNo`, `verseOrder`, `copyright`, `tune`) store raw text.
fn extract_header(root: Node) -> Result<SongHeader> {
    let properties = root
        .descendants()
        .find(|n| n.is_element() && n.tag_name().name() == "properties")
        .ok_or(Error::MissingProperties)?;

    let mut header = SongHeader::default();
    for child in properties.children().filter(Node::is_element) {
        match child.tag_name().name() {
            "titles" => header.titles = child_texts(child),
            "authors" => header.authors = child_texts(child),
            "keywords" => header.keywords = child_texts(child),
            "themes" => header.themes = child_texts(child),
            "ccliNo" => header.ccli_no = element_text(child),
            "copyright" => header.copyright = element_text(child),
            "tune" => header.tune = element_text(child),
            "verseOrder" => {
                header.verse_order = element_text(child)
                    .map(|order| order.split_whitespace().map(str::to_string).collect());
            }
            other => log::debug!("unknown tag {other:?} in song header"),
        }
    }

    if header.titles.is_empty() {
        return Err(Error::MissingTitle);
    }
    Ok(header)
}

/// Text content of each child element, in document order.
fn child_texts(node: Node) -> Vec<String> {
    node.children()
        .filter(Node::is_element)
        .map(|n| n.text().unwrap_or_default().to_string())
        .collect()
}

fn element_text(node: Node) -> Option<String> {
    node.text().map(str::to_string)
}

/// Comment elements appearing before the first verse, e.g. a leading
/// "Interlude" or tuning note.
fn collect_leading_comments(root: Node) -> Vec<String> {
    let mut comments = Vec::new();
    for node in root.descendants().filter(Node::is_element) {
        match node.tag_name().name() {
            "verse" => break,
            "comment" => {
                if let Some(text) = node.text() {
                    comments.push(text.to_string());
                }
            }
            _ => {}
        }
    }
    comments
}

fn parse_verse(node: Node) -> Verse {
    let mut verse = Verse::new(node.attribute("name").unwrap_or_default());
    verse.lines = node
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == "lines")
        .map(parse_line)
        .collect();
    verse
}

/// Parse one `lines` element into whitespace-normalized segments.
///
/// The text run before the first child element is trimmed; text runs
/// after an element (XML tails) are trimmed per run, and a tail
/// containing an embedded newline becomes an explicit break so stanza
/// breaks inside one `lines` element survive normalization.
fn parse_line(node: Node) -> Line {
    let mut segments = Vec::new();
    let mut seen_element = false;

    for child in node.children() {
        if child.is_element() {
            seen_element = true;
            match child.tag_name().name() {
                "comment" => {
                    segments.push(Segment::Comment(child.text().unwrap_or_default().to_string()));
                }
                "chord" => {
                    segments.push(Segment::Chord(Chord {
                        root: child.attribute("root").unwrap_or_default().to_string(),
                        structure: child.attribute("structure").map(str::to_string),
                    }));
                }
                "br" => segments.push(Segment::Break),
                _ => {}
            }
        } else if child.is_text() {
            let raw = child.text().unwrap_or_default();
            if seen_element {
                push_tail(&mut segments, raw);
            } else {
                let trimmed = raw.trim();
                if !trimmed.is_empty() {
                    segments.push(Segment::Text(trimmed.to_string()));
                }
            }
        }
    }

    Line { segments }
}

fn push_tail(segments: &mut Vec<Segment>, raw: &str) {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return;
    }
    if raw.contains('\n') {
        segments.push(Segment::Break);
    }
    segments.push(Segment::Text(trimmed.to_string()));
}

#[cfg(test)]
mod tests {
    use super::*;
    use cantoria_core::model::VerseKind;

    const NS: &str = "http://openlyrics.info/namespace/2009/song";

    fn song_xml(properties: &str, lyrics: &str) -> String {
        format!(r#"<song xmlns="{NS}">{properties}{lyrics}</song>"#)
    }

    #[test]
    fn test_header_extraction() {
        let xml = song_xml(
            "<properties>\
             <titles><title>Amazing Grace</title><title>New Britain</title></titles>\
             <authors><author>John Newton</author></authors>\
             <keywords><keyword>grace</keyword></keywords>\
             <copyright>Public Domain</copyright>\
             <ccliNo>22025</ccliNo>\
             <verseOrder>v1 c1 v2</verseOrder>\
             </properties>",
            "<lyrics><verse name=\"v1\"><lines>Amazing grace</lines></verse></lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        assert_eq!(song.header.primary_title(), Some("Amazing Grace"));
        assert_eq!(song.header.titles.len(), 2);
        assert_eq!(song.header.authors, vec!["John Newton".to_string()]);
        assert_eq!(song.header.copyright.as_deref(), Some("Public Domain"));
        assert_eq!(song.header.ccli_no.as_deref(), Some("22025"));
        assert_eq!(
            song.header.verse_order,
            Some(vec!["v1".to_string(), "c1".to_string(), "v2".to_string()])
        );
    }

    #[test]
    fn test_unknown_header_tags_are_ignored() {
        let xml = song_xml(
            "<properties>\
             <titles><title>T</title></titles>\
             <released>1779</released>\
             </properties>",
            "<lyrics><verse name=\"v1\"><lines>la</lines></verse></lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        assert_eq!(song.header.primary_title(), Some("T"));
    }

    #[test]
    fn test_missing_properties() {
        let xml = format!(
            r#"<song xmlns="{NS}"><lyrics><verse name="v1"><lines>la</lines></verse></lyrics></song>"#
        );
        assert!(matches!(
            parse_song(&xml),
            Err(Error::MissingProperties)
        ));
    }

    #[test]
    fn test_missing_title() {
        let xml = song_xml(
            "<properties><authors><author>Anon</author></authors></properties>",
            "<lyrics><verse name=\"v1\"><lines>la</lines></verse></lyrics>",
        );
        assert!(matches!(parse_song(&xml), Err(Error::MissingTitle)));

        // An empty titles element is rejected the same way.
        let xml = song_xml(
            "<properties><titles/></properties>",
            "<lyrics><verse name=\"v1\"><lines>la</lines></verse></lyrics>",
        );
        assert!(matches!(parse_song(&xml), Err(Error::MissingTitle)));
    }

    #[test]
    fn test_verse_classification_at_parse_time() {
        let xml = song_xml(
            "<properties><titles><title>T</title></titles></properties>",
            "<lyrics>\
             <verse name=\"v1\"><lines>one</lines></verse>\
             <verse name=\"c1\"><lines>refrain</lines></verse>\
             </lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        assert_eq!(song.verses.len(), 2);
        assert_eq!(song.verses[0].kind, VerseKind::Verse);
        assert_eq!(song.verses[1].kind, VerseKind::Chorus);
    }

    #[test]
    fn test_line_segments_interleave_in_document_order() {
        let xml = song_xml(
            "<properties><titles><title>T</title></titles></properties>",
            "<lyrics><verse name=\"v1\"><lines>\
             Amazing <chord root=\"A&amp;\" structure=\"m7\"/>grace<br/>how sweet\
             <comment>quietly</comment></lines></verse></lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        let segments = &song.verses[0].lines[0].segments;
        assert_eq!(
            segments,
            &vec![
                Segment::Text("Amazing".to_string()),
                Segment::Chord(Chord {
                    root: "A&".to_string(),
                    structure: Some("m7".to_string()),
                }),
                Segment::Text("grace".to_string()),
                Segment::Break,
                Segment::Text("how sweet".to_string()),
                Segment::Comment("quietly".to_string()),
            ]
        );
    }

    #[test]
    fn test_tail_with_embedded_newline_becomes_break() {
        let xml = song_xml(
            "<properties><titles><title>T</title></titles></properties>",
            "<lyrics><verse name=\"v1\"><lines>first<chord root=\"G\"/>\n   second stanza\n</lines></verse></lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        let segments = &song.verses[0].lines[0].segments;
        assert_eq!(
            segments,
            &vec![
                Segment::Text("first".to_string()),
                Segment::Chord(Chord {
                    root: "G".to_string(),
                    structure: None,
                }),
                Segment::Break,
                Segment::Text("second stanza".to_string()),
            ]
        );
    }

    #[test]
    fn test_whitespace_only_tail_is_dropped() {
        let xml = song_xml(
            "<properties><titles><title>T</title></titles></properties>",
            "<lyrics><verse name=\"v1\"><lines>word<chord root=\"D\"/>\n  </lines></verse></lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        let segments = &song.verses[0].lines[0].segments;
        assert_eq!(
            segments,
            &vec![
                Segment::Text("word".to_string()),
                Segment::Chord(Chord {
                    root: "D".to_string(),
                    structure: None,
                }),
            ]
        );
    }

    #[test]
    fn test_leading_comments_stop_at_first_verse() {
        let xml = song_xml(
            "<properties><titles><title>T</title></titles></properties>",
            "<lyrics>\
             <comment>Interlude</comment>\
             <verse name=\"v1\"><lines>la<comment>inline</comment></lines></verse>\
             </lyrics>",
        );
        let song = parse_song(&xml).unwrap();
        assert_eq!(song.leading_comments, vec!["Interlude".to_string()]);
    }
}
