//! Integration tests for the song and index pipelines.
//!
//! These drive complete conversions through the public API: OpenLyrics
//! XML → song entry markup, songbook config → assembled song file, and
//! index data → formatted index markup.

use cantoria_press::{assemble_book, build_index, parse_song, render_entry, BookConfig};
use tempfile::TempDir;

const AMAZING_GRACE: &str = r#"<song xmlns="http://openlyrics.info/namespace/2009/song">
  <properties>
    <titles><title>Amazing Grace</title></titles>
    <authors><author>John Newton</author></authors>
    <keywords><keyword>grace</keyword><keyword>classic</keyword></keywords>
    <copyright>Public Domain</copyright>
    <tune>New Britain</tune>
    <verseOrder>v1 c1</verseOrder>
  </properties>
  <lyrics>
    <comment>Slowly</comment>
    <verse name="c1">
      <lines>Praise <chord root="A&amp;" structure="m7"/>God</lines>
    </verse>
    <verse name="v1">
      <lines>Amazing <chord root="G"/>grace, how sweet<br/>the sound</lines>
    </verse>
  </lyrics>
</song>"#;

/// Full transcode: header clauses in fixed order, leading note,
/// verses in verseOrder (not document order), chords and breaks
/// interleaved.
#[test]
fn test_song_transcodes_to_complete_entry() {
    let song = parse_song(AMAZING_GRACE).unwrap();
    let entry = render_entry(&song).unwrap();

    let expected = "\\beginsong{Amazing Grace}[\n\
                    by={John Newton},\n\
                    index={grace, classic},\n\
                    cr={Public Domain},\n\
                    tune={New Britain},\n\
                    ]\n\n\
                    \\textnote{Slowly}\n\n\
                    \\beginverse\n\
                    Amazing \\[G]grace, how sweet\nthe sound\n\
                    \\endverse\n\
                    \\beginchorus\n\
                    Praise \\[Abm7]God\n\
                    \\endchorus\n\
                    \\endsong\n\n";
    assert_eq!(entry, expected);
}

/// Config-driven assembly over real files on disk.
#[test]
fn test_book_assembly_from_config() {
    let dir = TempDir::new().unwrap();
    let songs = dir.path().join("hymns");
    std::fs::create_dir(&songs).unwrap();
    std::fs::write(songs.join("amazing-grace.xml"), AMAZING_GRACE).unwrap();

    let config_path = dir.path().join("book.toml");
    std::fs::write(
        &config_path,
        "[songbook]\n\
         title = \"Test Book\"\n\n\
         [[section]]\n\
         name = \"Hymns\"\n\
         files = [\"hymns\"]\n\
         sort = \"filename\"\n",
    )
    .unwrap();

    let config = BookConfig::load(&config_path).unwrap();
    assert_eq!(config.title(), Some("Test Book"));

    let (songfile, report) = assemble_book(&config, dir.path()).unwrap();
    assert_eq!(report.songs, 1);
    assert!(report.skipped.is_empty());
    assert!(songfile.starts_with("\\begin{songs}{Hymns_idx,authoridx}\n\\songchapter{Hymns}\n"));
    assert!(songfile.contains("\\beginsong{Amazing Grace}["));
    assert!(songfile.ends_with("\\end{songs}"));
}

#[test]
fn test_author_index_end_to_end() {
    let sxd = "AUTHOR INDEX DATA FILE\n\
               John Newton\n2\nsong2-1.1\n\
               John Doe and Jane\\ Roe\n1\nsong1-1.1\n\
               anonymous\n3\nsong3-1.1\n\
               \n";
    let out = build_index(sxd, true).unwrap();
    let expected = "\\begin{idxblock}{}\n\
                    \\idxentry{anonymous}{\\songlink{song3-1.1}{3}}\n\
                    \\idxentry{Doe, John}{\\songlink{song1-1.1}{1}}\n\
                    \\idxentry{Jane Roe}{\\songlink{song1-1.1}{1}}\n\
                    \\idxentry{Newton, John}{\\songlink{song2-1.1}{2}}\n\
                    \\end{idxblock}\n";
    assert_eq!(out, expected);
}

#[test]
fn test_title_index_end_to_end() {
    let sxd = "TITLE INDEX DATA FILE\n\
               The Wind\n5\nsong5-1.1\n\
               *New Britain\n1\nsong1-1.1\n\
               amazing Grace\n1\nsong1-1.1\n\
               \n";
    let out = build_index(sxd, true).unwrap();
    let expected = "\\begin{idxblock}{A}\n\
                    \\idxentry{Amazing Grace}{\\songlink{song1-1.1}{1}}\n\
                    \\end{idxblock}\n\
                    \\begin{idxblock}{N}\n\
                    \\idxaltentry{New Britain}{\\songlink{song1-1.1}{1}}\n\
                    \\end{idxblock}\n\
                    \\begin{idxblock}{W}\n\
                    \\idxentry{Wind, The}{\\songlink{song5-1.1}{5}}\n\
                    \\end{idxblock}\n";
    assert_eq!(out, expected);
}

/// Re-running the title strategy over its own output titles changes
/// nothing: relocation and capitalization are idempotent.
#[test]
fn test_title_normalization_round_trip() {
    let first = build_index(
        "TITLE INDEX DATA FILE\nthe Wind\n5\nsong5-1.1\n\n",
        false,
    )
    .unwrap();
    assert_eq!(first, "\\idxentry{Wind, the}{\\songlink{song5-1.1}{5}}\n");

    let again = build_index(
        "TITLE INDEX DATA FILE\nWind, the\n5\nsong5-1.1\n\n",
        false,
    )
    .unwrap();
    assert_eq!(again, first);
}
