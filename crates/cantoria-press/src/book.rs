//! Book assembly.
//!
//! Concatenates transcoded song entries into one song-file stream,
//! section by section, each section wrapped in
//! `\begin{songs}{<name>_idx,authoridx}` / `\songchapter{<name>}` /
//! `\end{songs}` markup. A song that fails to parse or render is
//! logged, recorded in the report, and skipped; the build continues
//! with the remaining songs.

use crate::config::{BookConfig, Section};
use crate::{openlyrics, sbd};
use cantoria_core::{Error, Result};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// One song left out of the assembled book, with the error that
/// rejected it.
#[derive(Debug)]
pub struct SkippedSong {
    pub path: PathBuf,
    pub reason: Error,
}

/// Outcome of one assembly run, returned alongside the song file so
/// callers can assert on skipped songs instead of parsing log text.
#[derive(Debug, Default)]
pub struct BookReport {
    /// Songs successfully transcoded into the book.
    pub songs: usize,
    pub skipped: Vec<SkippedSong>,
}

/// Assemble the full song file for a book.
///
/// Relative input paths resolve against `base` (the config file's
/// directory in the CLI).
///
/// # Errors
///
/// Song-level rejections are collected in the report, not returned;
/// an I/O failure (missing input file, unreadable directory) aborts
/// the build.
pub fn assemble_book(config: &BookConfig, base: &Path) -> Result<(String, BookReport)> {
    let mut out = String::new();
    let mut report = BookReport::default();

    if let Some(header) = &config.header {
        out.push_str(header);
    }

    for section in &config.sections {
        log::debug!("assembling section {}", section.name);
        out.push_str(&format!(
            "\\begin{{songs}}{{{}_idx,authoridx}}\n",
            section.name.replace(' ', "_")
        ));
        out.push_str(&format!("\\songchapter{{{}}}\n", section.name));

        for file in section_files(section, base)? {
            match transcode_file(&file) {
                Ok(entry) => {
                    out.push_str(&entry);
                    report.songs += 1;
                }
                Err(reason) if reason.is_song_rejection() => {
                    log::error!("failed to convert {}: {}", file.display(), reason);
                    report.skipped.push(SkippedSong { path: file, reason });
                }
                Err(other) => return Err(other),
            }
        }

        // No newline after the close marker; consecutive sections butt
        // together in the song file.
        out.push_str("\\end{songs}");
    }

    Ok((out, report))
}

fn transcode_file(path: &Path) -> Result<String> {
    let xml = std::fs::read_to_string(path)?;
    let song = openlyrics::parse_song(&xml)?;
    sbd::render_entry(&song)
}

/// Expand a section's inputs into a flat file list.
///
/// Directories contribute their immediate children (files only), in
/// name order. The section's sort directive then applies to the whole
/// list.
fn section_files(section: &Section, base: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for input in &section.files {
        let path = if input.is_absolute() {
            input.clone()
        } else {
            base.join(input)
        };
        if !path.exists() {
            return Err(Error::Io(io::Error::new(
                io::ErrorKind::NotFound,
                format!("input file not found: {}", path.display()),
            )));
        }
        if path.is_dir() {
            for entry in WalkDir::new(&path)
                .min_depth(1)
                .max_depth(1)
                .sort_by_file_name()
                .into_iter()
                .filter_map(std::result::Result::ok)
            {
                if entry.file_type().is_file() {
                    files.push(entry.into_path());
                }
            }
        } else {
            files.push(path);
        }
    }

    match section.sort.as_deref() {
        Some("filename") => {
            log::debug!("sorting section {} by filename", section.name);
            files.sort_by_key(|file| file.file_name().map(std::ffi::OsStr::to_os_string));
        }
        Some(other) => {
            log::error!("unknown sort method for section {}: {}", section.name, other);
        }
        None => log::debug!("not sorting section {}", section.name),
    }

    Ok(files)
}
