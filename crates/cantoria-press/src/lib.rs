//! Typesetting pipelines for cantoria.
//!
//! Two independent pipelines share the `cantoria-core` entity model
//! but no runtime state:
//!
//! - the song pipeline parses OpenLyrics XML documents
//!   ([`openlyrics`]), renders them as songs-package markup entries
//!   ([`sbd`]), and assembles per-section song files ([`book`]);
//! - the index pipeline reads the three-line index data records a
//!   typesetting pass emits and builds sorted, cross-referenced
//!   author and title index files ([`index`]).
//!
//! Every operation is a pure function of its inputs; nothing is
//! retried and no state outlives one conversion run.

#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]

pub mod book;
pub mod config;
pub mod index;
pub mod openlyrics;
pub mod sbd;

pub use book::{assemble_book, BookReport, SkippedSong};
pub use config::{BookConfig, Section};
pub use index::build_index;
pub use openlyrics::parse_song;
pub use sbd::render_entry;
