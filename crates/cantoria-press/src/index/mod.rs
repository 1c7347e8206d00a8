//! Index building.
//!
//! A typesetting pass over an assembled song file leaves behind index
//! data files: a kind declaration line followed by three-line
//! `(key, songNumber, link)` records. This module reads one such
//! stream and emits the formatted index markup for it — the author
//! strategy for AUTHOR data, the title strategy for TITLE data.

pub mod author;
pub mod reader;
pub mod title;

pub use author::build_author_index;
pub use reader::{read_index_data, IndexData};
pub use title::build_title_index;

use cantoria_core::model::IndexKind;
use cantoria_core::Result;

/// Convert one index data stream into formatted index markup.
///
/// The stream's declared kind picks the strategy. `letterblock`
/// selects letter-grouped title output; the author index is always a
/// single block and ignores it.
///
/// # Errors
///
/// Returns [`cantoria_core::Error::UnknownIndexKind`] or
/// [`cantoria_core::Error::MalformedRecord`] from the reader; either
/// aborts processing of this one index file.
pub fn build_index(input: &str, letterblock: bool) -> Result<String> {
    let data = read_index_data(input)?;
    let output = match data.kind {
        IndexKind::Author => build_author_index(&data.records),
        IndexKind::Title => build_title_index(&data.records, letterblock),
    };
    Ok(output)
}
