//! Index data record reading.

use cantoria_core::model::{IndexKind, IndexRecord};
use cantoria_core::{Error, Result};

/// One fully read index data file: its declared kind and every record
/// up to the end-of-stream marker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexData {
    pub kind: IndexKind,
    pub records: Vec<IndexRecord>,
}

/// Read an index data stream.
///
/// The first line declares the record kind (prefix-matched against
/// `AUTHOR`/`TITLE`); the rest is consecutive three-line
/// `(key, songNumber, link)` records, each line trimmed of
/// surrounding whitespace. An empty link field signals end of stream
/// — a load-bearing contract with the record producer — and any lines
/// after it are ignored.
///
/// # Errors
///
/// Returns [`Error::UnknownIndexKind`] when the declaration matches
/// neither kind, and [`Error::MalformedRecord`] when the stream ends
/// in the middle of a record.
pub fn read_index_data(input: &str) -> Result<IndexData> {
    let mut lines = input.lines();

    let declared = lines.next().unwrap_or_default();
    let kind = IndexKind::from_declaration(declared).ok_or_else(|| Error::UnknownIndexKind {
        declared: declared.trim().to_string(),
    })?;

    let mut records = Vec::new();
    loop {
        let Some(key) = lines.next() else { break };
        let key = key.trim();
        let record = records.len() + 1;
        let (Some(number), Some(link)) = (lines.next(), lines.next()) else {
            // Trailing blank lines read as a clean end of stream; a
            // half-read record with a real key does not.
            if key.is_empty() {
                break;
            }
            return Err(Error::MalformedRecord { record });
        };

        let link = link.trim();
        if link.is_empty() {
            break;
        }
        records.push(IndexRecord {
            key: key.to_string(),
            number: number.trim().to_string(),
            link: link.to_string(),
        });
    }

    Ok(IndexData { kind, records })
}
