use thiserror::Error;

/// Errors produced by the song transcoder and the index builder.
///
/// Song-level variants (`MissingProperties`, `MissingTitle`,
/// `UnknownVerse`, `Xml`) reject one song; the book assembler logs
/// them and continues with the remaining songs. Index-level variants
/// abort processing of the one index file they occurred in.
#[derive(Debug, Error)]
pub enum Error {
    /// The song document has no `properties` element.
    #[error("song has no properties element")]
    MissingProperties,

    /// The song header declares no title.
    #[error("song has no title")]
    MissingTitle,

    /// The verse order names a verse absent from the document.
    #[error("verse order references unknown verse {name:?}")]
    UnknownVerse { name: String },

    /// The index data header line matches neither AUTHOR nor TITLE.
    #[error("unknown index kind {declared:?}")]
    UnknownIndexKind { declared: String },

    /// The index data stream ended in the middle of a record.
    #[error("index data truncated in record {record}")]
    MalformedRecord { record: usize },

    /// An error propagated from the XML parser.
    #[error("XML error: {0}")]
    Xml(#[from] roxmltree::Error),

    /// An error propagated from the filesystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Returns `true` when the error rejects a single song rather than
    /// the whole run.
    pub fn is_song_rejection(&self) -> bool {
        matches!(
            self,
            Self::MissingProperties | Self::MissingTitle | Self::UnknownVerse { .. } | Self::Xml(_)
        )
    }
}

/// Convenience alias for results carrying [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
