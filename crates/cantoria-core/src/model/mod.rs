pub mod index;
pub mod song;

pub use index::{IndexKind, IndexRecord, SongRef, TitleEntry};
pub use song::{Chord, Line, Segment, Song, SongHeader, Verse, VerseKind};
