pub mod build;
pub mod index;
pub mod song;

pub use build::run_build;
pub use index::run_index;
pub use song::run_song;
