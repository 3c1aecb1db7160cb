pub mod resume;
pub mod song;
pub mod store;

pub use song::{LyricLine, LyricText, Song};
pub use store::SongLibrary;
