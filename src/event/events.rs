use crate::spa::routes::{Direction, Route};

#[derive(Debug, Clone)]
pub enum Event {
    // Events
    PageShown(Route),
    NavigationFailed(String),
    SongStarted(String),
    SongEnded,
    PlaybackBlocked,
    PlaybackResumed,
    AlbumSynced(String),

    // Commands
    Navigate(Route, Direction),
    ToggleView,
    TogglePlayPause,
    NextSong,
    PreviousSong,
    SeekLyric(usize),
    VolumeUp(u8),
    VolumeDown(u8),
    ToggleMute,
    Quit,
}
