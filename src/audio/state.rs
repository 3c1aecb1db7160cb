use std::time::Duration;

/// Snapshot of the player, handed across the bridge to whoever asks.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub current_time: Duration,
    pub volume: f32,
    pub is_playing: bool,
    pub current_song: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutoplayPhase {
    /// The device refused to start and we are waiting on a user gesture.
    Blocked,
    /// A start attempt failed once and a retry is in flight.
    Retrying,
    Playing,
}
