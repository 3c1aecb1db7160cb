use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AudioError {
    #[error("audio device error: {0}")]
    DeviceError(String),
    #[error("failed to decode audio: {0}")]
    DecodingError(String),
    #[error("song not found: {0}")]
    SongNotFound(String),
    #[error("playback blocked until a user gesture")]
    AutoplayBlocked,
    #[error("seek failed: {0}")]
    SeekError(String),
}
