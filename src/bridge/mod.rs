//! Read-only window onto the player for the rest of the application.
//! Consumers either poll a state snapshot or subscribe for push updates,
//! and a detached player is a quiet no-op rather than an error.

use std::{
    sync::{Arc, Mutex, Weak},
    time::{SystemTime, UNIX_EPOCH},
};

use flume::{Receiver, Sender};

use crate::audio::{backend::AudioBackend, provider::AudioStateProvider, state::PlayerState};

pub fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_millis() as u64)
}

#[derive(Debug, Clone, PartialEq)]
pub enum BridgeMessage {
    AlbumUpdateComplete { song: String, timestamp: u64 },
}

impl BridgeMessage {
    pub fn album_update(song: impl Into<String>) -> Self {
        Self::AlbumUpdateComplete {
            song: song.into(),
            timestamp: now_millis(),
        }
    }
}

/// Fan-out of push updates to every live subscriber. Dead receivers are
/// dropped on the next publish.
#[derive(Clone, Default)]
pub struct BridgePublisher {
    subscribers: Arc<Mutex<Vec<Sender<BridgeMessage>>>>,
}

impl BridgePublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Receiver<BridgeMessage> {
        let (tx, rx) = flume::unbounded();
        self.subscribers.lock().unwrap().push(tx);
        rx
    }

    pub fn publish(&self, message: BridgeMessage) {
        let mut subscribers = self.subscribers.lock().unwrap();
        subscribers.retain(|tx| tx.send(message.clone()).is_ok());
    }
}

/// Weak handle to the player. Every accessor returns `None` once the
/// player is gone.
#[derive(Clone)]
pub struct PlayerBridge {
    provider: Weak<AudioStateProvider>,
}

impl PlayerBridge {
    pub fn new(provider: &Arc<AudioStateProvider>) -> Self {
        Self {
            provider: Arc::downgrade(provider),
        }
    }

    /// A bridge that was never attached to a player.
    pub fn detached() -> Self {
        Self {
            provider: Weak::new(),
        }
    }

    pub fn player_state(&self) -> Option<PlayerState> {
        self.provider.upgrade().map(|p| p.player_state())
    }

    pub fn audio_handle(&self) -> Option<Arc<dyn AudioBackend>> {
        self.provider.upgrade().map(|p| p.audio_handle())
    }

    pub fn subscribe(&self) -> Option<Receiver<BridgeMessage>> {
        self.provider.upgrade().map(|p| p.subscribe_push())
    }
}
