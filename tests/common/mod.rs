#![allow(dead_code)]

use std::{
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering},
    },
    time::Duration,
};

use async_trait::async_trait;
use flume::Receiver;
use folio::{
    audio::{
        backend::AudioBackend, error::AudioError, interaction::InteractionFlag,
        provider::AudioStateProvider,
    },
    event::events::Event,
    library::{LyricLine, LyricText, Song, SongLibrary},
};

static FLAG_COUNTER: AtomicUsize = AtomicUsize::new(0);

/// Backend that can be told to refuse playback, standing in for a device
/// that needs a user gesture first.
#[derive(Default)]
pub struct MockBackend {
    pub blocked: AtomicBool,
    pub fail_once: AtomicBool,
    pub playing: AtomicBool,
    pub finished: AtomicBool,
    pub play_attempts: AtomicUsize,
    pub play_delay: Option<Duration>,
    pub position: Mutex<Duration>,
    pub volume: Mutex<f32>,
    pub loaded: Mutex<Vec<PathBuf>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn blocked() -> Self {
        let backend = Self::default();
        backend.blocked.store(true, Ordering::SeqCst);
        backend
    }

    pub fn unblock(&self) {
        self.blocked.store(false, Ordering::SeqCst);
    }

    pub fn attempts(&self) -> usize {
        self.play_attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AudioBackend for MockBackend {
    fn load(&self, path: &Path) -> Result<(), AudioError> {
        self.loaded.lock().unwrap().push(path.to_path_buf());
        self.playing.store(false, Ordering::SeqCst);
        self.finished.store(false, Ordering::SeqCst);
        Ok(())
    }

    async fn play(&self) -> Result<(), AudioError> {
        self.play_attempts.fetch_add(1, Ordering::SeqCst);
        if let Some(delay) = self.play_delay {
            tokio::time::sleep(delay).await;
        }
        if self.fail_once.swap(false, Ordering::SeqCst) {
            return Err(AudioError::AutoplayBlocked);
        }
        if self.blocked.load(Ordering::SeqCst) {
            return Err(AudioError::AutoplayBlocked);
        }
        self.playing.store(true, Ordering::SeqCst);
        Ok(())
    }

    fn pause(&self) {
        self.playing.store(false, Ordering::SeqCst);
    }

    fn is_playing(&self) -> bool {
        self.playing.load(Ordering::SeqCst)
    }

    fn is_finished(&self) -> bool {
        self.finished.load(Ordering::SeqCst)
    }

    fn position(&self) -> Duration {
        *self.position.lock().unwrap()
    }

    fn seek(&self, position: Duration) -> Result<(), AudioError> {
        *self.position.lock().unwrap() = position;
        Ok(())
    }

    fn set_volume(&self, volume: f32) {
        *self.volume.lock().unwrap() = volume;
    }

    fn volume(&self) -> f32 {
        *self.volume.lock().unwrap()
    }

    fn amplitude(&self) -> f32 {
        0.2
    }

    fn duration(&self) -> Option<Duration> {
        Some(Duration::from_secs(180))
    }
}

pub fn plain_line(time: f64, text: &str) -> LyricLine {
    LyricLine {
        time,
        text: LyricText::Plain {
            text: text.to_string(),
        },
    }
}

pub fn song(name: &str, lyrics: Vec<LyricLine>) -> Song {
    Song {
        name: name.to_string(),
        artist: "someone".to_string(),
        path: format!("music/{name}.mp3"),
        cover: String::new(),
        has_lyrics: !lyrics.is_empty(),
        lyrics,
    }
}

pub fn two_song_library() -> Arc<SongLibrary> {
    Arc::new(SongLibrary::from_songs(vec![
        song(
            "First",
            vec![plain_line(0.0, "line one"), plain_line(10.0, "line two")],
        ),
        song("Second", vec![plain_line(5.0, "only line")]),
    ]))
}

pub fn throwaway_flag() -> InteractionFlag {
    let id = FLAG_COUNTER.fetch_add(1, Ordering::SeqCst);
    InteractionFlag::at(
        std::env::temp_dir().join(format!("folio-test-{}-{id}", std::process::id())),
    )
}

pub fn provider_with(
    backend: Arc<MockBackend>,
    library: Arc<SongLibrary>,
) -> (Arc<AudioStateProvider>, Receiver<Event>) {
    let (event_tx, event_rx) = flume::unbounded();
    let provider = AudioStateProvider::new(backend, library, throwaway_flag(), event_tx);
    (provider, event_rx)
}
