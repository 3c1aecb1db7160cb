use std::{
    path::Path,
    sync::{
        Arc, RwLock,
        atomic::{AtomicBool, AtomicU8, AtomicUsize, Ordering},
    },
    time::Duration,
};

use arc_swap::ArcSwap;
use flume::{Receiver, Sender};
use tokio::time::MissedTickBehavior;
use tracing::{debug, warn};

use crate::{
    audio::{
        backend::AudioBackend,
        error::AudioError,
        interaction::InteractionFlag,
        state::{AutoplayPhase, PlayerState},
    },
    bridge::{BridgeMessage, BridgePublisher},
    event::events::Event,
    library::SongLibrary,
};

const DEFAULT_VOLUME_PCT: u8 = 50;

/// Owns the playlist position and the autoplay state machine. The first
/// play attempt may be refused by the backend; a refusal is retried once
/// and then parked until a user gesture arrives.
pub struct AudioStateProvider {
    backend: Arc<dyn AudioBackend>,
    library: Arc<SongLibrary>,
    current_index: AtomicUsize,
    current_song: ArcSwap<String>,
    phase: RwLock<AutoplayPhase>,
    force_play_guard: AtomicBool,
    gesture_armed: AtomicBool,
    interaction: InteractionFlag,
    interacted: AtomicBool,
    volume_pct: AtomicU8,
    is_muted: AtomicBool,
    publisher: BridgePublisher,
    event_tx: Sender<Event>,
}

impl AudioStateProvider {
    pub fn new(
        backend: Arc<dyn AudioBackend>,
        library: Arc<SongLibrary>,
        interaction: InteractionFlag,
        event_tx: Sender<Event>,
    ) -> Arc<Self> {
        let interacted = interaction.read();
        let first_song = library
            .songs()
            .first()
            .map(|song| song.name.clone())
            .unwrap_or_default();

        let provider = Arc::new(Self {
            backend,
            library,
            current_index: AtomicUsize::new(0),
            current_song: ArcSwap::from_pointee(first_song),
            phase: RwLock::new(AutoplayPhase::Blocked),
            force_play_guard: AtomicBool::new(false),
            gesture_armed: AtomicBool::new(false),
            interaction,
            interacted: AtomicBool::new(interacted),
            volume_pct: AtomicU8::new(DEFAULT_VOLUME_PCT),
            is_muted: AtomicBool::new(false),
            publisher: BridgePublisher::new(),
            event_tx,
        });

        provider.load_current();
        provider.apply_volume();
        provider
    }

    /// Watches for the end of the current song and advances the playlist.
    /// Kept separate from construction so tests can opt out of the loop.
    pub fn start_monitor(self: &Arc<Self>) {
        let provider = Arc::clone(self);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(Duration::from_millis(100));
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            let mut was_playing = false;

            loop {
                ticker.tick().await;
                if provider.backend.is_playing() {
                    was_playing = true;
                } else if was_playing && provider.backend.is_finished() {
                    was_playing = false;
                    let _ = provider.event_tx.send(Event::SongEnded);
                    provider.change_song(1).await;
                }
            }
        });
    }

    /// Tries to start playback, riding out a blocked device with one
    /// immediate retry. At most one attempt chain runs at a time.
    pub async fn force_play(&self) {
        if self.force_play_guard.swap(true, Ordering::SeqCst) {
            return;
        }

        match self.backend.play().await {
            Ok(()) => self.enter_playing(),
            Err(AudioError::AutoplayBlocked) => {
                self.set_phase(AutoplayPhase::Retrying);
                self.backend.pause();
                tokio::time::sleep(Duration::from_millis(10)).await;

                match self.backend.play().await {
                    Ok(()) => self.enter_playing(),
                    Err(AudioError::AutoplayBlocked) => {
                        self.set_phase(AutoplayPhase::Blocked);
                        self.gesture_armed.store(true, Ordering::SeqCst);
                        let _ = self.event_tx.send(Event::PlaybackBlocked);
                    }
                    Err(err) => warn!("playback retry failed: {err}"),
                }
            }
            Err(err) => warn!("playback failed: {err}"),
        }

        self.force_play_guard.store(false, Ordering::SeqCst);
    }

    /// Called on every user gesture. The first one is persisted; a
    /// gesture while playback is parked restarts it.
    pub async fn on_gesture(&self) {
        if !self.interacted.swap(true, Ordering::SeqCst) {
            self.interaction.write();
        }
        if self.gesture_armed.swap(false, Ordering::SeqCst) {
            self.force_play().await;
        }
    }

    pub async fn toggle_play_pause(&self) {
        if self.backend.is_playing() {
            self.backend.pause();
        } else {
            self.force_play().await;
        }
    }

    /// Moves `direction` steps through the playlist, wrapping at both
    /// ends, and announces the switch on the bridge.
    pub async fn change_song(&self, direction: i64) {
        let len = self.library.len();
        if len == 0 {
            return;
        }

        let was_playing = self.backend.is_playing();
        let index = self.current_index.load(Ordering::SeqCst) as i64;
        let next = (index + direction).rem_euclid(len as i64) as usize;
        self.current_index.store(next, Ordering::SeqCst);

        let song = &self.library.songs()[next];
        if let Err(err) = self.backend.load(Path::new(&song.path)) {
            warn!("could not load {}: {err}", song.name);
        }
        self.apply_volume();
        self.current_song.store(Arc::new(song.name.clone()));

        self.publisher
            .publish(BridgeMessage::album_update(song.name.clone()));
        let _ = self.event_tx.send(Event::SongStarted(song.name.clone()));

        if was_playing || self.interacted.load(Ordering::SeqCst) {
            self.force_play().await;
        }
    }

    /// Jumps to the timestamp of a lyric line, keeping the play/pause
    /// state as it was.
    pub async fn seek_to_lyric(&self, index: usize) {
        let name = self.current_song();
        let Some(target) = self
            .library
            .get(&name)
            .and_then(|song| song.lyric_seek_target(index))
        else {
            debug!("no lyric line {index} for {name}");
            return;
        };

        let was_playing = self.backend.is_playing();
        if let Err(err) = self.backend.seek(target) {
            warn!("seek failed: {err}");
            return;
        }
        if was_playing {
            self.force_play().await;
        } else {
            self.backend.pause();
        }
    }

    pub fn player_state(&self) -> PlayerState {
        PlayerState {
            current_time: self.backend.position(),
            volume: self.effective_volume(),
            is_playing: self.backend.is_playing(),
            current_song: self.current_song(),
        }
    }

    pub fn current_song(&self) -> String {
        self.current_song.load().as_ref().clone()
    }

    pub fn audio_handle(self: &Arc<Self>) -> Arc<dyn AudioBackend> {
        Arc::clone(&self.backend)
    }

    pub fn subscribe_push(&self) -> Receiver<BridgeMessage> {
        self.publisher.subscribe()
    }

    pub fn phase(&self) -> AutoplayPhase {
        *self.phase.read().unwrap()
    }

    pub fn has_interacted(&self) -> bool {
        self.interacted.load(Ordering::SeqCst)
    }

    pub fn gesture_armed(&self) -> bool {
        self.gesture_armed.load(Ordering::SeqCst)
    }

    pub fn volume_up(&self, step: u8) {
        let current = self.volume_pct.load(Ordering::SeqCst);
        self.volume_pct
            .store(current.saturating_add(step).min(100), Ordering::SeqCst);
        self.apply_volume();
    }

    pub fn volume_down(&self, step: u8) {
        let current = self.volume_pct.load(Ordering::SeqCst);
        self.volume_pct
            .store(current.saturating_sub(step), Ordering::SeqCst);
        self.apply_volume();
    }

    pub fn toggle_mute(&self) {
        self.is_muted.fetch_xor(true, Ordering::SeqCst);
        self.apply_volume();
    }

    fn effective_volume(&self) -> f32 {
        if self.is_muted.load(Ordering::SeqCst) {
            0.0
        } else {
            f32::from(self.volume_pct.load(Ordering::SeqCst)) / 100.0
        }
    }

    fn apply_volume(&self) {
        self.backend.set_volume(self.effective_volume());
    }

    fn load_current(&self) {
        let index = self.current_index.load(Ordering::SeqCst);
        if let Some(song) = self.library.songs().get(index) {
            if let Err(err) = self.backend.load(Path::new(&song.path)) {
                warn!("could not load {}: {err}", song.name);
            }
        }
    }

    fn enter_playing(&self) {
        self.set_phase(AutoplayPhase::Playing);
        let _ = self.event_tx.send(Event::PlaybackResumed);
    }

    fn set_phase(&self, phase: AutoplayPhase) {
        *self.phase.write().unwrap() = phase;
    }
}
