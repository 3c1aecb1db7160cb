use std::{
    sync::{
        Arc,
        atomic::{AtomicBool, AtomicU64, Ordering},
    },
    time::Duration,
};

use flume::Sender;
use tokio::{sync::RwLock, time::MissedTickBehavior};

use crate::{
    bridge::{BridgeMessage, PlayerBridge},
    event::events::Event,
    library::{Song, SongLibrary},
    util::task::TaskManager,
};

pub const SWITCH_TASK: &str = "view_switch";
pub const SYNC_TASK: &str = "album_sync";
pub const HIGHLIGHT_TASK: &str = "lyric_highlight";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Spectrum,
    Album,
}

#[derive(Debug, Clone)]
pub struct ToggleConfig {
    /// Delay before the incoming view starts drawing.
    pub reveal_delay: Duration,
    /// How long both views coexist before the switch settles.
    pub settle_delay: Duration,
    pub poll_interval: Duration,
    pub highlight_interval: Duration,
}

impl Default for ToggleConfig {
    fn default() -> Self {
        Self {
            reveal_delay: Duration::from_millis(50),
            settle_delay: Duration::from_millis(500),
            poll_interval: Duration::from_millis(300),
            highlight_interval: Duration::from_millis(300),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AlbumView {
    /// The album pane occupies space on screen.
    pub visible: bool,
    /// The album pane is fully drawn, not mid-switch.
    pub showing: bool,
    pub song: Option<Song>,
    pub highlight: Option<usize>,
}

/// Two-phase switch between the spectrum and album views of the music
/// page. While the album is up, two background tasks keep it honest:
/// one follows song changes (push with a poll fallback), the other
/// follows the playhead through the lyrics.
#[derive(Clone)]
pub struct ViewToggle {
    inner: Arc<ToggleInner>,
}

pub struct ToggleInner {
    mode: RwLock<ViewMode>,
    switching: AtomicBool,
    /// Bumped by reset; a switch carrying a stale epoch stops dead.
    epoch: AtomicU64,
    album: RwLock<AlbumView>,
    spectrum_displayed: AtomicBool,
    tasks: TaskManager,
    bridge: PlayerBridge,
    library: Arc<SongLibrary>,
    config: ToggleConfig,
    event_tx: Sender<Event>,
}

impl ViewToggle {
    pub fn new(
        bridge: PlayerBridge,
        library: Arc<SongLibrary>,
        config: ToggleConfig,
        event_tx: Sender<Event>,
    ) -> Self {
        Self {
            inner: Arc::new(ToggleInner {
                mode: RwLock::new(ViewMode::Spectrum),
                switching: AtomicBool::new(false),
                epoch: AtomicU64::new(0),
                album: RwLock::new(AlbumView::default()),
                spectrum_displayed: AtomicBool::new(true),
                tasks: TaskManager::new(),
                bridge,
                library,
                config,
                event_tx,
            }),
        }
    }

    /// Returns false when a switch is already in progress.
    pub async fn toggle(&self) -> bool {
        if self.inner.switching.swap(true, Ordering::SeqCst) {
            return false;
        }

        let mode = *self.inner.mode.read().await;
        let epoch = self.inner.epoch.load(Ordering::SeqCst);
        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            match mode {
                ViewMode::Spectrum => inner.enter_album(epoch).await,
                ViewMode::Album => inner.enter_spectrum(epoch).await,
            }
        });
        // Registered so reset can cancel a switch mid-flight.
        self.inner.tasks.spawn(SWITCH_TASK, handle);
        true
    }

    /// Back to the spectrum with no transition, dropping every task.
    pub async fn reset(&self) {
        self.inner.epoch.fetch_add(1, Ordering::SeqCst);
        self.inner.tasks.abort_all();
        *self.inner.mode.write().await = ViewMode::Spectrum;
        *self.inner.album.write().await = AlbumView::default();
        self.inner.spectrum_displayed.store(true, Ordering::SeqCst);
        self.inner.switching.store(false, Ordering::SeqCst);
    }

    pub async fn mode(&self) -> ViewMode {
        *self.inner.mode.read().await
    }

    pub fn is_switching(&self) -> bool {
        self.inner.switching.load(Ordering::SeqCst)
    }

    pub async fn album(&self) -> AlbumView {
        self.inner.album.read().await.clone()
    }

    pub fn spectrum_displayed(&self) -> bool {
        self.inner.spectrum_displayed.load(Ordering::SeqCst)
    }

    pub fn is_task_running(&self, key: &str) -> bool {
        self.inner.tasks.is_running(key)
    }

    pub async fn set_highlight(&self, highlight: Option<usize>) {
        self.inner.album.write().await.highlight = highlight;
    }
}

impl ToggleInner {
    fn cancelled(&self, epoch: u64) -> bool {
        self.epoch.load(Ordering::SeqCst) != epoch
    }

    async fn enter_album(self: Arc<Self>, epoch: u64) {
        if self.cancelled(epoch) {
            return;
        }
        self.album.write().await.visible = true;
        tokio::time::sleep(self.config.reveal_delay).await;
        if self.cancelled(epoch) {
            return;
        }

        self.album.write().await.showing = true;
        *self.mode.write().await = ViewMode::Album;

        self.sync_album(None).await;
        if self.cancelled(epoch) {
            return;
        }
        self.start_sync_task();
        self.start_highlight_task();
        if self.cancelled(epoch) {
            // Reset raced the spawns; take the loops back down.
            self.tasks.abort(SYNC_TASK);
            self.tasks.abort(HIGHLIGHT_TASK);
            return;
        }

        tokio::time::sleep(self.config.settle_delay).await;
        if self.cancelled(epoch) {
            return;
        }
        self.spectrum_displayed.store(false, Ordering::SeqCst);
        self.switching.store(false, Ordering::SeqCst);
    }

    async fn enter_spectrum(self: Arc<Self>, epoch: u64) {
        if self.cancelled(epoch) {
            return;
        }
        self.spectrum_displayed.store(true, Ordering::SeqCst);
        self.album.write().await.showing = false;
        tokio::time::sleep(self.config.reveal_delay).await;
        if self.cancelled(epoch) {
            return;
        }

        *self.mode.write().await = ViewMode::Spectrum;
        self.tasks.abort(SYNC_TASK);
        self.tasks.abort(HIGHLIGHT_TASK);
        self.album.write().await.highlight = None;

        tokio::time::sleep(self.config.settle_delay).await;
        if self.cancelled(epoch) {
            return;
        }
        self.album.write().await.visible = false;
        self.switching.store(false, Ordering::SeqCst);
    }

    fn start_sync_task(self: &Arc<Self>) {
        let inner = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut push = inner.bridge.subscribe();
            let mut ticker = tokio::time::interval(inner.config.poll_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);

            loop {
                let update = match push.as_ref() {
                    Some(rx) => {
                        tokio::select! {
                            msg = rx.recv_async() => match msg {
                                Ok(BridgeMessage::AlbumUpdateComplete { song, .. }) => {
                                    Ok(Some(song))
                                }
                                Err(_) => Err(()),
                            },
                            _ = ticker.tick() => Ok(None),
                        }
                    }
                    None => {
                        ticker.tick().await;
                        Ok(None)
                    }
                };

                match update {
                    Ok(pushed) => inner.sync_album(pushed).await,
                    // Publisher is gone, fall back to polling only.
                    Err(()) => push = None,
                }
            }
        });
        self.tasks.spawn(SYNC_TASK, handle);
    }

    fn start_highlight_task(self: &Arc<Self>) {
        let inner = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(inner.config.highlight_interval);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                ticker.tick().await;
                inner.update_highlight().await;
            }
        });
        self.tasks.spawn(HIGHLIGHT_TASK, handle);
    }

    /// Brings the album pane in line with whatever the player says is
    /// current. Push updates and poll snapshots both land here, last
    /// writer wins.
    async fn sync_album(&self, pushed: Option<String>) {
        let name = match pushed {
            Some(name) => name,
            None => match self.bridge.player_state() {
                Some(state) => state.current_song,
                None => return,
            },
        };
        if name.is_empty() {
            return;
        }

        {
            let album = self.album.read().await;
            if album.song.as_ref().is_some_and(|s| s.name == name) {
                return;
            }
        }

        let song = self.library.get(&name).cloned().unwrap_or_else(|| Song {
            name: name.clone(),
            artist: String::new(),
            path: String::new(),
            cover: String::new(),
            has_lyrics: false,
            lyrics: Vec::new(),
        });

        let mut album = self.album.write().await;
        album.song = Some(song);
        album.highlight = None;
        drop(album);

        let _ = self.event_tx.send(Event::AlbumSynced(name));
    }

    async fn update_highlight(&self) {
        let Some(state) = self.bridge.player_state() else {
            return;
        };

        let mut album = self.album.write().await;
        let Some(song) = &album.song else {
            return;
        };
        // A snapshot for a different song is stale, skip it.
        if song.name != state.current_song {
            return;
        }
        album.highlight = song.lyric_index_at(state.current_time);
    }
}
