mod common;

use std::{sync::Arc, time::Duration};

use common::{MockBackend, provider_with, two_song_library};
use flume::Receiver;
use folio::{
    audio::provider::AudioStateProvider,
    bridge::PlayerBridge,
    event::events::Event,
    library::SongLibrary,
    ui::toggle::{HIGHLIGHT_TASK, SWITCH_TASK, SYNC_TASK, ToggleConfig, ViewMode, ViewToggle},
};

fn short_config() -> ToggleConfig {
    ToggleConfig {
        reveal_delay: Duration::from_millis(10),
        settle_delay: Duration::from_millis(40),
        poll_interval: Duration::from_millis(30),
        highlight_interval: Duration::from_millis(20),
    }
}

fn toggle_with(
    provider: &Arc<AudioStateProvider>,
    library: Arc<SongLibrary>,
) -> (ViewToggle, Receiver<Event>) {
    let (event_tx, event_rx) = flume::unbounded();
    let toggle = ViewToggle::new(
        PlayerBridge::new(provider),
        library,
        short_config(),
        event_tx,
    );
    (toggle, event_rx)
}

async fn settle() {
    tokio::time::sleep(Duration::from_millis(150)).await;
}

#[tokio::test]
async fn toggling_reveals_the_album_and_syncs_the_song() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(backend, Arc::clone(&library));
    let (toggle, event_rx) = toggle_with(&provider, library);

    assert!(toggle.toggle().await);
    settle().await;

    assert_eq!(toggle.mode().await, ViewMode::Album);
    assert!(!toggle.is_switching());
    assert!(!toggle.spectrum_displayed());

    let album = toggle.album().await;
    assert!(album.visible);
    assert!(album.showing);
    assert_eq!(album.song.as_ref().map(|s| s.name.as_str()), Some("First"));

    assert!(toggle.is_task_running(SYNC_TASK));
    assert!(toggle.is_task_running(HIGHLIGHT_TASK));

    let synced: Vec<String> = event_rx
        .try_iter()
        .filter_map(|event| match event {
            Event::AlbumSynced(name) => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(synced, vec!["First".to_string()]);
}

#[tokio::test]
async fn a_second_toggle_mid_switch_is_dropped() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(backend, Arc::clone(&library));
    let (toggle, _event_rx) = toggle_with(&provider, library);

    assert!(toggle.toggle().await);
    assert!(!toggle.toggle().await);

    settle().await;
    assert_eq!(toggle.mode().await, ViewMode::Album);
}

#[tokio::test]
async fn album_without_a_player_shows_the_placeholder() {
    let (event_tx, _event_rx) = flume::unbounded();
    let toggle = ViewToggle::new(
        PlayerBridge::detached(),
        two_song_library(),
        short_config(),
        event_tx,
    );

    assert!(toggle.toggle().await);
    settle().await;

    assert_eq!(toggle.mode().await, ViewMode::Album);
    let album = toggle.album().await;
    assert!(album.visible);
    assert!(album.song.is_none());
}

#[tokio::test]
async fn album_follows_song_changes() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(backend, Arc::clone(&library));
    let (toggle, event_rx) = toggle_with(&provider, library);

    assert!(toggle.toggle().await);
    settle().await;
    assert_eq!(
        toggle.album().await.song.as_ref().map(|s| s.name.clone()),
        Some("First".to_string())
    );

    provider.change_song(1).await;
    settle().await;

    let album = toggle.album().await;
    assert_eq!(album.song.as_ref().map(|s| s.name.as_str()), Some("Second"));

    let synced: Vec<String> = event_rx
        .try_iter()
        .filter_map(|event| match event {
            Event::AlbumSynced(name) => Some(name),
            _ => None,
        })
        .collect();
    assert_eq!(synced, vec!["First".to_string(), "Second".to_string()]);
}

#[tokio::test]
async fn highlight_follows_the_playhead() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(Arc::clone(&backend), Arc::clone(&library));
    let (toggle, _event_rx) = toggle_with(&provider, library);

    // "First" has lines at 0 and 10 seconds.
    *backend.position.lock().unwrap() = Duration::from_secs(12);

    assert!(toggle.toggle().await);
    settle().await;

    assert_eq!(toggle.album().await.highlight, Some(1));
}

#[tokio::test]
async fn reset_tears_the_album_state_down() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(backend, Arc::clone(&library));
    let (toggle, _event_rx) = toggle_with(&provider, library);

    assert!(toggle.toggle().await);
    settle().await;
    assert!(toggle.is_task_running(SYNC_TASK));

    toggle.reset().await;

    assert_eq!(toggle.mode().await, ViewMode::Spectrum);
    assert!(toggle.spectrum_displayed());
    assert!(!toggle.is_switching());
    assert!(!toggle.is_task_running(SYNC_TASK));
    assert!(!toggle.is_task_running(HIGHLIGHT_TASK));

    let album = toggle.album().await;
    assert!(!album.visible);
    assert!(album.song.is_none());

    // The toggle is usable again straight away.
    assert!(toggle.toggle().await);
}

#[tokio::test]
async fn reset_mid_switch_cancels_the_switch() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(backend, Arc::clone(&library));
    let (toggle, _event_rx) = toggle_with(&provider, library);

    // Tear down inside the reveal window, before the album settles.
    assert!(toggle.toggle().await);
    toggle.reset().await;

    tokio::time::sleep(Duration::from_millis(150)).await;

    assert_eq!(toggle.mode().await, ViewMode::Spectrum);
    assert!(toggle.spectrum_displayed());
    assert!(!toggle.is_switching());
    assert!(!toggle.is_task_running(SWITCH_TASK));
    assert!(!toggle.is_task_running(SYNC_TASK));
    assert!(!toggle.is_task_running(HIGHLIGHT_TASK));

    let album = toggle.album().await;
    assert!(!album.visible);
    assert!(!album.showing);
    assert!(album.song.is_none());
}

#[tokio::test]
async fn toggling_back_restores_the_spectrum() {
    let backend = Arc::new(MockBackend::new());
    let library = two_song_library();
    let (provider, _provider_rx) = provider_with(backend, Arc::clone(&library));
    let (toggle, _event_rx) = toggle_with(&provider, library);

    assert!(toggle.toggle().await);
    settle().await;
    assert!(toggle.toggle().await);
    settle().await;

    assert_eq!(toggle.mode().await, ViewMode::Spectrum);
    assert!(toggle.spectrum_displayed());
    assert!(!toggle.is_switching());

    let album = toggle.album().await;
    assert!(!album.visible);
    assert!(!album.showing);
    assert_eq!(album.highlight, None);
}
