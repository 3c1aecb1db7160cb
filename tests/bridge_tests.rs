mod common;

use std::{sync::Arc, time::Duration};

use common::{MockBackend, provider_with, two_song_library};
use folio::bridge::{BridgeMessage, PlayerBridge};

#[tokio::test]
async fn snapshot_reflects_the_player() {
    let backend = Arc::new(MockBackend::new());
    let (provider, _event_rx) = provider_with(Arc::clone(&backend), two_song_library());
    let bridge = PlayerBridge::new(&provider);

    provider.force_play().await;
    *backend.position.lock().unwrap() = Duration::from_secs(42);

    let state = bridge.player_state().expect("player is alive");
    assert!(state.is_playing);
    assert_eq!(state.current_song, "First");
    assert_eq!(state.current_time, Duration::from_secs(42));
    assert!((state.volume - 0.5).abs() < f32::EPSILON);
    assert!((0.0..=1.0).contains(&state.volume));
}

#[tokio::test]
async fn detached_player_answers_with_none() {
    let backend = Arc::new(MockBackend::new());
    let (provider, _event_rx) = provider_with(backend, two_song_library());
    let bridge = PlayerBridge::new(&provider);
    drop(provider);

    assert!(bridge.player_state().is_none());
    assert!(bridge.audio_handle().is_none());
    assert!(bridge.subscribe().is_none());
}

#[tokio::test]
async fn every_subscriber_hears_a_song_change() {
    let backend = Arc::new(MockBackend::new());
    let (provider, _event_rx) = provider_with(backend, two_song_library());
    let bridge = PlayerBridge::new(&provider);

    let first = bridge.subscribe().expect("player is alive");
    let second = bridge.subscribe().expect("player is alive");

    provider.change_song(1).await;

    for rx in [&first, &second] {
        let BridgeMessage::AlbumUpdateComplete { song, timestamp } = rx
            .recv_timeout(Duration::from_millis(200))
            .expect("update arrives");
        assert_eq!(song, "Second");
        assert!(timestamp > 0);
    }
}

#[tokio::test]
async fn audio_handle_exposes_the_backend() {
    let backend = Arc::new(MockBackend::new());
    let (provider, _event_rx) = provider_with(backend, two_song_library());
    let bridge = PlayerBridge::new(&provider);

    let handle = bridge.audio_handle().expect("player is alive");
    assert_eq!(handle.duration(), Some(Duration::from_secs(180)));
    assert!(handle.amplitude() > 0.0);
}

#[tokio::test]
async fn mute_and_volume_steps_show_up_in_the_snapshot() {
    let backend = Arc::new(MockBackend::new());
    let (provider, _event_rx) = provider_with(backend, two_song_library());
    let bridge = PlayerBridge::new(&provider);

    provider.volume_up(30);
    let state = bridge.player_state().expect("player is alive");
    assert!((state.volume - 0.8).abs() < 1e-6);

    provider.volume_up(50);
    let state = bridge.player_state().expect("player is alive");
    assert!((state.volume - 1.0).abs() < 1e-6);

    provider.toggle_mute();
    let state = bridge.player_state().expect("player is alive");
    assert_eq!(state.volume, 0.0);

    provider.toggle_mute();
    provider.volume_down(120);
    let state = bridge.player_state().expect("player is alive");
    assert_eq!(state.volume, 0.0);
}
