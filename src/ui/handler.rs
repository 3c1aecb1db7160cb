use tracing::info;

use crate::{
    event::events::Event,
    spa::routes::Route,
    ui::{
        app::App,
        input::InputHandler,
        toggle::ViewMode,
        tui::{TerminalEvent, Tui},
    },
};

pub struct EventHandler;

impl EventHandler {
    pub async fn handle_events(app: &mut App, tui: &mut Tui) -> color_eyre::Result<bool> {
        let mut should_render = false;
        if let Some(evt) = tui.next().await {
            if Self::handle_event(app, evt, tui).await? {
                should_render = true;
            }
        }

        while let Ok(evt) = app.event_rx.try_recv() {
            Self::handle_app_event(app, evt).await;
            should_render = true;
        }

        Ok(should_render)
    }

    async fn handle_event(
        app: &mut App,
        evt: TerminalEvent,
        tui: &mut Tui,
    ) -> color_eyre::Result<bool> {
        match evt {
            TerminalEvent::Init => {}
            TerminalEvent::Quit => app.should_quit = true,
            TerminalEvent::FocusGained => {
                app.has_focus = true;
                tui.clear()?;
            }
            TerminalEvent::FocusLost => app.has_focus = false,
            TerminalEvent::Key(key) => {
                // Every keypress counts as a user gesture.
                app.provider.on_gesture().await;
                if let Some(event) = InputHandler::handle_key(key, app.state.ui.text_entry) {
                    Self::handle_app_event(app, event).await;
                }
                return Ok(true);
            }
            TerminalEvent::Resize(_, _) => return Ok(true),
            TerminalEvent::Tick => return Ok(app.has_focus),
        }
        Ok(false)
    }

    async fn handle_app_event(app: &mut App, event: Event) {
        match event {
            Event::Navigate(route, direction) => {
                app.router.navigate(route, direction).await;
            }
            Event::PageShown(route) => {
                app.state.ui.sidebar_index = route.index();
            }
            Event::NavigationFailed(reason) => {
                app.state.ui.status = Some(format!("Navigation failed: {reason}"));
            }
            Event::ToggleView => {
                if app.router.current().await == Route::Music {
                    app.toggle.toggle().await;
                }
            }
            Event::TogglePlayPause => app.provider.toggle_play_pause().await,
            Event::NextSong => app.provider.change_song(1).await,
            Event::PreviousSong => app.provider.change_song(-1).await,
            Event::SeekLyric(index) => {
                if app.toggle.mode().await == ViewMode::Album {
                    app.toggle.set_highlight(Some(index)).await;
                    app.provider.seek_to_lyric(index).await;
                }
            }
            Event::VolumeUp(step) => app.provider.volume_up(step),
            Event::VolumeDown(step) => app.provider.volume_down(step),
            Event::ToggleMute => app.provider.toggle_mute(),
            Event::SongStarted(name) => info!("now playing: {name}"),
            Event::SongEnded => {}
            Event::AlbumSynced(_) => {}
            Event::PlaybackBlocked => {
                app.state.ui.status =
                    Some("Playback is waiting for a keypress".to_string());
            }
            Event::PlaybackResumed => app.state.ui.status = None,
            Event::Quit => app.should_quit = true,
        }
    }
}
