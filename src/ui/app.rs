use std::sync::Arc;

use flume::{Receiver, Sender};
use ratatui::Frame;

use crate::{
    audio::{
        backend::{AudioBackend, RodioBackend},
        interaction::InteractionFlag,
        provider::AudioStateProvider,
    },
    bridge::PlayerBridge,
    event::events::Event,
    library::SongLibrary,
    spa::{
        fetch::HttpPageFetcher,
        modules::{MusicModule, PageModules},
        router::{RouterConfig, SpaRouter},
        routes::{Direction, Route},
    },
    ui::{
        handler::EventHandler,
        layout::{AppLayout, RenderSnapshot},
        state::AppState,
        toggle::{ToggleConfig, ViewToggle},
        tui,
    },
};

pub struct App {
    pub event_rx: Receiver<Event>,
    pub event_tx: Sender<Event>,
    pub provider: Arc<AudioStateProvider>,
    pub bridge: PlayerBridge,
    pub router: Arc<SpaRouter>,
    pub toggle: ViewToggle,
    pub library: Arc<SongLibrary>,
    pub state: AppState,
    pub has_focus: bool,
    pub should_quit: bool,
}

impl App {
    pub async fn new() -> color_eyre::Result<Self> {
        let (event_tx, event_rx) = flume::unbounded();

        let library = SongLibrary::load(&SongLibrary::default_sources()).await;
        let backend: Arc<dyn AudioBackend> = Arc::new(RodioBackend::new()?);
        let provider = AudioStateProvider::new(
            backend,
            Arc::clone(&library),
            InteractionFlag::new(),
            event_tx.clone(),
        );
        provider.start_monitor();

        let bridge = PlayerBridge::new(&provider);
        let toggle = ViewToggle::new(
            bridge.clone(),
            Arc::clone(&library),
            ToggleConfig::default(),
            event_tx.clone(),
        );

        let mut modules = PageModules::new();
        modules.register(
            Route::Music,
            Box::new(MusicModule::new(toggle.clone(), Arc::clone(&provider))),
        );

        let router = Arc::new(
            SpaRouter::new(
                Arc::new(HttpPageFetcher::new()?),
                Arc::new(modules),
                RouterConfig::default(),
                event_tx.clone(),
            )
            .await,
        );

        Ok(Self {
            event_rx,
            event_tx,
            provider,
            bridge,
            router,
            toggle,
            library,
            state: AppState::default(),
            has_focus: true,
            should_quit: false,
        })
    }

    pub async fn run(&mut self) -> color_eyre::Result<()> {
        let mut tui = tui::Tui::new()?;
        tui.enter()?;

        // A fragment on the command line deep-links into a page.
        if let Some(fragment) = std::env::args().nth(1) {
            let route = Route::from_fragment(&fragment);
            self.router.navigate(route, Direction::Forward).await;
        }

        while !self.should_quit {
            let snapshot = self.snapshot().await;
            tui.draw(|f| Self::ui(f, self.has_focus, &snapshot))?;

            EventHandler::handle_events(self, &mut tui).await?;
        }

        tui.exit()?;
        Ok(())
    }

    fn ui(frame: &mut Frame, has_focus: bool, snapshot: &RenderSnapshot) {
        if has_focus {
            frame.render_widget(AppLayout::new(snapshot), frame.area());
        }
    }

    async fn snapshot(&self) -> RenderSnapshot {
        let (amplitude, duration) = match self.bridge.audio_handle() {
            Some(handle) => (handle.amplitude(), handle.duration()),
            None => (0.0, None),
        };
        let player = self.bridge.player_state().unwrap_or_default();

        RenderSnapshot {
            route: self.router.current().await,
            content: self.router.active_content().await,
            is_transitioning: self.router.is_transitioning(),
            sidebar_index: self.state.ui.sidebar_index,
            album: self.toggle.album().await,
            amplitude,
            player,
            duration,
            status: self.state.ui.status.clone(),
        }
    }
}
