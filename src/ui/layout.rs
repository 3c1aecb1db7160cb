use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Widget},
};

use crate::{
    audio::state::PlayerState,
    spa::routes::Route,
    ui::{
        components::{PlayerBar, Sidebar},
        toggle::AlbumView,
        views::{HomeView, MapView, MusicView, PieView, RelationView},
    },
    util::colors,
};

/// Everything the draw pass needs, captured up front so rendering never
/// touches a lock.
pub struct RenderSnapshot {
    pub route: Route,
    pub content: String,
    pub is_transitioning: bool,
    pub sidebar_index: usize,
    pub album: AlbumView,
    pub amplitude: f32,
    pub player: PlayerState,
    pub duration: Option<Duration>,
    pub status: Option<String>,
}

pub struct AppLayout<'a> {
    snapshot: &'a RenderSnapshot,
}

impl<'a> AppLayout<'a> {
    pub fn new(snapshot: &'a RenderSnapshot) -> Self {
        Self { snapshot }
    }
}

impl<'a> Widget for AppLayout<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(3)])
            .split(area);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(22), Constraint::Min(10)])
            .split(rows[0]);

        let sidebar_block = Block::default()
            .borders(Borders::ALL)
            .title(" folio ")
            .style(Style::default().fg(colors::SECONDARY));
        let sidebar_inner = sidebar_block.inner(columns[0]);
        sidebar_block.render(columns[0], buf);
        Sidebar::new(
            Route::ALL.iter().map(|r| r.title()).collect(),
            self.snapshot.sidebar_index,
        )
        .render(sidebar_inner, buf);

        let title = if self.snapshot.is_transitioning {
            " ... ".to_string()
        } else {
            format!(" {} ", self.snapshot.route.title())
        };
        let content_block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .style(Style::default().fg(colors::SECONDARY));
        let content_inner = content_block.inner(columns[1]);
        content_block.render(columns[1], buf);

        // Mid-transition the outgoing page stays on screen.
        match self.snapshot.route {
            Route::Home => HomeView::new(&self.snapshot.content).render(content_inner, buf),
            Route::Pie => PieView.render(content_inner, buf),
            Route::Map => MapView.render(content_inner, buf),
            Route::Relation => RelationView.render(content_inner, buf),
            Route::Music => MusicView::new(&self.snapshot.album, self.snapshot.amplitude)
                .render(content_inner, buf),
        }

        PlayerBar::new(
            &self.snapshot.player,
            self.snapshot.duration,
            self.snapshot.status.as_deref(),
        )
        .render(rows[1], buf);
    }
}
