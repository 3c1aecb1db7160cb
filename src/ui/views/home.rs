use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Paragraph, Widget, Wrap},
};

use crate::util::colors;

/// Renders whatever content the router currently has active. The home
/// page and every fetched page go through here as plain text.
pub struct HomeView<'a> {
    content: &'a str,
}

impl<'a> HomeView<'a> {
    pub fn new(content: &'a str) -> Self {
        Self { content }
    }
}

impl<'a> Widget for HomeView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().fg(colors::PRIMARY))
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
