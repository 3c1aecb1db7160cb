use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::{library::Song, util::colors};

/// Lyric lines drawn around the current one.
const LYRIC_CONTEXT: usize = 3;

pub struct AlbumWidget<'a> {
    song: Option<&'a Song>,
    highlight: Option<usize>,
}

impl<'a> AlbumWidget<'a> {
    pub fn new(song: Option<&'a Song>, highlight: Option<usize>) -> Self {
        Self { song, highlight }
    }

    fn lyric_lines(&self, song: &'a Song, width: u16) -> Vec<Line<'a>> {
        if !song.has_lyrics || song.lyrics.is_empty() {
            return vec![Line::from(Span::styled(
                "♪ Instrumental ♪",
                Style::default().fg(colors::NEUTRAL),
            ))];
        }

        let center = self.highlight.unwrap_or(0);
        let start = center.saturating_sub(LYRIC_CONTEXT);
        let end = (center + LYRIC_CONTEXT + 1).min(song.lyrics.len());

        let mut lines = Vec::new();
        for (i, lyric) in song.lyrics[start..end].iter().enumerate() {
            let index = start + i;
            let style = if Some(index) == self.highlight {
                Style::default()
                    .fg(colors::ACCENT)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(colors::NEUTRAL)
            };

            lines.push(centered_line(lyric.text.primary(), width, style));
            if let Some(translation) = lyric.text.translation() {
                lines.push(centered_line(
                    translation,
                    width,
                    style.remove_modifier(Modifier::BOLD),
                ));
            }
        }
        lines
    }
}

fn centered_line(text: &str, width: u16, style: Style) -> Line<'_> {
    let text_width = text.width() as u16;
    let pad = (width.saturating_sub(text_width) / 2) as usize;
    Line::from(vec![
        Span::raw(" ".repeat(pad)),
        Span::styled(text, style),
    ])
}

impl<'a> Widget for AlbumWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let Some(song) = self.song else {
            Paragraph::new("Nothing playing yet")
                .alignment(Alignment::Center)
                .style(Style::default().fg(colors::NEUTRAL))
                .render(area, buf);
            return;
        };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(2),
                Constraint::Min(1),
            ])
            .split(area);

        let header = vec![
            Line::from(Span::styled(
                song.name.clone(),
                Style::default()
                    .fg(colors::PRIMARY)
                    .add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                song.artist.clone(),
                Style::default().fg(colors::SECONDARY),
            )),
        ];
        Paragraph::new(header)
            .alignment(Alignment::Center)
            .render(chunks[0], buf);

        let lyrics = self.lyric_lines(song, chunks[1].width);
        Paragraph::new(lyrics).render(chunks[1], buf);
    }
}
