use std::time::Duration;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    symbols,
    text::{Line, Span},
    widgets::{Block, Borders, Widget},
};

use crate::{audio::state::PlayerState, util::colors};

/// Bottom bar: current song, play state, elapsed time, and volume,
/// with a thin progress line when the total duration is known.
pub struct PlayerBar<'a> {
    state: &'a PlayerState,
    duration: Option<Duration>,
    status: Option<&'a str>,
}

impl<'a> PlayerBar<'a> {
    pub fn new(
        state: &'a PlayerState,
        duration: Option<Duration>,
        status: Option<&'a str>,
    ) -> Self {
        Self {
            state,
            duration,
            status,
        }
    }
}

fn format_time(duration: Duration) -> String {
    let secs = duration.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

impl<'a> Widget for PlayerBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default().borders(Borders::TOP);
        let inner = block.inner(area);
        block.render(area, buf);

        let icon = if self.state.is_playing { "▶" } else { "⏸" };
        let elapsed = format_time(self.state.current_time);
        let total = self
            .duration
            .map(format_time)
            .unwrap_or_else(|| "-:--".to_string());
        let volume = (self.state.volume * 100.0).round() as u8;

        let info = match self.status {
            Some(status) => Line::from(Span::styled(
                status.to_string(),
                Style::default().fg(colors::ACCENT),
            )),
            None => Line::from(vec![
                Span::styled(format!("{icon} "), Style::default().fg(colors::PRIMARY)),
                Span::styled(
                    self.state.current_song.clone(),
                    Style::default().fg(colors::PRIMARY),
                ),
                Span::styled(
                    format!("  {elapsed} / {total}  vol {volume}%"),
                    Style::default().fg(colors::NEUTRAL),
                ),
            ]),
        };

        if inner.height == 0 {
            return;
        }
        buf.set_line(inner.x, inner.y, &info, inner.width);

        if inner.height > 1 {
            if let Some(total) = self.duration {
                let ratio = if total.is_zero() {
                    0.0
                } else {
                    (self.state.current_time.as_secs_f64() / total.as_secs_f64()).clamp(0.0, 1.0)
                };
                let filled = (f64::from(inner.width) * ratio).round() as u16;
                for x in 0..inner.width {
                    let symbol = if x < filled {
                        symbols::line::THICK_HORIZONTAL
                    } else {
                        symbols::line::HORIZONTAL
                    };
                    let color = if x < filled {
                        colors::PRIMARY
                    } else {
                        colors::NEUTRAL
                    };
                    buf[(inner.x + x, inner.y + 1)]
                        .set_symbol(symbol)
                        .set_style(Style::default().fg(color));
                }
            }
        }
    }
}
