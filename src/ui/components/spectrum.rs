use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::Widget,
};

use crate::util::colors;

const BLOCKS: [char; 8] = ['▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Amplitude-driven bar field. The measured level sets the envelope and
/// per-bar jitter keeps it alive between analyzer windows.
pub struct SpectrumWidget {
    amplitude: f32,
}

impl SpectrumWidget {
    pub fn new(amplitude: f32) -> Self {
        Self { amplitude }
    }
}

impl Widget for SpectrumWidget {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let level = (self.amplitude * 4.0).clamp(0.0, 1.0);
        for x in 0..area.width {
            let jitter: f32 = rand::random_range(0.6..1.0);
            let bar = level * jitter * area.height as f32;
            let full = bar.floor() as u16;
            let remainder = bar.fract();

            for y in 0..area.height {
                let from_bottom = area.height - 1 - y;
                let cell_x = area.x + x;
                let cell_y = area.y + y;
                if from_bottom < full {
                    buf[(cell_x, cell_y)]
                        .set_char('█')
                        .set_style(Style::default().fg(colors::PRIMARY));
                } else if from_bottom == full && remainder > 0.0 {
                    let idx = ((remainder * 8.0) as usize).min(7);
                    buf[(cell_x, cell_y)]
                        .set_char(BLOCKS[idx])
                        .set_style(Style::default().fg(colors::SECONDARY));
                }
            }
        }
    }
}
