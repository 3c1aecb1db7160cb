use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    symbols::Marker,
    widgets::{
        List, ListItem, Widget,
        canvas::{Canvas, Line as CanvasLine, Points},
    },
};

use crate::{library::resume::CAMPUS_LOCATIONS, util::colors};

/// Campus locations plotted on a canvas, walked in a closed loop the way
/// the original tour traces them.
pub struct MapView;

impl Widget for MapView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(5), Constraint::Length(CAMPUS_LOCATIONS.len() as u16)])
            .split(area);

        let coords: Vec<(f64, f64)> = CAMPUS_LOCATIONS.iter().map(|l| l.coords).collect();
        let (x_bounds, y_bounds) = bounds(&coords);

        Canvas::default()
            .marker(Marker::Braille)
            .x_bounds(x_bounds)
            .y_bounds(y_bounds)
            .paint(|ctx| {
                for window in coords.windows(2) {
                    ctx.draw(&CanvasLine {
                        x1: window[0].0,
                        y1: window[0].1,
                        x2: window[1].0,
                        y2: window[1].1,
                        color: colors::SECONDARY,
                    });
                }
                if let (Some(first), Some(last)) = (coords.first(), coords.last()) {
                    ctx.draw(&CanvasLine {
                        x1: last.0,
                        y1: last.1,
                        x2: first.0,
                        y2: first.1,
                        color: colors::SECONDARY,
                    });
                }
                ctx.draw(&Points {
                    coords: &coords,
                    color: colors::ACCENT,
                });
            })
            .render(chunks[0], buf);

        let items: Vec<ListItem> = CAMPUS_LOCATIONS
            .iter()
            .map(|location| {
                ListItem::new(format!(
                    "  {} ({:.6}, {:.6})",
                    location.name, location.coords.0, location.coords.1
                ))
                .style(Style::default().fg(colors::NEUTRAL))
            })
            .collect();
        List::new(items).render(chunks[1], buf);
    }
}

fn bounds(coords: &[(f64, f64)]) -> ([f64; 2], [f64; 2]) {
    let mut x = [f64::MAX, f64::MIN];
    let mut y = [f64::MAX, f64::MIN];
    for &(cx, cy) in coords {
        x[0] = x[0].min(cx);
        x[1] = x[1].max(cx);
        y[0] = y[0].min(cy);
        y[1] = y[1].max(cy);
    }
    // Pad so edge points are not clipped by the frame.
    let dx = ((x[1] - x[0]) * 0.2).max(1e-4);
    let dy = ((y[1] - y[0]) * 0.2).max(1e-4);
    ([x[0] - dx, x[1] + dx], [y[0] - dy, y[1] + dy])
}
