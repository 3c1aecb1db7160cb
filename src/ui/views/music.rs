use ratatui::{buffer::Buffer, layout::Rect, widgets::Widget};

use crate::ui::{
    components::{AlbumWidget, SpectrumWidget},
    toggle::AlbumView,
};

/// The music page shows either the live spectrum or the album pane,
/// depending on where the view toggle currently stands.
pub struct MusicView<'a> {
    album: &'a AlbumView,
    amplitude: f32,
}

impl<'a> MusicView<'a> {
    pub fn new(album: &'a AlbumView, amplitude: f32) -> Self {
        Self { album, amplitude }
    }
}

impl<'a> Widget for MusicView<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.album.showing {
            AlbumWidget::new(self.album.song.as_ref(), self.album.highlight).render(area, buf);
        } else {
            SpectrumWidget::new(self.amplitude).render(area, buf);
        }
    }
}
