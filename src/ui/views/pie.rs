use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Bar, BarChart, BarGroup, Widget},
};

use crate::{library::resume::COURSE_GRADES, util::colors};

pub struct PieView;

impl Widget for PieView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bars: Vec<Bar> = COURSE_GRADES
            .iter()
            .map(|grade| {
                Bar::default()
                    .value(grade.score)
                    .label::<ratatui::text::Line>(grade.course.into())
                    .style(Style::default().fg(colors::PRIMARY))
                    .value_style(
                        Style::default()
                            .fg(colors::BACKGROUND)
                            .bg(colors::PRIMARY),
                    )
            })
            .collect();

        BarChart::default()
            .direction(ratatui::layout::Direction::Horizontal)
            .data(BarGroup::default().bars(&bars))
            .bar_width(1)
            .bar_gap(1)
            .max(100)
            .render(area, buf);
    }
}
