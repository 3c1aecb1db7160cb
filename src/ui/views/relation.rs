use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem, Widget},
};

use crate::{library::resume::RELATIONS, util::colors};

pub struct RelationView;

impl Widget for RelationView {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let items: Vec<ListItem> = RELATIONS
            .iter()
            .map(|relation| {
                ListItem::new(Line::from(vec![
                    Span::styled(
                        format!("  {:<14}", relation.relation),
                        Style::default()
                            .fg(colors::SECONDARY)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(
                        format!("{}  ", relation.name),
                        Style::default().fg(colors::PRIMARY),
                    ),
                    Span::styled(relation.desc, Style::default().fg(colors::NEUTRAL)),
                ]))
            })
            .collect();

        List::new(items).render(area, buf);
    }
}
