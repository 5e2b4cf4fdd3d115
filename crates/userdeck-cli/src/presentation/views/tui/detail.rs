use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

use crate::presentation::view_models::DetailViewModel;

const POPUP_WIDTH: u16 = 64;
const POPUP_HEIGHT: u16 = 14;

/// Detail view drawn over the grid
pub struct DetailPopup<'a> {
    model: &'a DetailViewModel,
}

impl<'a> DetailPopup<'a> {
    pub fn new(model: &'a DetailViewModel) -> Self {
        Self { model }
    }
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

impl<'a> Widget for DetailPopup<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let m = self.model;
        let popup = centered(area, POPUP_WIDTH, POPUP_HEIGHT);
        Clear.render(popup, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(format!(" #{} ({} of {}) ", m.number, m.position, m.of))
            .title_bottom(Line::from(" [x] close ").alignment(Alignment::Right));
        let inner = block.inner(popup);
        block.render(popup, buf);

        let [body, nav] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        let label = Style::default().fg(Color::DarkGray);
        let lines = vec![
            Line::from(Span::styled(
                m.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(m.email.as_str()),
            Line::from(m.city.as_str()),
            Line::from(Span::styled("─".repeat(inner.width as usize), label)),
            Line::from(m.phone.as_str()),
            Line::from(m.address.as_str()),
            Line::from(format!("Birthday: {}", m.birthday)),
            Line::from(vec![Span::styled("Picture: ", label), Span::raw(m.picture.as_str())]),
        ];
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true })
            .render(body, buf);

        let key = Style::default().fg(Color::Yellow);
        let nav_line = Line::from(vec![
            Span::styled("[←/p]", key),
            Span::raw(format!(" Prev #{}   ", m.prev_number)),
            Span::styled("[→/n]", key),
            Span::raw(format!(" Next #{}", m.next_number)),
        ]);
        Paragraph::new(nav_line)
            .alignment(Alignment::Center)
            .render(nav, buf);
    }
}
