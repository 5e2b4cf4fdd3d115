use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

use crate::presentation::formatters::truncate;
use crate::presentation::view_models::{CardViewModel, GridViewModel};

pub const CARD_WIDTH: u16 = 34;
pub const CARD_HEIGHT: u16 = 5;

/// Cards per row for a grid area of `width` columns
pub fn columns_for(width: u16) -> usize {
    // Borders of the surrounding block
    (width.saturating_sub(2) / CARD_WIDTH).max(1) as usize
}

pub struct GridWidget<'a> {
    model: Option<&'a GridViewModel>,
    cursor: Option<usize>,
}

impl<'a> GridWidget<'a> {
    /// `None` while the startup fetch is still running
    pub fn new(model: Option<&'a GridViewModel>, cursor: Option<usize>) -> Self {
        Self { model, cursor }
    }
}

fn card_widget(card: &CardViewModel, focused: bool) -> Paragraph<'_> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let width = (CARD_WIDTH - 2) as usize;

    let lines = vec![
        Line::from(vec![
            Span::styled(format!("#{} ", card.number), Style::default().fg(Color::DarkGray)),
            Span::styled(
                truncate(&card.name, width.saturating_sub(4)),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(truncate(&card.email, width)),
        Line::from(truncate(&format!("{}, {}", card.city, card.state), width)),
    ];

    Paragraph::new(lines).block(Block::default().borders(Borders::ALL).border_style(border))
}

impl<'a> Widget for GridWidget<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.model {
            Some(model) => match &model.query {
                Some(query) => format!(" Users matching \"{}\": {} of {} ", query, model.cards.len(), model.total),
                None => format!(" Users: {} ", model.total),
            },
            None => " Users ".to_string(),
        };

        let block = Block::default().borders(Borders::ALL).title(title);
        let inner = block.inner(area);
        block.render(area, buf);

        let Some(model) = self.model else {
            Paragraph::new("Loading users...")
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        };

        if let Some(placeholder) = &model.placeholder {
            Paragraph::new(Line::from(placeholder.as_str()).style(Style::default().add_modifier(Modifier::BOLD)))
                .alignment(Alignment::Center)
                .render(inner, buf);
            return;
        }

        if model.cards.is_empty() || inner.width == 0 || inner.height == 0 {
            return;
        }

        let columns = columns_for(area.width);
        let visible_rows = ((inner.height / CARD_HEIGHT).max(1)) as usize;
        let cursor_row = self.cursor.unwrap_or(0) / columns;
        let first_row = cursor_row.saturating_sub(visible_rows - 1);

        for (index, card) in model.cards.iter().enumerate().skip(first_row * columns) {
            let row = index / columns - first_row;
            if row >= visible_rows {
                break;
            }
            let col = index % columns;

            let x = inner.x + col as u16 * CARD_WIDTH;
            let y = inner.y + row as u16 * CARD_HEIGHT;
            if x >= inner.right() || y >= inner.bottom() {
                continue;
            }
            let rect = Rect::new(
                x,
                y,
                CARD_WIDTH.min(inner.right() - x),
                CARD_HEIGHT.min(inner.bottom() - y),
            );

            card_widget(card, self.cursor == Some(index)).render(rect, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (area.top()..area.bottom())
            .map(|y| {
                (area.left()..area.right())
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_columns_for_width() {
        assert_eq!(columns_for(10), 1);
        assert_eq!(columns_for(70), 2);
        assert_eq!(columns_for(140), 4);
    }

    #[test]
    fn test_loading_message_before_fetch() {
        let area = Rect::new(0, 0, 40, 5);
        let mut buf = Buffer::empty(area);

        GridWidget::new(None, None).render(area, &mut buf);

        assert!(buffer_text(&buf).contains("Loading users..."));
    }

    #[test]
    fn test_cards_and_placeholder() {
        let card = CardViewModel {
            number: 3,
            name: "Ann Lee".to_string(),
            email: "ann.lee@example.com".to_string(),
            city: "Portland".to_string(),
            state: "Oregon".to_string(),
            picture: String::new(),
        };
        let mut model = GridViewModel {
            cards: vec![card],
            total: 3,
            query: Some("an".to_string()),
            placeholder: None,
        };
        let area = Rect::new(0, 0, 40, 8);

        let mut buf = Buffer::empty(area);
        GridWidget::new(Some(&model), Some(0)).render(area, &mut buf);
        let text = buffer_text(&buf);
        assert!(text.contains("#3 Ann Lee"));
        assert!(text.contains("Portland, Oregon"));

        model.cards.clear();
        model.placeholder = Some("No result".to_string());
        let mut buf = Buffer::empty(area);
        GridWidget::new(Some(&model), None).render(area, &mut buf);
        assert!(buffer_text(&buf).contains("No result"));
    }
}
