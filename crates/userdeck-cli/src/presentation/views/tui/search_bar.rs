use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search input. Shows the text being typed while editing, the applied
/// query otherwise.
pub struct SearchBar<'a> {
    text: &'a str,
    editing: bool,
}

impl<'a> SearchBar<'a> {
    pub fn new(text: &'a str, editing: bool) -> Self {
        Self { text, editing }
    }
}

impl<'a> Widget for SearchBar<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let border = if self.editing {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut spans = vec![Span::raw(self.text)];
        if self.editing {
            spans.push(Span::styled("█", Style::default().fg(Color::Yellow)));
        } else if self.text.is_empty() {
            spans.push(Span::styled("Search...", Style::default().fg(Color::DarkGray)));
        }

        Paragraph::new(Line::from(spans))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(border)
                    .title(" Search "),
            )
            .render(area, buf);
    }
}
