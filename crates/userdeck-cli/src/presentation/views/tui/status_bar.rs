use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

/// Which keys are live
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMode {
    Grid,
    Search,
    Detail,
}

pub struct StatusBar {
    mode: StatusMode,
}

impl StatusBar {
    pub fn new(mode: StatusMode) -> Self {
        Self { mode }
    }
}

impl Widget for StatusBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let keys: &[(&str, &str)] = match self.mode {
            StatusMode::Grid => &[
                ("[←↑↓→/hjkl]", "move"),
                ("[Enter]", "open"),
                ("[/]", "search"),
                ("[q]", "quit"),
            ],
            StatusMode::Search => &[("[Enter]", "apply"), ("[Esc]", "cancel")],
            StatusMode::Detail => &[
                ("[←/p]", "prev"),
                ("[→/n]", "next"),
                ("[Esc/x]", "close"),
            ],
        };

        let key_style = Style::default().fg(Color::Yellow);
        let spans: Vec<Span> = keys
            .iter()
            .flat_map(|(key, action)| {
                [
                    Span::styled(*key, key_style),
                    Span::raw(format!(" {}  ", action)),
                ]
            })
            .collect();

        Paragraph::new(Line::from(spans)).render(area, buf);
    }
}
