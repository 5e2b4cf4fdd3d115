//! Input components for the browse screen.
//!
//! Each component owns its UI state, turns key presses into actions for the
//! renderer, and never touches the directory controller itself.

use crossterm::event::{KeyCode, KeyEvent};
use userdeck_engine::{CardKey, Direction, GridLayout};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridAction {
    Open(CardKey),
    StartSearch,
    Quit,
}

/// Cursor over the rendered cards
#[derive(Debug, Default)]
pub struct GridComponent {
    cursor: usize,
}

impl GridComponent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Focused index into the grid, or `None` when the grid is empty
    pub fn cursor(&self, layout: &GridLayout) -> Option<usize> {
        (!layout.is_empty()).then(|| self.cursor.min(layout.len() - 1))
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Put the cursor on a card if it is in the grid
    pub fn focus(&mut self, layout: &GridLayout, key: CardKey) {
        if let Some(index) = layout.index_of(key) {
            self.cursor = index;
        }
    }

    pub fn handle_input(
        &mut self,
        key: KeyEvent,
        layout: &GridLayout,
        columns: usize,
    ) -> Option<GridAction> {
        let len = layout.len();
        let columns = columns.max(1);
        // Index Safety: the grid may have shrunk since the last key press
        if len > 0 && self.cursor >= len {
            self.cursor = len - 1;
        }

        match key.code {
            KeyCode::Char('q') => Some(GridAction::Quit),
            KeyCode::Char('/') => Some(GridAction::StartSearch),
            KeyCode::Enter => layout.slot_at(self.cursor).map(|slot| GridAction::Open(slot.key)),
            KeyCode::Right | KeyCode::Char('l') => {
                if self.cursor + 1 < len {
                    self.cursor += 1;
                }
                None
            }
            KeyCode::Left | KeyCode::Char('h') => {
                self.cursor = self.cursor.saturating_sub(1);
                None
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + columns < len {
                    self.cursor += columns;
                }
                None
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if self.cursor >= columns {
                    self.cursor -= columns;
                }
                None
            }
            KeyCode::Home => {
                self.cursor = 0;
                None
            }
            KeyCode::End => {
                self.cursor = len.saturating_sub(1);
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchAction {
    Submit(String),
    Cancel,
}

/// Search input box
#[derive(Debug, Default)]
pub struct SearchComponent {
    buffer: String,
    applied: String,
    editing: bool,
}

impl SearchComponent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    /// Text to draw in the search box
    pub fn text(&self) -> &str {
        if self.editing {
            &self.buffer
        } else {
            &self.applied
        }
    }

    pub fn begin(&mut self) {
        self.buffer = self.applied.clone();
        self.editing = true;
    }

    /// Record the query the grid is currently filtered by
    pub fn set_applied(&mut self, query: &str) {
        self.applied = query.to_string();
    }

    pub fn handle_input(&mut self, key: KeyEvent) -> Option<SearchAction> {
        match key.code {
            KeyCode::Enter => {
                self.editing = false;
                Some(SearchAction::Submit(self.buffer.clone()))
            }
            KeyCode::Esc => {
                self.editing = false;
                self.buffer.clear();
                Some(SearchAction::Cancel)
            }
            KeyCode::Backspace => {
                self.buffer.pop();
                None
            }
            KeyCode::Char(c) => {
                self.buffer.push(c);
                None
            }
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailAction {
    Step(Direction),
    Close,
}

/// Key bindings of the open detail view
pub fn detail_input(key: KeyEvent) -> Option<DetailAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('p') => Some(DetailAction::Step(Direction::Prev)),
        KeyCode::Right | KeyCode::Char('n') => Some(DetailAction::Step(Direction::Next)),
        KeyCode::Esc | KeyCode::Char('x') => Some(DetailAction::Close),
        _ => None,
    }
}
