//! TUI renderer for `userdeck browse`.
//!
//! ## Design:
//! - The event loop owns the `DirectoryController`; nothing else mutates it
//! - The startup fetch arrives once over a channel; until then the grid
//!   shows a loading message. A failed fetch closes the channel and the
//!   controller is never loaded
//! - Components turn keys into actions, the loop applies them to the
//!   controller, and presenters rebuild view models for every frame

mod components;

use std::io;
use std::sync::mpsc::{Receiver, TryRecvError};
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
};
use userdeck_engine::DirectoryController;
use userdeck_types::UserRecord;

use crate::presentation::presenters::{present_detail, present_grid};
use crate::presentation::views::tui::{
    DetailPopup, GridWidget, SearchBar, StatusBar, StatusMode, columns_for,
};
use components::{
    DetailAction, GridAction, GridComponent, SearchAction, SearchComponent, detail_input,
};

pub struct TuiRenderer {
    controller: DirectoryController,
    /// The startup fetch has answered, with users or with a failure
    fetched: bool,
    /// Query to apply once the users arrive
    initial_query: Option<String>,
    grid: GridComponent,
    search: SearchComponent,
    /// Cards per row in the last drawn frame
    columns: usize,
    should_quit: bool,
}

impl TuiRenderer {
    pub fn new(initial_query: Option<String>) -> Self {
        Self {
            controller: DirectoryController::new(),
            fetched: false,
            initial_query,
            grid: GridComponent::new(),
            search: SearchComponent::new(),
            columns: 1,
            should_quit: false,
        }
    }

    pub fn run(mut self, rx: Receiver<Vec<UserRecord>>) -> Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        ctrlc::set_handler(move || {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen);
            std::process::exit(0);
        })?;

        let result = self.event_loop(&mut terminal, rx);

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
        rx: Receiver<Vec<UserRecord>>,
    ) -> Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                self.handle_key_event(key);
            }

            if !self.fetched {
                match rx.try_recv() {
                    Ok(users) => self.on_loaded(users),
                    Err(TryRecvError::Empty) => {}
                    Err(TryRecvError::Disconnected) => self.on_fetch_failed(),
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    fn on_loaded(&mut self, users: Vec<UserRecord>) {
        // A search submitted while loading applies to the fresh collection
        let pending = self
            .initial_query
            .take()
            .or_else(|| self.controller.query().map(str::to_string));

        self.controller.load_collection(users);
        self.fetched = true;
        self.grid.reset();

        if let Some(query) = pending {
            self.submit_search(&query);
        }
        self.search.set_applied(self.controller.query().unwrap_or(""));
    }

    /// The grid stays empty; the failure was logged by the fetch thread
    fn on_fetch_failed(&mut self) {
        self.fetched = true;
    }

    fn submit_search(&mut self, query: &str) {
        // A rejected query is logged by the controller and leaves the grid as is
        if self.controller.apply_filter(query).is_ok() {
            self.search.set_applied(self.controller.query().unwrap_or(""));
            self.grid.reset();
        }
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Raw mode swallows SIGINT
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        if self.search.is_editing() {
            if let Some(SearchAction::Submit(query)) = self.search.handle_input(key) {
                self.submit_search(&query);
            }
            return;
        }

        if self.controller.is_open() {
            match detail_input(key) {
                Some(DetailAction::Step(direction)) => {
                    let _ = self.controller.advance(direction);
                }
                Some(DetailAction::Close) => {
                    let last = self.controller.selected_key();
                    self.controller.close_selection();
                    if let Some(key) = last {
                        self.grid.focus(&self.controller.grid(), key);
                    }
                }
                None => {}
            }
            return;
        }

        let layout = self.controller.grid();
        match self.grid.handle_input(key, &layout, self.columns) {
            Some(GridAction::Open(card)) => {
                if let Err(err) = self.controller.select_card(card) {
                    tracing::debug!(error = %err, "card not selectable");
                }
            }
            Some(GridAction::StartSearch) => self.search.begin(),
            Some(GridAction::Quit) => self.should_quit = true,
            None => {}
        }
    }

    fn render(&mut self, f: &mut Frame) {
        let [search_area, grid_area, status_area] = Layout::vertical([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(f.area());

        self.columns = columns_for(grid_area.width);

        f.render_widget(
            SearchBar::new(self.search.text(), self.search.is_editing()),
            search_area,
        );

        let grid_model = self.fetched.then(|| present_grid(&self.controller));
        let cursor = self.grid.cursor(&self.controller.grid());
        f.render_widget(GridWidget::new(grid_model.as_ref(), cursor), grid_area);

        let mode = if self.search.is_editing() {
            StatusMode::Search
        } else if let Some(detail) = present_detail(&self.controller) {
            f.render_widget(DetailPopup::new(&detail), grid_area);
            StatusMode::Detail
        } else {
            StatusMode::Grid
        };
        f.render_widget(StatusBar::new(mode), status_area);
    }
}
