use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewMode};

/// One grid tile
#[derive(Debug, Clone, Serialize)]
pub struct CardViewModel {
    /// 1-based card number, stable across filters
    pub number: usize,
    pub name: String,
    pub email: String,
    pub city: String,
    pub state: String,
    pub picture: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct GridViewModel {
    pub cards: Vec<CardViewModel>,
    /// Size of the whole collection, regardless of the filter
    pub total: usize,
    pub query: Option<String>,
    /// Set only when a search matched nobody
    pub placeholder: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailViewModel {
    pub number: usize,
    pub name: String,
    pub email: String,
    pub picture: String,
    pub city: String,
    pub phone: String,
    /// `number, street, city, state postcode`
    pub address: String,
    /// Raw date of birth as delivered by the API
    pub dob: String,
    /// `MM/DD/YYYY`
    pub birthday: String,
    /// 1-based position within the sequence the detail view walks
    pub position: usize,
    pub of: usize,
    pub prev_number: usize,
    pub next_number: usize,
}

/// Everything a static export needs: the grid plus one detail per card
#[derive(Debug, Clone, Serialize)]
pub struct GalleryViewModel {
    pub grid: GridViewModel,
    pub details: Vec<DetailViewModel>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ExportResultViewModel {
    pub output: PathBuf,
    pub cards: usize,
    pub bytes: usize,
}

impl CreateView for GridViewModel {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::directory::{CompactGridView, GridView};

        match mode {
            ViewMode::Compact => Box::new(CompactGridView::new(self)),
            ViewMode::Standard => Box::new(GridView::fit_terminal(self)),
        }
    }
}

impl CreateView for DetailViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::directory::DetailView;
        Box::new(DetailView::new(self))
    }
}

impl CreateView for ExportResultViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::directory::ExportResultView;
        Box::new(ExportResultView::new(self))
    }
}
