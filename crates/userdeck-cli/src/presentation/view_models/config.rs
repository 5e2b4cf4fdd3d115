use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct ConfigViewModel {
    pub path: PathBuf,
    pub exists: bool,
    pub base_url: String,
    pub results: u32,
    pub nationalities: Vec<String>,
    pub timeout_secs: Option<u64>,
    /// Set when `--input` replaces the API for this run
    pub input: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ConfigInitViewModel {
    pub path: PathBuf,
    pub overwritten: bool,
}

impl CreateView for ConfigViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigView;
        Box::new(ConfigView::new(self))
    }
}

impl CreateView for ConfigInitViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::config::ConfigInitView;
        Box::new(ConfigInitView::new(self))
    }
}
