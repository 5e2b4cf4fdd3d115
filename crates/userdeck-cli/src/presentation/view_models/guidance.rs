use serde::Serialize;
use std::fmt;
use std::path::PathBuf;

use super::{CreateView, ViewMode};

#[derive(Debug, Clone, Serialize)]
pub struct GuidanceViewModel {
    pub data_dir: PathBuf,
    pub config_exists: bool,
}

impl CreateView for GuidanceViewModel {
    fn create_view<'a>(&'a self, _mode: ViewMode) -> Box<dyn fmt::Display + 'a> {
        use crate::presentation::views::guidance::GuidanceView;
        Box::new(GuidanceView::new(self))
    }
}
