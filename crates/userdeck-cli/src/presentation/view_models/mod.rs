pub mod common;
pub mod config;
pub mod directory;
pub mod guidance;
pub mod result;

pub use common::{Guidance, StatusBadge, StatusLevel, ViewMode};
pub use config::{ConfigInitViewModel, ConfigViewModel};
pub use directory::{
    CardViewModel, DetailViewModel, ExportResultViewModel, GalleryViewModel, GridViewModel,
};
pub use guidance::GuidanceViewModel;
pub use result::CommandResultViewModel;

use std::fmt;

/// Bridge from a view model to its text view for a given density
pub trait CreateView {
    fn create_view<'a>(&'a self, mode: ViewMode) -> Box<dyn fmt::Display + 'a>;
}
