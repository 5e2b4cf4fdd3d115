// Views turn view models into text, HTML or ratatui widgets

pub mod config;
pub mod directory;
pub mod guidance;
pub mod html;
pub mod tui;

pub use directory::{CompactGridView, DetailView, GridView};
pub use html::GalleryPage;
