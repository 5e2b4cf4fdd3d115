//! Ratatui widgets for `userdeck browse`.
//!
//! Widgets only draw what they are given; cursor position and input state
//! live in the renderer's components.

mod detail;
mod grid;
mod search_bar;
mod status_bar;

pub use detail::DetailPopup;
pub use grid::{CARD_HEIGHT, CARD_WIDTH, GridWidget, columns_for};
pub use search_bar::SearchBar;
pub use status_bar::{StatusBar, StatusMode};
