//! # Presentation Layer
//!
//! An adaptation of **MVVM** that keeps the directory engine free of any
//! output concerns.
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//!                                                                  ==(TUI)===> [ Widget ]
//! ```
//!
//! * `view_models/`: serializable data contracts. `--format json` dumps them
//!   as-is; text density (`ViewMode`) never changes their shape.
//! * `presenters/`: pure functions from controller state to view models.
//! * `views/`: `fmt::Display` text views, the HTML gallery page and ratatui
//!   widgets.
//! * `renderers/`: console output and the interactive event loop.
//! * `formatters/`: small shared string helpers (dates, escaping, widths).

pub mod formatters;
pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
pub use view_models::{CommandResultViewModel, CreateView, Guidance, StatusBadge, ViewMode};
