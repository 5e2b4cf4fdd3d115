// Engine module - the directory's state machine
// Owns the user collection, the active (possibly filtered) view and the
// detail-view selection. Rendering layers read from it and react to the
// DirectoryEvent each operation returns.

mod controller;
mod error;
mod grid;
mod query;

pub use controller::{Direction, DirectoryController, DirectoryEvent};
pub use error::{SelectionError, ValidationError};
pub use grid::{CardKey, CardSlot, GridLayout, NO_RESULT};
pub use query::SearchQuery;
