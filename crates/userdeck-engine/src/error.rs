use std::fmt;

/// Search input contained a character outside `[A-Za-z0-9]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub query: String,
    pub offending: char,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Invalid characters detected in search field: {:?} in {:?}",
            self.offending, self.query
        )
    }
}

impl std::error::Error for ValidationError {}

/// Selection operation could not be applied
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionError {
    /// `advance` was called with no detail view open
    NoSelection,

    /// Index is not inside the active view
    OutOfRange { index: usize, len: usize },

    /// Card is not part of the active view (hidden by the filter or never loaded)
    UnknownCard { number: usize },
}

impl fmt::Display for SelectionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SelectionError::NoSelection => write!(f, "No user is selected"),
            SelectionError::OutOfRange { index, len } => {
                write!(f, "Index {} is out of range for {} visible user(s)", index, len)
            }
            SelectionError::UnknownCard { number } => {
                write!(f, "Card #{} is not in the current view", number)
            }
        }
    }
}

impl std::error::Error for SelectionError {}
