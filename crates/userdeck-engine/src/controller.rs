use userdeck_types::UserRecord;

use crate::grid::{CardKey, GridLayout};
use crate::query::SearchQuery;
use crate::{SelectionError, ValidationError};

/// Detail-view navigation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

impl Direction {
    /// Circular step over a sequence of `len` items. `len` must be non-zero.
    fn step(self, index: usize, len: usize) -> usize {
        match self {
            Direction::Next => {
                if index + 1 >= len {
                    0
                } else {
                    index + 1
                }
            }
            Direction::Prev => {
                if index == 0 {
                    len - 1
                } else {
                    index - 1
                }
            }
        }
    }
}

/// What changed, so the caller knows which part to redraw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectoryEvent {
    /// Grid now shows the whole collection
    GridReset { cards: usize },
    /// Grid now shows a filtered subset (possibly empty)
    GridFiltered { matches: usize },
    /// Detail view opened on an index of the active view
    DetailOpened { index: usize },
    /// Detail view moved to a neighbouring user
    DetailMoved { from: usize, to: usize },
    /// Detail view torn down
    DetailClosed,
    /// Nothing to redraw
    Unchanged,
}

/// An open detail view. The sequence is captured when the view opens, so
/// filtering the grid underneath does not change what next/prev walk.
#[derive(Debug, Clone)]
struct Selection {
    sequence: Vec<usize>,
    index: usize,
}

/// Owns the user collection, the active view over it and the selection.
///
/// The active view is kept as positions into the collection; filtering
/// produces a new position list and never touches the records.
#[derive(Debug, Clone, Default)]
pub struct DirectoryController {
    collection: Vec<UserRecord>,
    active_view: Vec<usize>,
    query: Option<SearchQuery>,
    selection: Option<Selection>,
}

impl DirectoryController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(records: Vec<UserRecord>) -> Self {
        let mut controller = Self::new();
        controller.load_collection(records);
        controller
    }

    /// Replace the collection wholesale. Clears any filter and selection.
    pub fn load_collection(&mut self, records: Vec<UserRecord>) -> DirectoryEvent {
        self.active_view = (0..records.len()).collect();
        self.collection = records;
        self.query = None;
        self.selection = None;
        tracing::info!(cards = self.collection.len(), "collection loaded");
        DirectoryEvent::GridReset {
            cards: self.collection.len(),
        }
    }

    /// Filter the grid by name.
    ///
    /// A rejected query leaves the active view exactly as it was. An empty
    /// query shows the whole collection again.
    pub fn apply_filter(&mut self, input: &str) -> Result<DirectoryEvent, ValidationError> {
        let query = SearchQuery::parse(input).inspect_err(|err| {
            tracing::warn!(query = %err.query, offending = ?err.offending, "Invalid characters detected in search field.");
        })?;

        if query.is_empty() {
            self.active_view = (0..self.collection.len()).collect();
            self.query = None;
            return Ok(DirectoryEvent::GridReset {
                cards: self.active_view.len(),
            });
        }

        self.active_view = self
            .collection
            .iter()
            .enumerate()
            .filter(|(_, user)| query.matches(user))
            .map(|(position, _)| position)
            .collect();
        tracing::debug!(query = query.as_str(), matches = self.active_view.len(), "filter applied");
        self.query = Some(query);

        Ok(DirectoryEvent::GridFiltered {
            matches: self.active_view.len(),
        })
    }

    /// Open the detail view on an index of the active view.
    pub fn select(&mut self, index: usize) -> Result<DirectoryEvent, SelectionError> {
        let len = self.active_view.len();
        if index >= len {
            return Err(SelectionError::OutOfRange { index, len });
        }

        self.selection = Some(Selection {
            sequence: self.active_view.clone(),
            index,
        });
        tracing::debug!(index, "detail opened");
        Ok(DirectoryEvent::DetailOpened { index })
    }

    /// Open the detail view on a rendered card.
    pub fn select_card(&mut self, key: CardKey) -> Result<DirectoryEvent, SelectionError> {
        let index = self
            .active_view
            .iter()
            .position(|&position| position == key.position())
            .ok_or(SelectionError::UnknownCard {
                number: key.number(),
            })?;
        self.select(index)
    }

    /// Step the open detail view circularly.
    pub fn advance(&mut self, direction: Direction) -> Result<DirectoryEvent, SelectionError> {
        let selection = self.selection.as_mut().ok_or(SelectionError::NoSelection)?;

        let from = selection.index;
        let to = direction.step(from, selection.sequence.len());
        selection.index = to;
        tracing::debug!(from, to, ?direction, "detail moved");

        Ok(DirectoryEvent::DetailMoved { from, to })
    }

    /// Tear down the detail view. Safe to call when nothing is open.
    pub fn close_selection(&mut self) -> DirectoryEvent {
        match self.selection.take() {
            Some(_) => DirectoryEvent::DetailClosed,
            None => DirectoryEvent::Unchanged,
        }
    }

    pub fn collection(&self) -> &[UserRecord] {
        &self.collection
    }

    /// Records of the active view, in collection order
    pub fn active_view(&self) -> impl Iterator<Item = &UserRecord> + '_ {
        self.active_view
            .iter()
            .map(move |&position| &self.collection[position])
    }

    pub fn active_len(&self) -> usize {
        self.active_view.len()
    }

    pub fn grid(&self) -> GridLayout {
        GridLayout::new(&self.active_view, self.query.is_some())
    }

    pub fn is_filtered(&self) -> bool {
        self.query.is_some()
    }

    pub fn query(&self) -> Option<&str> {
        self.query.as_ref().map(SearchQuery::as_str)
    }

    pub fn is_open(&self) -> bool {
        self.selection.is_some()
    }

    /// Index of the open detail view within the sequence it walks
    pub fn selection_index(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.index)
    }

    /// Length of the sequence the open detail view walks
    pub fn selection_len(&self) -> Option<usize> {
        self.selection.as_ref().map(|s| s.sequence.len())
    }

    pub fn selected_key(&self) -> Option<CardKey> {
        self.selection
            .as_ref()
            .and_then(|s| s.sequence.get(s.index))
            .map(|&position| CardKey::new(position))
    }

    pub fn selected(&self) -> Option<&UserRecord> {
        self.selected_key()
            .and_then(|key| self.collection.get(key.position()))
    }

    /// Cards that `advance(Prev)` and `advance(Next)` would land on, without
    /// moving
    pub fn neighbors(&self) -> Option<(CardKey, CardKey)> {
        let selection = self.selection.as_ref()?;
        let len = selection.sequence.len();
        let key_at = |index: usize| CardKey::new(selection.sequence[index]);

        Some((
            key_at(Direction::Prev.step(selection.index, len)),
            key_at(Direction::Next.step(selection.index, len)),
        ))
    }
}
