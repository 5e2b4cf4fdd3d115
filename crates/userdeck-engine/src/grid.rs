/// Placeholder the grid shows when a search matches nobody
pub const NO_RESULT: &str = "No result";

/// Stable identity of a rendered card: the record's position in the
/// collection. Keys survive filtering, so card #3 is the same user in every
/// view of one collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CardKey(usize);

impl CardKey {
    pub fn new(position: usize) -> Self {
        Self(position)
    }

    /// Zero-based position in the collection
    pub fn position(self) -> usize {
        self.0
    }

    /// One-based number shown to people
    pub fn number(self) -> usize {
        self.0 + 1
    }

    /// Inverse of [`CardKey::number`]; `0` is not a card number
    pub fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).map(Self)
    }
}

/// One rendered card and where it sits in the active view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardSlot {
    pub key: CardKey,
    pub view_index: usize,
}

/// Rendered-item-to-index mapping for the current grid.
///
/// Renderers draw the slots in order (or the placeholder when present) and
/// hand keys back to the controller; they never derive an index from their
/// own widget layout.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GridLayout {
    slots: Vec<CardSlot>,
    placeholder: Option<&'static str>,
}

impl GridLayout {
    pub(crate) fn new(positions: &[usize], filtered: bool) -> Self {
        let slots = positions
            .iter()
            .enumerate()
            .map(|(view_index, &position)| CardSlot {
                key: CardKey::new(position),
                view_index,
            })
            .collect::<Vec<_>>();
        let placeholder = (filtered && slots.is_empty()).then_some(NO_RESULT);
        Self { slots, placeholder }
    }

    pub fn slots(&self) -> &[CardSlot] {
        &self.slots
    }

    pub fn placeholder(&self) -> Option<&'static str> {
        self.placeholder
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn slot_at(&self, view_index: usize) -> Option<CardSlot> {
        self.slots.get(view_index).copied()
    }

    pub fn index_of(&self, key: CardKey) -> Option<usize> {
        self.slots
            .iter()
            .find(|slot| slot.key == key)
            .map(|slot| slot.view_index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_numbers_are_one_based() {
        assert_eq!(CardKey::new(0).number(), 1);
        assert_eq!(CardKey::from_number(3), Some(CardKey::new(2)));
        assert_eq!(CardKey::from_number(0), None);
    }

    #[test]
    fn test_layout_maps_keys_to_view_indices() {
        let layout = GridLayout::new(&[0, 2, 5], true);

        assert_eq!(layout.len(), 3);
        assert_eq!(layout.index_of(CardKey::new(5)), Some(2));
        assert_eq!(layout.index_of(CardKey::new(1)), None);
        assert_eq!(layout.slot_at(1).map(|s| s.key), Some(CardKey::new(2)));
        assert_eq!(layout.placeholder(), None);
    }

    #[test]
    fn test_placeholder_only_for_empty_filtered_grid() {
        assert_eq!(GridLayout::new(&[], true).placeholder(), Some(NO_RESULT));
        assert_eq!(GridLayout::new(&[], false).placeholder(), None);
    }
}
