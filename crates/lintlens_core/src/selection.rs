//! Single-selection state of the detail listing.

/// Which detail entry, if any, is highlighted.
///
/// At most one index is selected at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SelectionState {
    selected: Option<usize>,
}

impl SelectionState {
    /// Creates an unselected state.
    pub const fn new() -> Self {
        Self { selected: None }
    }

    /// Selects `index`, deselecting any other entry.
    pub fn select(&mut self, index: usize) {
        self.selected = Some(index);
    }

    /// Returns the selected index.
    pub fn current(&self) -> Option<usize> {
        self.selected
    }

    /// Returns true if `index` is the selected entry.
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Clears the selection.
    pub fn reset(&mut self) {
        self.selected = None;
    }
}
