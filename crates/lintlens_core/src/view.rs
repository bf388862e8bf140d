//! Rendering-surface model of the detail listing.
//!
//! [`ResultsView`] owns the current entries together with their selection.
//! Regenerating the entries resets the selection in the same call, and entry
//! references minted for an earlier listing are refused, so a selection can
//! never point into a stale listing.

use tracing::{debug, warn};

use crate::detail::{self, DetailEntry};
use crate::error::SelectError;
use crate::result::DocumentResult;
use crate::selection::SelectionState;

/// Handle to an entry of one particular listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EntryRef {
    /// Listing the index belongs to.
    pub generation: u64,
    /// Position within that listing.
    pub index: usize,
}

/// Detail entries plus their selection.
#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    entries: Vec<DetailEntry>,
    selection: SelectionState,
    generation: u64,
}

impl ResultsView {
    /// Creates an empty, unselected view.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the listing with one built from `results`.
    ///
    /// Returns the new generation.
    pub fn regenerate(&mut self, results: &[DocumentResult]) -> u64 {
        self.entries = detail::present(results);
        self.selection.reset();
        self.generation += 1;
        debug!(
            "Regenerated results view (generation {}, {} entries)",
            self.generation,
            self.entries.len()
        );
        self.generation
    }

    /// Current entries.
    pub fn entries(&self) -> &[DetailEntry] {
        &self.entries
    }

    /// Current selection.
    pub fn selection(&self) -> &SelectionState {
        &self.selection
    }

    /// Current generation. Starts at zero and grows on every regeneration.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// The selected entry, if any.
    pub fn selected_entry(&self) -> Option<&DetailEntry> {
        self.selection.current().and_then(|i| self.entries.get(i))
    }

    /// Mints a reference to `index` in the current listing.
    pub fn entry_ref(&self, index: usize) -> Option<EntryRef> {
        (index < self.entries.len()).then_some(EntryRef {
            generation: self.generation,
            index,
        })
    }

    /// Handles an "entry activated" event.
    ///
    /// On error the selection is left untouched.
    pub fn activate(&mut self, entry: EntryRef) -> Result<(), SelectError> {
        if entry.generation != self.generation {
            let err = SelectError::Stale {
                found: entry.generation,
                current: self.generation,
            };
            warn!("Ignoring activation: {}", err);
            return Err(err);
        }
        if entry.index >= self.entries.len() {
            let err = SelectError::OutOfRange {
                index: entry.index,
                len: self.entries.len(),
            };
            warn!("Ignoring activation: {}", err);
            return Err(err);
        }

        self.selection.select(entry.index);
        Ok(())
    }

    /// Selects `index` in the current listing.
    pub fn select(&mut self, index: usize) -> Result<(), SelectError> {
        self.activate(EntryRef {
            generation: self.generation,
            index,
        })
    }
}
