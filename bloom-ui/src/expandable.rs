//! Single-expansion state for a rendered list of cards.

use log::warn;

/// Tracks which card, if any, of a list of `len` cards is expanded.
///
/// Expanding a card collapses whichever card was open before it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpandableList {
    len: usize,
    expanded: Option<usize>,
}

impl ExpandableList {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            expanded: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn expanded(&self) -> Option<usize> {
        self.expanded
    }

    pub fn is_expanded(&self, index: usize) -> bool {
        self.expanded == Some(index)
    }

    /// Collapse `index` if it is open, otherwise open it.
    ///
    /// Indices past the end of the list leave the state untouched.
    pub fn toggle(&mut self, index: usize) {
        if index >= self.len {
            warn!(
                "Ignoring toggle of card {} in a list of {}",
                index, self.len
            );
            return;
        }
        self.expanded = if self.is_expanded(index) {
            None
        } else {
            Some(index)
        };
    }

    pub fn collapse(&mut self) {
        self.expanded = None;
    }
}
