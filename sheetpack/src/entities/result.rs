use crate::entities::{Placement, UnplacedItem};

/// Outcome of a single packing call.
/// Both lists are in the order the strategy processed the items.
#[derive(Debug, Clone, PartialEq)]
pub struct PackResult<L> {
    pub placements: Vec<Placement<L>>,
    pub unplaced: Vec<UnplacedItem<L>>,
}

impl<L> PackResult<L> {
    pub fn new() -> Self {
        PackResult {
            placements: vec![],
            unplaced: vec![],
        }
    }

    /// Total number of items this result accounts for, placed or not
    pub fn n_items(&self) -> usize {
        self.placements.len() + self.unplaced.len()
    }

    pub fn is_complete(&self) -> bool {
        self.unplaced.is_empty()
    }
}

impl<L> Default for PackResult<L> {
    fn default() -> Self {
        Self::new()
    }
}
