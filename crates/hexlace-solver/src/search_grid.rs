use hexlace_core::{Digit, DigitGrid, DigitSet, Position, Topology};

/// One search-tree node's working state: an exclusively-owned grid plus a
/// shared reference to the topology.
///
/// Cloning copies the grid and shares the topology; a clone is the only
/// way state crosses from one search node to another, so sibling branches
/// never observe each other's placements.
#[derive(Debug, Clone)]
pub(crate) struct SearchGrid<'a> {
    grid: DigitGrid,
    topology: &'a Topology,
}

impl<'a> SearchGrid<'a> {
    pub(crate) fn new(grid: DigitGrid, topology: &'a Topology) -> Self {
        Self { grid, topology }
    }

    /// Digits not used by any filled peer of `pos`.
    ///
    /// Recomputed on demand from the current grid; candidate sets are
    /// never stored across mutations.
    pub(crate) fn candidates_at(&self, pos: Position) -> DigitSet {
        let mut used = DigitSet::EMPTY;
        for peer in self.topology.peers(pos) {
            if let Some(digit) = self.grid.get(peer) {
                used.insert(digit);
            }
        }
        DigitSet::FULL - used
    }

    /// Fills an empty cell. Within one node values only ever go from
    /// empty to a digit; nothing is overwritten.
    pub(crate) fn place(&mut self, pos: Position, digit: Digit) {
        debug_assert!(self.grid.get(pos).is_none());
        self.grid.set(pos, digit);
    }

    pub(crate) fn digit_at(&self, pos: Position) -> Option<Digit> {
        self.grid.get(pos)
    }

    pub(crate) fn is_complete(&self) -> bool {
        self.grid.is_complete()
    }

    pub(crate) fn grid(&self) -> &DigitGrid {
        &self.grid
    }

    pub(crate) fn into_grid(self) -> DigitGrid {
        self.grid
    }
}
