use hexlace_core::Position;

use crate::search_grid::SearchGrid;
use crate::solver::SearchStats;

/// Result of driving naked-singles elimination to a fixpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Propagation {
    /// No empty cell has exactly one candidate left.
    Fixpoint,
    /// Some empty cell has zero candidates; this grid state is
    /// unsolvable.
    Contradiction,
}

/// Fills every empty cell whose candidate set has exactly one member,
/// rescanning the whole grid after each pass that changed it, until no
/// forced move remains.
///
/// Filling one cell can create new forced moves elsewhere, hence the
/// rescan; each pass either fills at least one cell or ends the loop, so
/// at most 36 fills happen before exhaustion.
pub(crate) fn propagate(grid: &mut SearchGrid<'_>, stats: &mut SearchStats) -> Propagation {
    loop {
        let mut changed = false;
        for pos in Position::all() {
            if grid.digit_at(pos).is_some() {
                continue;
            }
            let candidates = grid.candidates_at(pos);
            if candidates.is_empty() {
                return Propagation::Contradiction;
            }
            if let Some(digit) = candidates.as_single() {
                grid.place(pos, digit);
                stats.record_forced_placement();
                changed = true;
            }
        }
        if !changed {
            return Propagation::Fixpoint;
        }
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use hexlace_core::{BoxShape, Digit, DigitGrid, Topology};

    use super::*;

    fn run(text: &str) -> (DigitGrid, Propagation, SearchStats) {
        let topology = Topology::new(BoxShape::default());
        let grid = DigitGrid::from_str(text).unwrap();
        let mut search = SearchGrid::new(grid, &topology);
        let mut stats = SearchStats::default();
        let outcome = propagate(&mut search, &mut stats);
        (search.into_grid(), outcome, stats)
    }

    #[test]
    fn test_fills_a_naked_single() {
        // (5, 0) is the only empty cell in row 0
        let (grid, outcome, stats) = run(
            "
            12345_
            ______
            ______
            ______
            ______
            ______
        ",
        );
        assert_eq!(outcome, Propagation::Fixpoint);
        assert_eq!(grid.get(Position::new(5, 0)), Some(Digit::D6));
        assert_eq!(stats.forced_placements(), 1);
    }

    #[test]
    fn test_fills_every_single_it_uncovers() {
        // (5, 0) is a row single and (1, 1) sees every digit but 6
        // across its row, column, and box
        let (grid, outcome, stats) = run(
            "
            12345_
            2_45__
            ______
            ______
            ______
            ______
        ",
        );
        assert_eq!(outcome, Propagation::Fixpoint);
        assert_eq!(grid.get(Position::new(5, 0)), Some(Digit::D6));
        assert_eq!(grid.get(Position::new(1, 1)), Some(Digit::D6));
        assert_eq!(stats.forced_placements(), 2);
    }

    #[test]
    fn test_reports_contradiction_on_empty_candidates() {
        // (0, 0) sees 1, 2 in its row, 3, 6 in its column, and 4, 5 in
        // its box: every digit is taken, but no two clues conflict.
        let (_, outcome, _) = run(
            "
            _12___
            345___
            6_____
            ______
            ______
            ______
        ",
        );
        assert_eq!(outcome, Propagation::Contradiction);
    }

    #[test]
    fn test_complete_grid_is_a_fixpoint() {
        let (grid, outcome, stats) = run(
            "
            435261
            261453
            153642
            642135
            516324
            324516
        ",
        );
        assert_eq!(outcome, Propagation::Fixpoint);
        assert!(grid.is_complete());
        assert_eq!(stats.forced_placements(), 0);
    }
}
