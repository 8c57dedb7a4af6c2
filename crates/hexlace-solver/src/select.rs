use hexlace_core::{DigitSet, Position};

use crate::search_grid::SearchGrid;

/// Where the search goes next after propagation settled.
///
/// The three cases are deliberately explicit: "no branch cell found"
/// means either a finished grid or a dead one, and conflating the two
/// would make the caller depend on the order of its own checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NodeState {
    /// Every cell is filled.
    Complete,
    /// Some empty cell has zero candidates.
    Contradiction,
    /// Branch on `position`, trying `candidates` in ascending order.
    Branch {
        /// The most constrained empty cell, row-major on ties.
        position: Position,
        /// Its candidate digits.
        candidates: DigitSet,
    },
}

/// Picks the empty cell with the fewest candidates, scanning row-major
/// and keeping the first cell at any given minimum.
///
/// A singleton candidate set is taken the moment it is seen. Propagation
/// leaves no singletons behind, so on the normal search path this exit
/// never fires; it keeps the selector correct for callers that branch
/// without propagating first.
pub(crate) fn select_branch(grid: &SearchGrid<'_>) -> NodeState {
    let mut best: Option<(Position, DigitSet)> = None;
    for pos in Position::all() {
        if grid.digit_at(pos).is_some() {
            continue;
        }
        let candidates = grid.candidates_at(pos);
        if candidates.is_empty() {
            return NodeState::Contradiction;
        }
        if best
            .as_ref()
            .is_none_or(|(_, held)| candidates.len() < held.len())
        {
            if candidates.len() == 1 {
                return NodeState::Branch {
                    position: pos,
                    candidates,
                };
            }
            best = Some((pos, candidates));
        }
    }
    match best {
        Some((position, candidates)) => NodeState::Branch {
            position,
            candidates,
        },
        None => NodeState::Complete,
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr as _;

    use hexlace_core::{BoxShape, Digit, DigitGrid, Topology};

    use super::*;

    fn state_of(text: &str) -> NodeState {
        let topology = Topology::new(BoxShape::default());
        let grid = DigitGrid::from_str(text).unwrap();
        let search = SearchGrid::new(grid, &topology);
        select_branch(&search)
    }

    #[test]
    fn test_complete_grid() {
        let state = state_of(
            "
            435261
            261453
            153642
            642135
            516324
            324516
        ",
        );
        assert_eq!(state, NodeState::Complete);
    }

    #[test]
    fn test_contradiction_wins_over_branching() {
        // (0, 0) has no candidates even though later cells could branch
        let state = state_of(
            "
            _12___
            345___
            6_____
            ______
            ______
            ______
        ",
        );
        assert_eq!(state, NodeState::Contradiction);
    }

    #[test]
    fn test_picks_most_constrained_cell() {
        // (5, 0) has 3 candidates; everything else in the top rows has 4+
        let state = state_of(
            "
            ___ _6_
            ___ 4__
            _5_ __2
            __2 ___
            __6 ___
            3__ ___
        ",
        );
        assert_eq!(
            state,
            NodeState::Branch {
                position: Position::new(5, 0),
                candidates: DigitSet::from_iter([Digit::D1, Digit::D3, Digit::D5]),
            }
        );
    }

    #[test]
    fn test_row_major_tie_break() {
        // Every cell of the empty grid has all six candidates; the first
        // cell in scan order wins the tie
        let state = state_of(
            "
            ______
            ______
            ______
            ______
            ______
            ______
        ",
        );
        assert_eq!(
            state,
            NodeState::Branch {
                position: Position::new(0, 0),
                candidates: DigitSet::FULL,
            }
        );
    }

    #[test]
    fn test_singleton_short_circuits_an_unpropagated_grid() {
        // (5, 0) is forced to 6; the selector is handed the grid without
        // any propagation pass and must still return immediately
        let state = state_of(
            "
            12345_
            ______
            ______
            ______
            ______
            ______
        ",
        );
        assert_eq!(
            state,
            NodeState::Branch {
                position: Position::new(5, 0),
                candidates: DigitSet::from_iter([Digit::D6]),
            }
        );
    }
}
