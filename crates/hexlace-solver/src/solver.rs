use hexlace_core::{BoxShape, DigitGrid, Position, Topology};
use log::{debug, trace};

use crate::error::SolveError;
use crate::propagate::{Propagation, propagate};
use crate::search_grid::SearchGrid;
use crate::select::{NodeState, select_branch};
use crate::verify::is_valid_solution;

/// Statistics collected during a solve.
///
/// A statistics object can be reused across calls to accumulate counts.
///
/// # Examples
///
/// ```
/// use hexlace_core::DigitGrid;
/// use hexlace_solver::{SearchStats, Solver};
///
/// let solver = Solver::default();
/// let puzzle: DigitGrid = "____6_ \n ___4__ \n _5___2 \n __2___ \n __6___ \n 3_____".parse()?;
///
/// let mut stats = SearchStats::default();
/// let solution = solver.solve_with_stats(&puzzle, &mut stats)?;
/// assert!(solution.is_some());
/// assert!(stats.nodes() >= 1);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct SearchStats {
    nodes: usize,
    forced_placements: usize,
    backtracks: usize,
    max_depth: usize,
}

impl SearchStats {
    /// Returns the number of search-tree nodes visited.
    #[must_use]
    pub fn nodes(&self) -> usize {
        self.nodes
    }

    /// Returns the number of cells filled by propagation.
    #[must_use]
    pub fn forced_placements(&self) -> usize {
        self.forced_placements
    }

    /// Returns the number of failed nodes the search retreated from.
    #[must_use]
    pub fn backtracks(&self) -> usize {
        self.backtracks
    }

    /// Returns the deepest branching depth reached.
    #[must_use]
    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub(crate) fn record_node(&mut self, depth: usize) {
        self.nodes += 1;
        self.max_depth = self.max_depth.max(depth);
    }

    pub(crate) fn record_forced_placement(&mut self) {
        self.forced_placements += 1;
    }

    pub(crate) fn record_backtrack(&mut self) {
        self.backtracks += 1;
    }
}

/// Backtracking solver for 6×6 puzzles.
///
/// The solver owns the peer [`Topology`] for its box shape, derived once
/// at construction and reused across every solve and every node of the
/// search tree.
///
/// At each node the solver drives naked-singles propagation to a
/// fixpoint, then branches on the most constrained empty cell
/// (row-major on ties), trying candidate digits in ascending order on a
/// private copy of the grid. The first solution found this way is
/// returned, which makes the result a deterministic function of the
/// puzzle and the box shape.
///
/// # Examples
///
/// ```
/// use hexlace_core::{BoxShape, DigitGrid};
/// use hexlace_solver::Solver;
///
/// let solver = Solver::default(); // 2×3 boxes
/// let puzzle: DigitGrid = "
///     ___ _6_
///     ___ 4__
///     _5_ __2
///     __2 ___
///     __6 ___
///     3__ ___
/// "
/// .parse()?;
///
/// let solution = solver.solve(&puzzle)?.expect("sample puzzle is solvable");
/// assert!(solution.is_complete());
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone)]
pub struct Solver {
    topology: Topology,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new(BoxShape::default())
    }
}

impl Solver {
    /// Creates a solver for the given box shape.
    #[must_use]
    pub fn new(shape: BoxShape) -> Self {
        Self {
            topology: Topology::new(shape),
        }
    }

    /// Returns the topology the solver searches against.
    #[must_use]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    /// Solves a puzzle.
    ///
    /// Returns `Ok(Some(grid))` with the first solution in the solver's
    /// deterministic order, or `Ok(None)` when no assignment of the
    /// empty cells satisfies the constraints. Partial grids are never
    /// returned, and every clue of the input reappears unchanged in the
    /// solution.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ConflictingClues`] when two equal clues
    /// share a row, column, or box. This is checked up front, before any
    /// search work.
    pub fn solve(&self, puzzle: &DigitGrid) -> Result<Option<DigitGrid>, SolveError> {
        let mut stats = SearchStats::default();
        self.solve_with_stats(puzzle, &mut stats)
    }

    /// Solves a puzzle, accumulating search statistics.
    ///
    /// Behaves exactly like [`solve`](Self::solve); the provided
    /// statistics object is updated even when the puzzle turns out to be
    /// unsolvable.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::ConflictingClues`] when two equal clues
    /// share a row, column, or box.
    pub fn solve_with_stats(
        &self,
        puzzle: &DigitGrid,
        stats: &mut SearchStats,
    ) -> Result<Option<DigitGrid>, SolveError> {
        self.check_clues(puzzle)?;
        debug!(
            "solving with {} clues, {:?} boxes",
            puzzle.filled_count(),
            self.topology.shape()
        );

        let root = SearchGrid::new(puzzle.clone(), &self.topology);
        let solution = self.search(root, 0, stats).map(SearchGrid::into_grid);
        match &solution {
            Some(_) => debug!(
                "solved: {} nodes, {} forced placements, {} backtracks",
                stats.nodes(),
                stats.forced_placements(),
                stats.backtracks()
            ),
            None => debug!("no solution after {} nodes", stats.nodes()),
        }
        Ok(solution)
    }

    /// Rejects puzzles whose clues already clash, so the search never
    /// starts from a grid that violates the constraints it maintains.
    fn check_clues(&self, puzzle: &DigitGrid) -> Result<(), SolveError> {
        for pos in Position::all() {
            let Some(digit) = puzzle.get(pos) else {
                continue;
            };
            for peer in self.topology.peers(pos) {
                if puzzle.get(peer) == Some(digit) {
                    return Err(SolveError::ConflictingClues {
                        position: pos,
                        digit,
                    });
                }
            }
        }
        Ok(())
    }

    fn search<'a>(
        &self,
        mut node: SearchGrid<'a>,
        depth: usize,
        stats: &mut SearchStats,
    ) -> Option<SearchGrid<'a>> {
        stats.record_node(depth);

        if propagate(&mut node, stats) == Propagation::Contradiction {
            trace!("contradiction at depth {depth}");
            stats.record_backtrack();
            return None;
        }
        if node.is_complete() {
            debug_assert!(is_valid_solution(node.grid(), &self.topology));
            return Some(node);
        }

        match select_branch(&node) {
            NodeState::Complete => Some(node),
            NodeState::Contradiction => {
                trace!("contradiction at depth {depth}");
                stats.record_backtrack();
                None
            }
            NodeState::Branch {
                position,
                candidates,
            } => {
                trace!(
                    "branching on {position} at depth {depth} over {} candidates",
                    candidates.len()
                );
                for digit in candidates {
                    let mut child = node.clone();
                    child.place(position, digit);
                    if let Some(solution) = self.search(child, depth + 1, stats) {
                        return Some(solution);
                    }
                }
                trace!("exhausted {position} at depth {depth}");
                stats.record_backtrack();
                None
            }
        }
    }
}
