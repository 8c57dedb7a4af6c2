//! Test utilities for the solver test suites.

use std::str::FromStr as _;

use hexlace_core::{BoxShape, Digit, DigitGrid, Position};

use crate::{SolveError, Solver, is_valid_solution};

/// A fluent harness for exercising the solver in tests.
///
/// Assertions panic with detailed messages on failure, using
/// `#[track_caller]` to report the correct source location.
#[derive(Debug)]
pub(crate) struct SolveTester {
    puzzle: DigitGrid,
    solver: Solver,
}

impl SolveTester {
    /// Creates a tester from a grid literal, solving with 2×3 boxes
    /// unless [`with_shape`](Self::with_shape) overrides them.
    #[track_caller]
    pub(crate) fn from_str(s: &str) -> Self {
        Self {
            puzzle: DigitGrid::from_str(s).unwrap(),
            solver: Solver::default(),
        }
    }

    /// Switches the tester to a different box shape.
    pub(crate) fn with_shape(mut self, shape: BoxShape) -> Self {
        self.solver = Solver::new(shape);
        self
    }

    /// Solves the puzzle, asserting a solution exists, satisfies every
    /// house constraint, and preserves every clue. Returns the solution.
    #[track_caller]
    pub(crate) fn assert_solved(self) -> DigitGrid {
        let solution = self
            .solver
            .solve(&self.puzzle)
            .expect("clues must not conflict")
            .expect("puzzle must be solvable");
        assert!(
            is_valid_solution(&solution, self.solver.topology()),
            "solution violates a house constraint:\n{solution}"
        );
        for pos in Position::all() {
            if let Some(digit) = self.puzzle.get(pos) {
                assert_eq!(solution.get(pos), Some(digit), "clue at {pos} changed");
            }
        }
        solution
    }

    /// Like [`assert_solved`](Self::assert_solved), additionally pinning
    /// the exact solution.
    #[track_caller]
    pub(crate) fn assert_solves_to(self, expected: &str) {
        let expected = DigitGrid::from_str(expected).unwrap();
        let solution = self.assert_solved();
        assert_eq!(
            solution, expected,
            "got:\n{solution}\nexpected:\n{expected}"
        );
    }

    /// Asserts the puzzle has consistent clues but no solution.
    #[track_caller]
    pub(crate) fn assert_no_solution(self) {
        let outcome = self
            .solver
            .solve(&self.puzzle)
            .expect("clues must not conflict");
        assert_eq!(outcome, None, "expected no solution");
    }

    /// Asserts the solver rejects the puzzle up front for clashing clues.
    #[track_caller]
    pub(crate) fn assert_conflicting_clues(self, position: Position, digit: Digit) {
        let err = self
            .solver
            .solve(&self.puzzle)
            .expect_err("clue conflict must be rejected before the search");
        assert_eq!(err, SolveError::ConflictingClues { position, digit });
    }
}
