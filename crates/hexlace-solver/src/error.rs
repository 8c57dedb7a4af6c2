use derive_more::{Display, Error};
use hexlace_core::{Digit, Position};

/// Error surfaced by the solver entry points before any search work.
///
/// Configuration problems are hard failures reported once, up front.
/// Contradictions *derived during the search* are not errors: they are
/// ordinary control flow inside the backtracking, and only their sum -
/// "no solution exists" - reaches the caller, as an `Ok(None)` result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
pub enum SolveError {
    /// Two equal clues share a row, column, or box.
    #[display("clue {digit} at {position} conflicts with an equal clue in its row, column, or box")]
    ConflictingClues {
        /// Position of the first clashing clue in row-major scan order.
        position: Position,
        /// The duplicated digit.
        digit: Digit,
    },
}
