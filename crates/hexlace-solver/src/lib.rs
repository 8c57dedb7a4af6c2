//! Solving engine for 6-cell-wide sudoku puzzles.
//!
//! Given a partially filled 6×6 grid and a box shape, the [`Solver`]
//! either returns a fully solved grid consistent with the clues or
//! reports that no solution exists. The engine combines naked-singles
//! constraint propagation with minimum-remaining-values backtracking:
//! at each search node it fills every forced cell, then branches on the
//! most constrained empty cell, trying candidates in ascending order on
//! a private copy of the grid. The result is a deterministic function of
//! the puzzle and the box shape.
//!
//! # Examples
//!
//! ```
//! use hexlace_core::DigitGrid;
//! use hexlace_solver::Solver;
//!
//! let puzzle: DigitGrid = "
//!     ___ _6_
//!     ___ 4__
//!     _5_ __2
//!     __2 ___
//!     __6 ___
//!     3__ ___
//! "
//! .parse()?;
//!
//! let solver = Solver::default(); // 2×3 boxes
//! match solver.solve(&puzzle)? {
//!     Some(solution) => println!("{solution}"),
//!     None => println!("no solution"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub use self::{error::*, solver::*, verify::*};

mod error;
mod propagate;
mod search_grid;
mod select;
mod solver;
mod verify;

#[cfg(test)]
mod testing;
