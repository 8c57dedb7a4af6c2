//! Core data structures for 6-cell-wide sudoku puzzles.
//!
//! This crate provides fundamental, efficient data structures for
//! representing and manipulating 6×6 sudoku puzzles. These structures are
//! shared by the solving engine and any front end that supplies puzzles
//! or consumes solutions.
//!
//! # Overview
//!
//! The crate is organized around three concepts:
//!
//! 1. **Core types** - Fundamental puzzle types
//!    - [`digit`]: Type-safe representation of digits 1-6
//!    - [`position`]: Grid position (x, y) coordinate types
//!    - [`grid`]: The 6×6 digit grid with its text and integer forms
//!
//! 2. **Bitsets** - Compact set types
//!    - [`digit_set`]: Sets of digits 1-6 (candidate sets, uniqueness
//!      checks)
//!    - [`cell_set`]: Sets of grid positions (peer sets, house members)
//!
//! 3. **Topology** - The constraint structure of the grid
//!    - [`topology`]: Validated box shapes (any rows×cols with
//!      rows·cols = 6) and the derived peer/house sets, computed once and
//!      reused for a whole solve
//!
//! # Examples
//!
//! ```
//! use hexlace_core::{BoxShape, DigitGrid, DigitSet, Position, Topology};
//!
//! let grid: DigitGrid = "
//!     ___ _6_
//!     ___ 4__
//!     _5_ __2
//!     __2 ___
//!     __6 ___
//!     3__ ___
//! "
//! .parse()?;
//!
//! let topology = Topology::new(BoxShape::default());
//!
//! // Digits ruled out for the top-left cell by its filled peers
//! let mut used = DigitSet::EMPTY;
//! for peer in topology.peers(Position::new(0, 0)) {
//!     if let Some(digit) = grid.get(peer) {
//!         used.insert(digit);
//!     }
//! }
//! assert_eq!(used.len(), 2); // 3 from the column, 6 from the row
//! # Ok::<(), hexlace_core::ParseGridError>(())
//! ```

pub mod cell_set;
pub mod digit;
pub mod digit_set;
pub mod grid;
pub mod position;
pub mod topology;

// Re-export commonly used types
pub use self::{
    cell_set::CellSet,
    digit::Digit,
    digit_set::DigitSet,
    grid::{DigitGrid, ParseGridError},
    position::Position,
    topology::{BoxShape, InvalidBoxShape, Topology},
};
