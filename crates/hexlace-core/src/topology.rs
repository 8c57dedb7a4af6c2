//! Box shapes and the derived peer topology.
//!
//! A 6×6 grid admits several legal box partitions: any rows×cols
//! rectangle with rows·cols = 6 tiles the grid (2×3 and 3×2 are the
//! common ones; 1×6 and 6×1 degenerate into rows and columns). The
//! [`Topology`] derives, for a given [`BoxShape`], the fixed peer set of
//! every cell and the member set of every house. It is built once per
//! solver and reused across the entire search tree.

use derive_more::{Display, Error};

use crate::cell_set::CellSet;
use crate::position::{Position, SIDE};

/// Validated dimensions of the rectangular boxes partitioning the grid.
///
/// # Examples
///
/// ```
/// use hexlace_core::BoxShape;
///
/// let shape = BoxShape::new(2, 3)?;
/// assert_eq!(shape.rows(), 2);
/// assert_eq!(shape.cols(), 3);
///
/// // The default shape is 2 rows × 3 columns
/// assert_eq!(BoxShape::default(), shape);
///
/// // Dimensions must multiply to 6
/// assert!(BoxShape::new(4, 2).is_err());
/// # Ok::<(), hexlace_core::InvalidBoxShape>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoxShape {
    rows: u8,
    cols: u8,
}

impl BoxShape {
    /// Creates a box shape of `rows` × `cols` cells.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidBoxShape`] unless `rows * cols == 6`.
    pub const fn new(rows: u8, cols: u8) -> Result<Self, InvalidBoxShape> {
        if rows as u16 * cols as u16 == SIDE as u16 {
            Ok(Self { rows, cols })
        } else {
            Err(InvalidBoxShape { rows, cols })
        }
    }

    /// Returns the box height in rows.
    #[must_use]
    pub const fn rows(self) -> u8 {
        self.rows
    }

    /// Returns the box width in columns.
    #[must_use]
    pub const fn cols(self) -> u8 {
        self.cols
    }

    /// Returns the index (0-5) of the box containing a position.
    ///
    /// Boxes number left to right, top to bottom.
    #[must_use]
    pub const fn box_index(self, pos: Position) -> u8 {
        (pos.y() / self.rows) * (SIDE / self.cols) + pos.x() / self.cols
    }

    /// Returns the top-left corner of the box containing a position.
    ///
    /// The anchor sits at `(⌊x/cols⌋·cols, ⌊y/rows⌋·rows)`.
    #[must_use]
    pub const fn box_anchor(self, pos: Position) -> Position {
        Position::new(
            (pos.x() / self.cols) * self.cols,
            (pos.y() / self.rows) * self.rows,
        )
    }
}

impl Default for BoxShape {
    fn default() -> Self {
        Self { rows: 2, cols: 3 }
    }
}

/// Error produced when box dimensions do not tile a 6-cell side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("box shape {rows}x{cols} does not partition a 6x6 grid")]
pub struct InvalidBoxShape {
    /// Rejected box height.
    pub rows: u8,
    /// Rejected box width.
    pub cols: u8,
}

/// Peer and house structure of the grid for one box shape.
///
/// A cell's *peers* are the other cells sharing its row, column, or box;
/// a *house* is any complete row, column, or box. Peer sets are
/// symmetric, never contain the cell itself, and are fixed for the
/// lifetime of the topology.
///
/// # Examples
///
/// ```
/// use hexlace_core::{BoxShape, Position, Topology};
///
/// let topology = Topology::new(BoxShape::default());
/// let peers = topology.peers(Position::new(0, 0));
///
/// // 5 row peers + 5 column peers + 5 box peers, 3 shared
/// assert_eq!(peers.len(), 12);
/// assert!(peers.contains(Position::new(5, 0))); // same row
/// assert!(peers.contains(Position::new(0, 5))); // same column
/// assert!(peers.contains(Position::new(2, 1))); // same box
/// assert!(!peers.contains(Position::new(0, 0))); // never itself
/// ```
#[derive(Debug, Clone)]
pub struct Topology {
    shape: BoxShape,
    rows: [CellSet; SIDE as usize],
    columns: [CellSet; SIDE as usize],
    boxes: [CellSet; SIDE as usize],
    peers: [CellSet; (SIDE * SIDE) as usize],
}

impl Topology {
    /// Derives the peer and house sets for a box shape.
    #[must_use]
    pub fn new(shape: BoxShape) -> Self {
        let mut rows = [CellSet::EMPTY; SIDE as usize];
        let mut columns = [CellSet::EMPTY; SIDE as usize];
        let mut boxes = [CellSet::EMPTY; SIDE as usize];
        for pos in Position::all() {
            rows[pos.y() as usize].insert(pos);
            columns[pos.x() as usize].insert(pos);
            boxes[shape.box_index(pos) as usize].insert(pos);
        }

        let mut peers = [CellSet::EMPTY; (SIDE * SIDE) as usize];
        for pos in Position::all() {
            let mut set = rows[pos.y() as usize]
                | columns[pos.x() as usize]
                | boxes[shape.box_index(pos) as usize];
            set.remove(pos);
            peers[pos.cell_index() as usize] = set;
        }

        Self {
            shape,
            rows,
            columns,
            boxes,
            peers,
        }
    }

    /// Returns the box shape this topology was built for.
    #[must_use]
    pub const fn shape(&self) -> BoxShape {
        self.shape
    }

    /// Returns the peers of a position: every other cell sharing its row,
    /// column, or box.
    #[must_use]
    pub const fn peers(&self, pos: Position) -> CellSet {
        self.peers[pos.cell_index() as usize]
    }

    /// Returns the members of row `y`.
    #[must_use]
    pub const fn row(&self, y: u8) -> CellSet {
        self.rows[y as usize]
    }

    /// Returns the members of column `x`.
    #[must_use]
    pub const fn column(&self, x: u8) -> CellSet {
        self.columns[x as usize]
    }

    /// Returns the members of box `index` (0-5, left to right, top to
    /// bottom).
    #[must_use]
    pub const fn box_members(&self, index: u8) -> CellSet {
        self.boxes[index as usize]
    }

    /// Returns an iterator over all 18 houses (rows, then columns, then
    /// boxes) as member sets.
    pub fn houses(&self) -> impl Iterator<Item = CellSet> {
        self.rows
            .iter()
            .chain(self.columns.iter())
            .chain(self.boxes.iter())
            .copied()
    }
}
