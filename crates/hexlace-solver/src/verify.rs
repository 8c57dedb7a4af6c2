use hexlace_core::{CellSet, DigitGrid, DigitSet, Topology};

/// Checks that a grid is a valid solution: complete, with every row,
/// column, and box holding each digit exactly once.
///
/// # Examples
///
/// ```
/// use hexlace_core::{BoxShape, DigitGrid, Topology};
/// use hexlace_solver::is_valid_solution;
///
/// let topology = Topology::new(BoxShape::default());
/// let grid: DigitGrid = "
///     435261
///     261453
///     153642
///     642135
///     516324
///     324516
/// "
/// .parse()?;
/// assert!(is_valid_solution(&grid, &topology));
/// assert!(!is_valid_solution(&DigitGrid::new(), &topology));
/// # Ok::<(), hexlace_core::ParseGridError>(())
/// ```
#[must_use]
pub fn is_valid_solution(grid: &DigitGrid, topology: &Topology) -> bool {
    topology.houses().all(|house| house_complete(grid, house))
}

fn house_complete(grid: &DigitGrid, house: CellSet) -> bool {
    let mut seen = DigitSet::EMPTY;
    for pos in house {
        let Some(digit) = grid.get(pos) else {
            return false;
        };
        if seen.contains(digit) {
            return false;
        }
        seen.insert(digit);
    }
    seen == DigitSet::FULL
}
