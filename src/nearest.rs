//! Nearest-value selection: which cells sit closest in value to a hovered one.

use std::collections::BTreeSet;

use crate::error::{MatrixError, Result};
use crate::model::Cell;

/// Returns the ids of the `n` cells whose amounts are closest to the cell at
/// `(row, col)`, never including that cell itself.
///
/// Cells are ranked by `|amount - target|`; ties keep row-major order.
/// The target is dropped by id before ranking, so when another cell shares its
/// amount that duplicate is the first one returned.
pub fn nearest_cells(grid: &[Vec<Cell>], row: usize, col: usize, n: usize) -> Result<BTreeSet<u32>> {
    let target = grid
        .get(row)
        .and_then(|r| r.get(col))
        .copied()
        .ok_or(MatrixError::CellOutOfBounds { row, col })?;

    let mut ranked: Vec<(u32, u32)> = grid
        .iter()
        .flatten()
        .filter(|c| c.id != target.id)
        .map(|c| (c.amount.abs_diff(target.amount), c.id))
        .collect();
    // sort_by_key is stable, so equal distances stay in flatten order
    ranked.sort_by_key(|&(dist, _)| dist);

    Ok(ranked.into_iter().take(n).map(|(_, id)| id).collect())
}
