//! Render-time row and column aggregates.

use crate::model::Cell;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RowSummary {
    pub total: u64,
    /// Largest amount in the row; scales the heatmap.
    pub max: u32,
}

pub fn row_total(row: &[Cell]) -> u64 {
    row.iter().map(|c| c.amount as u64).sum()
}

pub fn row_max(row: &[Cell]) -> u32 {
    row.iter().map(|c| c.amount).max().unwrap_or(0)
}

pub fn row_summary(row: &[Cell]) -> RowSummary {
    RowSummary {
        total: row_total(row),
        max: row_max(row),
    }
}

/// Heatmap fill for a cell, as a percentage of the row maximum.
pub fn heat_percent(amount: u32, max: u32) -> f64 {
    if max == 0 {
        return 0.0;
    }
    amount as f64 / max as f64 * 100.0
}

/// Share of the row total held by one cell, as a percentage.
pub fn share_percent(amount: u32, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    amount as f64 / total as f64 * 100.0
}

/// Mean amount per column index.
///
/// A row shorter than the column index does not contribute to that column's
/// average at all (it is not counted as zero).
pub fn column_averages(grid: &[Vec<Cell>]) -> Vec<f64> {
    let width = grid.iter().map(Vec::len).max().unwrap_or(0);
    (0..width)
        .map(|col| {
            let (sum, count) = grid
                .iter()
                .filter_map(|row| row.get(col))
                .fold((0u64, 0u64), |(s, n), c| (s + c.amount as u64, n + 1));
            if count == 0 { 0.0 } else { sum as f64 / count as f64 }
        })
        .collect()
}

pub fn format_one_decimal(v: f64) -> String {
    format!("{:.1}", v)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(amounts: &[u32]) -> Vec<Cell> {
        amounts
            .iter()
            .enumerate()
            .map(|(i, &amount)| Cell { id: i as u32, amount })
            .collect()
    }

    #[test]
    fn total_max_and_heatmap() {
        let r = row(&[100, 200, 300]);
        let s = row_summary(&r);
        assert_eq!(s, RowSummary { total: 600, max: 300 });
        let heat: Vec<String> = r
            .iter()
            .map(|c| format_one_decimal(heat_percent(c.amount, s.max)))
            .collect();
        assert_eq!(heat, ["33.3", "66.7", "100.0"]);
    }

    #[test]
    fn share_of_total() {
        let r = row(&[100, 200, 300]);
        let total = row_total(&r);
        let shares: Vec<String> = r
            .iter()
            .map(|c| format_one_decimal(share_percent(c.amount, total)))
            .collect();
        assert_eq!(shares, ["16.7", "33.3", "50.0"]);
    }

    #[test]
    fn zero_denominators_scale_to_zero() {
        assert_eq!(heat_percent(0, 0), 0.0);
        assert_eq!(share_percent(5, 0), 0.0);
        assert_eq!(row_max(&[]), 0);
        assert_eq!(row_total(&[]), 0);
    }

    #[test]
    fn column_average_skips_missing_cells() {
        let grid = vec![row(&[100, 300]), row(&[200])];
        let avgs = column_averages(&grid);
        assert_eq!(avgs.len(), 2);
        assert_eq!(format_one_decimal(avgs[0]), "150.0");
        assert_eq!(format_one_decimal(avgs[1]), "300.0");
    }

    #[test]
    fn column_averages_of_rectangular_grid() {
        let grid = vec![row(&[101, 200]), row(&[102, 400]), row(&[104, 600])];
        let avgs: Vec<String> = column_averages(&grid).into_iter().map(format_one_decimal).collect();
        assert_eq!(avgs, ["102.3", "400.0"]);
    }

    #[test]
    fn empty_grid_has_no_columns() {
        assert!(column_averages(&[]).is_empty());
    }
}
