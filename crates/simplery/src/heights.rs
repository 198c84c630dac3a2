//! Column height aggregation.

use crate::grid::Grid;

/// Sum of measured item heights per column.
///
/// `heights` is indexed by item index. Only columns holding an item are
/// reported; empty cells contribute nothing.
pub fn column_heights(grid: &Grid, heights: &[f64]) -> Vec<f64> {
    (0..grid.filled_cols())
        .map(|col| {
            grid.column(col)
                .map(|index| heights.get(index).copied().unwrap_or(0.0))
                .sum::<f64>()
        })
        .collect()
}

/// Height of the tallest column, `0` for a grid without items or columns.
pub fn highest_column(grid: &Grid, heights: &[f64]) -> f64 {
    column_heights(grid, heights)
        .into_iter()
        .fold(0.0, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tallest_column_wins() {
        let grid = Grid::partition(8, 4);
        let heights = [100.0, 120.0, 90.0, 80.0, 50.0, 10.0, 70.0, 30.0];

        assert_eq!(column_heights(&grid, &heights), vec![150.0, 130.0, 160.0, 110.0]);
        assert_eq!(highest_column(&grid, &heights), 160.0);
    }

    #[test]
    fn empty_cells_contribute_nothing() {
        let grid = Grid::partition(5, 4);
        let heights = [10.0, 20.0, 30.0, 40.0, 5.0];

        assert_eq!(column_heights(&grid, &heights), vec![15.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn empty_grid_is_zero_high() {
        assert_eq!(highest_column(&Grid::partition(0, 4), &[]), 0.0);
        assert_eq!(highest_column(&Grid::partition(4, 0), &[1.0; 4]), 0.0);
    }

    #[test]
    fn columns_past_the_items_are_not_visited() {
        let grid = Grid::partition(3, usize::MAX);
        let heights = [40.0, 70.0, 55.0];

        assert_eq!(column_heights(&grid, &heights), vec![40.0, 70.0, 55.0]);
        assert_eq!(highest_column(&grid, &heights), 70.0);
    }
}
