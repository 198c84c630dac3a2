//! Absolute offsets for every item.
//!
//! Columns step right by `item_width - space`, so neighbours overlap by one
//! gutter; the horizontal padding every item carries puts the gap back. An
//! item's top offset is the summed height of the items above it in the same
//! column. The first row keeps its natural flow position.

use gcss::Spacing;

use crate::grid::Grid;

/// Where one item goes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ItemPlacement {
    pub index: usize,
    pub row: usize,
    pub col: usize,
    pub left: f64,
    /// `0` for the first row, which is not given an explicit offset.
    pub top: f64,
    pub width: f64,
    pub padding: Spacing,
}

impl ItemPlacement {
    /// Whether `top` must be written to the item.
    pub fn has_explicit_top(&self) -> bool {
        self.row > 0
    }
}

/// Padding for items in `row`.
///
/// The top row gets a full gutter above it; every other row shares half a
/// gutter with its neighbour above and below.
pub fn padding_for_row(row: usize, space: f64) -> Spacing {
    let half = space / 2.0;
    let top = if row == 0 { space } else { half };
    Spacing::px(top, space, half, space)
}

/// Compute placements in row-major order.
///
/// `heights` is indexed by item index. A partially filled last row stops at
/// its first empty cell.
pub fn compute_positions(
    grid: &Grid,
    item_width: f64,
    space: f64,
    heights: &[f64],
) -> Vec<ItemPlacement> {
    let height_of = |index: usize| heights.get(index).copied().unwrap_or(0.0);
    let mut placements = Vec::with_capacity(grid.item_count());

    for row in 0..grid.rows() {
        let mut left = 0.0;

        for (col, index) in grid.row(row) {
            if col > 0 {
                left += item_width - space;
            }

            let top: f64 = (0..row)
                .filter_map(|above| grid.get(above, col))
                .map(height_of)
                .sum();

            let placement = ItemPlacement {
                index,
                row,
                col,
                left,
                top,
                width: item_width,
                padding: padding_for_row(row, space),
            };
            log::trace!(
                "item {} at ({}, {}): left={} top={}",
                index,
                row,
                col,
                placement.left,
                placement.top
            );
            placements.push(placement);
        }
    }

    placements
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_row_sits_under_its_column() {
        let grid = Grid::partition(8, 4);
        let heights = [100.0, 120.0, 90.0, 80.0, 50.0, 10.0, 70.0, 30.0];
        let placements = compute_positions(&grid, 250.0, 0.0, &heights);

        assert_eq!(placements.len(), 8);
        for col in 0..4 {
            let below = &placements[4 + col];
            assert_eq!(below.top, heights[col]);
            assert_eq!(below.left, 250.0 * col as f64);
        }
    }

    #[test]
    fn columns_overlap_by_one_gutter() {
        let grid = Grid::partition(3, 3);
        let placements = compute_positions(&grid, 247.5, 10.0, &[1.0, 1.0, 1.0]);
        let lefts: Vec<f64> = placements.iter().map(|p| p.left).collect();
        assert_eq!(lefts, vec![0.0, 237.5, 475.0]);
    }

    #[test]
    fn top_row_has_no_explicit_offset() {
        let grid = Grid::partition(2, 4);
        let placements = compute_positions(&grid, 100.0, 0.0, &[40.0, 50.0]);
        assert!(placements.iter().all(|p| p.top == 0.0 && !p.has_explicit_top()));
    }

    #[test]
    fn top_accumulates_across_rows() {
        let grid = Grid::partition(9, 3);
        let heights = [10.0, 20.0, 30.0, 1.0, 2.0, 3.0, 0.0, 0.0, 0.0];
        let placements = compute_positions(&grid, 100.0, 0.0, &heights);

        assert_eq!(placements[6].top, 11.0);
        assert_eq!(placements[7].top, 22.0);
        assert_eq!(placements[8].top, 33.0);
    }

    #[test]
    fn partial_row_positions_only_filled_cells() {
        let grid = Grid::partition(5, 4);
        let placements = compute_positions(&grid, 100.0, 0.0, &[5.0; 5]);
        assert_eq!(placements.len(), 5);
        assert_eq!((placements[4].row, placements[4].col), (1, 0));
    }

    #[test]
    fn padding_is_asymmetric_on_the_top_row() {
        assert_eq!(padding_for_row(0, 10.0), Spacing::px(10.0, 10.0, 5.0, 10.0));
        assert_eq!(padding_for_row(3, 10.0), Spacing::px(5.0, 10.0, 5.0, 10.0));
    }

    #[test]
    fn empty_grid_has_no_placements() {
        assert!(compute_positions(&Grid::partition(0, 4), 320.0, 0.0, &[]).is_empty());
    }
}
