//! Row-major partitioning of gallery items into a fixed number of columns.
//!
//! The grid holds item *indices*, never host elements, so the layout math
//! can be exercised without any rendering host. Cell `(row, col)` holds
//! item `row * cols + col`; trailing cells of a partially filled last row
//! are empty. Cells are derived on demand, so the column count is not
//! bounded by memory.

/// A `rows × cols` grid of item indices.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    item_count: usize,
}

impl Grid {
    /// Partition `item_count` items into rows of `cols` columns.
    ///
    /// Zero items (or zero columns) produce a grid with no rows.
    pub fn partition(item_count: usize, cols: usize) -> Self {
        let rows = if cols == 0 { 0 } else { item_count.div_ceil(cols) };

        Self {
            rows,
            cols,
            item_count: if rows == 0 { 0 } else { item_count },
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Number of columns holding at least one item.
    pub fn filled_cols(&self) -> usize {
        self.cols.min(self.item_count)
    }

    /// Item index at `(row, col)`, or `None` for an empty or out-of-range cell.
    pub fn get(&self, row: usize, col: usize) -> Option<usize> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        let linear = row * self.cols + col;
        (linear < self.item_count).then_some(linear)
    }

    /// The `(row, col)` cell holding `index`.
    pub fn cell_of(&self, index: usize) -> Option<(usize, usize)> {
        (index < self.item_count).then(|| (index / self.cols, index % self.cols))
    }

    /// Filled cells of `row` as `(col, index)`, stopping at the first empty cell.
    pub fn row(&self, row: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.cols).map_while(move |col| self.get(row, col).map(|index| (col, index)))
    }

    /// Item indices stacked in `col`, top to bottom.
    pub fn column(&self, col: usize) -> impl Iterator<Item = usize> + '_ {
        (0..self.rows).filter_map(move |row| self.get(row, col))
    }
}
