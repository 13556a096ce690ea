//! Grid representation and utilities for Game of Life

use anyhow::Result;
use itertools::iproduct;
use serde::{Deserialize, Serialize};

/// Represents a Game of Life grid, indexed by (column, row)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    pub columns: usize,
    pub rows: usize,
    /// Row-major cell states
    pub cells: Vec<bool>,
}

impl Grid {
    /// Create a new empty grid
    pub fn new(columns: usize, rows: usize) -> Self {
        Self {
            columns,
            rows,
            cells: vec![false; columns * rows],
        }
    }

    /// Create a grid from rows of cells
    pub fn from_cells(cells: Vec<Vec<bool>>) -> Result<Self> {
        if cells.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let rows = cells.len();
        let columns = cells[0].len();

        if columns == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in cells.iter().enumerate() {
            if row.len() != columns {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), columns);
            }
        }

        Ok(Self {
            columns,
            rows,
            cells: cells.into_iter().flatten().collect(),
        })
    }

    #[inline]
    pub fn index(&self, column: usize, row: usize) -> usize {
        row * self.columns + column
    }

    /// Get cell value at coordinates; out of bounds cells read as dead
    pub fn get(&self, column: usize, row: usize) -> bool {
        if column < self.columns && row < self.rows {
            self.cells[self.index(column, row)]
        } else {
            false
        }
    }

    /// Set cell value at coordinates
    pub fn set(&mut self, column: usize, row: usize, value: bool) -> Result<()> {
        if column >= self.columns || row >= self.rows {
            anyhow::bail!(
                "Coordinates ({}, {}) out of bounds for {}x{} grid",
                column, row, self.columns, self.rows
            );
        }
        let idx = self.index(column, row);
        self.cells[idx] = value;
        Ok(())
    }

    /// Flip a cell. Coordinates must already be validated.
    pub fn toggle(&mut self, column: usize, row: usize) {
        let idx = self.index(column, row);
        self.cells[idx] = !self.cells[idx];
    }

    /// Whether the cell sits in the first or last row or column
    pub fn is_border(&self, column: usize, row: usize) -> bool {
        column == 0 || row == 0 || column + 1 == self.columns || row + 1 == self.rows
    }

    /// Count living cells among the 8 surrounding cells.
    ///
    /// With `wrap_edges` the indices wrap modulo the dimension (torus);
    /// otherwise neighbors outside the grid are skipped.
    pub fn count_neighbors(&self, column: usize, row: usize, wrap_edges: bool) -> u8 {
        let mut count = 0;

        for (dc, dr) in iproduct!(-1isize..=1, -1isize..=1) {
            if dc == 0 && dr == 0 {
                continue;
            }

            let c = column as isize + dc;
            let r = row as isize + dr;

            if self.is_neighbor_alive(c, r, wrap_edges) {
                count += 1;
            }
        }

        count
    }

    fn is_neighbor_alive(&self, column: isize, row: isize, wrap_edges: bool) -> bool {
        if wrap_edges {
            let wrapped_col = column.rem_euclid(self.columns as isize) as usize;
            let wrapped_row = row.rem_euclid(self.rows as isize) as usize;
            self.cells[self.index(wrapped_col, wrapped_row)]
        } else {
            let in_columns = (0..self.columns as isize).contains(&column);
            let in_rows = (0..self.rows as isize).contains(&row);
            in_columns && in_rows && self.cells[self.index(column as usize, row as usize)]
        }
    }

    /// Get all living cell coordinates as (column, row)
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.rows, 0..self.columns)
            .filter(|&(row, column)| self.get(column, row))
            .map(|(row, column)| (column, row))
            .collect()
    }

    /// Count total living cells
    pub fn living_count(&self) -> usize {
        self.cells.iter().filter(|&&cell| cell).count()
    }

    /// Check if the grid is empty (no living cells)
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&cell| !cell)
    }

    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.rows, 3);
        assert_eq!(grid.cells.len(), 12);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_grid_from_cells() {
        let cells = vec![
            vec![true, false, true, false],
            vec![false, true, false, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(grid.columns, 4);
        assert_eq!(grid.rows, 2);
        assert_eq!(grid.living_count(), 3);
        assert!(grid.get(2, 0));
        assert!(grid.get(1, 1));
        assert!(!grid.get(1, 0));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let cells = vec![vec![true, false], vec![true]];
        assert!(Grid::from_cells(cells).is_err());
        assert!(Grid::from_cells(vec![]).is_err());
    }

    #[test]
    fn test_set_out_of_bounds() {
        let mut grid = Grid::new(3, 3);
        assert!(grid.set(3, 0, true).is_err());
        assert!(grid.set(2, 2, true).is_ok());
        assert!(grid.get(2, 2));
        assert!(!grid.get(5, 5));
    }

    #[test]
    fn test_neighbor_counting() {
        let cells = vec![
            vec![true, true, true],
            vec![true, false, true],
            vec![true, true, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(1, 1, false), 8);
        // Corner only touches two live edges; the dead center is its third neighbor
        assert_eq!(grid.count_neighbors(0, 0, false), 2);
    }

    #[test]
    fn test_wrap_corner_sees_opposite_corner() {
        let mut grid = Grid::new(5, 4);
        grid.set(4, 3, true).unwrap();

        assert_eq!(grid.count_neighbors(0, 0, false), 0);
        assert_eq!(grid.count_neighbors(0, 0, true), 1);
    }

    #[test]
    fn test_small_wrapped_grid_counts_duplicates() {
        let cells = vec![
            vec![true, false],
            vec![false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        assert_eq!(grid.count_neighbors(0, 0, false), 1);
        // Several wrapped offsets land on (1, 1)
        assert_eq!(grid.count_neighbors(0, 0, true), 4);
    }

    #[test]
    fn test_border_detection() {
        let grid = Grid::new(4, 3);
        assert!(grid.is_border(0, 1));
        assert!(grid.is_border(3, 1));
        assert!(grid.is_border(1, 0));
        assert!(grid.is_border(1, 2));
        assert!(!grid.is_border(1, 1));
        assert!(!grid.is_border(2, 1));
    }

    #[test]
    fn test_toggle_and_living_cells() {
        let mut grid = Grid::new(3, 3);
        grid.toggle(2, 1);
        grid.toggle(0, 2);
        assert_eq!(grid.living_cells(), vec![(2, 1), (0, 2)]);

        grid.toggle(2, 1);
        assert_eq!(grid.living_cells(), vec![(0, 2)]);
    }
}
