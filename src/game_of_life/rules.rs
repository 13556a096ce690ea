//! Game of Life rules implementation

use super::Grid;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// A cell whose state changed during a generation; `alive` is the new state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellChange {
    pub column: usize,
    pub row: usize,
    pub alive: bool,
}

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Compute the next generation from an immutable snapshot.
    ///
    /// Rows are computed in parallel; every worker reads only from `current`
    /// and writes its own row buffer, so no cell sees a partially updated
    /// neighborhood. Border cells are left untouched unless `wrap_edges` is set.
    pub fn evolve(current: &Grid, wrap_edges: bool) -> (Grid, Vec<CellChange>) {
        let rows: Vec<(Vec<bool>, Vec<CellChange>)> = (0..current.rows)
            .into_par_iter()
            .map(|row| {
                let mut next_row = Vec::with_capacity(current.columns);
                let mut changes = Vec::new();

                for column in 0..current.columns {
                    let alive = current.get(column, row);
                    let next = if wrap_edges || !current.is_border(column, row) {
                        let neighbors = current.count_neighbors(column, row, wrap_edges);
                        Self::should_be_alive(alive, neighbors)
                    } else {
                        alive
                    };

                    if next != alive {
                        changes.push(CellChange { column, row, alive: next });
                    }
                    next_row.push(next);
                }

                (next_row, changes)
            })
            .collect();

        let mut cells = Vec::with_capacity(current.columns * current.rows);
        let mut changes = Vec::new();
        for (row_cells, row_changes) in rows {
            cells.extend(row_cells);
            changes.extend(row_changes);
        }

        let next = Grid {
            columns: current.columns,
            rows: current.rows,
            cells,
        };
        (next, changes)
    }

    /// Evolve the grid for multiple generations
    pub fn evolve_generations(mut grid: Grid, generations: usize, wrap_edges: bool) -> Grid {
        for _ in 0..generations {
            grid = Self::evolve(&grid, wrap_edges).0;
        }
        grid
    }

    /// Whether a cell is alive next generation given its current state and live neighbor count
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        matches!((current_state, neighbor_count), (true, 2) | (true, 3) | (false, 3))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_from(rows: &[&str]) -> Grid {
        let cells = rows
            .iter()
            .map(|line| line.chars().map(|ch| ch == '1').collect())
            .collect();
        Grid::from_cells(cells).unwrap()
    }

    #[test]
    fn test_still_life_block() {
        let grid = grid_from(&["0000", "0110", "0110", "0000"]);
        let (evolved, changes) = GameOfLifeRules::evolve(&grid, false);

        assert_eq!(grid, evolved);
        assert!(changes.is_empty());
    }

    #[test]
    fn test_oscillator_blinker() {
        let grid = grid_from(&["00000", "00000", "01110", "00000", "00000"]);
        let expected = grid_from(&["00000", "00100", "00100", "00100", "00000"]);

        let (evolved, changes) = GameOfLifeRules::evolve(&grid, false);
        assert_eq!(evolved, expected);
        assert_eq!(changes.len(), 4);

        let (evolved_twice, _) = GameOfLifeRules::evolve(&evolved, false);
        assert_eq!(evolved_twice, grid);
    }

    #[test]
    fn test_blinker_in_three_by_three_needs_wrap() {
        // On a 3x3 board only the center is interior, so bounded mode freezes
        // the border cells of the blinker.
        let grid = grid_from(&["000", "111", "000"]);

        let (bounded, _) = GameOfLifeRules::evolve(&grid, false);
        assert_eq!(bounded, grid);

        // On a 3x3 torus every cell neighbors every other cell: live cells see
        // 2 and survive, dead cells see 3 and are born
        let (wrapped, _) = GameOfLifeRules::evolve(&grid, true);
        assert_eq!(wrapped, grid_from(&["111", "111", "111"]));
    }

    #[test]
    fn test_changes_are_row_major_and_exact() {
        let grid = grid_from(&["00000", "00000", "01110", "00000", "00000"]);
        let (_, changes) = GameOfLifeRules::evolve(&grid, false);

        assert_eq!(
            changes,
            vec![
                CellChange { column: 2, row: 1, alive: true },
                CellChange { column: 1, row: 2, alive: false },
                CellChange { column: 3, row: 2, alive: false },
                CellChange { column: 2, row: 3, alive: true },
            ]
        );
    }

    #[test]
    fn test_border_cell_with_three_neighbors_stays_dead() {
        // (2, 0) is a dead border cell with exactly three live neighbors
        let grid = grid_from(&["00000", "01110", "00000", "00000"]);

        let (bounded, _) = GameOfLifeRules::evolve(&grid, false);
        assert!(!bounded.get(2, 0));

        let (wrapped, _) = GameOfLifeRules::evolve(&grid, true);
        assert!(wrapped.get(2, 0));
    }

    #[test]
    fn test_glider_translates_on_torus() {
        let glider = grid_from(&["010000", "001000", "111000", "000000", "000000", "000000"]);
        let moved = GameOfLifeRules::evolve_generations(glider.clone(), 4, true);

        let mut expected = Grid::new(6, 6);
        for (column, row) in glider.living_cells() {
            expected.set(column + 1, row + 1, true).unwrap();
        }
        assert_eq!(moved, expected);
    }

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
    }
}
