//! The grid simulator: owned board state, generation counter and seeded RNG

use super::{SimulationStats, StepDiff};
use crate::game_of_life::{GameOfLifeRules, Grid};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

/// Owns the board and advances it one generation at a time
pub struct Simulator {
    grid: Grid,
    generation: u64,
    wrap_edges: bool,
    rng: ChaCha8Rng,
}

impl Simulator {
    /// Create a random board. Border cells are always dead; every other cell
    /// is alive on a coin flip. `None` seeds from entropy.
    pub fn initialize(columns: usize, rows: usize, wrap_edges: bool, seed: Option<u64>) -> Self {
        let mut rng = Self::make_rng(seed);
        let grid = Self::random_grid(columns, rows, &mut rng);
        debug!(columns, rows, wrap_edges, ?seed, live = grid.living_count(), "initialized board");

        Self {
            grid,
            generation: 0,
            wrap_edges,
            rng,
        }
    }

    /// Start from an existing grid; the seed only affects later resets.
    /// Border cells of the loaded grid are cleared like those of a random board.
    pub fn from_grid(mut grid: Grid, wrap_edges: bool, seed: Option<u64>) -> Self {
        let cleared = Self::clear_border(&mut grid);
        debug!(columns = grid.columns, rows = grid.rows, wrap_edges, cleared, "loaded board");
        Self {
            grid,
            generation: 0,
            wrap_edges,
            rng: Self::make_rng(seed),
        }
    }

    fn make_rng(seed: Option<u64>) -> ChaCha8Rng {
        match seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => ChaCha8Rng::from_entropy(),
        }
    }

    fn random_grid(columns: usize, rows: usize, rng: &mut ChaCha8Rng) -> Grid {
        // Draw for every cell so the stream does not depend on the border
        let cells = (0..columns * rows).map(|_| rng.gen_bool(0.5)).collect();
        let mut grid = Grid { columns, rows, cells };
        Self::clear_border(&mut grid);
        grid
    }

    /// Force every border cell dead, returning how many were alive
    fn clear_border(grid: &mut Grid) -> usize {
        let mut cleared = 0;
        for row in 0..grid.rows {
            for column in 0..grid.columns {
                let idx = grid.index(column, row);
                if grid.is_border(column, row) && grid.cells[idx] {
                    grid.cells[idx] = false;
                    cleared += 1;
                }
            }
        }
        cleared
    }

    /// Re-randomize the board from the simulator's RNG and zero the generation counter
    pub fn reset(&mut self) {
        self.grid = Self::random_grid(self.grid.columns, self.grid.rows, &mut self.rng);
        self.generation = 0;
        debug!(live = self.grid.living_count(), "board reset");
    }

    /// Advance one generation and return the cells that changed
    pub fn step(&mut self) -> StepDiff {
        let (next, changes) = GameOfLifeRules::evolve(&self.grid, self.wrap_edges);
        self.grid = next;
        self.generation += 1;
        debug!(generation = self.generation, changed = changes.len(), "step");

        StepDiff {
            generation: self.generation,
            changes,
        }
    }

    /// Step `generations` times, returning the total number of cell changes
    pub fn run(&mut self, generations: u64) -> u64 {
        (0..generations).map(|_| self.step().changes.len() as u64).sum()
    }

    /// Flip one cell. Coordinates must already be bounds-checked.
    pub fn toggle_cell(&mut self, column: usize, row: usize) {
        self.grid.toggle(column, row);
    }

    pub fn live_count(&self) -> usize {
        self.grid.living_count()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn wrap_edges(&self) -> bool {
        self.wrap_edges
    }

    pub fn set_wrap_edges(&mut self, wrap_edges: bool) {
        self.wrap_edges = wrap_edges;
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn stats(&self) -> SimulationStats {
        SimulationStats {
            generation: self.generation,
            live_cells: self.live_count(),
            total_cells: self.grid.total_cells(),
            wrap_edges: self.wrap_edges,
        }
    }
}
