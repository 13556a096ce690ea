//! Conway's Game of Life simulator
//!
//! This library provides the grid, the generation-update rule, a simulator that
//! owns the board state and statistics, and an interactive session controller.

pub mod config;
pub mod game_of_life;
pub mod session;
pub mod simulator;
pub mod utils;

pub use config::Settings;
pub use simulator::{SimulationStats, Simulator, StepDiff};

use anyhow::Result;

/// Build a simulator from settings, loading the pattern file if one is configured
pub fn simulator_from_settings(settings: &Settings) -> Result<Simulator> {
    let board = &settings.board;
    match &board.pattern_file {
        Some(path) => {
            let grid = game_of_life::load_grid_from_file(path)?;
            Ok(Simulator::from_grid(grid, board.wrap_edges, board.seed))
        }
        None => Ok(Simulator::initialize(
            board.columns,
            board.rows,
            board.wrap_edges,
            board.seed,
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_simulator_from_pattern_file() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("ring.txt");
        std::fs::write(&pattern, "111111\n100001\n101101\n100001\n111111\n").unwrap();

        let mut settings = Settings::default();
        settings.board.pattern_file = Some(pattern);
        settings.board.columns = 99;
        let sim = simulator_from_settings(&settings).unwrap();

        // Dimensions come from the file and the border ring is cleared
        assert_eq!(sim.grid().columns, 6);
        assert_eq!(sim.grid().rows, 5);
        assert_eq!(sim.grid().living_cells(), vec![(2, 2), (3, 2)]);
        assert_eq!(sim.generation(), 0);
    }

    #[test]
    fn test_simulator_from_random_settings() {
        let mut settings = Settings::default();
        settings.board.seed = Some(8);
        let sim = simulator_from_settings(&settings).unwrap();

        assert_eq!(sim.grid().columns, 40);
        assert_eq!(sim.grid().rows, 20);
    }

    #[test]
    fn test_missing_pattern_file_is_an_error() {
        let mut settings = Settings::default();
        settings.board.pattern_file = Some(std::path::PathBuf::from("no/such/pattern.txt"));
        assert!(simulator_from_settings(&settings).is_err());
    }
}
