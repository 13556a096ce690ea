//! Per-step diffs and aggregate statistics

use crate::game_of_life::CellChange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Cells changed by one generation, for the rendering layer to animate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDiff {
    /// Generation reached by this step
    pub generation: u64,
    pub changes: Vec<CellChange>,
}

impl StepDiff {
    pub fn births(&self) -> usize {
        self.changes.iter().filter(|change| change.alive).count()
    }

    pub fn deaths(&self) -> usize {
        self.changes.len() - self.births()
    }

    pub fn is_stable(&self) -> bool {
        self.changes.is_empty()
    }
}

/// Snapshot of the simulator's counters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationStats {
    pub generation: u64,
    pub live_cells: usize,
    pub total_cells: usize,
    pub wrap_edges: bool,
}

impl SimulationStats {
    /// Fraction of live cells (0.0 to 1.0)
    pub fn density(&self) -> f64 {
        if self.total_cells == 0 {
            0.0
        } else {
            self.live_cells as f64 / self.total_cells as f64
        }
    }
}

impl fmt::Display for SimulationStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Generation: {}  Alive: {}", self.generation, self.live_cells)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diff_counts() {
        let diff = StepDiff {
            generation: 3,
            changes: vec![
                CellChange { column: 1, row: 1, alive: true },
                CellChange { column: 2, row: 1, alive: false },
                CellChange { column: 3, row: 1, alive: false },
            ],
        };
        assert_eq!(diff.births(), 1);
        assert_eq!(diff.deaths(), 2);
        assert!(!diff.is_stable());
    }

    #[test]
    fn test_stats_display_and_density() {
        let stats = SimulationStats {
            generation: 12,
            live_cells: 25,
            total_cells: 100,
            wrap_edges: false,
        };
        assert_eq!(stats.to_string(), "Generation: 12  Alive: 25");
        assert!((stats.density() - 0.25).abs() < f64::EPSILON);
    }
}
