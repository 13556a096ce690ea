use life_sim::game_of_life::{GameOfLifeRules, Grid};
use life_sim::Simulator;
use proptest::prelude::*;

prop_compose! {
    fn arb_grid()(columns in 3usize..16, rows in 3usize..16)
        (
            cells in prop::collection::vec(any::<bool>(), columns * rows),
            columns in Just(columns),
            rows in Just(rows),
        ) -> Grid {
        Grid { columns, rows, cells }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn test_step_is_deterministic(grid in arb_grid(), wrap in any::<bool>()) {
        let (a, changes_a) = GameOfLifeRules::evolve(&grid, wrap);
        let (b, changes_b) = GameOfLifeRules::evolve(&grid, wrap);
        prop_assert_eq!(a, b);
        prop_assert_eq!(changes_a, changes_b);
    }

    #[test]
    fn test_diff_matches_grid_difference(grid in arb_grid(), wrap in any::<bool>()) {
        let (next, changes) = GameOfLifeRules::evolve(&grid, wrap);
        let differing = grid.cells.iter().zip(&next.cells).filter(|(a, b)| a != b).count();
        prop_assert_eq!(differing, changes.len());
        for change in changes {
            prop_assert_eq!(next.get(change.column, change.row), change.alive);
            prop_assert_eq!(grid.get(change.column, change.row), !change.alive);
        }
    }

    #[test]
    fn test_border_cells_frozen_without_wrap(grid in arb_grid()) {
        let (next, _) = GameOfLifeRules::evolve(&grid, false);
        for row in 0..grid.rows {
            for column in 0..grid.columns {
                if grid.is_border(column, row) {
                    prop_assert_eq!(next.get(column, row), grid.get(column, row));
                }
            }
        }
    }

    #[test]
    fn test_seeded_board_has_dead_border(
        columns in 1usize..30,
        rows in 1usize..30,
        seed in any::<u64>(),
    ) {
        let sim = Simulator::initialize(columns, rows, false, Some(seed));
        let grid = sim.grid();
        for (column, row) in grid.living_cells() {
            prop_assert!(!grid.is_border(column, row));
        }
    }

    #[test]
    fn test_double_toggle_is_identity(
        seed in any::<u64>(),
        column in 0usize..12,
        row in 0usize..9,
    ) {
        let mut sim = Simulator::initialize(12, 9, true, Some(seed));
        sim.step();
        let before = sim.grid().clone();
        sim.toggle_cell(column, row);
        sim.toggle_cell(column, row);
        prop_assert_eq!(sim.grid(), &before);
        prop_assert_eq!(sim.generation(), 1);
    }

    #[test]
    fn test_dead_board_stays_dead(
        columns in 1usize..20,
        rows in 1usize..20,
        wrap in any::<bool>(),
        steps in 1u64..20,
    ) {
        let mut sim = Simulator::from_grid(Grid::new(columns, rows), wrap, Some(0));
        sim.run(steps);
        prop_assert_eq!(sim.live_count(), 0);
    }
}
