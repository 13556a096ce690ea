//! Session state: pause, overlay, tick scheduling and pointer input

use super::{Command, InputError};
use crate::config::Settings;
use crate::simulator::{Simulator, StepDiff};
use std::time::Duration;
use tracing::{debug, info};

/// Result of applying a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Session state changed; redraw
    Updated,
    /// A generation was computed
    Stepped(StepDiff),
    Quit,
}

/// Interactive controller wrapping a simulator
pub struct Session {
    simulator: Simulator,
    paused: bool,
    show_grid: bool,
    cell_size: f32,
    tick_interval: Duration,
    min_tick: Duration,
    max_tick: Duration,
    tick_step: Duration,
    accumulated: Duration,
}

impl Session {
    pub fn new(simulator: Simulator, settings: &Settings) -> Self {
        let sim = &settings.simulation;
        let min_tick = Duration::from_millis(sim.min_tick_ms.max(1));
        let max_tick = Duration::from_millis(sim.max_tick_ms).max(min_tick);
        let tick_interval = Duration::from_millis(sim.tick_interval_ms).clamp(min_tick, max_tick);

        Self {
            simulator,
            paused: sim.start_paused,
            show_grid: settings.display.show_grid,
            cell_size: settings.board.cell_size,
            tick_interval,
            min_tick,
            max_tick,
            tick_step: Duration::from_millis(sim.tick_step_ms),
            accumulated: Duration::ZERO,
        }
    }

    /// Apply a user command
    pub fn apply(&mut self, command: Command) -> Result<Outcome, InputError> {
        debug!(?command, "apply command");

        let outcome = match command {
            Command::TogglePause => {
                self.paused = !self.paused;
                self.accumulated = Duration::ZERO;
                info!(paused = self.paused, "pause toggled");
                Outcome::Updated
            }
            Command::Reset => {
                self.simulator.reset();
                self.accumulated = Duration::ZERO;
                Outcome::Updated
            }
            Command::ToggleGrid => {
                self.show_grid = !self.show_grid;
                Outcome::Updated
            }
            Command::ToggleWrap => {
                let wrap = !self.simulator.wrap_edges();
                self.simulator.set_wrap_edges(wrap);
                info!(wrap_edges = wrap, "wrap edges toggled");
                Outcome::Updated
            }
            Command::SpeedUp => {
                self.tick_interval = self
                    .tick_interval
                    .saturating_sub(self.tick_step)
                    .clamp(self.min_tick, self.max_tick);
                Outcome::Updated
            }
            Command::SlowDown => {
                self.tick_interval =
                    (self.tick_interval + self.tick_step).clamp(self.min_tick, self.max_tick);
                Outcome::Updated
            }
            Command::Step => Outcome::Stepped(self.simulator.step()),
            Command::ToggleAt { x, y } => {
                let (column, row) = self.cell_at(x, y)?;
                self.simulator.toggle_cell(column, row);
                Outcome::Updated
            }
            Command::Quit => Outcome::Quit,
        };

        Ok(outcome)
    }

    /// Map a pointer position in pixels to a cell, rejecting anything off the board
    pub fn cell_at(&self, x: f32, y: f32) -> Result<(usize, usize), InputError> {
        if !(x.is_finite() && y.is_finite()) || x < 0.0 || y < 0.0 {
            return Err(InputError::InvalidPointer { x, y });
        }

        let column = (x / self.cell_size).floor() as usize;
        let row = (y / self.cell_size).floor() as usize;
        let grid = self.simulator.grid();

        if column >= grid.columns || row >= grid.rows {
            return Err(InputError::OutsideBoard {
                column,
                row,
                columns: grid.columns,
                rows: grid.rows,
            });
        }

        Ok((column, row))
    }

    /// Feed elapsed wall-clock time; one generation runs per whole tick
    /// interval. Time passed while paused is discarded.
    pub fn advance(&mut self, elapsed: Duration) -> Vec<StepDiff> {
        if self.paused {
            return Vec::new();
        }

        self.accumulated += elapsed;
        let mut diffs = Vec::new();
        while self.accumulated >= self.tick_interval {
            self.accumulated -= self.tick_interval;
            diffs.push(self.simulator.step());
        }
        diffs
    }

    pub fn simulator(&self) -> &Simulator {
        &self.simulator
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn show_grid(&self) -> bool {
        self.show_grid
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }
}
