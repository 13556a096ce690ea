//! Display and output formatting utilities

use crate::config::DisplayConfig;
use crate::game_of_life::Grid;
use crate::session::Session;

/// Renders boards and status lines as text
pub struct FrameRenderer {
    alive: char,
    dead: char,
}

impl FrameRenderer {
    pub fn new(config: &DisplayConfig) -> Self {
        Self {
            alive: config.alive_char,
            dead: config.dead_char,
        }
    }

    /// Format a grid in compact form, one character per cell
    pub fn format_grid_compact(&self, grid: &Grid) -> String {
        let mut output = String::with_capacity(grid.rows * (grid.columns + 1));
        for row in 0..grid.rows {
            for column in 0..grid.columns {
                output.push(if grid.get(column, row) { self.alive } else { self.dead });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with the overlay: column/row numbers and cell separators
    pub fn format_grid_with_overlay(&self, grid: &Grid) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for column in 0..grid.columns {
            output.push_str(&format!("{:2}", column % 10));
        }
        output.push('\n');

        for row in 0..grid.rows {
            output.push_str(&format!("{:2} ", row % 100));
            for column in 0..grid.columns {
                output.push('|');
                output.push(if grid.get(column, row) { self.alive } else { self.dead });
            }
            output.push_str("|\n");
        }

        output
    }

    /// Status line with generation and live-cell counts
    pub fn format_status(&self, session: &Session) -> String {
        let sim = session.simulator();
        let mut status = format!(
            "{}  Interval: {}ms",
            sim.stats(),
            session.tick_interval().as_millis()
        );
        if sim.wrap_edges() {
            status.push_str("  [wrap]");
        }
        if session.is_paused() {
            status.push_str("  [paused]");
        }
        status
    }

    /// Full frame: status line followed by the board
    pub fn format_frame(&self, session: &Session) -> String {
        let grid = session.simulator().grid();
        let board = if session.show_grid() {
            self.format_grid_with_overlay(grid)
        } else {
            self.format_grid_compact(grid)
        };
        format!("{}\n{}", self.format_status(session), board)
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() &&
        (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
