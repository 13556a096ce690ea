//! Configuration settings for the Game of Life simulator

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub board: BoardConfig,
    pub simulation: SimulationConfig,
    pub display: DisplayConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    pub columns: usize,
    pub rows: usize,
    /// Pixel size of one cell, used to map pointer positions onto the board
    pub cell_size: f32,
    pub wrap_edges: bool,
    /// Fixed seed for the initial board; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,
    /// Start from a `0`/`1` pattern file instead of a random board
    #[serde(default)]
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub tick_interval_ms: u64,
    pub min_tick_ms: u64,
    pub max_tick_ms: u64,
    /// Amount the interval changes per speed-up/slow-down command
    pub tick_step_ms: u64,
    pub start_paused: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub show_grid: bool,
    pub alive_char: char,
    pub dead_char: char,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            board: BoardConfig {
                columns: 40,
                rows: 20,
                cell_size: 10.0,
                wrap_edges: false,
                seed: None,
                pattern_file: None,
            },
            simulation: SimulationConfig {
                tick_interval_ms: 100,
                min_tick_ms: 10,
                max_tick_ms: 2000,
                tick_step_ms: 10,
                start_paused: false,
            },
            display: DisplayConfig {
                show_grid: false,
                alive_char: '█',
                dead_char: '·',
            },
            output: OutputConfig {
                format: OutputFormat::Text,
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if self.board.pattern_file.is_none() && (self.board.columns == 0 || self.board.rows == 0) {
            anyhow::bail!(
                "Board dimensions must be positive, got {}x{}",
                self.board.columns,
                self.board.rows
            );
        }

        if !(self.board.cell_size.is_finite() && self.board.cell_size > 0.0) {
            anyhow::bail!("Cell size must be positive, got {}", self.board.cell_size);
        }

        let sim = &self.simulation;
        if sim.min_tick_ms == 0 {
            anyhow::bail!("Minimum tick interval must be positive");
        }
        if sim.min_tick_ms > sim.max_tick_ms {
            anyhow::bail!(
                "Minimum tick interval {}ms exceeds maximum {}ms",
                sim.min_tick_ms,
                sim.max_tick_ms
            );
        }
        if sim.tick_interval_ms < sim.min_tick_ms || sim.tick_interval_ms > sim.max_tick_ms {
            anyhow::bail!(
                "Tick interval {}ms outside [{}, {}]",
                sim.tick_interval_ms,
                sim.min_tick_ms,
                sim.max_tick_ms
            );
        }

        if let Some(ref pattern) = self.board.pattern_file {
            if !pattern.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern.display());
            }
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(columns) = cli_overrides.columns {
            self.board.columns = columns;
        }
        if let Some(rows) = cli_overrides.rows {
            self.board.rows = rows;
        }
        if let Some(seed) = cli_overrides.seed {
            self.board.seed = Some(seed);
        }
        if cli_overrides.wrap_edges {
            self.board.wrap_edges = true;
        }
        if let Some(ref pattern) = cli_overrides.pattern_file {
            self.board.pattern_file = Some(pattern.clone());
        }
        if let Some(interval) = cli_overrides.tick_interval_ms {
            self.simulation.tick_interval_ms = interval;
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub columns: Option<usize>,
    pub rows: Option<usize>,
    pub seed: Option<u64>,
    pub wrap_edges: bool,
    pub pattern_file: Option<PathBuf>,
    pub tick_interval_ms: Option<u64>,
    pub format: Option<OutputFormat>,
}
