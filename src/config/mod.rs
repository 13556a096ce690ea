//! Configuration management for the Game of Life simulator

pub mod settings;

pub use settings::{
    Settings, BoardConfig, SimulationConfig, DisplayConfig, OutputConfig, OutputFormat, CliOverrides
};
