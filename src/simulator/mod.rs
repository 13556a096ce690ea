//! Grid simulator and its statistics

pub mod engine;
pub mod stats;

pub use engine::Simulator;
pub use stats::{SimulationStats, StepDiff};
