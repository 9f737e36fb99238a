//! Command implementations

pub mod simple;
pub mod simulate;
pub mod words;

pub use simple::{SimpleCommand, run_simple};
pub use simulate::{
    RoundReport, SimulationConfig, SimulationResult, run_simulation, simulate_round,
};
pub use words::{CategorySummary, DatasetSummary, summarize_dataset};
