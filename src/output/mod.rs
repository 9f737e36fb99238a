//! Terminal output formatting
//!
//! Display utilities for CLI results and pretty-printing.

pub mod display;
pub mod formatters;

pub use display::{
    basket_hint, print_board, print_dataset, print_round_summary, print_simulation_result,
};
