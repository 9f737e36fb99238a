//! Formatting utilities for terminal output

use crate::round::PlacementOutcome;

/// Symbol for a placement outcome
#[must_use]
pub const fn outcome_symbol(outcome: PlacementOutcome) -> &'static str {
    match outcome {
        PlacementOutcome::Correct => "✅",
        PlacementOutcome::Incorrect => "❌",
    }
}

/// Format whole seconds as `m:ss`
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64).max(0.0) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Percentage of words sorted so far
#[must_use]
pub fn sorted_percent(sorted: usize, total: usize) -> u16 {
    if total == 0 {
        return 0;
    }
    ((sorted * 100) / total).min(100) as u16
}
