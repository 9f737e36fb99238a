//! Simulate command
//!
//! Plays headless rounds with a simulated learner and collects statistics. Rounds
//! alternate between the drag and tap protocols and run in parallel.

use crate::core::{Category, Score};
use crate::game::Game;
use crate::interaction::{DropTarget, InputMode};
use crate::round::RoundPhase;
use crate::wordlists::Dataset;
use indicatif::{ProgressBar, ProgressStyle};
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Lowest learner accuracy accepted; below this rounds take unreasonably long
pub const MIN_ACCURACY: f64 = 0.05;

/// Settings for a simulation run
#[derive(Debug, Clone)]
pub struct SimulationConfig {
    pub rounds: usize,
    /// Probability the learner picks the right basket
    pub accuracy: f64,
    pub word_count: usize,
    pub seed: u64,
    /// Simulated time between two attempts
    pub think_time: Duration,
    pub show_progress: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            accuracy: 0.8,
            word_count: crate::config::DEFAULT_WORD_COUNT,
            seed: 0,
            think_time: Duration::from_millis(2_500),
            show_progress: false,
        }
    }
}

/// Result of one simulated round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundReport {
    pub protocol: InputMode,
    pub words: usize,
    pub score: Score,
    pub elapsed_seconds: u64,
}

/// Aggregate over all simulated rounds
#[derive(Debug)]
pub struct SimulationResult {
    pub rounds: usize,
    pub words_sorted: usize,
    pub total_correct: u64,
    pub total_incorrect: u64,
    pub average_incorrect: f64,
    pub accuracy: f64,
    pub min_incorrect: u32,
    pub max_incorrect: u32,
    pub mistake_distribution: FxHashMap<u32, usize>,
    pub average_seconds: f64,
    pub duration: Duration,
}

/// Play one round to completion
///
/// Each attempt picks a random pending word. The learner chooses the right basket with
/// probability `accuracy`, otherwise one of the wrong baskets uniformly.
#[must_use]
pub fn simulate_round(dataset: &Dataset, config: &SimulationConfig, index: u64) -> RoundReport {
    let seed = config.seed.wrapping_add(index);
    let protocol = if index % 2 == 0 {
        InputMode::Drag
    } else {
        InputMode::Tap
    };
    let accuracy = config.accuracy.clamp(MIN_ACCURACY, 1.0);

    let mut rng = StdRng::seed_from_u64(seed);
    let mut game = Game::new(dataset.clone(), protocol, Some(seed));
    let mut now = Instant::now();
    game.start(config.word_count, now);
    let words = game.snapshot().pending.len();

    while game.snapshot().phase == RoundPhase::Active {
        now += config.think_time;
        game.tick(now);

        let Some(word) = game.snapshot().pending.choose(&mut rng).cloned() else {
            break;
        };
        let basket = if rng.random_bool(accuracy) {
            word.category()
        } else {
            let wrong: Vec<Category> = Category::ALL
                .into_iter()
                .filter(|&c| c != word.category())
                .collect();
            *wrong.choose(&mut rng).unwrap_or(&word.category())
        };

        match protocol {
            InputMode::Drag => {
                game.drag_start(word.text());
                game.drop_on(DropTarget::Basket(basket), now);
            }
            InputMode::Tap => {
                game.select_word(word.text());
                game.select_category(basket);
                game.confirm_selection(now);
            }
        }
    }

    let view = game.snapshot();
    RoundReport {
        protocol,
        words,
        score: view.score,
        elapsed_seconds: view.elapsed_seconds,
    }
}

/// Run all configured rounds in parallel
///
/// # Panics
///
/// Panics if the progress bar template is invalid (it is a constant).
pub fn run_simulation(dataset: &Dataset, config: &SimulationConfig) -> SimulationResult {
    let start = Instant::now();

    let pb = if config.show_progress {
        let pb = ProgressBar::new(config.rounds as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .expect("progress template is valid")
                .progress_chars("█▓▒░"),
        );
        pb.set_message("sorting words");
        pb
    } else {
        ProgressBar::hidden()
    };

    let reports: Vec<RoundReport> = (0..config.rounds as u64)
        .into_par_iter()
        .map(|index| {
            let report = simulate_round(dataset, config, index);
            pb.inc(1);
            report
        })
        .collect();

    pb.finish_with_message("done");

    summarize(&reports, start.elapsed())
}

/// Fold round reports into aggregate statistics
#[must_use]
pub fn summarize(reports: &[RoundReport], duration: Duration) -> SimulationResult {
    let rounds = reports.len();
    let mut mistake_distribution: FxHashMap<u32, usize> = FxHashMap::default();
    let mut total_correct = 0u64;
    let mut total_incorrect = 0u64;
    let mut total_seconds = 0u64;
    let mut words_sorted = 0usize;

    for report in reports {
        total_correct += u64::from(report.score.correct);
        total_incorrect += u64::from(report.score.incorrect);
        total_seconds += report.elapsed_seconds;
        words_sorted += report.score.correct as usize;
        *mistake_distribution
            .entry(report.score.incorrect)
            .or_insert(0) += 1;
    }

    let attempts = total_correct + total_incorrect;
    let per_round = |total: u64| {
        if rounds == 0 {
            0.0
        } else {
            total as f64 / rounds as f64
        }
    };

    SimulationResult {
        rounds,
        words_sorted,
        total_correct,
        total_incorrect,
        average_incorrect: per_round(total_incorrect),
        accuracy: if attempts == 0 {
            0.0
        } else {
            total_correct as f64 / attempts as f64
        },
        min_incorrect: reports.iter().map(|r| r.score.incorrect).min().unwrap_or(0),
        max_incorrect: reports.iter().map(|r| r.score.incorrect).max().unwrap_or(0),
        mistake_distribution,
        average_seconds: per_round(total_seconds),
        duration,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(accuracy: f64) -> SimulationConfig {
        SimulationConfig {
            rounds: 8,
            accuracy,
            seed: 11,
            ..SimulationConfig::default()
        }
    }

    #[test]
    fn perfect_learner_makes_no_mistakes() {
        let dataset = Dataset::builtin();
        let result = run_simulation(&dataset, &config(1.0));

        assert_eq!(result.rounds, 8);
        assert_eq!(result.total_incorrect, 0);
        assert_eq!(result.words_sorted, 8 * 9);
        assert!((result.accuracy - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn every_round_finishes() {
        let dataset = Dataset::builtin();
        for index in 0..4 {
            let report = simulate_round(&dataset, &config(0.5), index);
            assert_eq!(report.score.correct as usize, report.words);
        }
    }

    #[test]
    fn protocols_alternate() {
        let dataset = Dataset::builtin();
        assert_eq!(simulate_round(&dataset, &config(1.0), 0).protocol, InputMode::Drag);
        assert_eq!(simulate_round(&dataset, &config(1.0), 1).protocol, InputMode::Tap);
    }

    #[test]
    fn elapsed_follows_think_time() {
        let dataset = Dataset::builtin();
        let report = simulate_round(&dataset, &config(1.0), 0);
        // 9 attempts at 2.5s each
        assert_eq!(report.elapsed_seconds, 22);
    }

    #[test]
    fn same_seed_same_result() {
        let dataset = Dataset::builtin();
        let a = simulate_round(&dataset, &config(0.6), 3);
        let b = simulate_round(&dataset, &config(0.6), 3);
        assert_eq!(a, b);
    }

    #[test]
    fn distribution_sums_to_rounds() {
        let dataset = Dataset::builtin();
        let result = run_simulation(&dataset, &config(0.7));
        let total: usize = result.mistake_distribution.values().sum();
        assert_eq!(total, result.rounds);
        assert!(result.min_incorrect <= result.max_incorrect);
    }

    #[test]
    fn summarize_empty() {
        let result = summarize(&[], Duration::ZERO);
        assert_eq!(result.rounds, 0);
        assert!(result.average_incorrect.abs() < f64::EPSILON);
        assert!(result.mistake_distribution.is_empty());
    }
}
