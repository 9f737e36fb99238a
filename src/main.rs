//! Word Baskets - CLI
//!
//! Sort words into the Who?, What? and Where? baskets, in a TUI or on plain lines.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use word_baskets::{
    commands::{SimulationConfig, run_simple, run_simulation, summarize_dataset},
    config::{GameConfig, InputPreference, MAX_WORD_COUNT},
    feedback,
    game::Game,
    interaction::InputMode,
    output::{print_dataset, print_simulation_result},
    wordlists::{Dataset, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "word_baskets",
    about = "Who? What? Where? - sort the words into the right baskets",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Word dataset: 'builtin' (default) or path to a dataset file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    words: String,

    /// Words per round
    #[arg(short = 'n', long, global = true, default_value = "9", value_parser = parse_word_count)]
    count: usize,

    /// Input protocol: auto (default), drag or tap
    #[arg(short, long, global = true, value_enum, default_value_t = InputPreference::Auto)]
    input: InputPreference,

    /// Seed for reproducible rounds
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(short, long, global = true)]
    mute: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based play without TUI)
    Simple,

    /// Play rounds with a simulated learner and report statistics
    Simulate {
        /// Number of rounds to play
        #[arg(short, long, default_value = "100")]
        rounds: usize,

        /// Probability the learner picks the right basket
        #[arg(short, long, default_value = "0.8", value_parser = parse_accuracy)]
        accuracy: f64,
    },

    /// List the words of the dataset by category
    Words,
}

fn parse_word_count(value: &str) -> Result<usize, String> {
    let count: usize = value.parse().map_err(|e| format!("{e}"))?;
    if (1..=MAX_WORD_COUNT).contains(&count) {
        Ok(count)
    } else {
        Err(format!("must be between 1 and {MAX_WORD_COUNT}"))
    }
}

fn parse_accuracy(value: &str) -> Result<f64, String> {
    let accuracy: f64 = value.parse().map_err(|e| format!("{e}"))?;
    let min = word_baskets::commands::simulate::MIN_ACCURACY;
    if (min..=1.0).contains(&accuracy) {
        Ok(accuracy)
    } else {
        Err(format!("must be between {min} and 1"))
    }
}

/// Load the dataset named by the -w flag
fn load_dataset(words: &str) -> Result<Dataset> {
    match words {
        "builtin" => Ok(Dataset::builtin()),
        path => load_from_file(path).with_context(|| format!("failed to load dataset '{path}'")),
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let dataset = load_dataset(&cli.words)?;
    tracing::debug!(words = dataset.len(), source = %cli.words, "dataset loaded");

    let config = GameConfig {
        word_count: cli.count,
        input: cli.input,
        seed: cli.seed,
        sound: !cli.mute,
    };

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => word_baskets::interactive::run_tui(dataset, &config),
        Commands::Simple => run_simple_command(dataset, &config),
        Commands::Simulate { rounds, accuracy } => {
            run_simulate_command(&dataset, &config, rounds, accuracy);
            Ok(())
        }
        Commands::Words => {
            print_dataset(&summarize_dataset(&dataset));
            Ok(())
        }
    }
}

fn run_simple_command(dataset: Dataset, config: &GameConfig) -> Result<()> {
    // Line input has no pointer, so tap is the only protocol that applies
    let mut game = Game::new(dataset, InputMode::Tap, config.seed);
    let mut feedback = feedback::for_sound(config.sound);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_simple(
        &mut game,
        config.word_count,
        &mut *feedback,
        stdin.lock(),
        &mut stdout,
    )
}

fn run_simulate_command(dataset: &Dataset, config: &GameConfig, rounds: usize, accuracy: f64) {
    let seed = config.seed.unwrap_or_else(rand::random);
    println!(
        "Simulating {rounds} rounds of {} words at {:.0}% accuracy (seed {seed})...",
        config.word_count,
        accuracy * 100.0
    );

    let sim = SimulationConfig {
        rounds,
        accuracy,
        word_count: config.word_count,
        seed,
        show_progress: true,
        ..SimulationConfig::default()
    };

    let result = run_simulation(dataset, &sim);
    print_simulation_result(&result);
}
