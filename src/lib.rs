//! Word Baskets
//!
//! A word-sorting game for young learners: every word answers one of the questions
//! Who?, What? or Where?, and has to be dropped in the matching basket.
//!
//! # Quick Start
//!
//! ```rust
//! use std::time::Instant;
//! use word_baskets::game::Game;
//! use word_baskets::interaction::{DropTarget, InputMode};
//! use word_baskets::wordlists::Dataset;
//!
//! let mut game = Game::new(Dataset::builtin(), InputMode::Drag, Some(7));
//! let now = Instant::now();
//! game.start(9, now);
//!
//! let word = game.snapshot().pending[0].clone();
//! game.drag_start(word.text());
//! let outcome = game.drop_on(DropTarget::Basket(word.category()), now);
//! assert!(outcome.is_some_and(|o| o.is_correct()));
//! ```

// Core domain types
pub mod core;

// Word datasets
pub mod wordlists;

// Round rules: pool, arbiter, state machine
pub mod round;

// Drag and tap input protocols
pub mod interaction;

// Game session and round clock
pub mod game;

// Settings shared by the front ends
pub mod config;

// Placement sounds
pub mod feedback;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
