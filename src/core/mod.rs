//! Core domain types for the word sorting game
//!
//! This module contains the fundamental domain types with zero I/O.
//! All types here are plain data with value semantics.

mod category;
mod score;
mod word;

pub use category::Category;
pub use score::Score;
pub use word::WordEntry;
