//! Interactive TUI interface
//!
//! Full-screen play with ratatui: mouse drag where the terminal reports it, keyboard
//! selection otherwise.

mod app;
mod rendering;

pub use app::{App, Message, MessageStyle, Statistics, run_tui};
pub use rendering::{BoardLayout, basket_at, board_layout, chip_at, chip_rects};
