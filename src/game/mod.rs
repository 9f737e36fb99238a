//! Game session
//!
//! Wires the word pool, round state machine and input adapter behind the commands the
//! presentation layer uses, and keeps the round clock ticking only while a round is active.

mod session;
mod timer;

pub use session::{Game, GameSnapshot};
pub use timer::{TICK_INTERVAL, TickSchedule};
