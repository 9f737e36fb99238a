//! Round logic
//!
//! Word pool selection, placement judging and the round lifecycle.

mod arbiter;
mod baskets;
mod pool;
mod state;

pub use arbiter::{PlacementOutcome, attempt};
pub use baskets::Baskets;
pub use pool::{PoolError, build_pool};
pub use state::{RoundPhase, RoundState};
