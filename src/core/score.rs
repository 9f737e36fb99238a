//! Round score

use std::fmt;

/// Correct and incorrect placement counts for one round
///
/// Both counters only grow during a round and reset to zero when a round starts.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Score {
    pub correct: u32,
    pub incorrect: u32,
}

impl Score {
    /// Score at round start
    pub const ZERO: Self = Self {
        correct: 0,
        incorrect: 0,
    };

    /// Total placement attempts counted so far
    #[inline]
    #[must_use]
    pub const fn attempts(self) -> u32 {
        self.correct + self.incorrect
    }

    /// Fraction of attempts that were correct (0.0 when nothing was attempted)
    #[must_use]
    pub fn accuracy(self) -> f64 {
        if self.attempts() == 0 {
            0.0
        } else {
            f64::from(self.correct) / f64::from(self.attempts())
        }
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} correct, {} incorrect", self.correct, self.incorrect)
    }
}
