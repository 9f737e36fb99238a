//! Round state machine
//!
//! Owns the authoritative state of one round: pending words, baskets, score, timing and
//! lifecycle phase. All mutation goes through the commands below.
//!
//! ```text
//!            start                  last word placed
//! NotStarted ─────▶ Active ───────────────────────────▶ Finished
//!     ▲                                                    │
//!     └──────────────────── restart (any phase) ◀──────────┘
//! ```
//!
//! `start` is also accepted from `Finished`. There is no time limit: the only way to
//! reach `Finished` is emptying the pending words.

use super::Baskets;
use super::arbiter::{PlacementOutcome, attempt};
use crate::core::{Category, Score, WordEntry};
use std::time::{Duration, Instant};

/// Lifecycle phase of a round
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    #[default]
    NotStarted,
    Active,
    Finished,
}

/// State of the current round
#[derive(Debug, Default, Clone)]
pub struct RoundState {
    phase: RoundPhase,
    pending: Vec<WordEntry>,
    baskets: Baskets,
    score: Score,
    word_count: usize,
    started_at: Option<Instant>,
    elapsed: Duration,
}

impl RoundState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Begin a round with the given words
    ///
    /// Accepted from `NotStarted` or `Finished`; clears baskets, zeroes the score and
    /// records `now` as the round start. Ignored (returns `false`) while a round is
    /// active or when `words` is empty.
    pub fn start(&mut self, words: Vec<WordEntry>, now: Instant) -> bool {
        if self.phase == RoundPhase::Active {
            tracing::debug!("start ignored: round already active");
            return false;
        }
        if words.is_empty() {
            tracing::debug!("start ignored: empty word set");
            return false;
        }

        self.word_count = words.len();
        self.pending = words;
        self.baskets.clear();
        self.score = Score::ZERO;
        self.started_at = Some(now);
        self.elapsed = Duration::ZERO;
        self.phase = RoundPhase::Active;

        tracing::info!(words = self.word_count, "round started");
        true
    }

    /// Recompute elapsed time; no-op outside `Active`
    pub fn tick(&mut self, now: Instant) {
        if self.phase != RoundPhase::Active {
            return;
        }
        if let Some(started_at) = self.started_at {
            self.elapsed = now.saturating_duration_since(started_at);
        }
    }

    /// Try to put a pending word into a basket
    ///
    /// Returns the outcome for feedback, or `None` if the attempt was ignored (wrong phase,
    /// word not pending, duplicate). Placing the last pending word finishes the round and
    /// freezes the elapsed time at `now`.
    pub fn place_word(
        &mut self,
        word: &str,
        target: Category,
        now: Instant,
    ) -> Option<PlacementOutcome> {
        if self.phase != RoundPhase::Active {
            tracing::debug!(word, "placement ignored: no active round");
            return None;
        }

        let Some(outcome) = attempt(
            &mut self.pending,
            &mut self.baskets,
            &mut self.score,
            word,
            target,
        ) else {
            tracing::debug!(word, basket = target.as_str(), "placement ignored");
            return None;
        };

        tracing::debug!(word, basket = target.as_str(), ?outcome, "placement judged");

        if self.pending.is_empty() {
            self.tick(now);
            self.phase = RoundPhase::Finished;
            tracing::info!(
                correct = self.score.correct,
                incorrect = self.score.incorrect,
                seconds = self.elapsed_seconds(),
                "round finished"
            );
        }

        Some(outcome)
    }

    /// Return to `NotStarted` from any phase, dropping all round data
    pub fn restart(&mut self) {
        *self = Self::default();
    }

    #[inline]
    #[must_use]
    pub const fn phase(&self) -> RoundPhase {
        self.phase
    }

    #[inline]
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.phase == RoundPhase::Active
    }

    /// Words not yet sorted, in display order
    #[inline]
    #[must_use]
    pub fn pending(&self) -> &[WordEntry] {
        &self.pending
    }

    /// Find a pending word by text
    #[must_use]
    pub fn pending_word(&self, text: &str) -> Option<&WordEntry> {
        self.pending.iter().find(|w| w.text() == text)
    }

    #[inline]
    #[must_use]
    pub const fn baskets(&self) -> &Baskets {
        &self.baskets
    }

    #[inline]
    #[must_use]
    pub const fn score(&self) -> Score {
        self.score
    }

    /// Size of the word set the round started with
    #[inline]
    #[must_use]
    pub const fn word_count(&self) -> usize {
        self.word_count
    }

    /// Elapsed time as of the last tick (frozen once finished)
    #[inline]
    #[must_use]
    pub const fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Whole seconds elapsed, rounded down
    #[inline]
    #[must_use]
    pub const fn elapsed_seconds(&self) -> u64 {
        self.elapsed.as_secs()
    }
}
