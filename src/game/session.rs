//! Game session: the boundary the presentation layer talks to

use super::timer::TickSchedule;
use crate::config::GameConfig;
use crate::core::{Category, Score, WordEntry};
use crate::interaction::{
    DropTarget, InputEvent, InputMode, InteractionAdapter, PlacementRequest, Selection,
};
use crate::round::{Baskets, PlacementOutcome, RoundPhase, RoundState, build_pool};
use crate::wordlists::Dataset;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::time::{Duration, Instant};

/// Read-only view of everything the presentation layer renders
#[derive(Debug, Clone, Copy)]
pub struct GameSnapshot<'a> {
    pub phase: RoundPhase,
    pub pending: &'a [WordEntry],
    pub baskets: &'a Baskets,
    pub score: Score,
    pub elapsed_seconds: u64,
    pub selection: &'a Selection,
    pub dragging: Option<&'a str>,
    pub input_mode: InputMode,
}

/// One player's game: dataset, current round, input protocol and round clock
///
/// Every command is a no-op when it does not apply to the current phase. Commands that
/// can judge a placement return the outcome so the caller can play feedback.
///
/// # Examples
/// ```
/// use std::time::Instant;
/// use word_baskets::core::Category;
/// use word_baskets::game::Game;
/// use word_baskets::interaction::InputMode;
/// use word_baskets::round::{PlacementOutcome, RoundPhase};
/// use word_baskets::wordlists::Dataset;
///
/// let dataset = Dataset::new([(Category::Who, vec!["alice"])]).unwrap();
/// let mut game = Game::new(dataset, InputMode::Tap, Some(1));
/// let now = Instant::now();
///
/// game.start(1, now);
/// game.select_word("alice");
/// game.select_category(Category::Who);
/// assert_eq!(game.confirm_selection(now), Some(PlacementOutcome::Correct));
/// assert_eq!(game.snapshot().phase, RoundPhase::Finished);
/// ```
#[derive(Debug, Clone)]
pub struct Game {
    dataset: Dataset,
    round: RoundState,
    input: InteractionAdapter,
    ticker: TickSchedule,
    rng: StdRng,
}

impl Game {
    /// Create a game; `seed` fixes the word draws for reproducible rounds
    #[must_use]
    pub fn new(dataset: Dataset, mode: InputMode, seed: Option<u64>) -> Self {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self {
            dataset,
            round: RoundState::new(),
            input: InteractionAdapter::new(mode),
            ticker: TickSchedule::new(),
            rng,
        }
    }

    /// Create a game from session settings and the device's drag capability
    #[must_use]
    pub fn from_config(dataset: Dataset, config: &GameConfig, supports_drag: bool) -> Self {
        Self::new(dataset, config.input.resolve(supports_drag), config.seed)
    }

    /// Draw `requested_count` words and begin a round
    ///
    /// Ignored while a round is active. Returns whether a round started.
    pub fn start(&mut self, requested_count: usize, now: Instant) -> bool {
        if self.round.is_active() {
            tracing::debug!("start ignored: round already active");
            return false;
        }

        let words = match build_pool(&self.dataset, requested_count, &mut self.rng) {
            Ok(words) => words,
            Err(e) => {
                tracing::warn!(error = %e, requested_count, "cannot build word pool");
                return false;
            }
        };

        self.input.reset();
        let started = self.round.start(words, now);
        self.sync_ticker(now);
        started
    }

    /// Place a word directly, the canonical placement call
    pub fn attempt_place(
        &mut self,
        word: &str,
        category: Category,
        now: Instant,
    ) -> Option<PlacementOutcome> {
        self.apply(
            PlacementRequest {
                word: word.to_string(),
                category,
            },
            now,
        )
    }

    /// Drag protocol: pick up a pending word
    pub fn drag_start(&mut self, word: &str) {
        if self.round.pending_word(word).is_some() {
            self.input.handle(InputEvent::DragStart(word.to_string()));
        }
    }

    /// Drag protocol: release the dragged word
    pub fn drop_on(&mut self, target: DropTarget, now: Instant) -> Option<PlacementOutcome> {
        let request = self.input.handle(InputEvent::Drop(target))?;
        self.apply(request, now)
    }

    /// Tap protocol: select a pending word, replacing any earlier selection
    pub fn select_word(&mut self, word: &str) {
        if let Some(entry) = self.round.pending_word(word) {
            let entry = entry.clone();
            self.input.handle(InputEvent::TapWord(entry));
        }
    }

    /// Tap protocol: select the target basket
    pub fn select_category(&mut self, category: Category) {
        if self.round.is_active() {
            self.input.handle(InputEvent::TapBasket(category));
        }
    }

    /// Tap protocol: place the selected word in the selected basket
    pub fn confirm_selection(&mut self, now: Instant) -> Option<PlacementOutcome> {
        let request = self.input.handle(InputEvent::Confirm)?;
        self.apply(request, now)
    }

    /// Tap protocol: drop the selection
    pub fn cancel_selection(&mut self) {
        self.input.handle(InputEvent::Cancel);
    }

    /// Abandon the round and return to the start screen
    pub fn restart(&mut self) {
        self.round.restart();
        self.input.reset();
        if self.ticker.cancel() {
            tracing::debug!("tick schedule torn down on restart");
        }
    }

    /// Refresh the round clock if a tick is due; returns whether it ticked
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.ticker.fire(now) {
            return false;
        }
        self.round.tick(now);
        true
    }

    /// How long the event loop may wait before the next tick
    #[must_use]
    pub fn next_tick_in(&self, now: Instant) -> Option<Duration> {
        self.ticker.time_until(now)
    }

    /// Current state for rendering
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot<'_> {
        GameSnapshot {
            phase: self.round.phase(),
            pending: self.round.pending(),
            baskets: self.round.baskets(),
            score: self.round.score(),
            elapsed_seconds: self.round.elapsed_seconds(),
            selection: self.input.selection(),
            dragging: self.input.dragging(),
            input_mode: self.input.mode(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn round(&self) -> &RoundState {
        &self.round
    }

    #[inline]
    #[must_use]
    pub const fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    #[inline]
    #[must_use]
    pub const fn input_mode(&self) -> InputMode {
        self.input.mode()
    }

    #[inline]
    #[must_use]
    pub const fn ticker(&self) -> &TickSchedule {
        &self.ticker
    }

    fn apply(&mut self, request: PlacementRequest, now: Instant) -> Option<PlacementOutcome> {
        let outcome = self
            .round
            .place_word(&request.word, request.category, now);

        if outcome == Some(PlacementOutcome::Correct)
            && self
                .input
                .selection()
                .word()
                .is_some_and(|w| w.text() == request.word)
        {
            self.input.reset();
        }

        self.sync_ticker(now);
        outcome
    }

    /// Keep exactly one schedule while active and none otherwise
    fn sync_ticker(&mut self, now: Instant) {
        if self.round.is_active() {
            self.ticker.arm(now);
        } else if self.ticker.cancel() {
            tracing::debug!(phase = ?self.round.phase(), "tick schedule torn down");
        }
    }
}
