//! Placement feedback sounds
//!
//! Fire-and-forget success and failure cues. The game never waits on them.

use crate::round::PlacementOutcome;
use std::io::{self, Write};

/// Sink for success and failure cues
pub trait Feedback {
    fn play_success(&mut self);
    fn play_failure(&mut self);

    /// Play the cue matching a placement outcome
    fn play(&mut self, outcome: PlacementOutcome) {
        match outcome {
            PlacementOutcome::Correct => self.play_success(),
            PlacementOutcome::Incorrect => self.play_failure(),
        }
    }
}

/// Terminal bell: one ring for success, two for failure
pub struct TerminalBell<W: Write> {
    out: W,
}

impl TerminalBell<io::Stdout> {
    #[must_use]
    pub fn stdout() -> Self {
        Self { out: io::stdout() }
    }
}

impl<W: Write> TerminalBell<W> {
    pub const fn new(out: W) -> Self {
        Self { out }
    }

    fn ring(&mut self, times: usize) {
        let bells = "\x07".repeat(times);
        if let Err(e) = self
            .out
            .write_all(bells.as_bytes())
            .and_then(|()| self.out.flush())
        {
            tracing::trace!(error = %e, "terminal bell failed");
        }
    }
}

impl<W: Write> Feedback for TerminalBell<W> {
    fn play_success(&mut self) {
        self.ring(1);
    }

    fn play_failure(&mut self) {
        self.ring(2);
    }
}

/// Feedback that plays nothing
#[derive(Debug, Default, Clone, Copy)]
pub struct Silent;

impl Feedback for Silent {
    fn play_success(&mut self) {}
    fn play_failure(&mut self) {}
}

/// Pick the feedback sink for a session
#[must_use]
pub fn for_sound(enabled: bool) -> Box<dyn Feedback> {
    if enabled {
        Box::new(TerminalBell::stdout())
    } else {
        Box::new(Silent)
    }
}
