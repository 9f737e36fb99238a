//! Game configuration
//!
//! Resolved settings handed from the command line to the game.

use crate::interaction::InputMode;

/// Default round size: three words per category
pub const DEFAULT_WORD_COUNT: usize = 9;

/// Largest round the command line accepts
pub const MAX_WORD_COUNT: usize = 200;

/// How the input protocol is chosen
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum InputPreference {
    /// Drag when the terminal supports mouse capture, tap otherwise
    #[default]
    Auto,
    /// Always drag with the mouse
    Drag,
    /// Always select with the keyboard
    Tap,
}

impl InputPreference {
    /// Settle on an input mode given the device capability
    #[must_use]
    pub const fn resolve(self, supports_drag: bool) -> InputMode {
        match self {
            Self::Auto => InputMode::from_capability(supports_drag),
            Self::Drag => InputMode::Drag,
            Self::Tap => InputMode::Tap,
        }
    }
}

/// Settings for a game session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Words drawn per round
    pub word_count: usize,
    pub input: InputPreference,
    /// Fixed seed for reproducible rounds
    pub seed: Option<u64>,
    /// Ring the terminal bell on placements
    pub sound: bool,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            input: InputPreference::Auto,
            seed: None,
            sound: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_follows_capability() {
        assert_eq!(InputPreference::Auto.resolve(true), InputMode::Drag);
        assert_eq!(InputPreference::Auto.resolve(false), InputMode::Tap);
    }

    #[test]
    fn explicit_preference_wins() {
        assert_eq!(InputPreference::Tap.resolve(true), InputMode::Tap);
        assert_eq!(InputPreference::Drag.resolve(false), InputMode::Drag);
    }

    #[test]
    fn default_round_is_three_per_category() {
        assert_eq!(GameConfig::default().word_count, 9);
    }
}
