//! Simple interactive CLI mode
//!
//! Line-based play without the TUI. Uses the tap protocol: select a word, pick a basket,
//! confirm. `place` is a shortcut that does all three at once.

use crate::core::Category;
use crate::feedback::Feedback;
use crate::game::Game;
use crate::output::formatters::outcome_symbol;
use crate::output::{print_board, print_round_summary};
use crate::round::RoundPhase;
use anyhow::Result;
use std::io::{BufRead, Write};
use std::time::Instant;

/// A parsed line of input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimpleCommand {
    Start,
    Select(String),
    Basket(Category),
    Confirm,
    Cancel,
    Place(String, Category),
    Show,
    Restart,
    Help,
    Quit,
}

impl SimpleCommand {
    /// Parse one input line
    ///
    /// # Examples
    /// ```
    /// use word_baskets::commands::SimpleCommand;
    /// use word_baskets::core::Category;
    ///
    /// assert_eq!(SimpleCommand::parse("s apple"), Some(SimpleCommand::Select("apple".into())));
    /// assert_eq!(SimpleCommand::parse("b what"), Some(SimpleCommand::Basket(Category::What)));
    /// assert_eq!(SimpleCommand::parse("2"), Some(SimpleCommand::Basket(Category::What)));
    /// assert_eq!(SimpleCommand::parse("dance"), None);
    /// ```
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let mut parts = line.split_whitespace();
        let head = parts.next()?.to_lowercase();
        let arg = parts.next();

        match (head.as_str(), arg) {
            ("start" | "new" | "n", None) => Some(Self::Start),
            ("select" | "s", Some(word)) => Some(Self::Select(word.to_lowercase())),
            ("basket" | "b", Some(tag)) => Category::from_str(tag).map(Self::Basket),
            ("1" | "2" | "3", None) => basket_by_number(&head).map(Self::Basket),
            ("confirm" | "ok" | "c", None) => Some(Self::Confirm),
            ("cancel" | "x", None) => Some(Self::Cancel),
            ("place" | "p", Some(word)) => {
                let category = Category::from_str(parts.next()?)?;
                Some(Self::Place(word.to_lowercase(), category))
            }
            ("show" | "ls", None) => Some(Self::Show),
            ("restart" | "r", None) => Some(Self::Restart),
            ("help" | "h" | "?", None) => Some(Self::Help),
            ("quit" | "q" | "exit", None) => Some(Self::Quit),
            _ => None,
        }
    }
}

fn basket_by_number(digit: &str) -> Option<Category> {
    let index: usize = digit.parse().ok()?;
    Category::ALL.get(index.checked_sub(1)?).copied()
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple<R: BufRead, W: Write>(
    game: &mut Game,
    word_count: usize,
    feedback: &mut dyn Feedback,
    input: R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║              Word Baskets - Who? What? Where?                ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;
    print_help(out)?;

    game.start(word_count, Instant::now());
    print_board(out, &game.snapshot())?;

    for line in input.lines() {
        let line = line?;
        let now = Instant::now();
        game.tick(now);

        let Some(command) = SimpleCommand::parse(&line) else {
            if !line.trim().is_empty() {
                writeln!(out, "❓ Unknown command. Type 'help' for the list.")?;
            }
            continue;
        };

        let outcome = match command {
            SimpleCommand::Quit => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            SimpleCommand::Help => {
                print_help(out)?;
                continue;
            }
            SimpleCommand::Show => None,
            SimpleCommand::Start => {
                if game.snapshot().phase == RoundPhase::Active {
                    writeln!(out, "A round is already running. Use 'restart' first.")?;
                    continue;
                }
                game.start(word_count, now);
                None
            }
            SimpleCommand::Restart => {
                game.restart();
                writeln!(out, "🔄 Restarted. Type 'start' for a new round.")?;
                continue;
            }
            SimpleCommand::Select(word) => {
                if game.round().pending_word(&word).is_none() {
                    writeln!(out, "'{word}' is not waiting to be sorted.")?;
                    continue;
                }
                game.select_word(&word);
                None
            }
            SimpleCommand::Basket(category) => {
                game.select_category(category);
                None
            }
            SimpleCommand::Confirm => {
                if !game.snapshot().selection.can_confirm() {
                    writeln!(out, "Pick a word and a basket first.")?;
                    continue;
                }
                game.confirm_selection(now)
            }
            SimpleCommand::Cancel => {
                game.cancel_selection();
                None
            }
            SimpleCommand::Place(word, category) => game.attempt_place(&word, category, now),
        };

        if let Some(outcome) = outcome {
            feedback.play(outcome);
            let verdict = if outcome.is_correct() {
                "Correct!"
            } else {
                "Not that basket, try again."
            };
            writeln!(out, "{} {verdict}", outcome_symbol(outcome))?;
        }

        let view = game.snapshot();
        if outcome.is_some() && view.phase == RoundPhase::Finished {
            print_round_summary(out, view.score, view.elapsed_seconds)?;
            writeln!(out, "Type 'start' to play again or 'quit' to exit.")?;
        } else {
            print_board(out, &view)?;
        }
    }

    Ok(())
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "Sort every word into the basket of the question it answers.\n")?;
    writeln!(out, "  select <word>        (s)  pick a word")?;
    writeln!(out, "  basket <who|what|where> (b, or 1/2/3)  pick a basket")?;
    writeln!(out, "  confirm              (c)  drop the word in the basket")?;
    writeln!(out, "  cancel               (x)  clear your choice")?;
    writeln!(out, "  place <word> <basket> (p) all of the above at once")?;
    writeln!(out, "  show, start, restart, help, quit\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::Silent;
    use crate::interaction::InputMode;
    use crate::wordlists::Dataset;
    use std::io::Cursor;

    fn alice_game() -> Game {
        let dataset = Dataset::new([
            (Category::Who, vec!["alice"]),
            (Category::Where, vec!["park"]),
        ])
        .unwrap();
        Game::new(dataset, InputMode::Tap, Some(5))
    }

    fn play(game: &mut Game, script: &str) -> String {
        let mut out = Vec::new();
        run_simple(game, 2, &mut Silent, Cursor::new(script), &mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn parse_commands() {
        assert_eq!(SimpleCommand::parse("start"), Some(SimpleCommand::Start));
        assert_eq!(SimpleCommand::parse("  QUIT "), Some(SimpleCommand::Quit));
        assert_eq!(
            SimpleCommand::parse("place Park where"),
            Some(SimpleCommand::Place("park".into(), Category::Where))
        );
        assert_eq!(SimpleCommand::parse("b kim"), Some(SimpleCommand::Basket(Category::Who)));
        assert_eq!(SimpleCommand::parse("3"), Some(SimpleCommand::Basket(Category::Where)));
    }

    #[test]
    fn parse_rejects_incomplete() {
        assert_eq!(SimpleCommand::parse(""), None);
        assert_eq!(SimpleCommand::parse("select"), None);
        assert_eq!(SimpleCommand::parse("place park"), None);
        assert_eq!(SimpleCommand::parse("basket when"), None);
        assert_eq!(SimpleCommand::parse("4"), None);
    }

    #[test]
    fn tap_sequence_sorts_words() {
        let mut game = alice_game();
        let output = play(
            &mut game,
            "select alice\nbasket who\nconfirm\ns park\n1\nc\ns park\n3\nc\n",
        );

        assert!(output.contains("Correct!"));
        assert!(output.contains("Not that basket"));
        assert!(output.contains("Round complete"));
        assert_eq!(game.snapshot().phase, RoundPhase::Finished);
        assert_eq!(game.snapshot().score.incorrect, 1);
    }

    #[test]
    fn place_shortcut_works() {
        let mut game = alice_game();
        play(&mut game, "place alice who\nplace park where\n");
        assert_eq!(game.snapshot().score.correct, 2);
    }

    #[test]
    fn confirm_needs_full_selection() {
        let mut game = alice_game();
        let output = play(&mut game, "select alice\nconfirm\n");
        assert!(output.contains("Pick a word and a basket first."));
        assert_eq!(game.snapshot().score.attempts(), 0);
    }

    #[test]
    fn quit_stops_reading() {
        let mut game = alice_game();
        let output = play(&mut game, "quit\nplace alice who\n");
        assert!(output.contains("Thanks for playing"));
        assert_eq!(game.snapshot().score.attempts(), 0);
    }

    #[test]
    fn restart_then_start() {
        let mut game = alice_game();
        play(&mut game, "place alice what\nrestart\nstart\n");
        assert_eq!(game.snapshot().phase, RoundPhase::Active);
        assert_eq!(game.snapshot().score.attempts(), 0);
    }
}
