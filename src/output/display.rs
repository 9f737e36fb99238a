//! Display functions for game state and command results

use super::formatters::{create_progress_bar, format_elapsed};
use crate::commands::{DatasetSummary, SimulationResult};
use crate::core::{Category, Score};
use crate::game::GameSnapshot;
use crate::round::RoundPhase;
use colored::Colorize;
use std::io::{self, Write};

/// Print baskets, pending words and score
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_board<W: Write>(out: &mut W, view: &GameSnapshot<'_>) -> io::Result<()> {
    if view.phase == RoundPhase::NotStarted {
        return writeln!(out, "No round running. Type 'start' to begin.");
    }

    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(
        out,
        "✅ {}   ❌ {}   ⏱  {}",
        view.score.correct.to_string().green().bold(),
        view.score.incorrect.to_string().red().bold(),
        format_elapsed(view.elapsed_seconds)
    )?;

    for (index, (category, words)) in view.baskets.iter().enumerate() {
        let marker = if view.selection.category() == Some(category) {
            "▶"
        } else {
            " "
        };
        writeln!(
            out,
            "{marker} {}. 🧺 {:<7} {}",
            index + 1,
            category.label().bright_yellow().bold(),
            words.join(", ").bright_green()
        )?;
    }

    let selected = view.selection.word().map(|w| w.text());
    let chips: Vec<String> = view
        .pending
        .iter()
        .map(|w| {
            if Some(w.text()) == selected {
                format!("[{}]", w.text()).bright_white().bold().to_string()
            } else {
                w.text().to_string()
            }
        })
        .collect();
    writeln!(out, "\n   Words: {}", chips.join("  "))?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

/// Print the end-of-round totals
///
/// # Errors
///
/// Returns any error from writing to `out`.
pub fn print_round_summary<W: Write>(out: &mut W, score: Score, seconds: u64) -> io::Result<()> {
    writeln!(out, "\n{}", "═".repeat(60).bright_cyan())?;
    writeln!(
        out,
        "{}",
        "    🎉  Round complete! Every word is sorted.  🎉"
            .bright_green()
            .bold()
    )?;
    writeln!(out, "{}", "═".repeat(60).bright_cyan())?;
    writeln!(out, "   ✅ Correct:    {}", score.correct.to_string().green())?;
    writeln!(out, "   ❌ Incorrect:  {}", score.incorrect.to_string().red())?;
    writeln!(out, "   ⏱  Time:       {} ({seconds}s)", format_elapsed(seconds))?;
    writeln!(out, "   🎯 Accuracy:   {:.0}%\n", score.accuracy() * 100.0)
}

/// Print the words of each category
pub fn print_dataset(summary: &DatasetSummary) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "WORD BASKETS DATASET".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    for entry in &summary.categories {
        println!(
            "\n🧺 {} {}",
            entry.category.label().bright_yellow().bold(),
            format!("({} words)", entry.words.len()).bright_black()
        );
        if entry.words.is_empty() {
            println!("   {}", "(empty)".bright_black());
        } else {
            println!("   {}", entry.words.join(", "));
        }
    }

    println!("\n   Total: {} words", summary.total_words.to_string().bold());
}

/// Print the result of a simulation run
pub fn print_simulation_result(result: &SimulationResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "SIMULATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Rounds:".bright_cyan().bold());
    println!("   Rounds played:     {}", result.rounds);
    println!("   Words sorted:      {}", result.words_sorted);
    println!(
        "   Accuracy:          {}",
        format!("{:.1}%", result.accuracy * 100.0).bright_yellow().bold()
    );
    println!(
        "   Avg mistakes:      {}",
        format!("{:.2}", result.average_incorrect).yellow()
    );
    println!(
        "   Fewest / most:     {} / {}",
        result.min_incorrect.to_string().green(),
        result.max_incorrect.to_string().red()
    );
    println!(
        "   Avg round time:    {}",
        format_elapsed(result.average_seconds.round() as u64)
    );
    println!("   Wall time:         {:.2}s", result.duration.as_secs_f64());

    println!("\n📈 {}", "Mistakes per round:".bright_cyan().bold());
    let mut buckets: Vec<(u32, usize)> = result
        .mistake_distribution
        .iter()
        .map(|(&k, &v)| (k, v))
        .collect();
    buckets.sort_unstable();
    for (mistakes, count) in buckets {
        let pct = count as f64 / result.rounds.max(1) as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {mistakes:>3}: {} {count:5} ({pct:5.1}%)", bar.green());
    }
}

/// Short label for a basket hint line, e.g. `1 Who?  2 What?  3 Where?`
#[must_use]
pub fn basket_hint() -> String {
    Category::ALL
        .iter()
        .enumerate()
        .map(|(i, c)| format!("{} {}", i + 1, c.label()))
        .collect::<Vec<_>>()
        .join("  ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;
    use crate::interaction::{InputMode, Selection};
    use crate::round::Baskets;

    #[test]
    fn board_lists_pending_words() {
        let pending = vec![
            WordEntry::new("alice", Category::Who),
            WordEntry::new("park", Category::Where),
        ];
        let baskets = Baskets::default();
        let selection = Selection::default();
        let view = GameSnapshot {
            phase: RoundPhase::Active,
            pending: &pending,
            baskets: &baskets,
            score: Score::ZERO,
            elapsed_seconds: 65,
            selection: &selection,
            dragging: None,
            input_mode: InputMode::Tap,
        };

        let mut out = Vec::new();
        print_board(&mut out, &view).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("alice"));
        assert!(text.contains("park"));
        assert!(text.contains("1:05"));
    }

    #[test]
    fn board_before_start_prompts() {
        let baskets = Baskets::default();
        let selection = Selection::default();
        let view = GameSnapshot {
            phase: RoundPhase::NotStarted,
            pending: &[],
            baskets: &baskets,
            score: Score::ZERO,
            elapsed_seconds: 0,
            selection: &selection,
            dragging: None,
            input_mode: InputMode::Tap,
        };

        let mut out = Vec::new();
        print_board(&mut out, &view).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("No round running"));
    }

    #[test]
    fn summary_reports_totals() {
        let mut out = Vec::new();
        print_round_summary(&mut out, Score { correct: 9, incorrect: 3 }, 42).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Round complete"));
        assert!(text.contains("0:42"));
        assert!(text.contains("75%"));
    }

    #[test]
    fn basket_hint_numbers_baskets() {
        assert_eq!(basket_hint(), "1 Who?  2 What?  3 Where?");
    }
}
