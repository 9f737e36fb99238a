//! Placement arbiter
//!
//! Validates a proposed (word, basket) pair and applies the result. The arbiter does no
//! I/O: success and failure feedback is signalled through the returned outcome.

use super::Baskets;
use crate::core::{Category, Score, WordEntry};

/// Result of a placement attempt that was accepted for judging
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlacementOutcome {
    /// The word matched the basket and moved into it
    Correct,
    /// Category mismatch; the word stays pending for another try
    Incorrect,
}

impl PlacementOutcome {
    #[inline]
    #[must_use]
    pub const fn is_correct(self) -> bool {
        matches!(self, Self::Correct)
    }
}

/// Judge one placement attempt
///
/// Returns `None` without touching anything when `word` is not pending, or when the
/// target basket already holds that text. Otherwise:
/// - **Correct**: the word leaves `pending`, its text is appended to the basket, `correct += 1`
/// - **Incorrect**: `pending` and `baskets` are unchanged, `incorrect += 1`
///
/// # Examples
/// ```
/// use word_baskets::core::{Category, Score, WordEntry};
/// use word_baskets::round::{attempt, Baskets, PlacementOutcome};
///
/// let mut pending = vec![WordEntry::new("alice", Category::Who)];
/// let mut baskets = Baskets::default();
/// let mut score = Score::ZERO;
///
/// let outcome = attempt(&mut pending, &mut baskets, &mut score, "alice", Category::What);
/// assert_eq!(outcome, Some(PlacementOutcome::Incorrect));
/// assert_eq!(pending.len(), 1);
///
/// let outcome = attempt(&mut pending, &mut baskets, &mut score, "alice", Category::Who);
/// assert_eq!(outcome, Some(PlacementOutcome::Correct));
/// assert!(pending.is_empty());
/// assert_eq!(score, Score { correct: 1, incorrect: 1 });
/// ```
pub fn attempt(
    pending: &mut Vec<WordEntry>,
    baskets: &mut Baskets,
    score: &mut Score,
    word: &str,
    target: Category,
) -> Option<PlacementOutcome> {
    let position = pending.iter().position(|w| w.text() == word)?;

    if baskets.contains(target, word) {
        return None;
    }

    if pending[position].belongs_to(target) {
        let entry = pending.remove(position);
        baskets.push(target, entry.text().to_string());
        score.correct += 1;
        Some(PlacementOutcome::Correct)
    } else {
        score.incorrect += 1;
        Some(PlacementOutcome::Incorrect)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup() -> (Vec<WordEntry>, Baskets, Score) {
        let pending = vec![
            WordEntry::new("alice", Category::Who),
            WordEntry::new("apple", Category::What),
            WordEntry::new("park", Category::Where),
        ];
        (pending, Baskets::default(), Score::ZERO)
    }

    #[test]
    fn correct_moves_word_into_basket() {
        let (mut pending, mut baskets, mut score) = setup();

        let outcome = attempt(&mut pending, &mut baskets, &mut score, "apple", Category::What);

        assert_eq!(outcome, Some(PlacementOutcome::Correct));
        assert_eq!(baskets.get(Category::What), ["apple"]);
        assert!(pending.iter().all(|w| w.text() != "apple"));
        assert_eq!(score, Score { correct: 1, incorrect: 0 });
    }

    #[test]
    fn correct_keeps_remaining_order() {
        let (mut pending, mut baskets, mut score) = setup();
        attempt(&mut pending, &mut baskets, &mut score, "apple", Category::What);

        let remaining: Vec<&str> = pending.iter().map(WordEntry::text).collect();
        assert_eq!(remaining, vec!["alice", "park"]);
    }

    #[test]
    fn incorrect_leaves_word_pending() {
        let (mut pending, mut baskets, mut score) = setup();
        let before = pending.clone();

        let outcome = attempt(&mut pending, &mut baskets, &mut score, "park", Category::Who);

        assert_eq!(outcome, Some(PlacementOutcome::Incorrect));
        assert_eq!(pending, before);
        assert!(baskets.is_empty());
        assert_eq!(score, Score { correct: 0, incorrect: 1 });
    }

    #[test]
    fn incorrect_can_be_retried_without_limit() {
        let (mut pending, mut baskets, mut score) = setup();
        for _ in 0..10 {
            attempt(&mut pending, &mut baskets, &mut score, "park", Category::What);
        }
        assert_eq!(score.incorrect, 10);

        let outcome = attempt(&mut pending, &mut baskets, &mut score, "park", Category::Where);
        assert_eq!(outcome, Some(PlacementOutcome::Correct));
    }

    #[test]
    fn unknown_word_is_ignored() {
        let (mut pending, mut baskets, mut score) = setup();
        let before = pending.clone();

        let outcome = attempt(&mut pending, &mut baskets, &mut score, "rock", Category::What);

        assert_eq!(outcome, None);
        assert_eq!(pending, before);
        assert_eq!(score, Score::ZERO);
    }

    #[test]
    fn second_placement_of_same_word_is_ignored() {
        let (mut pending, mut baskets, mut score) = setup();
        attempt(&mut pending, &mut baskets, &mut score, "alice", Category::Who);
        let snapshot = (pending.clone(), baskets.clone(), score);

        let outcome = attempt(&mut pending, &mut baskets, &mut score, "alice", Category::Who);

        assert_eq!(outcome, None);
        assert_eq!((pending, baskets, score), snapshot);
    }

    #[test]
    fn duplicate_text_in_basket_is_ignored() {
        // Stale pending entry whose text already sits in the target basket
        let mut pending = vec![WordEntry::new("alice", Category::Who)];
        let mut baskets = Baskets::default();
        baskets.push(Category::Who, "alice".to_string());
        let mut score = Score::ZERO;

        let outcome = attempt(&mut pending, &mut baskets, &mut score, "alice", Category::Who);

        assert_eq!(outcome, None);
        assert_eq!(pending.len(), 1);
        assert_eq!(baskets.total(), 1);
        assert_eq!(score, Score::ZERO);
    }

    #[test]
    fn outcome_is_correct_flag() {
        assert!(PlacementOutcome::Correct.is_correct());
        assert!(!PlacementOutcome::Incorrect.is_correct());
    }
}
