//! Word pool builder
//!
//! Draws the words for one round, balanced across categories.
//!
//! # Algorithm
//! 1. `per_category = ceil(requested / categories)`
//! 2. From each category, a uniform sample of up to `per_category` words (all of them if fewer)
//! 3. Top up from the rest of the dataset until `requested` is reached or the dataset runs out
//! 4. Shuffle the whole selection so category order is not positional, then cap at `requested`

use crate::core::{Category, WordEntry};
use crate::wordlists::Dataset;
use rand::Rng;
use rand::seq::{IndexedRandom, SliceRandom};
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Reasons a pool cannot be built
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PoolError {
    #[error("requested word count must be positive")]
    ZeroCount,
    #[error("dataset has no words")]
    EmptyDataset,
}

/// Build a randomized word set for a round
///
/// Never returns the same word twice and never more than `requested` words. If the
/// dataset holds fewer words than requested, every word is returned.
///
/// The dataset is only read; sampling works on copies.
///
/// # Errors
///
/// Returns [`PoolError::ZeroCount`] if `requested` is 0, [`PoolError::EmptyDataset`]
/// if there is nothing to draw from.
///
/// # Examples
/// ```
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
/// use word_baskets::core::Category;
/// use word_baskets::round::build_pool;
/// use word_baskets::wordlists::Dataset;
///
/// let dataset = Dataset::builtin();
/// let mut rng = StdRng::seed_from_u64(7);
/// let pool = build_pool(&dataset, 9, &mut rng).unwrap();
///
/// assert_eq!(pool.len(), 9);
/// for category in Category::ALL {
///     assert_eq!(pool.iter().filter(|w| w.belongs_to(category)).count(), 3);
/// }
/// ```
pub fn build_pool<R: Rng + ?Sized>(
    dataset: &Dataset,
    requested: usize,
    rng: &mut R,
) -> Result<Vec<WordEntry>, PoolError> {
    if requested == 0 {
        return Err(PoolError::ZeroCount);
    }
    if dataset.is_empty() {
        return Err(PoolError::EmptyDataset);
    }

    let per_category = requested.div_ceil(Category::COUNT);

    let mut selection: Vec<WordEntry> = Vec::with_capacity(requested.min(dataset.len()));
    for category in dataset.populated_categories() {
        let words = dataset.words(category);
        selection.extend(
            words
                .choose_multiple(rng, per_category)
                .map(|text| WordEntry::new(text.clone(), category)),
        );
    }

    if selection.len() < requested {
        let chosen: FxHashSet<&str> = selection.iter().map(WordEntry::text).collect();
        let mut remainder: Vec<WordEntry> = dataset
            .entries()
            .filter(|entry| !chosen.contains(entry.text()))
            .collect();
        remainder.shuffle(rng);
        remainder.truncate(requested - selection.len());
        selection.extend(remainder);
    }

    selection.shuffle(rng);
    selection.truncate(requested);
    Ok(selection)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn scenario_dataset() -> Dataset {
        Dataset::new([
            (Category::Who, vec!["alice"]),
            (Category::What, vec!["apple", "rock"]),
            (Category::Where, vec!["park"]),
        ])
        .unwrap()
    }

    fn texts(pool: &[WordEntry]) -> Vec<&str> {
        let mut texts: Vec<&str> = pool.iter().map(WordEntry::text).collect();
        texts.sort_unstable();
        texts
    }

    #[test]
    fn returns_every_word_once_when_count_matches_dataset() {
        let dataset = scenario_dataset();
        let mut rng = StdRng::seed_from_u64(1);
        let pool = build_pool(&dataset, 4, &mut rng).unwrap();

        assert_eq!(texts(&pool), vec!["alice", "apple", "park", "rock"]);
    }

    #[test]
    fn categories_travel_with_words() {
        let dataset = scenario_dataset();
        let mut rng = StdRng::seed_from_u64(2);
        for entry in build_pool(&dataset, 4, &mut rng).unwrap() {
            assert_eq!(dataset.category_of(entry.text()), Some(entry.category()));
        }
    }

    #[test]
    fn order_is_randomized() {
        let dataset = Dataset::builtin();
        let orders: FxHashSet<Vec<String>> = (0..20)
            .map(|seed| {
                let mut rng = StdRng::seed_from_u64(seed);
                build_pool(&dataset, 9, &mut rng)
                    .unwrap()
                    .into_iter()
                    .map(|w| w.text().to_string())
                    .collect()
            })
            .collect();
        assert!(orders.len() > 1);
    }

    #[test]
    fn degrades_to_dataset_size() {
        let dataset = scenario_dataset();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = build_pool(&dataset, 50, &mut rng).unwrap();
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn huge_count_returns_whole_dataset() {
        let dataset = Dataset::builtin();
        let mut rng = StdRng::seed_from_u64(9);
        let pool = build_pool(&dataset, usize::MAX, &mut rng).unwrap();
        assert_eq!(pool.len(), dataset.len());
    }

    #[test]
    fn missing_category_is_skipped() {
        let dataset = Dataset::new([(Category::What, vec!["apple", "rock", "cup"])]).unwrap();
        let mut rng = StdRng::seed_from_u64(10);
        let pool = build_pool(&dataset, 3, &mut rng).unwrap();
        assert_eq!(texts(&pool), vec!["apple", "cup", "rock"]);
    }

    #[test]
    fn tops_up_from_other_categories() {
        // per_category = 2, WHO and WHERE can only give 1 each, WHAT has plenty
        let dataset = Dataset::new([
            (Category::Who, vec!["alice"]),
            (Category::What, vec!["apple", "rock", "cup", "spoon", "kite"]),
            (Category::Where, vec!["park"]),
        ])
        .unwrap();
        let mut rng = StdRng::seed_from_u64(4);
        let pool = build_pool(&dataset, 6, &mut rng).unwrap();

        assert_eq!(pool.len(), 6);
        assert_eq!(pool.iter().filter(|w| w.belongs_to(Category::What)).count(), 4);
        let unique: FxHashSet<&str> = pool.iter().map(WordEntry::text).collect();
        assert_eq!(unique.len(), 6);
    }

    #[test]
    fn never_exceeds_requested() {
        let dataset = Dataset::builtin();
        for requested in 1..=12 {
            let mut rng = StdRng::seed_from_u64(requested as u64);
            let pool = build_pool(&dataset, requested, &mut rng).unwrap();
            assert_eq!(pool.len(), requested);
        }
    }

    #[test]
    fn no_duplicates_for_large_requests() {
        let dataset = Dataset::builtin();
        let mut rng = StdRng::seed_from_u64(5);
        let pool = build_pool(&dataset, dataset.len(), &mut rng).unwrap();
        let unique: FxHashSet<&str> = pool.iter().map(WordEntry::text).collect();
        assert_eq!(unique.len(), dataset.len());
    }

    #[test]
    fn zero_count_rejected() {
        let mut rng = StdRng::seed_from_u64(6);
        assert_eq!(
            build_pool(&scenario_dataset(), 0, &mut rng),
            Err(PoolError::ZeroCount)
        );
    }

    #[test]
    fn dataset_is_not_mutated() {
        let dataset = scenario_dataset();
        let before = dataset.clone();
        let mut rng = StdRng::seed_from_u64(8);
        let _ = build_pool(&dataset, 3, &mut rng).unwrap();
        assert_eq!(dataset, before);
    }
}
