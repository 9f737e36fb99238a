//! Word lists for the sorting game
//!
//! Provides the built-in dataset compiled into the binary and loading of custom datasets.

mod dataset;
mod embedded;
pub mod loader;

pub use dataset::{Dataset, DatasetError};
pub use embedded::{WHAT, WHAT_COUNT, WHERE, WHERE_COUNT, WHO, WHO_COUNT};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Category;

    #[test]
    fn counts_match_consts() {
        assert_eq!(WHO.len(), WHO_COUNT);
        assert_eq!(WHAT.len(), WHAT_COUNT);
        assert_eq!(WHERE.len(), WHERE_COUNT);
    }

    #[test]
    fn builtin_words_are_normalized() {
        for &word in WHO.iter().chain(WHAT).chain(WHERE) {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_lowercase()),
                "Word '{word}' is not lowercase"
            );
        }
    }

    #[test]
    fn builtin_has_no_duplicates() {
        let dataset = Dataset::builtin();
        assert_eq!(dataset.len(), WHO_COUNT + WHAT_COUNT + WHERE_COUNT);
    }

    #[test]
    fn builtin_covers_every_category() {
        let dataset = Dataset::builtin();
        for category in Category::ALL {
            assert!(
                dataset.words(category).len() >= 3,
                "{category} needs at least three words for a default round"
            );
        }
    }
}
