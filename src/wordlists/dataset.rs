//! The category → words mapping a round draws from

use super::embedded::{WHAT, WHERE, WHO};
use crate::core::{Category, WordEntry};
use rustc_hash::FxHashSet;
use std::io;
use thiserror::Error;

/// Errors raised while building or loading a dataset
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read word list: {0}")]
    Io(#[from] io::Error),
    #[error("line {line}: unknown category '{token}'")]
    UnknownCategory { line: usize, token: String },
    #[error("line {line}: word '{word}' has no category (use `[who]` or `who: {word}`)")]
    MissingCategory { line: usize, word: String },
    #[error("word list contains no words")]
    Empty,
}

/// Read-only mapping from category to an ordered list of unique words
///
/// Words are trimmed and lowercased. A word's text appears at most once in the
/// whole dataset, so text alone identifies a word during a round.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    words: [Vec<String>; Category::COUNT],
}

impl Dataset {
    /// Build a dataset from per-category word lists
    ///
    /// Duplicates are dropped, first occurrence wins (categories are visited in
    /// [`Category::ALL`] order).
    ///
    /// # Errors
    ///
    /// Returns [`DatasetError::Empty`] if no category ends up with a word.
    ///
    /// # Examples
    /// ```
    /// use word_baskets::core::Category;
    /// use word_baskets::wordlists::Dataset;
    ///
    /// let dataset = Dataset::new([
    ///     (Category::Who, vec!["Alice"]),
    ///     (Category::What, vec!["apple", "rock"]),
    ///     (Category::Where, vec!["park"]),
    /// ])
    /// .unwrap();
    ///
    /// assert_eq!(dataset.len(), 4);
    /// assert_eq!(dataset.words(Category::Who), ["alice"]);
    /// ```
    pub fn new<I, W, S>(lists: I) -> Result<Self, DatasetError>
    where
        I: IntoIterator<Item = (Category, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let dataset = Self::normalized(lists);
        if dataset.is_empty() {
            return Err(DatasetError::Empty);
        }
        Ok(dataset)
    }

    /// The word lists embedded at build time
    #[must_use]
    pub fn builtin() -> Self {
        Self::normalized([
            (Category::Who, WHO),
            (Category::What, WHAT),
            (Category::Where, WHERE),
        ])
    }

    fn normalized<I, W, S>(lists: I) -> Self
    where
        I: IntoIterator<Item = (Category, W)>,
        W: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut raw: [Vec<String>; Category::COUNT] = Default::default();
        for (category, words) in lists {
            raw[category.index()]
                .extend(words.into_iter().map(|w| w.as_ref().trim().to_lowercase()));
        }

        let mut seen: FxHashSet<String> = FxHashSet::default();
        let mut words: [Vec<String>; Category::COUNT] = Default::default();
        for category in Category::ALL {
            for word in std::mem::take(&mut raw[category.index()]) {
                if word.is_empty() {
                    continue;
                }
                if seen.insert(word.clone()) {
                    words[category.index()].push(word);
                } else {
                    tracing::warn!(
                        word = %word,
                        category = category.as_str(),
                        "dropping duplicate word"
                    );
                }
            }
        }

        Self { words }
    }

    /// Words of one category, in dataset order
    #[inline]
    #[must_use]
    pub fn words(&self, category: Category) -> &[String] {
        &self.words[category.index()]
    }

    /// Categories that have at least one word
    pub fn populated_categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL
            .into_iter()
            .filter(|&c| !self.words(c).is_empty())
    }

    /// Every word as an entry, category by category
    pub fn entries(&self) -> impl Iterator<Item = WordEntry> + '_ {
        Category::ALL.into_iter().flat_map(move |category| {
            self.words(category)
                .iter()
                .map(move |text| WordEntry::new(text.clone(), category))
        })
    }

    /// Look up the category of a word
    #[must_use]
    pub fn category_of(&self, text: &str) -> Option<Category> {
        Category::ALL
            .into_iter()
            .find(|&c| self.words(c).iter().any(|w| w == text))
    }

    /// Total number of words
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.iter().map(Vec::len).sum()
    }

    /// Whether the dataset has no words at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(Vec::is_empty)
    }
}
