//! Word entries
//!
//! A `WordEntry` pairs a word's text with the category it belongs to.

use super::Category;
use std::fmt;

/// A word drawn from the dataset together with its category
///
/// Immutable once drawn into a round. The text is the word's identity within a dataset.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WordEntry {
    text: String,
    category: Category,
}

impl WordEntry {
    /// Create a new entry
    ///
    /// The text is stored as given; normalization happens when a dataset is built.
    ///
    /// # Examples
    /// ```
    /// use word_baskets::core::{Category, WordEntry};
    ///
    /// let word = WordEntry::new("apple", Category::What);
    /// assert_eq!(word.text(), "apple");
    /// assert!(word.belongs_to(Category::What));
    /// ```
    pub fn new(text: impl Into<String>, category: Category) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    /// Get the word as a string slice
    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the word's category
    #[inline]
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Check whether this word goes in the given basket
    #[inline]
    #[must_use]
    pub fn belongs_to(&self, category: Category) -> bool {
        self.category == category
    }
}

impl fmt::Display for WordEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}
