//! Per-category containers of correctly placed words

use crate::core::Category;

/// The three baskets of a round
///
/// Each basket holds word texts in placement order and only grows during a round.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Baskets {
    contents: [Vec<String>; Category::COUNT],
}

impl Baskets {
    /// Words placed in one basket, oldest first
    #[inline]
    #[must_use]
    pub fn get(&self, category: Category) -> &[String] {
        &self.contents[category.index()]
    }

    /// Whether a basket already holds the given word
    #[must_use]
    pub fn contains(&self, category: Category, text: &str) -> bool {
        self.get(category).iter().any(|w| w == text)
    }

    /// Number of words across all baskets
    #[must_use]
    pub fn total(&self) -> usize {
        self.contents.iter().map(Vec::len).sum()
    }

    /// Whether every basket is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contents.iter().all(Vec::is_empty)
    }

    /// Iterate over `(category, words)` in display order
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[String])> {
        Category::ALL.into_iter().map(|c| (c, self.get(c)))
    }

    pub(crate) fn push(&mut self, category: Category, text: String) {
        self.contents[category.index()].push(text);
    }

    pub(crate) fn clear(&mut self) {
        for basket in &mut self.contents {
            basket.clear();
        }
    }
}
