//! Discrete tap protocol
//!
//! Tap a word, tap a basket, then confirm. Used where drag is unavailable.

use super::PlacementRequest;
use crate::core::{Category, WordEntry};

/// Word and basket picked so far in the tap protocol
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Selection {
    word: Option<WordEntry>,
    category: Option<Category>,
}

impl Selection {
    /// Select a word, replacing any earlier choice
    pub fn select_word(&mut self, word: WordEntry) {
        self.word = Some(word);
    }

    /// Select a basket; ignored until a word is selected
    pub fn select_category(&mut self, category: Category) {
        if self.word.is_some() {
            self.category = Some(category);
        }
    }

    /// Confirm is enabled only with both a word and a basket chosen
    #[must_use]
    pub const fn can_confirm(&self) -> bool {
        self.word.is_some() && self.category.is_some()
    }

    /// Turn the selection into a placement request and clear it
    ///
    /// Returns `None` (and keeps the selection) if confirm is not enabled.
    pub fn confirm(&mut self) -> Option<PlacementRequest> {
        if !self.can_confirm() {
            return None;
        }
        let word = self.word.take()?;
        let category = self.category.take()?;
        Some(PlacementRequest {
            word: word.text().to_string(),
            category,
        })
    }

    /// Drop the selection without placing anything
    pub fn cancel(&mut self) {
        self.word = None;
        self.category = None;
    }

    #[must_use]
    pub const fn word(&self) -> Option<&WordEntry> {
        self.word.as_ref()
    }

    #[must_use]
    pub const fn category(&self) -> Option<Category> {
        self.category
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.word.is_none() && self.category.is_none()
    }
}
