//! Word categories
//!
//! The closed set of grammatical roles used both as a word attribute and as a basket label.

use std::fmt;

/// Grammatical category of a word: the question it answers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Category {
    /// Answers "Who?" (people)
    Who,
    /// Answers "What?" (things)
    What,
    /// Answers "Where?" (places)
    Where,
}

impl Category {
    /// All categories in basket display order
    pub const ALL: [Self; 3] = [Self::Who, Self::What, Self::Where];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Parse a category tag (case-insensitive)
    ///
    /// Accepts the English tags and the Uzbek tags of the original word market game.
    ///
    /// # Examples
    ///
    /// ```
    /// use word_baskets::core::Category;
    ///
    /// assert_eq!(Category::from_str("WHO"), Some(Category::Who));
    /// assert_eq!(Category::from_str("nima"), Some(Category::What));
    /// assert_eq!(Category::from_str("Where?"), Some(Category::Where));
    /// assert_eq!(Category::from_str("when"), None);
    /// ```
    #[allow(clippy::should_implement_trait)] // Option-returning parse, mirrors the other tag types
    #[must_use]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().trim_end_matches('?').to_lowercase().as_str() {
            "who" | "kim" => Some(Self::Who),
            "what" | "nima" => Some(Self::What),
            "where" | "qayer" => Some(Self::Where),
            _ => None,
        }
    }

    /// Lowercase tag
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Who => "who",
            Self::What => "what",
            Self::Where => "where",
        }
    }

    /// Basket label shown to the player
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Who => "Who?",
            Self::What => "What?",
            Self::Where => "Where?",
        }
    }

    /// Position in [`Category::ALL`]
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Who => 0,
            Self::What => 1,
            Self::Where => 2,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
