//! Words command
//!
//! Summarizes the dataset a game would draw from.

use crate::core::Category;
use crate::wordlists::Dataset;

/// Words of one category
pub struct CategorySummary {
    pub category: Category,
    pub words: Vec<String>,
}

/// Dataset overview
pub struct DatasetSummary {
    pub categories: Vec<CategorySummary>,
    pub total_words: usize,
}

/// Summarize a dataset, categories in basket order
#[must_use]
pub fn summarize_dataset(dataset: &Dataset) -> DatasetSummary {
    let categories = Category::ALL
        .into_iter()
        .map(|category| CategorySummary {
            category,
            words: dataset.words(category).to_vec(),
        })
        .collect();

    DatasetSummary {
        categories,
        total_words: dataset.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_lists_every_category() {
        let dataset = Dataset::new([(Category::What, vec!["apple", "rock"])]).unwrap();
        let summary = summarize_dataset(&dataset);

        assert_eq!(summary.categories.len(), 3);
        assert_eq!(summary.categories[1].category, Category::What);
        assert_eq!(summary.categories[1].words, vec!["apple", "rock"]);
        assert!(summary.categories[0].words.is_empty());
        assert_eq!(summary.total_words, 2);
    }
}
