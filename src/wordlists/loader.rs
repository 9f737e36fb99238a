//! Word list loading utilities
//!
//! Loads a custom dataset from a text file. Two line formats are accepted and may be mixed:
//!
//! ```text
//! # comment
//! [who]
//! teacher
//! doctor
//!
//! what: apple
//! where: park
//! ```

use super::{Dataset, DatasetError};
use crate::core::Category;
use std::fs;
use std::path::Path;

/// Load a dataset from a file
///
/// # Errors
///
/// Returns [`DatasetError::Io`] if the file cannot be read, or a parse error from
/// [`parse_dataset`].
///
/// # Examples
/// ```no_run
/// use word_baskets::wordlists::loader::load_from_file;
///
/// let dataset = load_from_file("my_words.txt").unwrap();
/// println!("Loaded {} words", dataset.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Dataset, DatasetError> {
    let content = fs::read_to_string(path)?;
    parse_dataset(&content)
}

/// Parse dataset text
///
/// # Errors
///
/// - [`DatasetError::UnknownCategory`] for an unrecognized section or prefix
/// - [`DatasetError::MissingCategory`] for a bare word before any section header
/// - [`DatasetError::Empty`] if the text contains no words
pub fn parse_dataset(content: &str) -> Result<Dataset, DatasetError> {
    let mut lists: Vec<(Category, Vec<String>)> = Vec::new();
    let mut section: Option<Category> = None;

    for (idx, raw) in content.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(header) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
            section = Some(parse_category(header, line_no)?);
            continue;
        }

        let (category, word) = match line.split_once(':') {
            Some((tag, word)) => (parse_category(tag, line_no)?, word.trim()),
            None => match section {
                Some(category) => (category, line),
                None => {
                    return Err(DatasetError::MissingCategory {
                        line: line_no,
                        word: line.to_string(),
                    });
                }
            },
        };

        match lists.iter_mut().find(|(c, _)| *c == category) {
            Some((_, words)) => words.push(word.to_string()),
            None => lists.push((category, vec![word.to_string()])),
        }
    }

    Dataset::new(lists)
}

fn parse_category(token: &str, line: usize) -> Result<Category, DatasetError> {
    Category::from_str(token).ok_or_else(|| DatasetError::UnknownCategory {
        line,
        token: token.trim().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_sections() {
        let dataset =
            parse_dataset("[who]\nalice\n\n[what]\napple\nrock\n[where]\npark\n").unwrap();

        assert_eq!(dataset.words(Category::Who), ["alice"]);
        assert_eq!(dataset.words(Category::What), ["apple", "rock"]);
        assert_eq!(dataset.words(Category::Where), ["park"]);
    }

    #[test]
    fn parses_prefixed_lines() {
        let dataset = parse_dataset("kim: Ota\nnima: olma\nqayer: bozor").unwrap();

        assert_eq!(dataset.words(Category::Who), ["ota"]);
        assert_eq!(dataset.words(Category::What), ["olma"]);
        assert_eq!(dataset.words(Category::Where), ["bozor"]);
    }

    #[test]
    fn prefix_overrides_section() {
        let dataset = parse_dataset("[who]\nnurse\nwhere: garden\npilot").unwrap();

        assert_eq!(dataset.words(Category::Who), ["nurse", "pilot"]);
        assert_eq!(dataset.words(Category::Where), ["garden"]);
    }

    #[test]
    fn skips_comments() {
        let dataset = parse_dataset("# people\n[who]\n# more\nbaker").unwrap();
        assert_eq!(dataset.len(), 1);
    }

    #[test]
    fn rejects_unknown_category() {
        let err = parse_dataset("[when]\ntoday").unwrap_err();
        assert!(matches!(
            err,
            DatasetError::UnknownCategory { line: 1, ref token } if token == "when"
        ));
    }

    #[test]
    fn rejects_bare_word_without_section() {
        let err = parse_dataset("\napple").unwrap_err();
        assert!(matches!(err, DatasetError::MissingCategory { line: 2, .. }));
    }

    #[test]
    fn rejects_empty_text() {
        assert!(matches!(parse_dataset("# nothing\n"), Err(DatasetError::Empty)));
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_from_file("/nonexistent/word_baskets/words.txt").unwrap_err();
        assert!(matches!(err, DatasetError::Io(_)));
    }
}
