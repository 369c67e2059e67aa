//! Normalisation steps applied to each word read from a word source.

/// Folds `text` to lowercase one character at a time.
///
/// Scanned text is folded the same way, so dictionary words and document
/// prefixes always compare under one mapping.
#[must_use]
pub fn fold_case(text: &str) -> String {
    text.chars().flat_map(char::to_lowercase).collect()
}

/// A text-to-text normalisation step.
///
/// Closures of type `Fn(&str) -> String` implement this trait, so ad-hoc
/// transforms need no wrapper type.
///
/// # Example
///
/// ```
/// use wordlight::{Lowercase, TextTransform};
///
/// assert_eq!(Lowercase.apply("Theology"), "theology");
/// let strip = |word: &str| word.trim_end_matches('s').to_owned();
/// assert_eq!(strip.apply("words"), "word");
/// ```
pub trait TextTransform: Send + Sync {
    /// Returns the transformed form of `word`.
    fn apply(&self, word: &str) -> String;
}

impl<F> TextTransform for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn apply(&self, word: &str) -> String {
        self(word)
    }
}

/// Lowercases every word.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Lowercase;

impl TextTransform for Lowercase {
    fn apply(&self, word: &str) -> String {
        fold_case(word)
    }
}
