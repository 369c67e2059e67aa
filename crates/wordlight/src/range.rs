//! Character ranges marking matched words.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` over document character offsets.
///
/// Offsets count Unicode scalar values, not bytes.
///
/// # Example
///
/// ```
/// use wordlight::HighlightRange;
///
/// let range = HighlightRange::new(4, 7);
/// assert_eq!(range.len(), 3);
/// assert_eq!(range.slice("The theology"), Some("the"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct HighlightRange {
    start: usize,
    end: usize,
}

impl HighlightRange {
    /// Creates a range from `start` (inclusive) to `end` (exclusive).
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the inclusive start offset.
    #[must_use]
    pub const fn start(&self) -> usize {
        self.start
    }

    /// Returns the exclusive end offset.
    #[must_use]
    pub const fn end(&self) -> usize {
        self.end
    }

    /// Number of characters covered.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns `true` when the range covers no characters.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Returns `true` when the range lies within a text of `length` characters.
    #[must_use]
    pub const fn fits(&self, length: usize) -> bool {
        self.start < self.end && self.end <= length
    }

    /// Extracts the covered characters from `text`, if the range fits.
    #[must_use]
    pub fn slice<'a>(&self, text: &'a str) -> Option<&'a str> {
        let mut offsets = text
            .char_indices()
            .map(|(byte, _)| byte)
            .chain(std::iter::once(text.len()));
        let start = offsets.nth(self.start)?;
        let end = if self.is_empty() {
            start
        } else {
            offsets.nth(self.len() - 1)?
        };
        text.get(start..end)
    }
}

impl fmt::Display for HighlightRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}
