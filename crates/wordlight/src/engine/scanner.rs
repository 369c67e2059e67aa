//! Word-boundary scanning.
//!
//! A run is a maximal sequence of alphanumeric characters. Every prefix of a
//! run is tested against the word set, so `"the"` matches at the start of
//! `"theology"` but never inside `"leather"`. When a short and a long prefix
//! of the same run both match, both ranges are emitted.

use std::collections::HashSet;

use crate::range::HighlightRange;

/// Returns the ranges matched in `text` from character offset `from`.
///
/// `from` must sit on a run boundary: offset zero, or an offset whose
/// preceding character is not alphanumeric. [`run_start`] yields such an
/// offset.
#[must_use]
pub fn scan(
    text: &str,
    words: &HashSet<String>,
    case_sensitive: bool,
    from: usize,
) -> Vec<HighlightRange> {
    let mut ranges = Vec::new();
    if words.is_empty() {
        return ranges;
    }

    let mut word_start: Option<usize> = None;
    let mut current = String::new();

    for (index, ch) in text.chars().enumerate().skip(from) {
        if !ch.is_alphanumeric() {
            word_start = None;
            current.clear();
            continue;
        }

        let start = *word_start.get_or_insert(index);
        if case_sensitive {
            current.push(ch);
        } else {
            current.extend(ch.to_lowercase());
        }

        if words.contains(&current) {
            ranges.push(HighlightRange::new(start, index + 1));
        }
    }

    ranges
}

/// Returns the start of the run containing or ending at `offset`.
///
/// Walks backwards while the preceding character is alphanumeric. Offsets
/// past the end of the text are clamped to its length.
#[must_use]
pub fn run_start(text: &str, offset: usize) -> usize {
    let preceding: Vec<char> = text.chars().take(offset).collect();
    let run_length = preceding
        .iter()
        .rev()
        .take_while(|ch| ch.is_alphanumeric())
        .count();
    preceding.len() - run_length
}
