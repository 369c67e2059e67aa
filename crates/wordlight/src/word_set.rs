//! Loading wordbooks into a normalised, deduplicated word set.
//!
//! A wordbook is plain UTF-8 text holding one word per line. Each line is
//! trimmed, passed through the registered [`TextTransform`]s in registration
//! order, and inserted into a set. Loading replaces the previous contents
//! only once the whole source has been read, so a failed load leaves the
//! earlier words in place.

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::debug;

use crate::error::WordSetError;
use crate::transform::TextTransform;

/// Initial capacity reserved for a freshly read wordbook.
const INITIAL_CAPACITY: usize = 250;

/// Case-policy-aware collection of target words.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
/// use wordlight::{Lowercase, WordSet};
///
/// let mut words = WordSet::new();
/// words.add_transform(Lowercase);
/// words.load_from_reader(Cursor::new("The\n  THE \ntheology\n"), "inline")?;
/// assert_eq!(words.len(), 2);
/// assert!(words.words()?.contains("the"));
/// # Ok::<(), wordlight::WordSetError>(())
/// ```
#[derive(Default)]
pub struct WordSet {
    words: HashSet<String>,
    transforms: Vec<Box<dyn TextTransform>>,
    loaded: bool,
}

impl WordSet {
    /// Creates an empty, unloaded word set without transforms.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a transform applied to every subsequently loaded word.
    ///
    /// Words already loaded are not rewritten.
    pub fn add_transform(&mut self, transform: impl TextTransform + 'static) {
        self.transforms.push(Box::new(transform));
    }

    /// Loads words from the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`WordSetError::SourceUnavailable`] when the file cannot be
    /// opened or read. The previously loaded words are kept in that case.
    pub fn load(&mut self, path: &Path) -> Result<(), WordSetError> {
        let origin = path.display().to_string();
        let file = File::open(path)
            .map_err(|source| WordSetError::source_unavailable(origin.clone(), source))?;
        self.load_from_reader(BufReader::new(file), &origin)
    }

    /// Loads words from any line-oriented reader.
    ///
    /// `origin` names the source in errors and logs. The reader is consumed
    /// and dropped before this method returns.
    ///
    /// # Errors
    ///
    /// Returns [`WordSetError::SourceUnavailable`] when a line cannot be read
    /// or is not valid UTF-8. The previously loaded words are kept.
    pub fn load_from_reader<R: BufRead>(
        &mut self,
        reader: R,
        origin: &str,
    ) -> Result<(), WordSetError> {
        let mut fresh = HashSet::with_capacity(INITIAL_CAPACITY);
        for entry in reader.lines() {
            let line = entry.map_err(|source| WordSetError::source_unavailable(origin, source))?;
            fresh.insert(self.normalise(line.trim()));
        }

        debug!(
            target: "wordlight::word_set",
            origin,
            words = fresh.len(),
            "loaded wordbook"
        );
        self.words = fresh;
        self.loaded = true;
        Ok(())
    }

    fn normalise(&self, word: &str) -> String {
        self.transforms
            .iter()
            .fold(word.to_owned(), |current, transform| transform.apply(&current))
    }

    /// Returns the loaded words.
    ///
    /// # Errors
    ///
    /// Returns [`WordSetError::NotLoaded`] if no load has succeeded yet.
    pub fn words(&self) -> Result<&HashSet<String>, WordSetError> {
        if self.loaded {
            Ok(&self.words)
        } else {
            Err(WordSetError::NotLoaded)
        }
    }

    /// Returns whether a load has succeeded.
    #[must_use]
    pub const fn is_loaded(&self) -> bool {
        self.loaded
    }

    /// Number of distinct words; zero before the first load.
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns `true` when no words are held.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl fmt::Debug for WordSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WordSet")
            .field("words", &self.words.len())
            .field("transforms", &self.transforms.len())
            .field("loaded", &self.loaded)
            .finish()
    }
}
