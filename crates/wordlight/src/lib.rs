//! Word-boundary highlighting for plain-text documents.
//!
//! Given a document and a wordbook, the engine marks every alphanumeric run
//! whose prefix equals a wordbook entry. Runs are maximal sequences of
//! alphanumeric characters; matching never starts inside a run, so `"the"`
//! marks the first three characters of `"theology"` but nothing in
//! `"leather"`.
//!
//! # Core types
//!
//! - [`WordSet`]: loads a one-word-per-line wordbook through a chain of
//!   [`TextTransform`]s
//! - [`HighlightEngine`]: holds the active words and recomputes
//!   [`HighlightRange`]s on every document change
//! - [`DocumentSurface`] and [`HighlightRenderer`]: the editing surface and
//!   renderer the engine talks to ([`TextBuffer`] and [`MarkBuffer`] are
//!   in-memory implementations)
//! - [`EngineListener`]: receives [`EngineEvent`]s
//!
//! # Example
//!
//! ```
//! use std::io::Cursor;
//! use std::sync::{Arc, Mutex};
//! use wordlight::{
//!     Convert, HighlightEngine, HighlightOptions, Lowercase, MarkBuffer, TextBuffer, WordSet,
//! };
//!
//! let mut wordbook = WordSet::new();
//! wordbook.add_transform(Lowercase);
//! wordbook.load_from_reader(Cursor::new("the\nof\n"), "inline")?;
//!
//! let text = "The theology of leather";
//! let marks = Arc::new(Mutex::new(MarkBuffer::new(text.chars().count())));
//! let engine = HighlightEngine::new(
//!     HighlightOptions::ignore_case(),
//!     Arc::new(TextBuffer::new(text)),
//!     Arc::clone(&marks),
//! );
//! engine.set_words(wordbook.words()?, Convert::ToLowercase);
//! assert_eq!(engine.ranges().len(), 3);
//! # Ok::<(), wordlight::WordSetError>(())
//! ```

mod document;
mod engine;
mod error;
mod listener;
mod options;
mod range;
mod render;
mod style;
mod transform;
mod word_set;

pub use document::{DocumentEvent, DocumentSurface, TextBuffer};
pub use engine::scanner::{run_start, scan};
pub use engine::{EngineState, HighlightEngine};
pub use error::{EngineError, WordSetError};
pub use listener::{EngineEvent, EngineListener, ListenerId, ListenerRegistry};
pub use options::{Convert, HighlightOptions, RescanMode};
pub use range::HighlightRange;
pub use render::{HighlightRenderer, Mark, MarkBuffer};
pub use style::HighlightStyle;
pub use transform::{Lowercase, TextTransform, fold_case};
pub use word_set::WordSet;

#[cfg(test)]
mod tests;
