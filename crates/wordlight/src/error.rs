//! Error types for word-source loading and highlight application.
//!
//! Loading failures surface as [`WordSetError`]; failures raised while the
//! engine talks to its collaborators surface as [`EngineError`].

use std::io;

use thiserror::Error;

use crate::range::HighlightRange;

/// Errors raised by [`WordSet`](crate::WordSet).
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum WordSetError {
    /// The word source could not be opened or read to completion.
    #[error("word source '{origin}' is unavailable: {source}")]
    SourceUnavailable {
        /// Human-readable name of the source (usually a path).
        origin: String,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },

    /// Words were queried before any load succeeded.
    #[error("no wordbook has been loaded")]
    NotLoaded,
}

impl WordSetError {
    /// Creates a source-unavailable error.
    #[must_use]
    pub fn source_unavailable(origin: impl Into<String>, source: io::Error) -> Self {
        Self::SourceUnavailable {
            origin: origin.into(),
            source,
        }
    }
}

/// Errors raised by the highlight engine and its collaborators.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum EngineError {
    /// A required argument was missing or carried an unusable value.
    #[error("invalid argument: {message}")]
    InvalidArgument {
        /// Description of the rejected argument.
        message: String,
    },

    /// A range no longer fits the document it is applied to.
    #[error("range {range} is out of bounds for a document of {length} characters")]
    RangeOutOfBounds {
        /// The rejected range.
        range: HighlightRange,
        /// Character length of the document at application time.
        length: usize,
    },
}

impl EngineError {
    /// Creates an invalid-argument error.
    #[must_use]
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    /// Creates an out-of-bounds error for `range`.
    #[must_use]
    pub const fn range_out_of_bounds(range: HighlightRange, length: usize) -> Self {
        Self::RangeOutOfBounds { range, length }
    }
}
