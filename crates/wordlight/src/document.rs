//! The editing surface the engine reads text from.

use std::sync::{PoisonError, RwLock};

use crate::error::EngineError;

/// Read access to a document's current text.
///
/// The engine reads one snapshot per rescan and never keeps it.
pub trait DocumentSurface: Send + Sync {
    /// Returns the full current text.
    fn text(&self) -> String;
}

/// Change notification raised by a document surface.
///
/// Offsets and lengths count characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentEvent {
    /// `length` characters were inserted at `offset`.
    Insert {
        /// Offset of the first inserted character.
        offset: usize,
        /// Number of inserted characters.
        length: usize,
    },
    /// `length` characters were removed starting at `offset`.
    Remove {
        /// Offset of the first removed character.
        offset: usize,
        /// Number of removed characters.
        length: usize,
    },
    /// The whole text was replaced or its attributes changed.
    Replace,
}

impl DocumentEvent {
    /// Offset of the edit, if the event is localised.
    #[must_use]
    pub const fn offset(&self) -> Option<usize> {
        match self {
            Self::Insert { offset, .. } | Self::Remove { offset, .. } => Some(*offset),
            Self::Replace => None,
        }
    }
}

/// In-memory document with character-offset editing.
///
/// Each edit returns the [`DocumentEvent`] describing it so callers can
/// forward the notification to a [`HighlightEngine`](crate::HighlightEngine).
///
/// # Example
///
/// ```
/// use wordlight::{DocumentEvent, DocumentSurface, TextBuffer};
///
/// let buffer = TextBuffer::new("leather");
/// let event = buffer.insert(0, "the ")?;
/// assert_eq!(event, DocumentEvent::Insert { offset: 0, length: 4 });
/// assert_eq!(buffer.text(), "the leather");
/// # Ok::<(), wordlight::EngineError>(())
/// ```
#[derive(Debug, Default)]
pub struct TextBuffer {
    text: RwLock<String>,
}

impl TextBuffer {
    /// Creates a buffer holding `text`.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: RwLock::new(text.into()),
        }
    }

    /// Inserts `fragment` at character `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] when `offset` lies past the
    /// end of the text.
    pub fn insert(&self, offset: usize, fragment: &str) -> Result<DocumentEvent, EngineError> {
        let mut text = self.text.write().unwrap_or_else(PoisonError::into_inner);
        let at = byte_offset(&text, offset)?;
        text.insert_str(at, fragment);
        Ok(DocumentEvent::Insert {
            offset,
            length: fragment.chars().count(),
        })
    }

    /// Removes `length` characters starting at character `offset`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] when the span extends past
    /// the end of the text.
    pub fn remove(&self, offset: usize, length: usize) -> Result<DocumentEvent, EngineError> {
        let mut text = self.text.write().unwrap_or_else(PoisonError::into_inner);
        let start = byte_offset(&text, offset)?;
        let end = byte_offset(&text, offset.saturating_add(length))?;
        text.replace_range(start..end, "");
        Ok(DocumentEvent::Remove { offset, length })
    }

    /// Replaces the whole text.
    pub fn set_text(&self, replacement: impl Into<String>) -> DocumentEvent {
        *self.text.write().unwrap_or_else(PoisonError::into_inner) = replacement.into();
        DocumentEvent::Replace
    }

    /// Number of characters currently held.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .chars()
            .count()
    }
}

impl DocumentSurface for TextBuffer {
    fn text(&self) -> String {
        self.text
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

fn byte_offset(text: &str, offset: usize) -> Result<usize, EngineError> {
    text.char_indices()
        .map(|(byte, _)| byte)
        .chain(std::iter::once(text.len()))
        .nth(offset)
        .ok_or_else(|| {
            EngineError::invalid_argument(format!(
                "offset {offset} is past the end of a {}-character text",
                text.chars().count()
            ))
        })
}
