//! The renderer that receives computed ranges.

use std::sync::{Arc, Mutex, PoisonError};

use crate::error::EngineError;
use crate::range::HighlightRange;
use crate::style::HighlightStyle;

/// Sink applying and clearing visual marks.
pub trait HighlightRenderer: Send {
    /// Removes every mark.
    fn remove_all(&mut self);

    /// Removes marks that extend past character `offset`.
    fn remove_from(&mut self, offset: usize);

    /// Marks `range` with `style`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::RangeOutOfBounds`] when the range no longer
    /// fits the rendered document.
    fn add_highlight(
        &mut self,
        range: HighlightRange,
        style: &HighlightStyle,
    ) -> Result<(), EngineError>;
}

impl<T> HighlightRenderer for Arc<Mutex<T>>
where
    T: HighlightRenderer,
{
    fn remove_all(&mut self) {
        self.lock().unwrap_or_else(PoisonError::into_inner).remove_all();
    }

    fn remove_from(&mut self, offset: usize) {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove_from(offset);
    }

    fn add_highlight(
        &mut self,
        range: HighlightRange,
        style: &HighlightStyle,
    ) -> Result<(), EngineError> {
        self.lock()
            .unwrap_or_else(PoisonError::into_inner)
            .add_highlight(range, style)
    }
}

/// A single applied mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Mark {
    /// Characters covered by the mark.
    pub range: HighlightRange,
    /// Style the mark was painted with.
    pub style: HighlightStyle,
}

/// In-memory renderer bound to a fixed document length.
///
/// Ranges that do not fit the length are rejected, which mirrors a renderer
/// whose document changed between range computation and application.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkBuffer {
    length: usize,
    marks: Vec<Mark>,
}

impl MarkBuffer {
    /// Creates a renderer for a document of `length` characters.
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            marks: Vec::new(),
        }
    }

    /// Updates the document length used for bounds checks.
    pub const fn set_length(&mut self, length: usize) {
        self.length = length;
    }

    /// Returns the applied marks in application order.
    #[must_use]
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }
}

impl HighlightRenderer for MarkBuffer {
    fn remove_all(&mut self) {
        self.marks.clear();
    }

    fn remove_from(&mut self, offset: usize) {
        self.marks.retain(|mark| mark.range.end() <= offset);
    }

    fn add_highlight(
        &mut self,
        range: HighlightRange,
        style: &HighlightStyle,
    ) -> Result<(), EngineError> {
        if !range.fits(self.length) {
            return Err(EngineError::range_out_of_bounds(range, self.length));
        }
        self.marks.push(Mark {
            range,
            style: *style,
        });
        Ok(())
    }
}
