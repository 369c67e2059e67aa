//! The highlight engine: word set, ranges, and rescans for one document.
//!
//! All mutable state sits behind a single mutex, so at most one rescan runs
//! per engine at a time regardless of how many threads hold a reference.
//! Events are published after the lock is released.

pub mod scanner;

use std::collections::HashSet;
use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, warn};

use crate::document::{DocumentEvent, DocumentSurface};
use crate::error::EngineError;
use crate::listener::{EngineEvent, EngineListener, ListenerId, ListenerRegistry};
use crate::options::{Convert, HighlightOptions, RescanMode};
use crate::range::HighlightRange;
use crate::render::HighlightRenderer;
use crate::style::HighlightStyle;
use crate::transform::fold_case;

use self::scanner::{run_start, scan};

/// Whether the engine currently has words to match.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineState {
    /// No active words; rescans produce no ranges.
    Idle,
    /// A non-empty word set is active.
    Active,
}

struct EngineInner {
    words: HashSet<String>,
    ranges: Vec<HighlightRange>,
    style: HighlightStyle,
    renderer: Box<dyn HighlightRenderer>,
}

/// Highlights dictionary words in one document.
///
/// # Example
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use wordlight::{
///     Convert, HighlightEngine, HighlightOptions, HighlightRange, MarkBuffer, TextBuffer,
/// };
///
/// let text = "The theology of leather";
/// let document = Arc::new(TextBuffer::new(text));
/// let marks = Arc::new(Mutex::new(MarkBuffer::new(text.chars().count())));
/// let engine = HighlightEngine::new(
///     HighlightOptions::ignore_case(),
///     document,
///     Arc::clone(&marks),
/// );
///
/// engine.set_words(["The", "THE"], Convert::ToLowercase);
/// assert_eq!(
///     engine.ranges(),
///     vec![HighlightRange::new(0, 3), HighlightRange::new(4, 7)],
/// );
/// ```
pub struct HighlightEngine {
    options: HighlightOptions,
    document: Arc<dyn DocumentSurface>,
    inner: Mutex<EngineInner>,
    listeners: Mutex<ListenerRegistry>,
}

impl HighlightEngine {
    /// Creates an idle engine bound to `document` and `renderer`.
    pub fn new(
        options: HighlightOptions,
        document: Arc<dyn DocumentSurface>,
        renderer: impl HighlightRenderer + 'static,
    ) -> Self {
        Self {
            options,
            document,
            inner: Mutex::new(EngineInner {
                words: HashSet::new(),
                ranges: Vec::new(),
                style: HighlightStyle::default(),
                renderer: Box::new(renderer),
            }),
            listeners: Mutex::new(ListenerRegistry::default()),
        }
    }

    /// Replaces the active words and rescans the whole document.
    ///
    /// Words are lowercased only when the engine ignores case and `convert`
    /// is [`Convert::ToLowercase`]; otherwise they are stored verbatim.
    pub fn set_words<I, S>(&self, words: I, convert: Convert)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lowercase = !self.options.case_sensitive() && convert == Convert::ToLowercase;
        let active: HashSet<String> = words
            .into_iter()
            .map(|word| {
                if lowercase {
                    fold_case(word.as_ref())
                } else {
                    word.as_ref().to_owned()
                }
            })
            .collect();

        let event = {
            let mut inner = self.lock();
            inner.words = active;
            self.rescan(&mut inner, None)
        };
        self.publish(&event);
    }

    /// Rescans the whole document with the current words.
    pub fn highlight(&self) {
        let event = {
            let mut inner = self.lock();
            self.rescan(&mut inner, None)
        };
        self.publish(&event);
    }

    /// Sets the style used by subsequent rescans.
    ///
    /// Marks already applied keep their style until the next rescan.
    pub fn set_highlight_style(&self, style: HighlightStyle) {
        self.lock().style = style;
    }

    /// Parses `color` and uses it for subsequent rescans.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] when `color` is neither a
    /// hex colour nor a known colour name.
    pub fn set_highlight_color(&self, color: &str) -> Result<(), EngineError> {
        let style = color.parse()?;
        self.set_highlight_style(style);
        Ok(())
    }

    /// Reacts to a document change notification.
    ///
    /// [`RescanMode::Full`] always rescans from offset zero. In
    /// [`RescanMode::Incremental`] localised edits keep the ranges ahead of
    /// the edited run and rescan from the start of that run.
    pub fn document_changed(&self, event: &DocumentEvent) {
        let anchor = match self.options.rescan_mode() {
            RescanMode::Full => None,
            RescanMode::Incremental => event.offset(),
        };
        let computed = {
            let mut inner = self.lock();
            self.rescan(&mut inner, anchor)
        };
        self.publish(&computed);
    }

    /// Handles an insertion of `length` characters at `offset`.
    pub fn insert_update(&self, offset: usize, length: usize) {
        self.document_changed(&DocumentEvent::Insert { offset, length });
    }

    /// Handles a removal of `length` characters at `offset`.
    pub fn remove_update(&self, offset: usize, length: usize) {
        self.document_changed(&DocumentEvent::Remove { offset, length });
    }

    /// Handles a full replacement or attribute change.
    pub fn changed_update(&self) {
        self.document_changed(&DocumentEvent::Replace);
    }

    /// Registers a listener for [`EngineEvent`]s.
    pub fn subscribe(&self, listener: Arc<dyn EngineListener>) -> ListenerId {
        self.listeners().subscribe(listener)
    }

    /// Removes a listener; returns `false` if it was not registered.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        self.listeners().unsubscribe(id)
    }

    /// Publishes an event to every listener of this engine.
    ///
    /// Listeners run without any engine lock held and may call back into
    /// the engine.
    pub fn publish(&self, event: &EngineEvent) {
        let listeners = self.listeners().snapshot();
        for listener in listeners {
            listener.notify(event);
        }
    }

    /// Ranges applied by the most recent rescan, in document order.
    #[must_use]
    pub fn ranges(&self) -> Vec<HighlightRange> {
        self.lock().ranges.clone()
    }

    /// Returns [`EngineState::Active`] when words are loaded.
    #[must_use]
    pub fn state(&self) -> EngineState {
        if self.lock().words.is_empty() {
            EngineState::Idle
        } else {
            EngineState::Active
        }
    }

    /// Number of active words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.lock().words.len()
    }

    /// Style applied by the next rescan.
    #[must_use]
    pub fn style(&self) -> HighlightStyle {
        self.lock().style
    }

    /// Options fixed at construction.
    #[must_use]
    pub const fn options(&self) -> HighlightOptions {
        self.options
    }

    fn rescan(&self, inner: &mut EngineInner, anchor: Option<usize>) -> EngineEvent {
        let text = self.document.text();
        let from = anchor.map_or(0, |offset| run_start(&text, offset));

        if from == 0 {
            inner.renderer.remove_all();
            inner.ranges.clear();
        } else {
            inner.renderer.remove_from(from);
            inner.ranges.retain(|range| range.end() <= from);
        }

        let computed = scan(&text, &inner.words, self.options.case_sensitive(), from);
        let mut skipped = 0_usize;
        for range in computed {
            match inner.renderer.add_highlight(range, &inner.style) {
                Ok(()) => inner.ranges.push(range),
                Err(error) => {
                    skipped += 1;
                    warn!(
                        target: "wordlight::engine",
                        %range,
                        %error,
                        "skipping range that no longer fits the document"
                    );
                }
            }
        }

        debug!(
            target: "wordlight::engine",
            from,
            ranges = inner.ranges.len(),
            skipped,
            "rescan complete"
        );

        EngineEvent::RangesComputed {
            ranges: inner.ranges.clone(),
            style: inner.style,
        }
    }

    fn lock(&self) -> MutexGuard<'_, EngineInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn listeners(&self) -> MutexGuard<'_, ListenerRegistry> {
        self.listeners.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl fmt::Debug for HighlightEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.lock();
        f.debug_struct("HighlightEngine")
            .field("options", &self.options)
            .field("words", &inner.words.len())
            .field("ranges", &inner.ranges.len())
            .field("style", &inner.style)
            .finish_non_exhaustive()
    }
}
