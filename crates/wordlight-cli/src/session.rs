//! A highlighting session: one document, one wordbook, persisted settings.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::{debug, info, warn};
use wordlight::{
    Convert, DocumentSurface, EngineEvent, EngineListener, HighlightEngine, HighlightOptions,
    HighlightRange, HighlightStyle, ListenerId, Lowercase, MarkBuffer, RescanMode, TextBuffer,
    WordSet,
};
use wordlight_config::{Config, RescanPolicy};

use crate::errors::SessionError;
use crate::recent::RecentFiles;
use crate::settings::SettingsStore;

/// Settings key holding the absolute path of the active wordbook.
pub const KEY_WORDBOOK: &str = "Wordbook";
/// Settings key holding the directory of the last wordbook.
pub const KEY_WORDBOOK_DIR: &str = "WordbookDir";
/// Settings key holding the directory of the last text file.
pub const KEY_TEXTFILE_DIR: &str = "TextfileDir";

/// Binds a [`HighlightEngine`] to an in-memory document and a settings
/// store.
pub struct Session<S: SettingsStore> {
    engine: HighlightEngine,
    document: Arc<TextBuffer>,
    marks: Arc<Mutex<MarkBuffer>>,
    store: S,
    recent: RecentFiles,
    lowercase_words: bool,
    wordbook: Option<PathBuf>,
}

impl<S: SettingsStore> Session<S> {
    /// Builds a session from `config` with an empty document.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Engine`] when the highlight colour or the
    /// recent-files limit is invalid.
    pub fn new(config: &Config, store: S) -> Result<Self, SessionError> {
        let style: HighlightStyle = config.highlight_color().parse()?;
        let recent = RecentFiles::new(config.recent_files_limit())?;
        let rescan_mode = match config.rescan_mode() {
            RescanPolicy::Full => RescanMode::Full,
            RescanPolicy::Incremental => RescanMode::Incremental,
        };
        let options = HighlightOptions::new(config.case_sensitive(), rescan_mode);

        let document = Arc::new(TextBuffer::new(""));
        let marks = Arc::new(Mutex::new(MarkBuffer::new(0)));
        let engine = HighlightEngine::new(options, document.clone(), Arc::clone(&marks));
        engine.set_highlight_style(style);
        engine.subscribe(Arc::new(log_event));

        Ok(Self {
            engine,
            document,
            marks,
            store,
            recent,
            lowercase_words: config.lowercase_words(),
            wordbook: None,
        })
    }

    /// Loads the wordbook at `path` and makes its words active.
    ///
    /// On success publishes [`EngineEvent::WordCount`] and remembers the
    /// wordbook. On failure publishes [`EngineEvent::LoadFailed`] and leaves
    /// the previous words active. Words are lowercased only when the
    /// session ignores case and `lowercase_words` is set. A settings failure
    /// is reported after the new words are already active.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Wordbook`] when the file cannot be read, or
    /// [`SessionError::Settings`] when the wordbook cannot be remembered.
    pub fn load_wordbook(&mut self, path: &Path) -> Result<usize, SessionError> {
        let lowercase = self.lowercase_words && !self.engine.options().case_sensitive();
        let mut wordbook = WordSet::new();
        if lowercase {
            wordbook.add_transform(Lowercase);
        }
        if let Err(error) = wordbook.load(path) {
            self.engine.publish(&EngineEvent::LoadFailed {
                reason: error.to_string(),
            });
            return Err(error.into());
        }

        let convert = if lowercase {
            Convert::ToLowercase
        } else {
            Convert::None
        };
        self.engine.set_words(wordbook.words()?, convert);
        let count = self.engine.word_count();
        self.engine.publish(&EngineEvent::WordCount(count));

        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        self.wordbook = Some(absolute.clone());
        self.store
            .put(KEY_WORDBOOK, &absolute.to_string_lossy())?;
        if let Some(directory) = absolute.parent() {
            self.store
                .put(KEY_WORDBOOK_DIR, &directory.to_string_lossy())?;
        }
        Ok(count)
    }

    /// Reloads the remembered wordbook if its file still exists.
    ///
    /// Returns the number of loaded words, or `None` when nothing was
    /// remembered or the file is gone.
    ///
    /// # Errors
    ///
    /// Propagates failures from [`Session::load_wordbook`].
    pub fn restore_wordbook(&mut self) -> Result<Option<usize>, SessionError> {
        let Some(stored) = self.store.get(KEY_WORDBOOK) else {
            return Ok(None);
        };
        let path = PathBuf::from(stored.trim());
        if !path.is_file() {
            debug!(
                target: "wordlight::session",
                path = %path.display(),
                "remembered wordbook no longer exists"
            );
            return Ok(None);
        }
        self.load_wordbook(&path).map(Some)
    }

    /// Forgets the remembered wordbook. Active words are kept.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::Settings`] when the store cannot be updated.
    pub fn forget_wordbook(&mut self) -> Result<(), SessionError> {
        self.store.remove(KEY_WORDBOOK)?;
        Ok(())
    }

    /// Reads `path` into the document, rescans, and records the file as the
    /// most recent one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::ReadText`] when the file cannot be read as
    /// UTF-8, or [`SessionError::Settings`] when it cannot be recorded.
    pub fn open_text(&mut self, path: &Path) -> Result<(), SessionError> {
        let text = fs::read_to_string(path).map_err(|source| SessionError::ReadText {
            path: path.to_path_buf(),
            source,
        })?;
        self.set_text(&text);

        self.recent.set_most_recent(&mut self.store, path)?;
        let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
        if let Some(directory) = absolute.parent() {
            self.store
                .put(KEY_TEXTFILE_DIR, &directory.to_string_lossy())?;
        }
        Ok(())
    }

    /// Replaces the document contents and rescans.
    pub fn set_text(&self, text: &str) {
        let event = self.document.set_text(text);
        self.marks_lock().set_length(self.document.char_len());
        self.engine.document_changed(&event);
    }

    /// Registers an additional listener on the engine.
    pub fn subscribe(&self, listener: Arc<dyn EngineListener>) -> ListenerId {
        self.engine.subscribe(listener)
    }

    /// Recently opened text files that still exist.
    #[must_use]
    pub fn recent_files(&self) -> Vec<PathBuf> {
        self.recent.files(&self.store)
    }

    /// Current document text.
    #[must_use]
    pub fn text(&self) -> String {
        self.document.text()
    }

    /// Ranges currently highlighted.
    #[must_use]
    pub fn ranges(&self) -> Vec<HighlightRange> {
        self.engine.ranges()
    }

    /// Style of the current highlights.
    #[must_use]
    pub fn style(&self) -> HighlightStyle {
        self.engine.style()
    }

    /// Number of active words.
    #[must_use]
    pub fn word_count(&self) -> usize {
        self.engine.word_count()
    }

    /// Path of the wordbook loaded in this session, if any.
    #[must_use]
    pub fn wordbook(&self) -> Option<&Path> {
        self.wordbook.as_deref()
    }

    /// The underlying engine.
    #[must_use]
    pub const fn engine(&self) -> &HighlightEngine {
        &self.engine
    }

    /// The settings store.
    #[must_use]
    pub const fn store(&self) -> &S {
        &self.store
    }

    fn marks_lock(&self) -> MutexGuard<'_, MarkBuffer> {
        self.marks.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn log_event(event: &EngineEvent) {
    match event {
        EngineEvent::WordCount(count) => {
            info!(target: "wordlight::session", words = count, "wordbook loaded");
        }
        EngineEvent::LoadFailed { reason } => {
            warn!(target: "wordlight::session", %reason, "wordbook load failed");
        }
        EngineEvent::RangesComputed { ranges, .. } => {
            debug!(target: "wordlight::session", ranges = ranges.len(), "highlights updated");
        }
    }
}
