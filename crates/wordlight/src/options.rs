//! Options fixed per engine instance.

/// How the engine recomputes ranges after a document edit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RescanMode {
    /// Clear everything and rescan from offset zero on every edit.
    #[default]
    Full,
    /// Keep ranges ahead of the edited run and rescan from the run start.
    Incremental,
}

/// Conversion applied to words handed to
/// [`HighlightEngine::set_words`](crate::HighlightEngine::set_words).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Convert {
    /// Store words as given.
    #[default]
    None,
    /// Lowercase words when the engine ignores case.
    ToLowercase,
}

/// Matching options for a [`HighlightEngine`](crate::HighlightEngine).
///
/// # Example
///
/// ```
/// use wordlight::{HighlightOptions, RescanMode};
///
/// let options = HighlightOptions::default();
/// assert!(!options.case_sensitive());
/// assert_eq!(options.rescan_mode(), RescanMode::Full);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HighlightOptions {
    case_sensitive: bool,
    rescan_mode: RescanMode,
}

impl HighlightOptions {
    /// Creates options with an explicit case policy and rescan mode.
    #[must_use]
    pub const fn new(case_sensitive: bool, rescan_mode: RescanMode) -> Self {
        Self {
            case_sensitive,
            rescan_mode,
        }
    }

    /// Case-insensitive matching with full rescans.
    #[must_use]
    pub const fn ignore_case() -> Self {
        Self::new(false, RescanMode::Full)
    }

    /// Case-sensitive matching with full rescans.
    #[must_use]
    pub const fn case_sensitive_matching() -> Self {
        Self::new(true, RescanMode::Full)
    }

    /// Returns a copy using `rescan_mode`.
    #[must_use]
    pub const fn with_rescan_mode(self, rescan_mode: RescanMode) -> Self {
        Self {
            rescan_mode,
            ..self
        }
    }

    /// Returns whether matching respects case.
    #[must_use]
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Returns the rescan mode applied to document edits.
    #[must_use]
    pub const fn rescan_mode(&self) -> RescanMode {
        self.rescan_mode
    }
}
