//! Most-recently-used list of text files.

use std::path::{Path, PathBuf};

use tracing::debug;
use wordlight::EngineError;
use wordlight_config::RECENT_FILES_LIMIT_MAX;

use crate::settings::{SettingsError, SettingsStore};

const KEY_PREFIX: &str = "RecentFiles.";

/// Remembers up to `max_entries` text files, most recent first.
///
/// Entries live in a [`SettingsStore`] under `RecentFiles.0`,
/// `RecentFiles.1`, and so on. Files that no longer exist are dropped when
/// the list is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecentFiles {
    max_entries: usize,
}

impl RecentFiles {
    /// Creates a list holding at most `max_entries` files.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidArgument`] unless `max_entries` lies in
    /// `1..=50`.
    pub fn new(max_entries: usize) -> Result<Self, EngineError> {
        if (1..=RECENT_FILES_LIMIT_MAX).contains(&max_entries) {
            Ok(Self { max_entries })
        } else {
            Err(EngineError::invalid_argument(format!(
                "max entries of {max_entries} not in range 1 - {RECENT_FILES_LIMIT_MAX}"
            )))
        }
    }

    /// Maximum number of remembered files.
    #[must_use]
    pub const fn max_entries(&self) -> usize {
        self.max_entries
    }

    /// Returns the remembered files that still exist, most recent first.
    #[must_use]
    pub fn files(&self, store: &impl SettingsStore) -> Vec<PathBuf> {
        (0..self.max_entries)
            .map_while(|index| store.get(&key(index)))
            .filter_map(|stored| {
                let trimmed = stored.trim();
                (!trimmed.is_empty()).then(|| PathBuf::from(trimmed))
            })
            .filter(|path| path.exists())
            .collect()
    }

    /// Moves `file` to the front of the list, dropping duplicates and the
    /// oldest entry when the list is full.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the store cannot be updated.
    pub fn set_most_recent(
        &self,
        store: &mut impl SettingsStore,
        file: &Path,
    ) -> Result<(), SettingsError> {
        let absolute = std::path::absolute(file).unwrap_or_else(|_| file.to_path_buf());
        let mut files = self.files(store);
        files.retain(|existing| existing != &absolute);
        files.truncate(self.max_entries.saturating_sub(1));
        files.insert(0, absolute);

        for (index, path) in files.iter().enumerate() {
            store.put(&key(index), &path.to_string_lossy())?;
        }
        for index in files.len()..RECENT_FILES_LIMIT_MAX {
            store.remove(&key(index))?;
        }

        debug!(
            target: "wordlight::recent",
            entries = files.len(),
            "recent files updated"
        );
        Ok(())
    }
}

fn key(index: usize) -> String {
    format!("{KEY_PREFIX}{index}")
}
