//! Key/value persistence for user settings.
//!
//! [`JsonFileStore`] keeps a flat string map in a JSON file and rewrites the
//! whole file atomically after every change. [`MemoryStore`] backs tests and
//! embedders that do not want anything on disk.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::Builder;
use thiserror::Error;
use tracing::debug;

/// Errors raised while reading or writing settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file exists but could not be read.
    #[error("failed to read settings from {path}: {source}", path = path.display())]
    Read {
        /// Settings file location.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
    /// The settings file is not a JSON object of strings.
    #[error("failed to parse settings in {path}: {source}", path = path.display())]
    Parse {
        /// Settings file location.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: serde_json::Error,
    },
    /// The settings could not be written back.
    #[error("failed to write settings to {path}: {source}", path = path.display())]
    Write {
        /// Settings file location.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
}

/// String settings keyed by name.
pub trait SettingsStore {
    /// Returns the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the change cannot be persisted.
    fn put(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// Removes `key`; missing keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError`] when the change cannot be persisted.
    fn remove(&mut self, key: &str) -> Result<(), SettingsError>;
}

/// Settings held in memory only.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    values: BTreeMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.values.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        self.values.remove(key);
        Ok(())
    }
}

/// Settings persisted to a JSON file.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`. A missing file yields an empty store; the
    /// file and its directory are created on the first write.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::Read`] or [`SettingsError::Parse`] when an
    /// existing file cannot be loaded.
    pub fn open(location: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = location.into();
        let values = match fs::read_to_string(&path) {
            Ok(contents) if contents.trim().is_empty() => BTreeMap::new(),
            Ok(contents) => {
                serde_json::from_str(&contents).map_err(|source| SettingsError::Parse {
                    path: path.clone(),
                    source,
                })?
            }
            Err(error) if error.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(SettingsError::Read { path, source }),
        };
        debug!(
            target: "wordlight::settings",
            path = %path.display(),
            entries = values.len(),
            "settings opened"
        );
        Ok(Self { path, values })
    }

    /// Location of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), SettingsError> {
        let write_error = |source| SettingsError::Write {
            path: self.path.clone(),
            source,
        };
        let contents = serde_json::to_vec_pretty(&self.values)
            .map_err(|error| write_error(io::Error::other(error)))?;
        atomic_write(&self.path, &contents).map_err(write_error)
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn put(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        if self.values.get(key).is_some_and(|current| current == value) {
            return Ok(());
        }
        self.values.insert(key.to_owned(), value.to_owned());
        self.persist()
    }

    fn remove(&mut self, key: &str) -> Result<(), SettingsError> {
        if self.values.remove(key).is_none() {
            return Ok(());
        }
        self.persist()
    }
}

/// Writes `contents` to `path` through a temporary file in the same
/// directory, so readers never observe a partial file.
fn atomic_write(path: &Path, contents: &[u8]) -> io::Result<()> {
    let directory = path
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(directory)?;

    let mut builder = Builder::new();
    builder.prefix(
        path.file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("wordlight"),
    );

    let mut file = builder.tempfile_in(directory)?;
    file.write_all(contents)?;
    file.as_file().sync_all()?;
    file.persist(path).map_err(|error| error.error)?;
    Ok(())
}
