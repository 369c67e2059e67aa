//! Error types for the CLI runtime.

use std::io;
use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;
use wordlight::{EngineError, WordSetError};
use wordlight_config::ConfigError;

use crate::settings::SettingsError;
use crate::telemetry::TelemetryError;

#[derive(Debug, Error)]
pub(crate) enum AppError {
    #[error("failed to load configuration: {0}")]
    LoadConfiguration(Arc<ortho_config::OrthoError>),
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
    #[error("{0}")]
    CliUsage(clap::Error),
    #[error("a text file must be provided unless --recent is given")]
    MissingTextFile,
    #[error(transparent)]
    Session(#[from] SessionError),
    #[error(transparent)]
    Settings(#[from] SettingsError),
    #[error(transparent)]
    Telemetry(#[from] TelemetryError),
    #[error("failed to serialise highlight report: {0}")]
    SerialiseReport(serde_json::Error),
    #[error("failed to write output: {0}")]
    WriteOutput(io::Error),
}

/// Errors raised by a [`Session`](crate::Session).
#[derive(Debug, Error)]
pub enum SessionError {
    /// The wordbook could not be read.
    #[error(transparent)]
    Wordbook(#[from] WordSetError),
    /// The engine rejected a value such as the highlight colour.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// Settings could not be persisted.
    #[error(transparent)]
    Settings(#[from] SettingsError),
    /// The text file could not be read.
    #[error("failed to read text file {path}: {source}", path = path.display())]
    ReadText {
        /// File that failed to load.
        path: PathBuf,
        /// Underlying IO failure.
        #[source]
        source: io::Error,
    },
}
