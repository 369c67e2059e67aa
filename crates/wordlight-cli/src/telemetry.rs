//! Log output for the CLI.
//!
//! Records go to stderr, filtered by `log_filter` and shaped by
//! `log_format`. The global subscriber is installed at most once per process.

use std::io::{self, IsTerminal};

use once_cell::sync::OnceCell;
use tracing::Subscriber;
use tracing::subscriber::SetGlobalDefaultError;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::fmt::time::UtcTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{EnvFilter, Registry, fmt};

use wordlight_config::{Config, LogFormat};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Errors raised while setting up log output.
#[derive(Debug, thiserror::Error)]
pub enum TelemetryError {
    /// The `log_filter` expression did not parse.
    #[error("invalid log filter '{filter}': {message}")]
    Filter {
        /// The rejected expression.
        filter: String,
        /// Parser diagnostic.
        message: String,
    },
    /// Another global subscriber was installed first.
    #[error("failed to install log subscriber: {0}")]
    Install(#[from] SetGlobalDefaultError),
}

/// Installs the stderr subscriber described by `config`.
///
/// Only the first call installs anything; later calls return `Ok(())`.
///
/// # Errors
///
/// Returns [`TelemetryError`] when the filter does not parse or another
/// global subscriber is already in place.
pub fn initialise(config: &Config) -> Result<(), TelemetryError> {
    INSTALLED
        .get_or_try_init(|| {
            let subscriber = build_subscriber(config, io::stderr, io::stderr().is_terminal())?;
            tracing::subscriber::set_global_default(subscriber)?;
            Ok::<(), TelemetryError>(())
        })
        .map(|_| ())
}

/// Builds the subscriber for `config`, writing records to `writer`.
///
/// JSON records are flattened and never coloured; compact records use ANSI
/// colour only when `ansi` is set.
///
/// # Errors
///
/// Returns [`TelemetryError::Filter`] when `log_filter` does not parse.
pub fn build_subscriber<W>(
    config: &Config,
    writer: W,
    ansi: bool,
) -> Result<Box<dyn Subscriber + Send + Sync>, TelemetryError>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_new(config.log_filter()).map_err(|error| {
        TelemetryError::Filter {
            filter: config.log_filter().to_owned(),
            message: error.to_string(),
        }
    })?;
    let registry = Registry::default().with(filter);

    let subscriber: Box<dyn Subscriber + Send + Sync> = match config.log_format() {
        LogFormat::Json => Box::new(
            registry.with(
                fmt::layer()
                    .json()
                    .flatten_event(true)
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(writer)
                    .with_ansi(false),
            ),
        ),
        LogFormat::Compact => Box::new(
            registry.with(
                fmt::layer()
                    .compact()
                    .with_timer(UtcTime::rfc_3339())
                    .with_writer(writer)
                    .with_ansi(ansi),
            ),
        ),
    };
    Ok(subscriber)
}
