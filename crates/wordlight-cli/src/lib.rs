//! Command-line runtime for Wordlight.
//!
//! The runtime loads layered configuration, opens the persisted settings,
//! loads or restores a wordbook, and prints the highlighted text file. It is
//! exercised both from the binary entrypoint and from tests where the
//! configuration loader and IO streams are substituted.

use std::ffi::OsString;
use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;

use clap::Parser;
use clap::error::ErrorKind;
use wordlight_config::Config;

mod cli;
mod config;
mod errors;
pub mod output;
mod recent;
mod session;
mod settings;
pub mod telemetry;

use cli::Cli;
pub use cli::{OutputFormat, ResolvedOutputFormat};
use config::{ConfigArgumentSplit, ConfigLoader, OrthoConfigLoader, split_config_arguments};
use errors::AppError;
pub use errors::SessionError;
use output::{Decoration, JsonReport, render_human, write_json};
pub use recent::RecentFiles;
pub use session::{KEY_TEXTFILE_DIR, KEY_WORDBOOK, KEY_WORDBOOK_DIR, Session};
pub use settings::{JsonFileStore, MemoryStore, SettingsError, SettingsStore};

/// CLI flags recognised by the configuration loader.
///
/// MAINTENANCE: keep in sync with the value-taking fields of
/// `wordlight_config::Config`. Boolean options are set through the
/// configuration file or `WORDLIGHT_*` variables.
const CONFIG_CLI_FLAGS: &[&str] = &[
    "--config-path",
    "--log-filter",
    "--log-format",
    "--highlight-color",
    "--rescan-mode",
    "--settings-path",
    "--recent-files-limit",
];

/// Bundles the IO streams provided to the CLI runtime.
pub(crate) struct IoStreams<'a, W: Write, E: Write> {
    pub(crate) stdout: &'a mut W,
    pub(crate) stderr: &'a mut E,
    stdout_is_terminal: bool,
}

impl<'a, W: Write, E: Write> IoStreams<'a, W, E> {
    pub(crate) const fn new(stdout: &'a mut W, stderr: &'a mut E, stdout_is_terminal: bool) -> Self {
        Self {
            stdout,
            stderr,
            stdout_is_terminal,
        }
    }
}

/// Runs the CLI using the provided arguments and IO handles.
#[must_use]
pub fn run<I, W, E>(args: I, stdout: &mut W, stderr: &mut E) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
{
    let mut io = IoStreams::new(stdout, stderr, io::stdout().is_terminal());
    run_with_loader(args, &mut io, &OrthoConfigLoader)
}

pub(crate) fn run_with_loader<I, W, E, L>(
    args: I,
    io: &mut IoStreams<'_, W, E>,
    loader: &L,
) -> ExitCode
where
    I: IntoIterator<Item = OsString>,
    W: Write,
    E: Write,
    L: ConfigLoader,
{
    let arguments: Vec<OsString> = args.into_iter().collect();
    let split = split_config_arguments(&arguments);
    let cli_arguments = prepare_cli_arguments(&arguments, &split);

    let cli = match Cli::try_parse_from(cli_arguments) {
        Ok(cli) => cli,
        Err(error)
            if matches!(
                error.kind(),
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion
            ) =>
        {
            return match write!(io.stdout, "{error}") {
                Ok(()) => ExitCode::SUCCESS,
                Err(_) => ExitCode::FAILURE,
            };
        }
        Err(error) => return report(io, &AppError::CliUsage(error)),
    };

    match loader
        .load(&split.config_arguments)
        .and_then(|config| execute(&cli, &config, io))
    {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => report(io, &error),
    }
}

fn report<W: Write, E: Write>(io: &mut IoStreams<'_, W, E>, error: &AppError) -> ExitCode {
    let _ = writeln!(io.stderr, "{error}");
    ExitCode::FAILURE
}

fn prepare_cli_arguments(args: &[OsString], split: &ConfigArgumentSplit) -> Vec<OsString> {
    args.first()
        .into_iter()
        .chain(args.iter().skip(split.command_start))
        .cloned()
        .collect()
}

fn execute<W: Write, E: Write>(
    cli: &Cli,
    config: &Config,
    io: &mut IoStreams<'_, W, E>,
) -> Result<(), AppError> {
    telemetry::initialise(config)?;
    let store = JsonFileStore::open(config.settings_path().as_std_path())?;
    let mut session = Session::new(config, store)?;

    if cli.forget {
        session.forget_wordbook()?;
    }

    if cli.recent {
        for path in session.recent_files() {
            writeln!(io.stdout, "{}", path.display()).map_err(AppError::WriteOutput)?;
        }
        return Ok(());
    }

    let text_file = cli.text_file.as_deref().ok_or(AppError::MissingTextFile)?;
    match cli.wordbook.as_deref() {
        Some(path) => {
            session.load_wordbook(path)?;
        }
        None => {
            session.restore_wordbook()?;
        }
    }
    session.open_text(text_file)?;

    let text = session.text();
    let ranges = session.ranges();
    match cli.output.resolve(io.stdout_is_terminal) {
        ResolvedOutputFormat::Human => {
            if let Some(path) = session.wordbook() {
                let name = path.file_name().unwrap_or(path.as_os_str());
                let _ = writeln!(
                    io.stderr,
                    "{} ({} W)",
                    name.to_string_lossy(),
                    session.word_count()
                );
            }
            let decoration = if io.stdout_is_terminal {
                Decoration::Ansi(session.style())
            } else {
                Decoration::Brackets
            };
            let rendered = render_human(&text, &ranges, decoration);
            write!(io.stdout, "{rendered}").map_err(AppError::WriteOutput)?;
            if !rendered.ends_with('\n') {
                writeln!(io.stdout).map_err(AppError::WriteOutput)?;
            }
        }
        ResolvedOutputFormat::Json => {
            let report = JsonReport {
                wordbook: session
                    .wordbook()
                    .map(|path| path.to_string_lossy().into_owned()),
                words: session.word_count(),
                color: session.style().to_string(),
                ranges: &ranges,
            };
            write_json(io.stdout, &report).map_err(AppError::SerialiseReport)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests;
