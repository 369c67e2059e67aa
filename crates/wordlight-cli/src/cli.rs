//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Output format selection for highlight reports.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    /// Selects `human` for terminal output and `json` for redirected output.
    #[default]
    Auto,
    /// Always render the highlighted text.
    Human,
    /// Always emit a JSON report of the ranges.
    Json,
}

/// Output format after resolving `auto` against the terminal status.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResolvedOutputFormat {
    /// Highlighted text.
    Human,
    /// JSON report.
    Json,
}

impl OutputFormat {
    /// Resolves the output format based on whether stdout is a terminal.
    #[must_use]
    pub const fn resolve(self, stdout_is_terminal: bool) -> ResolvedOutputFormat {
        match self {
            Self::Auto => {
                if stdout_is_terminal {
                    ResolvedOutputFormat::Human
                } else {
                    ResolvedOutputFormat::Json
                }
            }
            Self::Human => ResolvedOutputFormat::Human,
            Self::Json => ResolvedOutputFormat::Json,
        }
    }
}

/// Highlights wordbook entries in a text file.
#[derive(Parser, Debug)]
#[command(name = "wordlight", version)]
pub(crate) struct Cli {
    /// Wordbook to load; defaults to the one remembered from the last run.
    #[arg(long, value_name = "PATH")]
    pub(crate) wordbook: Option<PathBuf>,
    /// Controls how the result is rendered.
    #[arg(long, value_enum, default_value_t = OutputFormat::Auto)]
    pub(crate) output: OutputFormat,
    /// Forgets the remembered wordbook before doing anything else.
    #[arg(long)]
    pub(crate) forget: bool,
    /// Lists recently opened text files and exits.
    #[arg(long)]
    pub(crate) recent: bool,
    /// Text file to highlight.
    #[arg(value_name = "TEXT_FILE")]
    pub(crate) text_file: Option<PathBuf>,
}
