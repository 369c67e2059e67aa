//! CLI entrypoint for Wordlight.
//!
//! The binary delegates to [`wordlight_cli::run`], which loads
//! configuration, restores or loads a wordbook, and prints the highlighted
//! text file.

use std::io::{self, StderrLock, StdoutLock};
use std::process::ExitCode;

fn main() -> ExitCode {
    let mut stdout: StdoutLock<'_> = io::stdout().lock();
    let mut stderr: StderrLock<'_> = io::stderr().lock();
    wordlight_cli::run(std::env::args_os(), &mut stdout, &mut stderr)
}
