//! Shared fixtures for CLI unit tests.

use std::ffi::OsString;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use camino::Utf8PathBuf;
use rstest::fixture;
use tempfile::TempDir;
use wordlight_config::Config;

use crate::{AppError, ConfigLoader, IoStreams, run_with_loader};

pub(super) struct StaticConfigLoader {
    config: Config,
}

impl StaticConfigLoader {
    pub(super) fn new(config: Config) -> Self {
        Self { config }
    }
}

impl ConfigLoader for StaticConfigLoader {
    fn load(&self, _args: &[OsString]) -> Result<Config, AppError> {
        Ok(self.config.clone())
    }
}

/// Captured result of one CLI invocation.
pub(super) struct Outcome {
    pub exit: ExitCode,
    pub stdout: String,
    pub stderr: String,
}

/// Temporary directory holding wordbooks, text files, and settings.
pub(super) struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub(super) fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).expect("write workspace file");
        path
    }

    pub(super) fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    pub(super) fn settings_path(&self) -> Utf8PathBuf {
        Utf8PathBuf::from_path_buf(self.path("settings.json")).expect("utf-8 temp path")
    }

    pub(super) fn config(&self) -> Config {
        Config {
            settings_path: Some(self.settings_path()),
            ..Config::default()
        }
    }

    pub(super) fn run(&self, config: Config, args: &[&str], stdout_is_terminal: bool) -> Outcome {
        let mut stdout = Vec::new();
        let mut stderr = Vec::new();
        let argv = std::iter::once("wordlight")
            .chain(args.iter().copied())
            .map(OsString::from);
        let exit = {
            let mut io = IoStreams::new(&mut stdout, &mut stderr, stdout_is_terminal);
            run_with_loader(argv, &mut io, &StaticConfigLoader::new(config))
        };
        Outcome {
            exit,
            stdout: String::from_utf8(stdout).expect("stdout utf8"),
            stderr: String::from_utf8(stderr).expect("stderr utf8"),
        }
    }
}

#[fixture]
pub(super) fn workspace() -> Workspace {
    let workspace = Workspace {
        dir: TempDir::new().expect("create temp dir"),
    };
    workspace.write("words.txt", "The\nof\nthesis\n");
    workspace.write("notes.txt", "The theology of leather");
    workspace
}
