//! Configuration loading helpers for the CLI.
//!
//! Arguments destined for `ortho-config` are split off the front of the
//! command line so the loader only sees flags it understands while clap
//! parses the rest.

use std::ffi::{OsStr, OsString};

use ortho_config::OrthoConfig;
use wordlight_config::Config;

use crate::AppError;

pub(crate) trait ConfigLoader {
    /// Loads configuration for the CLI.
    ///
    /// Configuration flags (listed in `CONFIG_CLI_FLAGS`) must appear before
    /// any other argument; later occurrences are handed to clap instead.
    fn load(&self, args: &[OsString]) -> Result<Config, AppError>;
}

pub(crate) struct OrthoConfigLoader;

#[derive(Debug, Clone, Copy)]
enum FlagAction {
    Include { needs_value: bool },
    Skip,
}

impl ConfigLoader for OrthoConfigLoader {
    fn load(&self, args: &[OsString]) -> Result<Config, AppError> {
        let config =
            Config::load_from_iter(args.iter().cloned()).map_err(AppError::LoadConfiguration)?;
        config.validate()?;
        Ok(config)
    }
}

impl OrthoConfigLoader {
    fn process_config_flag(argument: &OsStr) -> FlagAction {
        let argument_text = argument.to_string_lossy();
        if !argument_text.starts_with("--") {
            return FlagAction::Skip;
        }

        let (flag, has_inline_value) = match argument_text.split_once('=') {
            Some((flag, _)) => (flag, true),
            None => (argument_text.as_ref(), false),
        };

        if super::CONFIG_CLI_FLAGS.contains(&flag) {
            return FlagAction::Include {
                needs_value: !has_inline_value,
            };
        }

        FlagAction::Skip
    }
}

pub(crate) struct ConfigArgumentSplit {
    pub(crate) config_arguments: Vec<OsString>,
    pub(crate) command_start: usize,
}

pub(crate) fn split_config_arguments(args: &[OsString]) -> ConfigArgumentSplit {
    let Some(program) = args.first() else {
        return ConfigArgumentSplit {
            config_arguments: Vec::new(),
            command_start: 0,
        };
    };

    let mut filtered: Vec<OsString> = vec![program.clone()];
    let mut command_start = 1_usize;
    let mut pending_value = false;

    for argument in args.iter().skip(1) {
        if pending_value {
            filtered.push(argument.clone());
            command_start += 1;
            pending_value = false;
            continue;
        }

        match OrthoConfigLoader::process_config_flag(argument.as_os_str()) {
            FlagAction::Include { needs_value } => {
                filtered.push(argument.clone());
                command_start += 1;
                pending_value = needs_value;
            }
            FlagAction::Skip => break,
        }
    }

    ConfigArgumentSplit {
        config_arguments: filtered,
        command_start,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn inline_values_complete_the_flag() {
        let result = OrthoConfigLoader::process_config_flag(OsStr::new("--log-filter=debug"));
        assert!(matches!(result, FlagAction::Include { needs_value: false }));
    }

    #[test]
    fn bare_flag_takes_the_next_argument() {
        let result = OrthoConfigLoader::process_config_flag(OsStr::new("--highlight-color"));
        assert!(matches!(result, FlagAction::Include { needs_value: true }));
    }

    #[test]
    fn positional_and_unknown_arguments_stop_the_split() {
        for argument in ["notes.txt", "--wordbook", "--output=json"] {
            let result = OrthoConfigLoader::process_config_flag(OsStr::new(argument));
            assert!(matches!(result, FlagAction::Skip), "{argument} should stop");
        }
    }

    #[test]
    fn leading_config_flags_are_split_from_the_command() {
        let argv = args(&[
            "wordlight",
            "--highlight-color",
            "red",
            "--log-filter=debug",
            "--wordbook",
            "words.txt",
            "notes.txt",
        ]);
        let split = split_config_arguments(&argv);
        assert_eq!(
            split.config_arguments,
            args(&["wordlight", "--highlight-color", "red", "--log-filter=debug"])
        );
        assert_eq!(split.command_start, 4);
    }

    #[test]
    fn config_flags_after_the_command_are_left_for_clap() {
        let argv = args(&["wordlight", "notes.txt", "--highlight-color", "red"]);
        let split = split_config_arguments(&argv);
        assert_eq!(split.config_arguments, args(&["wordlight"]));
        assert_eq!(split.command_start, 1);
    }

    #[test]
    fn empty_arguments_split_to_nothing() {
        let split = split_config_arguments(&[]);
        assert!(split.config_arguments.is_empty());
        assert_eq!(split.command_start, 0);
    }
}
