//! Layered configuration for the Wordlight tools.
//!
//! [`Config`] is assembled by `ortho_config` from, in increasing order of
//! precedence: built-in defaults, a TOML file named by `--config-path` or
//! `WORDLIGHT_CONFIG_PATH`, `WORDLIGHT_*` environment variables, and command
//! line flags.

mod defaults;
mod logging;
mod matching;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use defaults::{
    DEFAULT_HIGHLIGHT_COLOR, DEFAULT_LOG_FILTER, DEFAULT_RECENT_FILES_LIMIT,
    RECENT_FILES_LIMIT_MAX, default_highlight_color_string, default_log_filter,
    default_log_filter_string, default_log_format, default_rescan_policy, default_settings_path,
};
pub use logging::{LogFormat, LogFormatParseError};
pub use matching::{RescanPolicy, RescanPolicyParseError};

/// Runtime configuration shared by the Wordlight binary and its tests.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, OrthoConfig)]
#[ortho_config(prefix = "WORDLIGHT")]
pub struct Config {
    /// Tracing filter expression, for example `info` or `wordlight=debug`.
    #[ortho_config(default = default_log_filter_string())]
    pub log_filter: String,
    /// Output format for log records.
    #[ortho_config(default = default_log_format())]
    pub log_format: LogFormat,
    /// Whether words match only when their case matches.
    #[ortho_config(default = false)]
    pub case_sensitive: bool,
    /// Whether loaded words are lowercased before matching.
    #[ortho_config(default = true)]
    pub lowercase_words: bool,
    /// Colour used to paint matches (`#rrggbb`, `#rgb`, or a colour name).
    #[ortho_config(default = default_highlight_color_string())]
    pub highlight_color: String,
    /// How document edits are rescanned.
    #[ortho_config(default = default_rescan_policy())]
    pub rescan_mode: RescanPolicy,
    /// Location of the persisted settings file.
    pub settings_path: Option<Utf8PathBuf>,
    /// Number of text files remembered in the recent-files list.
    #[ortho_config(default = DEFAULT_RECENT_FILES_LIMIT)]
    pub recent_files_limit: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: default_log_filter_string(),
            log_format: default_log_format(),
            case_sensitive: false,
            lowercase_words: true,
            highlight_color: default_highlight_color_string(),
            rescan_mode: default_rescan_policy(),
            settings_path: None,
            recent_files_limit: DEFAULT_RECENT_FILES_LIMIT,
        }
    }
}

impl Config {
    /// Tracing filter expression.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_str()
    }

    /// Log output format.
    pub const fn log_format(&self) -> LogFormat {
        self.log_format
    }

    /// Whether matching respects case.
    pub const fn case_sensitive(&self) -> bool {
        self.case_sensitive
    }

    /// Whether loaded words are lowercased.
    pub const fn lowercase_words(&self) -> bool {
        self.lowercase_words
    }

    /// Configured highlight colour, unparsed.
    pub fn highlight_color(&self) -> &str {
        self.highlight_color.as_str()
    }

    /// Rescan policy for document edits.
    pub const fn rescan_mode(&self) -> RescanPolicy {
        self.rescan_mode
    }

    /// Settings file location, falling back to the platform default.
    pub fn settings_path(&self) -> Utf8PathBuf {
        self.settings_path
            .clone()
            .unwrap_or_else(default_settings_path)
    }

    /// Recent-files limit.
    pub const fn recent_files_limit(&self) -> usize {
        self.recent_files_limit
    }

    /// Checks values that the loaders cannot validate on their own.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RecentFilesLimit`] when the recent-files limit
    /// lies outside `1..=50`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if (1..=RECENT_FILES_LIMIT_MAX).contains(&self.recent_files_limit) {
            Ok(())
        } else {
            Err(ConfigError::RecentFilesLimit {
                value: self.recent_files_limit,
            })
        }
    }
}

/// Errors raised while validating a loaded [`Config`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The recent-files limit is outside the supported range.
    #[error("recent_files_limit must be between 1 and {max}, got {value}", max = RECENT_FILES_LIMIT_MAX)]
    RecentFilesLimit {
        /// The rejected value.
        value: usize,
    },
}
