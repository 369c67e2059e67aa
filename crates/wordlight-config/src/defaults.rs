use camino::Utf8PathBuf;
use std::env;

use dirs::config_dir;

use crate::logging::LogFormat;
use crate::matching::RescanPolicy;

/// Default log filter expression used by the binary.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default highlight colour.
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "yellow";

/// Default number of remembered text files.
pub const DEFAULT_RECENT_FILES_LIMIT: usize = 10;

/// Largest accepted recent-files limit.
pub const RECENT_FILES_LIMIT_MAX: usize = 50;

/// Default log filter expression used by the binary.
pub fn default_log_filter() -> &'static str {
    DEFAULT_LOG_FILTER
}

/// Owned log filter value used where allocation is required (e.g. serde).
pub fn default_log_filter_string() -> String {
    DEFAULT_LOG_FILTER.to_string()
}

/// Default logging format for the binary.
pub fn default_log_format() -> LogFormat {
    LogFormat::Compact
}

/// Owned highlight colour value used where allocation is required.
pub fn default_highlight_color_string() -> String {
    DEFAULT_HIGHLIGHT_COLOR.to_string()
}

/// Default rescan policy.
pub fn default_rescan_policy() -> RescanPolicy {
    RescanPolicy::Full
}

/// Computes the default location of the persisted settings file.
pub fn default_settings_path() -> Utf8PathBuf {
    let mut base = match settings_base_directory() {
        Some(dir) => dir,
        None => fallback_base_directory(),
    };
    base.push("wordlight");
    base.join("settings.json")
}

fn settings_base_directory() -> Option<Utf8PathBuf> {
    config_dir().and_then(|path| Utf8PathBuf::from_path_buf(path).ok())
}

fn fallback_base_directory() -> Utf8PathBuf {
    let candidate = env::temp_dir();
    Utf8PathBuf::from_path_buf(candidate).unwrap_or_else(|_| Utf8PathBuf::from("/tmp"))
}
