//! Matching settings forwarded to the highlight engine.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// How document edits are rescanned.
#[derive(
    Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq, EnumString, Display,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum RescanPolicy {
    /// Rescan the whole document after every edit.
    #[default]
    Full,
    /// Rescan from the start of the edited run.
    Incremental,
}

/// Errors encountered while parsing a [`RescanPolicy`] from text.
pub type RescanPolicyParseError = strum::ParseError;

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;

    #[rstest]
    #[case("full", RescanPolicy::Full)]
    #[case("INCREMENTAL", RescanPolicy::Incremental)]
    fn parses_case_insensitively(#[case] input: &str, #[case] expected: RescanPolicy) {
        assert_eq!(input.parse::<RescanPolicy>().expect("parse policy"), expected);
    }

    #[test]
    fn rejects_unknown_policy() {
        assert!("partial".parse::<RescanPolicy>().is_err());
    }

    #[test]
    fn displays_snake_case() {
        assert_eq!(RescanPolicy::Incremental.to_string(), "incremental");
    }
}
