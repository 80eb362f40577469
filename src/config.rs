// src/config.rs
// =============================================================================
// Runtime settings for one check run.
//
// The tool is zero-configuration: CheckConfig::new(root) carries every
// default, and the CLI only overrides what the user passed explicitly.
// =============================================================================

use std::path::PathBuf;
use std::time::Duration;

use crate::cli::Cli;

/// Default output directory of the site build, relative to the working dir.
pub const DEFAULT_ROOT: &str = "public";

/// Per-probe timeout for external links.
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Documents checked and probes in flight at once.
pub const DEFAULT_JOBS: usize = 16;

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; LinkChecker/1.0)";

#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub root: PathBuf,
    pub timeout: Duration,
    pub jobs: usize,
    pub user_agent: String,
    /// Print a "Checking <file>..." line per document
    pub show_progress: bool,
}

impl CheckConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        CheckConfig {
            root: root.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            jobs: DEFAULT_JOBS,
            user_agent: USER_AGENT.to_string(),
            show_progress: true,
        }
    }
}

impl Default for CheckConfig {
    fn default() -> Self {
        CheckConfig::new(DEFAULT_ROOT)
    }
}

impl From<&Cli> for CheckConfig {
    fn from(cli: &Cli) -> Self {
        CheckConfig {
            // a zero timeout would fail every external link
            timeout: Duration::from_secs(cli.timeout.max(1)),
            // buffered(0) would never make progress
            jobs: cli.jobs.max(1),
            // progress lines would corrupt the JSON on stdout
            show_progress: !cli.json,
            ..CheckConfig::new(cli.root.clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let config = CheckConfig::default();
        assert_eq!(config.root, PathBuf::from("public"));
        assert_eq!(config.timeout, Duration::from_secs(10));
        assert_eq!(config.jobs, 16);
        assert_eq!(config.user_agent, USER_AGENT);
    }

    #[test]
    fn test_no_arguments_gives_defaults() {
        let cli = Cli::parse_from(["linkgate"]);
        let config = CheckConfig::from(&cli);
        assert_eq!(config.root, PathBuf::from(DEFAULT_ROOT));
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
        assert_eq!(config.jobs, DEFAULT_JOBS);
        assert!(config.show_progress);
    }

    #[test]
    fn test_cli_overrides() {
        let cli = Cli::parse_from(["linkgate", "site/out", "--timeout", "3", "-j", "0", "--json"]);
        let config = CheckConfig::from(&cli);
        assert!(!config.show_progress);
        assert_eq!(config.root, PathBuf::from("site/out"));
        assert_eq!(config.timeout, Duration::from_secs(3));
        assert_eq!(config.jobs, 1);
    }

    #[test]
    fn test_zero_timeout_is_raised_to_one_second() {
        let cli = Cli::parse_from(["linkgate", "--timeout", "0"]);
        let config = CheckConfig::from(&cli);
        assert_eq!(config.timeout, Duration::from_secs(1));
    }
}
