// src/cli.rs
// =============================================================================
// Command-line interface, defined with clap's derive API.
//
// Running `linkgate` with no arguments checks ./public with the defaults, so
// it can be dropped into a CI pipeline right after the build step. Every
// argument below is optional.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_JOBS, DEFAULT_ROOT, DEFAULT_TIMEOUT_SECS};

#[derive(Parser, Debug)]
#[command(
    name = "linkgate",
    version,
    about = "Checks every link in a generated static site",
    long_about = "linkgate walks the HTML files produced by a static-site build, resolves every \
                  internal link against the output directory and sends a HEAD request to every \
                  external link. It exits with 1 if anything is broken."
)]
pub struct Cli {
    /// Output directory of the site build
    #[arg(default_value = DEFAULT_ROOT)]
    pub root: PathBuf,

    /// Print the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Timeout for each external HEAD request, in seconds (at least 1)
    #[arg(long, value_name = "SECS", default_value_t = DEFAULT_TIMEOUT_SECS)]
    pub timeout: u64,

    /// Maximum number of documents and external requests in flight
    #[arg(short, long, value_name = "N", default_value_t = DEFAULT_JOBS)]
    pub jobs: usize,

    /// Print debug logs to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_is_well_formed() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from(["linkgate", "--json", "-v"]);
        assert!(cli.json);
        assert!(cli.verbose);
        assert_eq!(cli.root, PathBuf::from("public"));
    }
}
