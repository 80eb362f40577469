// src/lib.rs
// =============================================================================
// linkgate checks every link in a generated static site.
//
// Modules, leaf-first:
// - crawl: finds the HTML documents under the output directory
// - checker: extracts, classifies, resolves and verifies links
// - report: collects findings and renders the result
// - config / cli / logging: the ambient pieces used by the binary
// =============================================================================

pub mod checker;
pub mod cli;
pub mod config;
pub mod crawl;
pub mod logging;
pub mod report;

pub use checker::check_site;
pub use config::CheckConfig;
pub use report::{Finding, Report};
