// src/checker/mod.rs
// =============================================================================
// This module contains all link checking logic.
//
// Submodules:
// - html: extracts href targets from a document
// - classify: tags each target Internal or External
// - internal: resolves internal targets against the output directory
// - http: probes external targets with HEAD requests
// - cache: remembers every external verdict for the rest of the run
//
// This file ties them together: check_site walks the output directory and
// checks documents through a bounded, order-preserving stream, handing each
// finished document to the report as soon as it is done.
// =============================================================================

mod cache;
mod classify;
mod html;
mod http;
mod internal;

pub use cache::VerificationCache;
pub use classify::{classify, Link, LinkKind};
pub use html::{extract_html_links, is_ignored_link};
pub use http::{ExternalVerifier, Verdict};
pub use internal::{candidate_path, resolve_internal, Resolution};

use anyhow::{Context, Result};
use futures::stream::{self, StreamExt};
use std::io::Write;
use std::path::Path;

use crate::config::CheckConfig;
use crate::crawl::{discover_site, Site};
use crate::report::{Finding, Report};

/// Everything found wrong in one document.
#[derive(Debug, Clone)]
pub struct DocumentOutcome {
    /// Path relative to the site root
    pub document: String,
    pub links_checked: usize,
    pub findings: Vec<Finding>,
}

// Checks the whole site described by `config`
//
// Returns: the finished report, or an error if the output directory is
// missing (crawl::SiteError::RootNotFound) or something unexpected failed
// (an unreadable document, for example).
pub async fn check_site(config: &CheckConfig) -> Result<Report> {
    // Step 1: find every document (fatal if the build never ran)
    let mut site = discover_site(&config.root)?;
    // Walk order is filesystem-dependent; sort for a stable report
    site.documents.sort();

    if config.show_progress {
        println!("Found {} HTML files to check\n", site.documents.len());
    }

    // Step 2: one verifier for the whole run, so its cache is shared
    let verifier = ExternalVerifier::new(config)?;
    let mut report = Report::new();

    // Step 3: check documents concurrently; buffered() yields them in order

    let outcomes = stream::iter(&site.documents)
        .map(|document| check_document(&site, document, &verifier, config))
        .buffered(config.jobs.max(1));
    let mut outcomes = std::pin::pin!(outcomes);

    while let Some(outcome) = outcomes.next().await {
        let outcome = outcome?;
        log::debug!(
            "{}: {} link(s), {} broken",
            outcome.document,
            outcome.links_checked,
            outcome.findings.len()
        );
        report.record(outcome);
    }

    if config.show_progress {
        println!("\n");
    }

    // Step 4: every cached verdict is one distinct external URL
    report.set_external_urls_checked(verifier.cache().len());
    Ok(report)
}

// Checks every link of one document
//
// Links are checked concurrently but the findings keep the order in which
// the links first appear in the document.
pub async fn check_document(
    site: &Site,
    document: &Path,
    verifier: &ExternalVerifier,
    config: &CheckConfig,
) -> Result<DocumentOutcome> {
    let relative = site.relative(document);

    if config.show_progress {
        print!("Checking {}...\r", relative);
        let _ = std::io::stdout().flush();
    }

    // Non-UTF-8 content fails here too and stops the run
    let content = tokio::fs::read_to_string(document)
        .await
        .with_context(|| format!("Failed to read {}", document.display()))?;

    let links: Vec<Link> = extract_html_links(&content)
        .into_iter()
        .map(Link::classify)
        .collect();
    let links_checked = links.len();

    let findings: Vec<Finding> = stream::iter(links)
        .map(|link| check_link(site, document, &relative, link, verifier))
        .buffered(config.jobs.max(1))
        // None means the link is fine
        .filter_map(|finding| async move { finding })
        .collect()
        .await;

    Ok(DocumentOutcome {
        document: relative,
        links_checked,
        findings,
    })
}

async fn check_link(
    site: &Site,
    document: &Path,
    relative: &str,
    link: Link,
    verifier: &ExternalVerifier,
) -> Option<Finding> {
    match link.kind {
        LinkKind::Internal => match resolve_internal(&site.root, document, &link.raw) {
            Resolution::Found(_) => None,
            Resolution::Missing(candidate) => {
                Some(Finding::internal(relative, link.raw, site.relative(&candidate)))
            }
        },
        LinkKind::External => {
            let verdict = verifier.verify(&link.raw).await;
            verdict
                .issue()
                .map(|issue| Finding::external(relative, link.raw, issue))
        }
    }
}
