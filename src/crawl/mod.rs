// src/crawl/mod.rs
// =============================================================================
// This module finds the documents to check.
//
// The site has already been built to disk, so "crawling" is a directory walk
// over the output tree rather than following links over the network.
// =============================================================================

mod walk;

pub use walk::{discover_site, relative_to, Site, SiteError, DOCUMENT_EXTENSION};
