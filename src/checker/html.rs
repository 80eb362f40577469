// src/checker/html.rs
// =============================================================================
// This module extracts links from generated HTML documents.
//
// Extraction is purely lexical: we look for double-quoted href="..."
// attributes with a regex and never build a DOM. Generated pages can contain
// odd markup (inline SVG, templated fragments) and a pattern match keeps
// working where a parser might reinterpret the document.
//
// Known limitation: single-quoted and unquoted attributes are not recognised.
// =============================================================================

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

static HREF_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"href="([^"]+)""#).expect("href pattern is valid"));

// Extracts the distinct, checkable link targets of one document
//
// Parameters:
//   html: the raw document text
//
// Returns: link strings in order of first appearance, each at most once
//
// Example:
//   html = r#"<a href="/docs">Docs</a> <a href="/docs">Again</a>"#
//   result = ["/docs"]
pub fn extract_html_links(html: &str) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut links = Vec::new();

    for captures in HREF_PATTERN.captures_iter(html) {
        let Some(target) = captures.get(1).map(|m| m.as_str()) else {
            continue;
        };

        if is_ignored_link(target) {
            continue;
        }

        if seen.insert(target) {
            links.push(target.to_string());
        }
    }

    links
}

// Links that are never checked: nothing to resolve locally or remotely
//
// We skip:
// - empty targets
// - a bare "#" (in-page anchor placeholder)
// - mailto: links (email)
// - tel: links (phone)
pub fn is_ignored_link(link: &str) -> bool {
    link.is_empty() || link == "#" || link.starts_with("mailto:") || link.starts_with("tel:")
}
