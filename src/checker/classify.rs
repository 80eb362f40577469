// src/checker/classify.rs
// =============================================================================
// Splits extracted links into the two kinds we know how to check.
//
// External = starts with http:// or https:// (case-sensitive).
// Everything else is Internal, including protocol-relative "//host/path"
// links, which therefore get resolved against the output directory.
// =============================================================================

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    /// Resolved against the generated files on disk
    Internal,
    /// Verified with a HEAD request
    External,
}

/// A link found in a document, tagged with how it gets checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Link {
    pub raw: String,
    pub kind: LinkKind,
}

impl Link {
    pub fn classify(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let kind = classify(&raw);
        Link { raw, kind }
    }
}

pub fn classify(link: &str) -> LinkKind {
    if link.starts_with("http://") || link.starts_with("https://") {
        LinkKind::External
    } else {
        LinkKind::Internal
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_and_https_are_external() {
        assert_eq!(classify("http://example.com"), LinkKind::External);
        assert_eq!(classify("https://example.com/a?b#c"), LinkKind::External);
    }

    #[test]
    fn test_everything_else_is_internal() {
        for link in ["/about", "docs/", "../x.png", "#top", "?q=1", "ftp://host/file"] {
            assert_eq!(classify(link), LinkKind::Internal, "{link}");
        }
    }

    #[test]
    fn test_prefix_match_is_case_sensitive() {
        assert_eq!(classify("HTTPS://example.com"), LinkKind::Internal);
    }

    #[test]
    fn test_protocol_relative_is_internal() {
        assert_eq!(classify("//cdn.example.com/lib.js"), LinkKind::Internal);
    }

    #[test]
    fn test_link_keeps_raw_text() {
        let link = Link::classify("https://example.com");
        assert_eq!(link.raw, "https://example.com");
        assert_eq!(link.kind, LinkKind::External);
    }
}
