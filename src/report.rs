// src/report.rs
// =============================================================================
// Collects findings as documents finish and renders the final report.
//
// The report is filled in document order (see checker::check_site), so two
// runs over the same output directory produce the same text.
// =============================================================================

use anyhow::Result;
use serde::Serialize;
use std::fmt::Write as _;

use crate::checker::{DocumentOutcome, LinkKind};

/// One broken link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Finding {
    /// Document containing the link, relative to the site root
    pub file: String,
    /// The href value exactly as written
    pub link: String,
    pub kind: LinkKind,
    pub issue: String,
    /// Internal links only: the file we looked for, relative to the site root
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_to: Option<String>,
}

impl Finding {
    pub fn internal(file: impl Into<String>, link: impl Into<String>, resolved_to: impl Into<String>) -> Self {
        Finding {
            file: file.into(),
            link: link.into(),
            kind: LinkKind::Internal,
            issue: "File does not exist".to_string(),
            resolved_to: Some(resolved_to.into()),
        }
    }

    pub fn external(file: impl Into<String>, link: impl Into<String>, issue: impl Into<String>) -> Self {
        Finding {
            file: file.into(),
            link: link.into(),
            kind: LinkKind::External,
            issue: issue.into(),
            resolved_to: None,
        }
    }
}

#[derive(Debug, Default)]
pub struct Report {
    findings: Vec<Finding>,
    files_checked: usize,
    external_urls_checked: usize,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    ok: bool,
    files_checked: usize,
    external_urls_checked: usize,
    internal: Vec<&'a Finding>,
    external: Vec<&'a Finding>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the result of one document.
    pub fn record(&mut self, outcome: DocumentOutcome) {
        self.files_checked += 1;

        for finding in &outcome.findings {
            log::debug!("{}: broken {:?} link {} ({})", finding.file, finding.kind, finding.link, finding.issue);
        }

        self.findings.extend(outcome.findings);
    }

    pub fn set_external_urls_checked(&mut self, count: usize) {
        self.external_urls_checked = count;
    }

    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    pub fn files_checked(&self) -> usize {
        self.files_checked
    }

    pub fn external_urls_checked(&self) -> usize {
        self.external_urls_checked
    }

    pub fn is_ok(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn exit_code(&self) -> i32 {
        if self.is_ok() {
            0
        } else {
            1
        }
    }

    pub fn internal(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(LinkKind::Internal)
    }

    pub fn external(&self) -> impl Iterator<Item = &Finding> {
        self.of_kind(LinkKind::External)
    }

    fn of_kind(&self, kind: LinkKind) -> impl Iterator<Item = &Finding> {
        self.findings.iter().filter(move |f| f.kind == kind)
    }

    // Human-readable report
    //
    // Success: a one-line verdict plus counts.
    // Failure: internal findings, then external findings, then totals.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if self.is_ok() {
            let _ = writeln!(out, "✅ All links are valid!\n");
            let _ = writeln!(out, "   Checked {} unique external URLs", self.external_urls_checked);
            let _ = writeln!(out, "   Checked {} HTML files", self.files_checked);
            return out;
        }

        let internal: Vec<_> = self.internal().collect();
        let external: Vec<_> = self.external().collect();

        if !internal.is_empty() {
            let _ = writeln!(out, "❌ Found {} broken internal link(s):\n", internal.len());
            for (i, finding) in internal.iter().enumerate() {
                write_finding(&mut out, i + 1, finding);
            }
        }

        if !external.is_empty() {
            let _ = writeln!(out, "❌ Found {} broken external link(s):\n", external.len());
            for (i, finding) in external.iter().enumerate() {
                write_finding(&mut out, i + 1, finding);
            }
        }

        let _ = writeln!(out, "Total errors: {}", self.findings.len());
        let _ = writeln!(out, "Checked {} unique external URLs", self.external_urls_checked);
        out
    }

    pub fn render_json(&self) -> Result<String> {
        let report = JsonReport {
            ok: self.is_ok(),
            files_checked: self.files_checked,
            external_urls_checked: self.external_urls_checked,
            internal: self.internal().collect(),
            external: self.external().collect(),
        };
        Ok(serde_json::to_string_pretty(&report)?)
    }
}

fn write_finding(out: &mut String, number: usize, finding: &Finding) {
    let _ = writeln!(out, "{}. {}", number, finding.file);
    let _ = writeln!(out, "   Link: {}", finding.link);
    let _ = writeln!(out, "   Issue: {}", finding.issue);
    if let Some(resolved) = &finding.resolved_to {
        let _ = writeln!(out, "   Resolved to: {}", resolved);
    }
    out.push('\n');
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why `let _ = writeln!(out, ...)`?
//    - writeln! into a String goes through fmt::Write and returns a Result
//    - Writing to a String cannot fail, so the Result is discarded
//
// 2. Why #[serde(skip_serializing_if = "Option::is_none")]?
//    - External findings have no resolved path, so the JSON omits the key
//      instead of printing "resolved_to": null
//
// 3. Why is render_text a method returning String instead of printing?
//    - Tests can compare the whole report text directly
//    - main decides where the text goes
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome(document: &str, findings: Vec<Finding>) -> DocumentOutcome {
        DocumentOutcome {
            document: document.to_string(),
            links_checked: findings.len(),
            findings,
        }
    }

    #[test]
    fn test_empty_report_passes() {
        let mut report = Report::new();
        report.record(outcome("index.html", vec![]));
        report.record(outcome("about.html", vec![]));
        report.set_external_urls_checked(3);

        assert!(report.is_ok());
        assert_eq!(report.exit_code(), 0);
        assert_eq!(report.files_checked(), 2);
        assert_eq!(
            report.render_text(),
            "✅ All links are valid!\n\n   Checked 3 unique external URLs\n   Checked 2 HTML files\n"
        );
    }

    #[test]
    fn test_findings_are_partitioned_by_kind() {
        let mut report = Report::new();
        report.record(outcome(
            "a.html",
            vec![
                Finding::external("a.html", "https://example.invalid/", "Failed to fetch: dns error"),
                Finding::internal("a.html", "/missing-page", "missing-page.html"),
            ],
        ));
        report.record(outcome("b.html", vec![Finding::internal("b.html", "x", "x.html")]));
        report.set_external_urls_checked(1);

        assert!(!report.is_ok());
        assert_eq!(report.exit_code(), 1);
        assert_eq!(report.internal().count(), 2);
        assert_eq!(report.external().count(), 1);

        let expected = "\
❌ Found 2 broken internal link(s):

1. a.html
   Link: /missing-page
   Issue: File does not exist
   Resolved to: missing-page.html

2. b.html
   Link: x
   Issue: File does not exist
   Resolved to: x.html

❌ Found 1 broken external link(s):

1. a.html
   Link: https://example.invalid/
   Issue: Failed to fetch: dns error

Total errors: 3
Checked 1 unique external URLs
";
        assert_eq!(report.render_text(), expected);
    }

    #[test]
    fn test_json_report() {
        let mut report = Report::new();
        report.record(outcome("a.html", vec![Finding::external("a.html", "https://x.test/", "HTTP 404")]));

        let json: serde_json::Value = serde_json::from_str(&report.render_json().unwrap()).unwrap();
        assert_eq!(json["ok"], false);
        assert_eq!(json["files_checked"], 1);
        assert_eq!(json["internal"].as_array().unwrap().len(), 0);
        assert_eq!(json["external"][0]["kind"], "external");
        assert_eq!(json["external"][0]["issue"], "HTTP 404");
        assert!(json["external"][0].get("resolved_to").is_none());
    }
}
