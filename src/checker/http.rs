// src/checker/http.rs
// =============================================================================
// This module checks external links by making HTTP requests.
//
// Key functionality:
// - One HEAD request per distinct URL per run (see cache.rs)
// - Redirects are NOT followed: a 3xx answer already counts as alive
// - No GET fallback: a server that rejects HEAD (405) is reported broken
// - No retries: a flaky endpoint fails the run it flaked in
// - A semaphore caps the number of requests in flight
// =============================================================================

use anyhow::{Context, Result};
use reqwest::{Client, StatusCode};
use tokio::sync::Semaphore;
use url::Url;

use super::cache::VerificationCache;
use crate::config::CheckConfig;

// The verdict for one external URL
//
// Only Ok counts as passing; every other variant becomes a finding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Answered with a status in [200, 400)
    Ok(u16),
    /// Answered with any other status
    BadStatus(u16),
    /// The request never got an answer (DNS, refused, TLS, invalid URL, ...)
    NetworkError(String),
    /// No answer within the timeout; the request was aborted
    Timeout,
}

impl Verdict {
    pub fn from_status(status: StatusCode) -> Self {
        let code = status.as_u16();
        if (200..400).contains(&code) {
            Verdict::Ok(code)
        } else {
            Verdict::BadStatus(code)
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Verdict::Ok(code) if (200..400).contains(code))
    }

    /// Human-readable problem description, `None` when the link is fine.
    pub fn issue(&self) -> Option<String> {
        match self {
            Verdict::Ok(_) => None,
            Verdict::BadStatus(code) => Some(format!("HTTP {}", code)),
            Verdict::NetworkError(message) => Some(format!("Failed to fetch: {}", message)),
            Verdict::Timeout => Some("Failed to fetch: Timeout".to_string()),
        }
    }
}

// Verifies external URLs, remembering every verdict for the rest of the run
pub struct ExternalVerifier {
    client: Client,
    cache: VerificationCache,
    permits: Semaphore,
}

impl ExternalVerifier {
    pub fn new(config: &CheckConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(config.user_agent.clone())
            .build()
            .context("Failed to create HTTP client")?;

        Ok(ExternalVerifier {
            client,
            cache: VerificationCache::new(),
            permits: Semaphore::new(config.jobs.max(1)),
        })
    }

    /// Verdict for `url`, probing it only if nobody has asked before.
    pub async fn verify(&self, url: &str) -> Verdict {
        self.cache
            .get_or_verify(url, move || async move {
                // The semaphore is never closed, so acquire cannot fail
                let _permit = self.permits.acquire().await.ok();
                let verdict = probe(&self.client, url).await;
                log::debug!("HEAD {} -> {:?}", url, verdict);
                verdict
            })
            .await
    }

    pub fn cache(&self) -> &VerificationCache {
        &self.cache
    }
}

// Sends the HEAD request and categorizes the outcome
async fn probe(client: &Client, url: &str) -> Verdict {
    if let Err(e) = Url::parse(url) {
        return Verdict::NetworkError(format!("invalid URL: {}", e));
    }

    match client.head(url).send().await {
        Ok(response) => Verdict::from_status(response.status()),
        Err(e) => categorize_error(&e),
    }
}

fn categorize_error(error: &reqwest::Error) -> Verdict {
    if error.is_timeout() {
        return Verdict::Timeout;
    }

    Verdict::NetworkError(error.to_string())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why HEAD and not GET?
//    - HEAD asks for the headers only, so no page bodies are downloaded
//    - We only need the status code to decide if a link is alive
//
// 2. Why does verify() take &self and not &mut self?
//    - Many documents call it at the same time from one stream
//    - The cache and the semaphore handle their own locking internally
//
// 3. What does the semaphore permit do?
//    - acquire() waits until fewer than `jobs` requests are running
//    - The permit is released when `_permit` is dropped at the end of the
//      closure
//
// 4. Why is is_timeout() checked first?
//    - A timeout is also a transport error; checking it first gives it its
//      own "Timeout" verdict instead of a generic network message
// -----------------------------------------------------------------------------
