// src/checker/cache.rs
// =============================================================================
// Run-scoped cache of external link verdicts.
//
// Every distinct URL is probed at most once per run. Each URL owns a
// tokio OnceCell: the first caller runs the probe, concurrent callers for the
// same URL wait on that cell and then read the same verdict. The map itself
// sits behind a std Mutex that is only held long enough to fetch or insert a
// cell, never across an .await.
//
// Nothing is persisted; the cache is dropped with the verifier at run end.
// =============================================================================

use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::OnceCell;

use super::http::Verdict;

#[derive(Debug, Default)]
pub struct VerificationCache {
    entries: Mutex<HashMap<String, Arc<OnceCell<Verdict>>>>,
}

impl VerificationCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cached verdict for `url`, or runs `probe` to produce it.
    ///
    /// `probe` runs at most once per URL for the lifetime of the cache, even
    /// when several tasks ask for the same URL at the same time.
    pub async fn get_or_verify<F, Fut>(&self, url: &str, probe: F) -> Verdict
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Verdict>,
    {
        let cell = self.cell(url);

        if let Some(verdict) = cell.get() {
            log::debug!("cache hit: {}", url);
            return verdict.clone();
        }

        cell.get_or_init(probe).await.clone()
    }

    /// A verdict that has already been recorded, if any.
    pub fn get(&self, url: &str) -> Option<Verdict> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.get(url).and_then(|cell| cell.get().cloned())
    }

    /// Number of URLs with a recorded verdict.
    pub fn len(&self) -> usize {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.values().filter(|cell| cell.initialized()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn cell(&self, url: &str) -> Arc<OnceCell<Verdict>> {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .entry(url.to_string())
            .or_insert_with(|| Arc::new(OnceCell::new()))
            .clone()
    }
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why a OnceCell per URL instead of just a HashMap<String, Verdict>?
//    - With a plain map, two documents checked at the same time can both
//      miss the cache and both send a request
//    - get_or_init lets exactly one caller run the probe; the others wait on
//      the same cell and read its value
//
// 2. Why Arc around the cell?
//    - We clone the cell out of the map and drop the lock before awaiting
//    - Holding a std MutexGuard across .await would block other tasks
//
// 3. What is PoisonError::into_inner?
//    - A Mutex is "poisoned" if a thread panicked while holding it
//    - Our map is still consistent in that case, so we keep using it
// -----------------------------------------------------------------------------
