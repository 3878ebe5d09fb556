//! Cache metadata and fetch statistics

use super::CatalogCache;
use std::time::Duration;

/// Statistics about one fetch-and-merge pass
#[derive(Debug, Clone)]
pub struct FetchStats {
    /// Rows merged from this fetch (new plus replaced)
    pub rows_merged: usize,

    /// Observations held after the merge
    pub cached_total: usize,

    /// Wall-clock time for the request, parse, and merge
    pub fetch_duration: Duration,
}

impl FetchStats {
    /// One-line human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "{} rows merged in {:.2}s, cache holds {}",
            self.rows_merged,
            self.fetch_duration.as_secs_f64(),
            self.cached_total
        )
    }
}

/// Snapshot of a cache's state and lifetime activity
#[derive(Debug, Clone)]
pub struct CacheMetadata {
    /// Observations currently held
    pub row_count: usize,

    /// Fetches issued since construction (survives [`clear`])
    ///
    /// [`clear`]: super::CatalogCache::clear
    pub fetches_issued: usize,

    /// Rows merged since construction
    pub rows_merged: usize,

    /// The OCAT endpoint this cache queries
    pub ocat_url: String,
}

impl CatalogCache {
    /// Snapshot the cache's metadata
    pub fn metadata(&self) -> CacheMetadata {
        CacheMetadata {
            row_count: self.len(),
            fetches_issued: self.fetches_issued,
            rows_merged: self.rows_merged,
            ocat_url: self.config.ocat_url.clone(),
        }
    }
}
