//! In-memory observation cache with fetch-on-miss
//!
//! This module provides the stateful core of the client: a lazily
//! populated cache of catalog rows keyed by observation identifier.
//! A lookup for an identifier not yet cached triggers a blocking fetch
//! scoped to that identifier; search fetches merge every returned row.
//! Rows never expire; only [`CatalogCache::clear`] empties the store.

use crate::app::models::CatalogRow;
use crate::app::services::ocat_parser::OcatTableParser;
use crate::config::ClientConfig;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use tracing::info;

pub mod fetch;
pub mod metadata;
pub mod query;

#[cfg(test)]
pub mod tests;

// Re-export key types for convenience
pub use fetch::SearchCriteria;
pub use metadata::{CacheMetadata, FetchStats};

/// Lazily populated catalog cache keyed by observation identifier
///
/// Owns the fetched rows and an identifier index into them. Identifiers
/// are compared as strings: `get(1234)` and `get("1234")` resolve to the
/// same entry. The cache makes no thread-safety claims; callers needing
/// shared access must serialize it themselves.
#[derive(Debug)]
pub struct CatalogCache {
    /// Fetched rows in arrival order
    pub(crate) rows: Vec<CatalogRow>,

    /// Observation identifier to row position
    pub(crate) index: HashMap<String, usize>,

    /// Parser applied to every fetched response
    pub(crate) parser: OcatTableParser,

    /// Client configuration, immutable after construction
    pub(crate) config: ClientConfig,

    /// Blocking HTTP client for catalog requests
    pub(crate) client: reqwest::blocking::Client,

    /// Fetches issued over the cache's lifetime
    pub(crate) fetches_issued: usize,

    /// Rows merged over the cache's lifetime
    pub(crate) rows_merged: usize,
}

impl CatalogCache {
    /// Create an empty cache against the production catalog service
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create an empty cache with a caller-supplied configuration
    pub fn with_config(config: ClientConfig) -> Self {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build()
            .unwrap_or_default();

        Self {
            rows: Vec::new(),
            index: HashMap::new(),
            parser: OcatTableParser::new(),
            config,
            client,
            fetches_issued: 0,
            rows_merged: 0,
        }
    }

    /// Look up an observation, fetching it from the service on a miss
    ///
    /// A miss issues a fetch scoped to exactly this identifier. If the
    /// service answers with rows but none carries the identifier, the
    /// defensive [`Error::ObsidNotFound`] is raised rather than returning
    /// an unrelated row.
    pub fn get<I: ToString>(&mut self, obsid: I) -> Result<&CatalogRow> {
        let key = obsid.to_string();
        if !self.index.contains_key(&key) {
            let criteria = SearchCriteria::obsid(&key);
            self.fetch_catalog_data(&criteria)?;
        }
        match self.index.get(&key) {
            Some(&position) => Ok(&self.rows[position]),
            None => Err(Error::obsid_not_found(key)),
        }
    }

    /// Fetch every observation matching the criteria into the cache
    ///
    /// The criteria map directly to the service's filter fields. All
    /// returned rows are merged, whether or not they were already cached.
    pub fn find(&mut self, criteria: &SearchCriteria) -> Result<()> {
        self.fetch_catalog_data(criteria)?;
        Ok(())
    }

    /// True if the identifier is cached right now; never fetches
    pub fn contains<I: ToString>(&self, obsid: I) -> bool {
        self.index.contains_key(&obsid.to_string())
    }

    /// Number of observations currently held
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// True if no observations are cached
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drop all rows and the index, returning to the initial empty state
    ///
    /// Lifetime fetch counters survive so [`CatalogCache::metadata`] keeps
    /// describing the cache's full history.
    pub fn clear(&mut self) {
        info!("Clearing catalog cache ({} observations)", self.rows.len());
        self.rows.clear();
        self.index.clear();
    }
}

impl Default for CatalogCache {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CatalogCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CatalogCache ({} ObsIDs)", self.len())
    }
}
