//! Catalog fetching and row merging
//!
//! This module implements the fetch half of the cache: serializing search
//! criteria into the service query, issuing the blocking HTTP GET, and
//! merging the parsed rows into the store. A fetch either fully succeeds
//! or leaves the store untouched; the response is parsed and typed in its
//! entirety before the first row is merged.

use super::metadata::FetchStats;
use super::CatalogCache;
use crate::constants::OCAT_FORMAT;
use crate::{Error, Result};
use std::fmt;
use std::time::Instant;
use tracing::{debug, info};

/// Field/value criteria forwarded to the service as query parameters
///
/// Field names follow the service's filter vocabulary (`obsid`,
/// `target_name`, `instrument`, ...). The rendered form appears in
/// empty-result errors so callers can tell "no such observation" from a
/// transport failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pairs: Vec<(String, String)>,
}

impl SearchCriteria {
    /// Create empty criteria
    pub fn new() -> Self {
        Self::default()
    }

    /// Criteria scoped to a single observation identifier
    pub fn obsid<I: ToString>(obsid: I) -> Self {
        Self::new().with("obsid", obsid.to_string())
    }

    /// Add a field/value pair, builder style
    pub fn with(mut self, field: impl Into<String>, value: impl ToString) -> Self {
        self.push(field, value);
        self
    }

    /// Add a field/value pair
    pub fn push(&mut self, field: impl Into<String>, value: impl ToString) {
        self.pairs.push((field.into(), value.to_string()));
    }

    /// The field/value pairs in insertion order
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }

    /// True if no criteria have been added
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }
}

impl fmt::Display for SearchCriteria {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, value) in &self.pairs {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{}={}", field, value)?;
            first = false;
        }
        Ok(())
    }
}

impl<F: Into<String>, V: ToString> FromIterator<(F, V)> for SearchCriteria {
    fn from_iter<T: IntoIterator<Item = (F, V)>>(iter: T) -> Self {
        let mut criteria = Self::new();
        for (field, value) in iter {
            criteria.push(field, value);
        }
        criteria
    }
}

impl CatalogCache {
    /// Fetch rows matching the criteria and merge them into the store
    pub(crate) fn fetch_catalog_data(&mut self, criteria: &SearchCriteria) -> Result<FetchStats> {
        let start = Instant::now();
        info!("Fetching catalog data: {}", criteria);

        let body = self.request(criteria)?;
        let merged = self.merge_response(&body, criteria)?;

        self.fetches_issued += 1;

        let stats = FetchStats {
            rows_merged: merged,
            cached_total: self.len(),
            fetch_duration: start.elapsed(),
        };
        info!("Fetch complete: {}", stats.summary());
        Ok(stats)
    }

    /// Issue the blocking HTTP GET and return the response body
    fn request(&self, criteria: &SearchCriteria) -> Result<String> {
        let mut query: Vec<(&str, &str)> = vec![("format", OCAT_FORMAT)];
        for (field, value) in criteria.pairs() {
            query.push((field, value));
        }

        debug!("GET {} with {} parameters", self.config.ocat_url, query.len());
        let response = self
            .client
            .get(&self.config.ocat_url)
            .query(&query)
            .send()
            .map_err(|e| Error::http(format!("GET {} failed", self.config.ocat_url), e))?;

        let response = response
            .error_for_status()
            .map_err(|e| Error::http("catalog service returned an error status", e))?;

        response
            .text()
            .map_err(|e| Error::http("failed to read catalog response body", e))
    }

    /// Parse a raw service response body and merge its rows into the store
    ///
    /// Public so offline captures of service output can be ingested and so
    /// merge semantics can be exercised without a network. Rows are
    /// deduplicated by identifier: a re-fetched observation replaces the
    /// row at its existing position, a new one is appended and indexed.
    /// Returns the number of rows merged.
    ///
    /// # Errors
    /// * [`Error::TableFormat`] / [`Error::Coercion`] if the body is
    ///   malformed; the store is left unchanged
    /// * [`Error::EmptyResult`] carrying `criteria` if the table parses to
    ///   zero data rows
    pub fn merge_response(&mut self, body: &str, criteria: &SearchCriteria) -> Result<usize> {
        let result = self.parser.parse(body)?;
        if result.rows.is_empty() {
            return Err(Error::empty_result(criteria.to_string()));
        }

        let mut added = 0;
        let mut replaced = 0;
        for row in result.rows {
            match self.index.get(row.obsid()) {
                Some(&position) => {
                    self.rows[position] = row;
                    replaced += 1;
                }
                None => {
                    self.index.insert(row.obsid().to_string(), self.rows.len());
                    self.rows.push(row);
                    added += 1;
                }
            }
        }

        self.rows_merged += added + replaced;
        debug!(
            "Merged {} rows ({} new, {} replaced), cache holds {}",
            added + replaced,
            added,
            replaced,
            self.rows.len()
        );
        Ok(added + replaced)
    }
}
