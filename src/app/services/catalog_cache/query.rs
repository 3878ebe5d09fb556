//! Cache content accessors
//!
//! Read-only views over the cached rows. None of these trigger a fetch;
//! they reflect current contents only.

use super::CatalogCache;
use crate::app::models::CatalogRow;

impl CatalogCache {
    /// Cached observation identifiers in arrival order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.rows.iter().map(|row| row.obsid())
    }

    /// Cached rows in arrival order
    pub fn values(&self) -> impl Iterator<Item = &CatalogRow> {
        self.rows.iter()
    }

    /// Cached (identifier, row) pairs in arrival order
    pub fn items(&self) -> impl Iterator<Item = (&str, &CatalogRow)> {
        self.rows.iter().map(|row| (row.obsid(), row))
    }

    /// Look up a cached row without fetching on a miss
    pub fn get_cached<I: ToString>(&self, obsid: I) -> Option<&CatalogRow> {
        self.index
            .get(&obsid.to_string())
            .map(|&position| &self.rows[position])
    }
}
