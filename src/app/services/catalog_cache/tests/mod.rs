//! Tests for the catalog cache

pub mod cache_tests;

use super::CatalogCache;
use crate::app::services::ocat_parser::tests::{fixture_response, ROW_3C273, ROW_NGC1275};
use crate::app::services::catalog_cache::SearchCriteria;

/// A cache pre-populated with the two fixture observations (1234, 5678)
pub fn populated_cache() -> CatalogCache {
    let mut cache = CatalogCache::new();
    let body = fixture_response(&[ROW_NGC1275, ROW_3C273]);
    cache
        .merge_response(&body, &SearchCriteria::new().with("target_name", "fixture"))
        .unwrap();
    cache
}
