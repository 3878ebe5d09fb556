//! Tests for dictionary-style cache operations

use super::populated_cache;
use crate::app::services::catalog_cache::CatalogCache;

#[test]
fn test_new_cache_is_empty() {
    let cache = CatalogCache::new();
    assert!(cache.is_empty());
    assert_eq!(cache.len(), 0);
    assert!(!cache.contains("1234"));
    assert_eq!(cache.keys().count(), 0);
}

#[test]
fn test_contains_never_fetches() {
    // Probing an unknown identifier must not reach for the network;
    // a fetch here would fail the test environment immediately.
    let cache = populated_cache();
    assert!(cache.contains("1234"));
    assert!(!cache.contains("999999999"));
}

#[test]
fn test_identifier_normalization() {
    let mut cache = populated_cache();
    assert!(cache.contains(1234));
    assert!(cache.contains("1234"));

    let by_int = cache.get(1234).unwrap().clone();
    let by_str = cache.get("1234").unwrap().clone();
    assert_eq!(by_int, by_str);
}

#[test]
fn test_get_serves_cached_row_without_fetch() {
    let mut cache = populated_cache();
    let first = cache.get("5678").unwrap().clone();
    let second = cache.get("5678").unwrap().clone();
    assert_eq!(first, second);
    assert_eq!(first.obsid(), "5678");

    // No fetch was issued for a cached identifier
    assert_eq!(cache.metadata().fetches_issued, 0);
}

#[test]
fn test_keys_values_items_reflect_contents() {
    let cache = populated_cache();

    let keys: Vec<&str> = cache.keys().collect();
    assert_eq!(keys, vec!["1234", "5678"]);

    let values: Vec<&str> = cache.values().map(|row| row.obsid()).collect();
    assert_eq!(values, vec!["1234", "5678"]);

    for (obsid, row) in cache.items() {
        assert_eq!(obsid, row.obsid());
    }
}

#[test]
fn test_get_cached_does_not_populate() {
    let cache = populated_cache();
    assert!(cache.get_cached("1234").is_some());
    assert!(cache.get_cached("999999999").is_none());
    assert_eq!(cache.len(), 2);
}

#[test]
fn test_clear_resets_fully() {
    let mut cache = populated_cache();
    assert_eq!(cache.len(), 2);

    cache.clear();
    assert_eq!(cache.len(), 0);
    assert!(cache.is_empty());
    assert!(!cache.contains("1234"));
    assert!(!cache.contains("5678"));
    assert_eq!(cache.keys().count(), 0);
}

#[test]
fn test_display_reports_row_count() {
    let cache = populated_cache();
    assert_eq!(cache.to_string(), "CatalogCache (2 ObsIDs)");
}
