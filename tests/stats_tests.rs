mod common;

use catalog_cache::catalog::errors::CatalogError;
use catalog_cache::stats::enums::stats_event::StatsEvent;
use catalog_cache::stats::structs::stats_atomics::StatsAtomics;
use common::{RecordingCache, RecordingStore};
use std::sync::Arc;

#[tokio::test]
async fn test_stats_initial_values() {
    let stats = StatsAtomics::new().get_stats();

    assert!(stats.started > 0, "Start time should be recorded");
    assert_eq!(stats.cache_hits, 0);
    assert_eq!(stats.cache_misses, 0);
    assert_eq!(stats.store_queries, 0);
    assert_eq!(stats.invalidations, 0);
}

#[tokio::test]
async fn test_stats_concurrent_updates() {
    let stats = Arc::new(StatsAtomics::new());
    let mut handles = Vec::new();

    for _ in 0..10 {
        let stats = stats.clone();
        handles.push(tokio::spawn(async move {
            for _ in 0..100 {
                stats.update_stats(StatsEvent::CacheHits, 1);
                stats.update_stats(StatsEvent::StoreQueries, 2);
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let snapshot = stats.get_stats();
    assert_eq!(snapshot.cache_hits, 1000);
    assert_eq!(snapshot.store_queries, 2000);
}

#[tokio::test]
async fn test_catalog_counts_reads_and_invalidations() {
    let store = RecordingStore::with_products(vec![common::product("7", "Lampe", 25.0)]);
    let backend = Arc::new(RecordingCache::new());
    let cache = common::cache_client(backend.clone(), common::quiet_breaker());
    let catalog = common::catalog_over(Arc::new(store.clone()), Some(cache));

    catalog.get_product("7").await.unwrap();
    catalog.get_product("7").await.unwrap();
    assert!(matches!(catalog.get_product("404").await, Err(CatalogError::NotFound { .. })));
    assert!(matches!(catalog.get_product("404").await, Err(CatalogError::NotFound { .. })));
    catalog.delete_product("7").await.unwrap();

    let stats = catalog.get_stats();
    assert_eq!(stats.cache_hits, 1);
    assert_eq!(stats.negative_hits, 1);
    assert_eq!(stats.cache_misses, 2);
    assert_eq!(stats.invalidations, 6, "Every delete target should be counted once");
    assert_eq!(stats.invalidation_failures, 0);
}

#[tokio::test]
async fn test_catalog_counts_cache_errors_during_outage() {
    let store = RecordingStore::with_products(vec![common::product("7", "Lampe", 25.0)]);
    let backend = Arc::new(RecordingCache::new());
    let cache = common::cache_client(backend.clone(), common::quiet_breaker());
    let catalog = common::catalog_over(Arc::new(store.clone()), Some(cache));
    backend.inner.set_offline(true);

    assert_eq!(catalog.get_product("7").await.unwrap().id, "7");

    let stats = catalog.get_stats();
    assert_eq!(stats.cache_errors, 2, "Failed lookup and failed populate");
    assert_eq!(stats.cache_hits, 0);
    assert_eq!(stats.store_queries, 1);
}
