#[cfg(test)]
mod catalog_tests {
    use crate::cache::enums::cache_engine::CacheEngine;
    use crate::cache::structs::cache_client::CacheClient;
    use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
    use crate::cache::structs::circuit_breaker::CircuitBreaker;
    use crate::cache::structs::manual_clock::ManualClock;
    use crate::catalog::structs::catalog::Catalog;
    use crate::catalog::structs::category::Category;
    use crate::catalog::structs::category_input::CategoryInput;
    use crate::catalog::structs::product_input::ProductInput;
    use crate::config::structs::cache_ttl_config::CacheTtlConfig;
    use crate::config::structs::catalog_config::CatalogConfig;
    use crate::config::structs::circuit_breaker_config::CircuitBreakerConfig;
    use crate::config::structs::database_config::DatabaseConfig;
    use crate::database::structs::database_connector::DatabaseConnector;
    use std::sync::Arc;

    struct Harness {
        catalog: Catalog,
        cache: Arc<CacheClient>,
        backend: Arc<CacheConnectorMemory>,
        clock: Arc<ManualClock>,
    }

    async fn harness(config: CatalogConfig, ttl: CacheTtlConfig) -> Harness {
        let database = DatabaseConfig {
            path: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        let store = DatabaseConnector::new(&database, true).await.unwrap();
        let clock = Arc::new(ManualClock::new());
        let backend = Arc::new(CacheConnectorMemory::with_clock(clock.clone()));
        let breaker = CircuitBreaker::new(CircuitBreakerConfig {
            minimum_calls: 1_000,
            ..CircuitBreakerConfig::default()
        });
        let cache = Arc::new(CacheClient::with_backend(backend.clone(), CacheEngine::memory, breaker));
        let catalog = Catalog::with_clock(Arc::new(store), Some(cache.clone()), ttl, config, clock.clone());
        Harness { catalog, cache, backend, clock }
    }

    async fn default_harness() -> Harness {
        harness(CatalogConfig::default(), CacheTtlConfig::default()).await
    }

    async fn category(catalog: &Catalog, name: &str) -> Category {
        catalog
            .create_category(&CategoryInput { name: name.to_string(), description: None })
            .await
            .unwrap()
    }

    fn product_input(name: &str, category_id: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: None,
            price: 99.99,
            stock: 50,
            category_id: category_id.to_string(),
            variants: vec![],
        }
    }

    mod cache_key_tests {
        use crate::catalog::enums::cache_key::{CacheKey, PRODUCTS_INDEX};
        use crate::catalog::enums::invalidation_target::InvalidationTarget;
        use crate::config::structs::cache_ttl_config::CacheTtlConfig;
        use std::time::Duration;

        #[test]
        fn test_key_templates() {
            assert_eq!(CacheKey::Products { limit: 10, offset: 0 }.to_string(), "products:10:0");
            assert_eq!(CacheKey::Product("42".to_string()).to_string(), "product:42");
            assert_eq!(CacheKey::Category("c".to_string()).to_string(), "category:c");
            assert_eq!(CacheKey::CategoryProducts("c".to_string()).to_string(), "category:c:products");
            assert_eq!(CacheKey::Reviews("p".to_string()).to_string(), "reviews:p");
            assert_eq!(CacheKey::Variants("p".to_string()).to_string(), "variants:p");
            assert_eq!(CacheKey::Rating("p".to_string()).to_string(), "rating:p");
            assert_eq!(PRODUCTS_INDEX, "products:index");
            assert_eq!(InvalidationTarget::ProductLists.to_string(), "products:*");
        }

        #[test]
        fn test_ttl_per_template() {
            let ttl = CacheTtlConfig::default();
            assert_eq!(CacheKey::Products { limit: 1, offset: 0 }.ttl(&ttl), Some(Duration::from_secs(30)));
            assert_eq!(CacheKey::Product("1".to_string()).ttl(&ttl), Some(Duration::from_secs(60)));
            assert_eq!(CacheKey::Rating("1".to_string()).ttl(&ttl), Some(Duration::from_secs(600)));
            assert!(CacheKey::Products { limit: 1, offset: 0 }.is_product_list());
            assert!(!CacheKey::Product("1".to_string()).is_product_list());
        }
    }

    mod validation_tests {
        use crate::catalog::errors::CatalogError;
        use crate::catalog::helpers::{MAX_ID_LENGTH, page, validate_id};
        use crate::catalog::structs::product_input::ProductInput;
        use crate::catalog::structs::product_update::ProductUpdate;
        use crate::catalog::structs::review_input::ReviewInput;
        use crate::catalog::structs::variant_input::VariantInput;

        fn valid_product() -> ProductInput {
            ProductInput {
                name: "Neues Produkt".to_string(),
                description: None,
                price: 99.99,
                stock: 50,
                category_id: "fd5f".to_string(),
                variants: vec![],
            }
        }

        #[test]
        fn test_product_input() {
            assert!(valid_product().validate().is_ok());
            let blank = ProductInput { name: "  ".to_string(), ..valid_product() };
            assert!(matches!(blank.validate(), Err(CatalogError::ValidationFailed(_))));
            let negative = ProductInput { price: -1.0, ..valid_product() };
            assert!(negative.validate().is_err());
            let nan = ProductInput { price: f64::NAN, ..valid_product() };
            assert!(nan.validate().is_err());
            let bad_variant = ProductInput {
                variants: vec![VariantInput { name: "X".to_string(), sku: None, price: None, stock: -2 }],
                ..valid_product()
            };
            assert!(bad_variant.validate().is_err());
        }

        #[test]
        fn test_product_update() {
            assert!(ProductUpdate::default().validate().is_err());
            assert!(ProductUpdate { stock: Some(0), ..ProductUpdate::default() }.validate().is_ok());
            assert!(ProductUpdate { name: Some(String::new()), ..ProductUpdate::default() }.validate().is_err());
        }

        #[test]
        fn test_review_rating_range() {
            let review = |rating| ReviewInput { product_id: "p".to_string(), rating, comment: None, author: None };
            assert!(review(0).validate().is_err());
            assert!(review(1).validate().is_ok());
            assert!(review(5).validate().is_ok());
            assert!(review(6).validate().is_err());
        }

        #[test]
        fn test_id_length_is_bounded() {
            assert!(validate_id("id", &"a".repeat(MAX_ID_LENGTH)).is_ok());
            assert!(matches!(
                validate_id("id", &"a".repeat(MAX_ID_LENGTH + 1)),
                Err(CatalogError::ValidationFailed(_))
            ));
            assert!(validate_id("id", " ").is_err());
        }

        #[test]
        fn test_page_bounds() {
            assert_eq!(page(None, None, 100).unwrap(), (10, 0));
            assert_eq!(page(Some(100), Some(20), 100).unwrap(), (100, 20));
            assert!(page(Some(0), None, 100).is_err());
            assert!(page(Some(101), None, 100).is_err());
            assert!(page(Some(5), Some(-1), 100).is_err());
        }
    }

    mod recent_writes_tests {
        use crate::cache::structs::manual_clock::ManualClock;
        use crate::catalog::enums::cache_key::CacheKey;
        use crate::catalog::enums::invalidation_target::InvalidationTarget;
        use crate::catalog::structs::recent_writes::RecentWrites;
        use std::sync::Arc;
        use std::time::Duration;

        #[test]
        fn test_window_expires() {
            let clock = Arc::new(ManualClock::new());
            let recent = RecentWrites::new(Duration::from_secs(2), clock.clone());
            recent.record(&[
                InvalidationTarget::Key(CacheKey::Product("1".to_string())),
                InvalidationTarget::ProductLists,
            ]);
            assert!(recent.is_recent(&CacheKey::Product("1".to_string())));
            assert!(recent.is_recent(&CacheKey::Products { limit: 5, offset: 10 }));
            assert!(!recent.is_recent(&CacheKey::Product("2".to_string())));

            clock.advance(Duration::from_secs(2));
            assert!(!recent.is_recent(&CacheKey::Product("1".to_string())));
            assert!(!recent.is_recent(&CacheKey::Products { limit: 5, offset: 10 }));
        }
    }

    mod accessor_tests {
        use super::*;
        use crate::catalog::errors::CatalogError;
        use crate::catalog::structs::product::Product;
        use crate::catalog::structs::product_update::ProductUpdate;
        use crate::catalog::structs::review_input::ReviewInput;
        use crate::catalog::structs::variant_input::VariantInput;
        use std::time::Duration;

        #[tokio::test]
        async fn test_missing_product_is_negatively_cached() {
            let h = default_harness().await;
            assert!(matches!(h.catalog.get_product("nope").await, Err(CatalogError::NotFound { .. })));
            let cached = h.cache.get::<serde_json::Value>("product:nope").await.unwrap();
            assert_eq!(cached, Some(serde_json::Value::Null));

            let queries = h.catalog.get_stats().store_queries;
            assert!(h.catalog.get_product("nope").await.is_err());
            assert_eq!(h.catalog.get_stats().store_queries, queries);
            assert_eq!(h.catalog.get_stats().negative_hits, 1);

            h.clock.advance(Duration::from_secs(5));
            assert!(h.catalog.get_product("nope").await.is_err());
            assert_eq!(h.catalog.get_stats().store_queries, queries + 1);
        }

        #[tokio::test]
        async fn test_oversized_id_never_reaches_cache_or_store() {
            let h = default_harness().await;
            let id = "x".repeat(300);
            assert!(matches!(h.catalog.get_product(&id).await, Err(CatalogError::ValidationFailed(_))));
            assert!(matches!(h.catalog.get_category(&id).await, Err(CatalogError::ValidationFailed(_))));
            assert!(matches!(h.catalog.reviews(&id).await, Err(CatalogError::ValidationFailed(_))));
            let stats = h.catalog.get_stats();
            assert_eq!(stats.store_queries, 0);
            assert_eq!(stats.cache_misses + stats.cache_errors, 0);
            assert!(h.backend.is_empty());
        }

        #[tokio::test]
        async fn test_negative_caching_can_be_disabled() {
            let ttl = CacheTtlConfig { negative: 0, ..CacheTtlConfig::default() };
            let h = harness(CatalogConfig::default(), ttl).await;
            assert!(h.catalog.get_product("nope").await.is_err());
            assert_eq!(h.cache.get::<serde_json::Value>("product:nope").await.unwrap(), None);
        }

        #[tokio::test]
        async fn test_create_clears_every_cached_page() {
            let h = default_harness().await;
            let books = category(&h.catalog, "Books").await;
            assert!(h.catalog.list_products(10, 0).await.unwrap().is_empty());
            assert!(h.catalog.list_products(5, 5).await.unwrap().is_empty());
            assert!(h.cache.get::<Vec<Product>>("products:5:5").await.unwrap().is_some());

            let created = h.catalog.create_product(&product_input("Neues Produkt", &books.id)).await.unwrap();

            assert_eq!(h.cache.get::<Vec<Product>>("products:10:0").await.unwrap(), None);
            assert_eq!(h.cache.get::<Vec<Product>>("products:5:5").await.unwrap(), None);
            assert_eq!(h.cache.index_members("products:index").await.unwrap(), Vec::<String>::new());
            assert_eq!(h.catalog.list_products(10, 0).await.unwrap(), vec![created]);
        }

        #[tokio::test]
        async fn test_nested_variant_failure_rolls_back_product() {
            let h = default_harness().await;
            let books = category(&h.catalog, "Books").await;
            let variant = VariantInput { name: "Dup".to_string(), sku: Some("SKU-1".to_string()), price: None, stock: 1 };
            let input = ProductInput {
                variants: vec![variant.clone(), variant],
                ..product_input("Twice", &books.id)
            };
            let result = h.catalog.create_product(&input).await;
            assert!(matches!(result, Err(CatalogError::StoreQueryFailed(_))));
            assert!(h.catalog.list_products(10, 0).await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_update_moving_category_clears_both_lists() {
            let h = default_harness().await;
            let books = category(&h.catalog, "Books").await;
            let games = category(&h.catalog, "Games").await;
            let product = h.catalog.create_product(&product_input("Chess", &books.id)).await.unwrap();
            assert_eq!(h.catalog.products_in_category(&books.id).await.unwrap().len(), 1);
            assert!(h.catalog.products_in_category(&games.id).await.unwrap().is_empty());
            assert_eq!(h.catalog.get_product(&product.id).await.unwrap().category_id, books.id);

            let update = ProductUpdate { category_id: Some(games.id.clone()), ..ProductUpdate::default() };
            h.catalog.update_product(&product.id, &update).await.unwrap();

            assert!(h.catalog.products_in_category(&books.id).await.unwrap().is_empty());
            assert_eq!(h.catalog.products_in_category(&games.id).await.unwrap().len(), 1);
            assert_eq!(h.catalog.get_product(&product.id).await.unwrap().category_id, games.id);
        }

        #[tokio::test]
        async fn test_update_missing_product() {
            let h = default_harness().await;
            let update = ProductUpdate { stock: Some(1), ..ProductUpdate::default() };
            assert!(matches!(
                h.catalog.update_product("ghost", &update).await,
                Err(CatalogError::NotFound { entity: "product", .. })
            ));
        }

        #[tokio::test]
        async fn test_review_refreshes_rating_and_reviews() {
            let h = default_harness().await;
            let books = category(&h.catalog, "Books").await;
            let product = h.catalog.create_product(&product_input("Novel", &books.id)).await.unwrap();
            assert_eq!(h.catalog.average_rating_for(&product).await.unwrap().count, 0);
            assert!(h.catalog.reviews_for(&product).await.unwrap().is_empty());

            for rating in [2, 4] {
                h.catalog
                    .create_review(&ReviewInput { product_id: product.id.clone(), rating, comment: None, author: None })
                    .await
                    .unwrap();
            }

            let rating = h.catalog.average_rating(&product.id).await.unwrap();
            assert_eq!(rating.count, 2);
            assert_eq!(rating.average, Some(3.0));
            assert_eq!(h.catalog.reviews(&product.id).await.unwrap().len(), 2);
        }

        #[tokio::test]
        async fn test_child_lookups_require_existing_product() {
            let h = default_harness().await;
            assert!(matches!(h.catalog.reviews("ghost").await, Err(CatalogError::NotFound { .. })));
            assert!(matches!(h.catalog.variants("ghost").await, Err(CatalogError::NotFound { .. })));
            assert!(matches!(h.catalog.products_in_category("ghost").await, Err(CatalogError::NotFound { .. })));
            let variant = VariantInput { name: "Red".to_string(), ..VariantInput::default() };
            assert!(matches!(h.catalog.add_variant("ghost", &variant).await, Err(CatalogError::NotFound { .. })));
            let review = ReviewInput { product_id: "ghost".to_string(), rating: 5, comment: None, author: None };
            assert!(matches!(h.catalog.create_review(&review).await, Err(CatalogError::NotFound { .. })));
        }

        #[tokio::test]
        async fn test_variants_and_delete() {
            let h = default_harness().await;
            let books = category(&h.catalog, "Books").await;
            let product = h.catalog.create_product(&product_input("Atlas", &books.id)).await.unwrap();
            assert!(h.catalog.variants_for(&product).await.unwrap().is_empty());

            let variant = VariantInput { name: "Hardcover".to_string(), sku: None, price: Some(120.0), stock: 2 };
            h.catalog.add_variant(&product.id, &variant).await.unwrap();
            assert_eq!(h.catalog.variants(&product.id).await.unwrap().len(), 1);
            assert_eq!(h.catalog.category_for(&product).await.unwrap(), books);

            let deleted = h.catalog.delete_product(&product.id).await.unwrap();
            assert_eq!(deleted.id, product.id);
            assert!(h.cache.get::<serde_json::Value>(&format!("variants:{}", product.id)).await.unwrap().is_none());
            assert!(matches!(h.catalog.get_product(&product.id).await, Err(CatalogError::NotFound { .. })));
            assert!(matches!(h.catalog.delete_product(&product.id).await, Err(CatalogError::NotFound { .. })));
        }

        #[tokio::test]
        async fn test_reads_survive_cache_outage() {
            let h = default_harness().await;
            let books = category(&h.catalog, "Books").await;
            h.catalog.create_product(&product_input("Map", &books.id)).await.unwrap();
            h.backend.set_offline(true);

            assert_eq!(h.catalog.list_products(10, 0).await.unwrap().len(), 1);
            assert!(h.catalog.get_stats().cache_errors > 0);
        }

        #[tokio::test]
        async fn test_read_your_writes_window_bypasses_cache() {
            let config = CatalogConfig { read_your_writes_ms: 1_000, ..CatalogConfig::default() };
            let h = harness(config, CacheTtlConfig::default()).await;
            let books = category(&h.catalog, "Books").await;
            h.catalog.create_product(&product_input("Fresh", &books.id)).await.unwrap();

            assert_eq!(h.catalog.list_products(10, 0).await.unwrap().len(), 1);
            assert_eq!(h.cache.get::<Vec<Product>>("products:10:0").await.unwrap(), None);
            assert!(h.catalog.get_stats().bypassed_reads >= 1);

            h.clock.advance(Duration::from_millis(1_000));
            assert_eq!(h.catalog.list_products(10, 0).await.unwrap().len(), 1);
            assert!(h.cache.get::<Vec<Product>>("products:10:0").await.unwrap().is_some());
        }

        #[tokio::test]
        async fn test_failed_invalidation_is_retried() {
            let config = CatalogConfig {
                invalidation_retry_attempts: 10,
                invalidation_retry_base_ms: 5,
                ..CatalogConfig::default()
            };
            let h = harness(config, CacheTtlConfig::default()).await;
            let books = category(&h.catalog, "Books").await;
            let product = h.catalog.create_product(&product_input("Lamp", &books.id)).await.unwrap();
            assert_eq!(h.catalog.get_product(&product.id).await.unwrap().stock, 50);

            h.backend.set_offline(true);
            let update = ProductUpdate { stock: Some(7), ..ProductUpdate::default() };
            h.catalog.update_product(&product.id, &update).await.unwrap();
            let pending = h.catalog.pending_invalidations();
            assert!(pending.contains(&format!("product:{}", product.id)));
            assert!(pending.contains(&"products:*".to_string()));
            assert!(h.catalog.get_stats().invalidation_failures > 0);

            h.backend.set_offline(false);
            for _ in 0..100 {
                if h.catalog.pending_invalidations().is_empty() {
                    break;
                }
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
            assert!(h.catalog.pending_invalidations().is_empty());
            assert_eq!(h.catalog.get_product(&product.id).await.unwrap().stock, 7);
        }

        #[tokio::test]
        async fn test_store_only_mode() {
            let database = DatabaseConfig { path: "sqlite::memory:".to_string(), ..DatabaseConfig::default() };
            let store = DatabaseConnector::new(&database, true).await.unwrap();
            let catalog = Catalog::new(Arc::new(store), None, CacheTtlConfig::default(), CatalogConfig::default());
            let books = category(&catalog, "Books").await;
            let product = catalog.create_product(&product_input("Solo", &books.id)).await.unwrap();
            assert_eq!(catalog.get_product(&product.id).await.unwrap(), product);
            assert_eq!(catalog.get_stats().cache_hits, 0);
            assert!(catalog.cache().is_none());
        }

        #[test]
        fn test_retry_delay_doubles() {
            let base = Duration::from_millis(100);
            assert_eq!(Catalog::retry_delay(base, 0), Duration::from_millis(100));
            assert_eq!(Catalog::retry_delay(base, 3), Duration::from_millis(800));
        }
    }
}
