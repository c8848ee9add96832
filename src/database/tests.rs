#[cfg(test)]
mod database_tests {
    use crate::catalog::structs::category::Category;
    use crate::catalog::structs::category_input::CategoryInput;
    use crate::catalog::structs::product_input::ProductInput;
    use crate::config::structs::database_config::DatabaseConfig;
    use crate::database::structs::database_connector::DatabaseConnector;
    use crate::database::traits::catalog_store::CatalogStore;

    async fn memory_store() -> DatabaseConnector {
        let config = DatabaseConfig {
            path: "sqlite::memory:".to_string(),
            ..DatabaseConfig::default()
        };
        DatabaseConnector::new(&config, true).await.unwrap()
    }

    async fn seed_category(store: &DatabaseConnector, name: &str) -> Category {
        let mut transaction = store.begin().await.unwrap();
        let category = transaction
            .insert_category(&CategoryInput { name: name.to_string(), description: None })
            .await
            .unwrap();
        transaction.commit().await.unwrap();
        category
    }

    fn product_input(name: &str, category_id: &str) -> ProductInput {
        ProductInput {
            name: name.to_string(),
            description: Some("desc".to_string()),
            price: 100.0,
            stock: 3,
            category_id: category_id.to_string(),
            variants: vec![],
        }
    }

    mod helpers_tests {
        use crate::catalog::structs::product::Product;
        use crate::catalog::structs::product_update::ProductUpdate;
        use crate::database::enums::database_drivers::DatabaseDrivers;
        use crate::database::helpers::{apply_update, new_id, schema};

        #[test]
        fn test_new_id_is_unique_uuid() {
            let first = new_id();
            assert_eq!(first.len(), 36);
            assert_ne!(first, new_id());
        }

        #[test]
        fn test_apply_update_keeps_absent_fields() {
            let current = Product {
                id: "p1".to_string(),
                name: "Old".to_string(),
                price: 10.0,
                stock: 2,
                category_id: "c1".to_string(),
                created_at: 7,
                ..Product::default()
            };
            let updated = apply_update(&current, &ProductUpdate {
                price: Some(12.5),
                ..ProductUpdate::default()
            });
            assert_eq!(updated.name, "Old");
            assert_eq!(updated.price, 12.5);
            assert_eq!(updated.created_at, 7);
        }

        #[test]
        fn test_schema_creates_parents_first() {
            for engine in [DatabaseDrivers::sqlite3, DatabaseDrivers::pgsql] {
                let statements = schema(engine);
                let categories = statements.iter().position(|s| s.contains("TABLE IF NOT EXISTS categories")).unwrap();
                let products = statements.iter().position(|s| s.contains("TABLE IF NOT EXISTS products")).unwrap();
                assert!(categories < products);
            }
        }
    }

    mod errors_tests {
        use crate::database::errors::StoreError;

        #[test]
        fn test_non_database_errors_stay_generic() {
            let error = StoreError::from_sqlx(sqlx::Error::RowNotFound);
            assert!(matches!(error, StoreError::Database(_)));
            assert!(!error.is_constraint());
        }
    }

    mod sqlite_tests {
        use super::*;
        use crate::catalog::structs::product_update::ProductUpdate;
        use crate::catalog::structs::review_input::ReviewInput;
        use crate::catalog::structs::variant_input::VariantInput;
        use crate::database::enums::database_drivers::DatabaseDrivers;

        #[tokio::test]
        async fn test_insert_and_read_back() {
            let store = memory_store().await;
            assert_eq!(store.engine(), DatabaseDrivers::sqlite3);
            let category = seed_category(&store, "Books").await;

            let mut transaction = store.begin().await.unwrap();
            let product = transaction.insert_product(&product_input("Produkt 1", &category.id)).await.unwrap();
            transaction
                .insert_variant(&product.id, &VariantInput { name: "Blue".to_string(), sku: Some("B-1".to_string()), price: None, stock: 1 })
                .await
                .unwrap();
            transaction.commit().await.unwrap();

            assert_eq!(store.find_product(&product.id).await.unwrap(), Some(product.clone()));
            assert_eq!(store.list_products(10, 0).await.unwrap(), vec![product.clone()]);
            assert!(store.list_products(10, 1).await.unwrap().is_empty());
            assert_eq!(store.list_products_by_category(&category.id).await.unwrap().len(), 1);
            assert_eq!(store.find_category(&category.id).await.unwrap(), Some(category));
            let variants = store.list_variants(&product.id).await.unwrap();
            assert_eq!(variants.len(), 1);
            assert_eq!(variants[0].sku.as_deref(), Some("B-1"));
        }

        #[tokio::test]
        async fn test_missing_rows_are_none() {
            let store = memory_store().await;
            assert_eq!(store.find_product("missing").await.unwrap(), None);
            assert_eq!(store.find_category("missing").await.unwrap(), None);
            assert!(store.list_reviews("missing").await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_rollback_discards_writes() {
            let store = memory_store().await;
            let category = seed_category(&store, "Toys").await;
            let mut transaction = store.begin().await.unwrap();
            transaction.insert_product(&product_input("Ghost", &category.id)).await.unwrap();
            transaction.rollback().await.unwrap();
            assert!(store.list_products(10, 0).await.unwrap().is_empty());
        }

        #[tokio::test]
        async fn test_unknown_category_is_a_constraint_violation() {
            let store = memory_store().await;
            let mut transaction = store.begin().await.unwrap();
            let result = transaction.insert_product(&product_input("Orphan", "no-such-category")).await;
            assert!(result.unwrap_err().is_constraint());
        }

        #[tokio::test]
        async fn test_average_rating() {
            let store = memory_store().await;
            let category = seed_category(&store, "Games").await;
            let mut transaction = store.begin().await.unwrap();
            let product = transaction.insert_product(&product_input("Chess", &category.id)).await.unwrap();
            transaction.commit().await.unwrap();

            let empty = store.average_rating(&product.id).await.unwrap();
            assert_eq!(empty.count, 0);
            assert_eq!(empty.average, None);

            let mut transaction = store.begin().await.unwrap();
            for rating in [4, 5] {
                transaction
                    .insert_review(&ReviewInput { product_id: product.id.clone(), rating, comment: None, author: None })
                    .await
                    .unwrap();
            }
            transaction.commit().await.unwrap();

            let rating = store.average_rating(&product.id).await.unwrap();
            assert_eq!(rating.count, 2);
            assert_eq!(rating.average, Some(4.5));
            assert_eq!(store.list_reviews(&product.id).await.unwrap().len(), 2);
        }

        #[tokio::test]
        async fn test_update_and_delete() {
            let store = memory_store().await;
            let category = seed_category(&store, "Garden").await;
            let mut transaction = store.begin().await.unwrap();
            let product = transaction.insert_product(&product_input("Rake", &category.id)).await.unwrap();
            transaction
                .insert_review(&ReviewInput { product_id: product.id.clone(), rating: 3, comment: None, author: None })
                .await
                .unwrap();
            transaction.commit().await.unwrap();

            let mut transaction = store.begin().await.unwrap();
            let current = transaction.find_product(&product.id).await.unwrap().unwrap();
            let updated = transaction
                .update_product(&current, &ProductUpdate { stock: Some(9), ..ProductUpdate::default() })
                .await
                .unwrap();
            transaction.commit().await.unwrap();
            assert_eq!(updated.stock, 9);
            assert_eq!(store.find_product(&product.id).await.unwrap().unwrap().stock, 9);

            let mut transaction = store.begin().await.unwrap();
            assert!(transaction.delete_product(&product.id).await.unwrap());
            assert!(!transaction.delete_product(&product.id).await.unwrap());
            transaction.commit().await.unwrap();
            assert_eq!(store.find_product(&product.id).await.unwrap(), None);
            assert!(store.list_reviews(&product.id).await.unwrap().is_empty());
        }
    }
}
