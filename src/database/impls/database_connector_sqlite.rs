use crate::catalog::structs::average_rating::AverageRating;
use crate::catalog::structs::category::Category;
use crate::catalog::structs::category_input::CategoryInput;
use crate::catalog::structs::product::Product;
use crate::catalog::structs::product_input::ProductInput;
use crate::catalog::structs::product_update::ProductUpdate;
use crate::catalog::structs::review::Review;
use crate::catalog::structs::review_input::ReviewInput;
use crate::catalog::structs::variant::Variant;
use crate::catalog::structs::variant_input::VariantInput;
use crate::common::common::current_time;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StoreError;
use crate::database::helpers::{apply_update, new_id, schema};
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::structs::database_transaction_sqlite::DatabaseTransactionSQLite;
use crate::database::traits::catalog_store::CatalogStore;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use async_trait::async_trait;
use log::{error, info};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{ConnectOptions, Pool, Row, Sqlite};
use std::str::FromStr;
use std::time::Duration;

const LOG_PREFIX: &str = "[SQLite]";

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, category_id, created_at";

impl DatabaseConnectorSQLite {
    #[tracing::instrument(level = "debug")]
    pub async fn create(config: &DatabaseConfig) -> Result<Pool<Sqlite>, sqlx::Error> {
        let options = SqliteConnectOptions::from_str(config.path.as_str())?
            .create_if_missing(true)
            .foreign_keys(true)
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        let pool = SqlitePoolOptions::new().acquire_timeout(config.connect_timeout());
        // An in-memory database lives and dies with its single connection.
        let pool = if config.path.contains(":memory:") {
            pool.max_connections(1).idle_timeout(None).max_lifetime(None)
        } else {
            pool.max_connections(config.max_connections).idle_timeout(config.idle_timeout())
        };
        pool.connect_with(options).await
    }

    #[tracing::instrument(level = "debug")]
    pub async fn database_connector(
        config: &DatabaseConfig,
        create_database: bool,
    ) -> Result<DatabaseConnector, StoreError> {
        let pool = DatabaseConnectorSQLite::create(config).await.map_err(|e| {
            error!("{} Unable to connect to SQLite on DSL {}", LOG_PREFIX, config.path);
            error!("{} Message: {}", LOG_PREFIX, e);
            StoreError::from_sqlx(e)
        })?;
        let connector = DatabaseConnectorSQLite { pool };
        if create_database {
            info!("[BOOT] Database creation triggered for SQLite.");
            connector.create_schema().await?;
        }
        Ok(DatabaseConnector {
            sqlite: Some(connector),
            pgsql: None,
            engine: DatabaseDrivers::sqlite3,
        })
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        info!("[BOOT SQLite] Setting the PRAGMA config...");
        sqlx::query("PRAGMA journal_mode = wal;").execute(&self.pool).await.map_err(StoreError::from_sqlx)?;
        for statement in schema(DatabaseDrivers::sqlite3) {
            info!("[BOOT SQLite] {}", statement.split(" (").next().unwrap_or(statement));
            sqlx::query(statement).execute(&self.pool).await.map_err(|e| {
                error!("{} Error: {}", LOG_PREFIX, e);
                StoreError::from_sqlx(e)
            })?;
        }
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl CatalogStore for DatabaseConnectorSQLite {
    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id ASC LIMIT ? OFFSET ?"
        ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_products_by_category(&self, category_id: &str) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = ? ORDER BY created_at DESC, id ASC"
        ))
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn find_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = ?")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>, StoreError> {
        sqlx::query_as::<_, Review>(
            "SELECT id, product_id, rating, comment, author, created_at FROM reviews WHERE product_id = ? ORDER BY created_at DESC, id ASC"
        )
            .bind(product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_variants(&self, product_id: &str) -> Result<Vec<Variant>, StoreError> {
        sqlx::query_as::<_, Variant>(
            "SELECT id, product_id, name, sku, price, stock FROM variants WHERE product_id = ? ORDER BY name ASC, id ASC"
        )
            .bind(product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn average_rating(&self, product_id: &str) -> Result<AverageRating, StoreError> {
        let row = sqlx::query("SELECT AVG(rating) AS average, COUNT(*) AS count FROM reviews WHERE product_id = ?")
            .bind(product_id)
            .fetch_one(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(AverageRating {
            product_id: product_id.to_string(),
            average: row.try_get::<Option<f64>, _>("average").map_err(StoreError::from_sqlx)?,
            count: row.try_get::<i64, _>("count").map_err(StoreError::from_sqlx)?,
        })
    }

    async fn begin(&self) -> Result<Box<dyn CatalogTransaction>, StoreError> {
        let transaction = self.pool.begin().await.map_err(StoreError::from_sqlx)?;
        Ok(Box::new(DatabaseTransactionSQLite { transaction }))
    }
}

#[async_trait]
impl CatalogTransaction for DatabaseTransactionSQLite {
    async fn find_product(&mut self, id: &str) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = ?"))
            .bind(id)
            .fetch_optional(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn insert_product(&mut self, input: &ProductInput) -> Result<Product, StoreError> {
        let product = Product {
            id: new_id(),
            name: input.name.clone(),
            description: input.description.clone(),
            price: input.price,
            stock: input.stock,
            category_id: input.category_id.clone(),
            created_at: current_time(),
        };
        sqlx::query(&format!("INSERT INTO products ({PRODUCT_COLUMNS}) VALUES (?, ?, ?, ?, ?, ?, ?)"))
            .bind(&product.id)
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.category_id)
            .bind(product.created_at)
            .execute(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(product)
    }

    async fn insert_variant(&mut self, product_id: &str, input: &VariantInput) -> Result<Variant, StoreError> {
        let variant = Variant {
            id: new_id(),
            product_id: product_id.to_string(),
            name: input.name.clone(),
            sku: input.sku.clone(),
            price: input.price,
            stock: input.stock,
        };
        sqlx::query("INSERT INTO variants (id, product_id, name, sku, price, stock) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(&variant.id)
            .bind(&variant.product_id)
            .bind(&variant.name)
            .bind(&variant.sku)
            .bind(variant.price)
            .bind(variant.stock)
            .execute(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(variant)
    }

    async fn update_product(&mut self, current: &Product, update: &ProductUpdate) -> Result<Product, StoreError> {
        let product = apply_update(current, update);
        sqlx::query("UPDATE products SET name = ?, description = ?, price = ?, stock = ?, category_id = ? WHERE id = ?")
            .bind(&product.name)
            .bind(&product.description)
            .bind(product.price)
            .bind(product.stock)
            .bind(&product.category_id)
            .bind(&product.id)
            .execute(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(product)
    }

    async fn delete_product(&mut self, id: &str) -> Result<bool, StoreError> {
        for statement in ["DELETE FROM reviews WHERE product_id = ?", "DELETE FROM variants WHERE product_id = ?"] {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *self.transaction)
                .await
                .map_err(StoreError::from_sqlx)?;
        }
        let result = sqlx::query("DELETE FROM products WHERE id = ?")
            .bind(id)
            .execute(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(result.rows_affected() > 0)
    }

    async fn insert_category(&mut self, input: &CategoryInput) -> Result<Category, StoreError> {
        let category = Category {
            id: new_id(),
            name: input.name.clone(),
            description: input.description.clone(),
        };
        sqlx::query("INSERT INTO categories (id, name, description) VALUES (?, ?, ?)")
            .bind(&category.id)
            .bind(&category.name)
            .bind(&category.description)
            .execute(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(category)
    }

    async fn insert_review(&mut self, input: &ReviewInput) -> Result<Review, StoreError> {
        let review = Review {
            id: new_id(),
            product_id: input.product_id.clone(),
            rating: input.rating,
            comment: input.comment.clone(),
            author: input.author.clone(),
            created_at: current_time(),
        };
        sqlx::query("INSERT INTO reviews (id, product_id, rating, comment, author, created_at) VALUES (?, ?, ?, ?, ?, ?)")
            .bind(&review.id)
            .bind(&review.product_id)
            .bind(review.rating)
            .bind(&review.comment)
            .bind(&review.author)
            .bind(review.created_at)
            .execute(&mut *self.transaction)
            .await
            .map_err(StoreError::from_sqlx)?;
        Ok(review)
    }

    async fn commit(self: Box<Self>) -> Result<(), StoreError> {
        self.transaction.commit().await.map_err(StoreError::from_sqlx)
    }

    async fn rollback(self: Box<Self>) -> Result<(), StoreError> {
        self.transaction.rollback().await.map_err(StoreError::from_sqlx)
    }
}
