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
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_transaction_pgsql::DatabaseTransactionPgSQL;
use crate::database::traits::catalog_store::CatalogStore;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use async_trait::async_trait;
use log::{error, info};
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::{ConnectOptions, Pool, Postgres, Row};
use std::str::FromStr;
use std::time::Duration;

const LOG_PREFIX: &str = "[PgSQL]";

const PRODUCT_COLUMNS: &str = "id, name, description, price, stock, category_id, created_at";

impl DatabaseConnectorPgSQL {
    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn create(config: &DatabaseConfig) -> Result<Pool<Postgres>, sqlx::Error> {
        let options = PgConnectOptions::from_str(config.path.as_str())?
            .log_statements(log::LevelFilter::Debug)
            .log_slow_statements(log::LevelFilter::Debug, Duration::from_secs(1));
        PgPoolOptions::new()
            .max_connections(config.max_connections)
            .idle_timeout(config.idle_timeout())
            .acquire_timeout(config.connect_timeout())
            .connect_with(options)
            .await
    }

    #[tracing::instrument(level = "debug", skip(config))]
    pub async fn database_connector(
        config: &DatabaseConfig,
        create_database: bool,
    ) -> Result<DatabaseConnector, StoreError> {
        let pool = DatabaseConnectorPgSQL::create(config).await.map_err(|e| {
            error!("{} Unable to connect to PostgreSQL", LOG_PREFIX);
            error!("{} Message: {}", LOG_PREFIX, e);
            StoreError::from_sqlx(e)
        })?;
        let connector = DatabaseConnectorPgSQL { pool };
        if create_database {
            info!("[BOOT] Database creation triggered for PostgreSQL.");
            connector.create_schema().await?;
        }
        Ok(DatabaseConnector {
            sqlite: None,
            pgsql: Some(connector),
            engine: DatabaseDrivers::pgsql,
        })
    }

    pub async fn create_schema(&self) -> Result<(), StoreError> {
        for statement in schema(DatabaseDrivers::pgsql) {
            info!("[BOOT PgSQL] {}", statement.split(" (").next().unwrap_or(statement));
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
impl CatalogStore for DatabaseConnectorPgSQL {
    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products ORDER BY created_at DESC, id ASC LIMIT $1 OFFSET $2"
        ))
            .bind(limit)
            .bind(offset)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_products_by_category(&self, category_id: &str) -> Result<Vec<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!(
            "SELECT {PRODUCT_COLUMNS} FROM products WHERE category_id = $1 ORDER BY created_at DESC, id ASC"
        ))
            .bind(category_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn find_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        sqlx::query_as::<_, Category>("SELECT id, name, description FROM categories WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>, StoreError> {
        sqlx::query_as::<_, Review>(
            "SELECT id, product_id, rating, comment, author, created_at FROM reviews WHERE product_id = $1 ORDER BY created_at DESC, id ASC"
        )
            .bind(product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn list_variants(&self, product_id: &str) -> Result<Vec<Variant>, StoreError> {
        sqlx::query_as::<_, Variant>(
            "SELECT id, product_id, name, sku, price, stock FROM variants WHERE product_id = $1 ORDER BY name ASC, id ASC"
        )
            .bind(product_id)
            .fetch_all(&self.pool)
            .await
            .map_err(StoreError::from_sqlx)
    }

    async fn average_rating(&self, product_id: &str) -> Result<AverageRating, StoreError> {
        let row = sqlx::query("SELECT AVG(rating)::DOUBLE PRECISION AS average, COUNT(*) AS count FROM reviews WHERE product_id = $1")
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
        Ok(Box::new(DatabaseTransactionPgSQL { transaction }))
    }
}

#[async_trait]
impl CatalogTransaction for DatabaseTransactionPgSQL {
    async fn find_product(&mut self, id: &str) -> Result<Option<Product>, StoreError> {
        sqlx::query_as::<_, Product>(&format!("SELECT {PRODUCT_COLUMNS} FROM products WHERE id = $1"))
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
        sqlx::query(&format!("INSERT INTO products ({PRODUCT_COLUMNS}) VALUES ($1, $2, $3, $4, $5, $6, $7)"))
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
        sqlx::query("INSERT INTO variants (id, product_id, name, sku, price, stock) VALUES ($1, $2, $3, $4, $5, $6)")
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
        sqlx::query("UPDATE products SET name = $1, description = $2, price = $3, stock = $4, category_id = $5 WHERE id = $6")
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
        for statement in ["DELETE FROM reviews WHERE product_id = $1", "DELETE FROM variants WHERE product_id = $1"] {
            sqlx::query(statement)
                .bind(id)
                .execute(&mut *self.transaction)
                .await
                .map_err(StoreError::from_sqlx)?;
        }
        let result = sqlx::query("DELETE FROM products WHERE id = $1")
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
        sqlx::query("INSERT INTO categories (id, name, description) VALUES ($1, $2, $3)")
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
        sqlx::query("INSERT INTO reviews (id, product_id, rating, comment, author, created_at) VALUES ($1, $2, $3, $4, $5, $6)")
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
