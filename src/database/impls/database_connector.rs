use crate::catalog::structs::average_rating::AverageRating;
use crate::catalog::structs::category::Category;
use crate::catalog::structs::product::Product;
use crate::catalog::structs::review::Review;
use crate::catalog::structs::variant::Variant;
use crate::config::structs::database_config::DatabaseConfig;
use crate::database::enums::database_drivers::DatabaseDrivers;
use crate::database::errors::StoreError;
use crate::database::structs::database_connector::DatabaseConnector;
use crate::database::structs::database_connector_pgsql::DatabaseConnectorPgSQL;
use crate::database::structs::database_connector_sqlite::DatabaseConnectorSQLite;
use crate::database::traits::catalog_store::CatalogStore;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use async_trait::async_trait;

impl DatabaseConnector {
    pub async fn new(config: &DatabaseConfig, create_database: bool) -> Result<DatabaseConnector, StoreError>
    {
        match config.engine {
            DatabaseDrivers::sqlite3 => { DatabaseConnectorSQLite::database_connector(config, create_database).await }
            DatabaseDrivers::pgsql => { DatabaseConnectorPgSQL::database_connector(config, create_database).await }
        }
    }

    pub fn engine(&self) -> DatabaseDrivers
    {
        self.engine
    }

    fn backend(&self) -> Result<&dyn CatalogStore, StoreError>
    {
        let backend: Option<&dyn CatalogStore> = match self.engine {
            DatabaseDrivers::sqlite3 => { self.sqlite.as_ref().map(|c| c as &dyn CatalogStore) }
            DatabaseDrivers::pgsql => { self.pgsql.as_ref().map(|c| c as &dyn CatalogStore) }
        };
        backend.ok_or_else(|| StoreError::Backend(format!("no {} connector configured", self.engine)))
    }

    pub async fn close(&self)
    {
        if let Some(sqlite) = &self.sqlite {
            sqlite.close().await;
        }
        if let Some(pgsql) = &self.pgsql {
            pgsql.close().await;
        }
    }
}

#[async_trait]
impl CatalogStore for DatabaseConnector {
    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, StoreError> {
        self.backend()?.list_products(limit, offset).await
    }

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError> {
        self.backend()?.find_product(id).await
    }

    async fn list_products_by_category(&self, category_id: &str) -> Result<Vec<Product>, StoreError> {
        self.backend()?.list_products_by_category(category_id).await
    }

    async fn find_category(&self, id: &str) -> Result<Option<Category>, StoreError> {
        self.backend()?.find_category(id).await
    }

    async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>, StoreError> {
        self.backend()?.list_reviews(product_id).await
    }

    async fn list_variants(&self, product_id: &str) -> Result<Vec<Variant>, StoreError> {
        self.backend()?.list_variants(product_id).await
    }

    async fn average_rating(&self, product_id: &str) -> Result<AverageRating, StoreError> {
        self.backend()?.average_rating(product_id).await
    }

    async fn begin(&self) -> Result<Box<dyn CatalogTransaction>, StoreError> {
        self.backend()?.begin().await
    }
}
