use crate::catalog::structs::average_rating::AverageRating;
use crate::catalog::structs::category::Category;
use crate::catalog::structs::product::Product;
use crate::catalog::structs::review::Review;
use crate::catalog::structs::variant::Variant;
use crate::database::errors::StoreError;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, StoreError>;

    async fn find_product(&self, id: &str) -> Result<Option<Product>, StoreError>;

    async fn list_products_by_category(&self, category_id: &str) -> Result<Vec<Product>, StoreError>;

    async fn find_category(&self, id: &str) -> Result<Option<Category>, StoreError>;

    async fn list_reviews(&self, product_id: &str) -> Result<Vec<Review>, StoreError>;

    async fn list_variants(&self, product_id: &str) -> Result<Vec<Variant>, StoreError>;

    async fn average_rating(&self, product_id: &str) -> Result<AverageRating, StoreError>;

    /// Opens a transaction. Dropping it without `commit` rolls it back.
    async fn begin(&self) -> Result<Box<dyn CatalogTransaction>, StoreError>;
}
