use crate::catalog::structs::category::Category;
use crate::catalog::structs::category_input::CategoryInput;
use crate::catalog::structs::product::Product;
use crate::catalog::structs::product_input::ProductInput;
use crate::catalog::structs::product_update::ProductUpdate;
use crate::catalog::structs::review::Review;
use crate::catalog::structs::review_input::ReviewInput;
use crate::catalog::structs::variant::Variant;
use crate::catalog::structs::variant_input::VariantInput;
use crate::database::errors::StoreError;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogTransaction: Send {
    async fn find_product(&mut self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Inserts the product row only; nested variants go through `insert_variant`.
    async fn insert_product(&mut self, input: &ProductInput) -> Result<Product, StoreError>;

    async fn insert_variant(&mut self, product_id: &str, input: &VariantInput) -> Result<Variant, StoreError>;

    async fn update_product(&mut self, current: &Product, update: &ProductUpdate) -> Result<Product, StoreError>;

    /// Removes the product with its variants and reviews. Returns whether a row was deleted.
    async fn delete_product(&mut self, id: &str) -> Result<bool, StoreError>;

    async fn insert_category(&mut self, input: &CategoryInput) -> Result<Category, StoreError>;

    async fn insert_review(&mut self, input: &ReviewInput) -> Result<Review, StoreError>;

    async fn commit(self: Box<Self>) -> Result<(), StoreError>;

    async fn rollback(self: Box<Self>) -> Result<(), StoreError>;
}
