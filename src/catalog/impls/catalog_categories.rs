use crate::catalog::enums::cache_key::CacheKey;
use crate::catalog::enums::invalidation_target::InvalidationTarget;
use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::validate_id;
use crate::catalog::structs::catalog::Catalog;
use crate::catalog::structs::category::Category;
use crate::catalog::structs::category_input::CategoryInput;
use crate::catalog::structs::product::Product;
use log::info;

impl Catalog {
    pub async fn get_category(&self, id: &str) -> Result<Category, CatalogError> {
        validate_id("id", id)?;
        self.cached_optional(CacheKey::Category(id.to_string()), self.store.find_category(id))
            .await?
            .ok_or_else(|| CatalogError::not_found("category", id))
    }

    /// Category of an already resolved product.
    pub async fn category_for(&self, product: &Product) -> Result<Category, CatalogError> {
        self.get_category(&product.category_id).await
    }

    pub async fn products_in_category(&self, category_id: &str) -> Result<Vec<Product>, CatalogError> {
        self.get_category(category_id).await?;
        self.cached(
            CacheKey::CategoryProducts(category_id.to_string()),
            self.store.list_products_by_category(category_id),
        ).await
    }

    pub async fn create_category(&self, input: &CategoryInput) -> Result<Category, CatalogError> {
        let mut transaction = self.begin().await?;
        let result = transaction.insert_category(input).await.map_err(CatalogError::from);
        let category = self.finish(transaction, result).await?;
        info!("[Catalog] Created category {}", category.id);

        self.invalidate(vec![InvalidationTarget::Key(CacheKey::Category(category.id.clone()))]).await;
        Ok(category)
    }
}
