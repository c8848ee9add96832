use crate::catalog::enums::cache_key::CacheKey;
use crate::catalog::enums::invalidation_target::InvalidationTarget;
use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::validate_id;
use crate::catalog::structs::catalog::Catalog;
use crate::catalog::structs::product::Product;
use crate::catalog::structs::product_input::ProductInput;
use crate::catalog::structs::product_update::ProductUpdate;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use log::info;

const LOG_PREFIX: &str = "[Catalog]";

impl Catalog {
    pub async fn list_products(&self, limit: i64, offset: i64) -> Result<Vec<Product>, CatalogError> {
        self.cached(CacheKey::Products { limit, offset }, self.store.list_products(limit, offset)).await
    }

    pub async fn get_product(&self, id: &str) -> Result<Product, CatalogError> {
        validate_id("id", id)?;
        self.cached_optional(CacheKey::Product(id.to_string()), self.store.find_product(id))
            .await?
            .ok_or_else(|| CatalogError::not_found("product", id))
    }

    /// Inserts the product and its nested variants in one transaction.
    pub async fn create_product(&self, input: &ProductInput) -> Result<Product, CatalogError> {
        let mut transaction = self.begin().await?;
        let result = Self::insert_product(transaction.as_mut(), input).await;
        let product = self.finish(transaction, result).await?;
        info!("{} Created product {} with {} variants", LOG_PREFIX, product.id, input.variants.len());

        self.invalidate(vec![
            InvalidationTarget::ProductLists,
            InvalidationTarget::Key(CacheKey::Product(product.id.clone())),
            InvalidationTarget::Key(CacheKey::CategoryProducts(product.category_id.clone())),
            InvalidationTarget::Key(CacheKey::Variants(product.id.clone())),
        ]).await;
        Ok(product)
    }

    pub async fn update_product(&self, id: &str, update: &ProductUpdate) -> Result<Product, CatalogError> {
        validate_id("id", id)?;
        let mut transaction = self.begin().await?;
        let result = Self::update_existing(transaction.as_mut(), id, update).await;
        let (previous, product) = self.finish(transaction, result).await?;
        info!("{} Updated product {}", LOG_PREFIX, id);

        let mut targets = vec![
            InvalidationTarget::ProductLists,
            InvalidationTarget::Key(CacheKey::Product(product.id.clone())),
            InvalidationTarget::Key(CacheKey::CategoryProducts(product.category_id.clone())),
        ];
        if previous.category_id != product.category_id {
            targets.push(InvalidationTarget::Key(CacheKey::CategoryProducts(previous.category_id)));
        }
        self.invalidate(targets).await;
        Ok(product)
    }

    /// Removes the product together with its variants and reviews. Returns the removed product.
    pub async fn delete_product(&self, id: &str) -> Result<Product, CatalogError> {
        validate_id("id", id)?;
        let mut transaction = self.begin().await?;
        let result = Self::delete_existing(transaction.as_mut(), id).await;
        let product = self.finish(transaction, result).await?;
        info!("{} Deleted product {}", LOG_PREFIX, id);

        self.invalidate(vec![
            InvalidationTarget::ProductLists,
            InvalidationTarget::Key(CacheKey::Product(product.id.clone())),
            InvalidationTarget::Key(CacheKey::CategoryProducts(product.category_id.clone())),
            InvalidationTarget::Key(CacheKey::Reviews(product.id.clone())),
            InvalidationTarget::Key(CacheKey::Variants(product.id.clone())),
            InvalidationTarget::Key(CacheKey::Rating(product.id.clone())),
        ]).await;
        Ok(product)
    }

    async fn insert_product(transaction: &mut dyn CatalogTransaction, input: &ProductInput) -> Result<Product, CatalogError> {
        let product = transaction.insert_product(input).await?;
        for variant in &input.variants {
            transaction.insert_variant(&product.id, variant).await?;
        }
        Ok(product)
    }

    async fn update_existing(
        transaction: &mut dyn CatalogTransaction,
        id: &str,
        update: &ProductUpdate,
    ) -> Result<(Product, Product), CatalogError> {
        let previous = transaction
            .find_product(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product", id))?;
        let product = transaction.update_product(&previous, update).await?;
        Ok((previous, product))
    }

    async fn delete_existing(transaction: &mut dyn CatalogTransaction, id: &str) -> Result<Product, CatalogError> {
        let product = transaction
            .find_product(id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product", id))?;
        transaction.delete_product(id).await?;
        Ok(product)
    }
}
