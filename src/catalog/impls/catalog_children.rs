use crate::catalog::enums::cache_key::CacheKey;
use crate::catalog::enums::invalidation_target::InvalidationTarget;
use crate::catalog::errors::CatalogError;
use crate::catalog::helpers::validate_id;
use crate::catalog::structs::average_rating::AverageRating;
use crate::catalog::structs::catalog::Catalog;
use crate::catalog::structs::product::Product;
use crate::catalog::structs::review::Review;
use crate::catalog::structs::review_input::ReviewInput;
use crate::catalog::structs::variant::Variant;
use crate::catalog::structs::variant_input::VariantInput;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use log::info;

impl Catalog {
    pub async fn reviews_for(&self, product: &Product) -> Result<Vec<Review>, CatalogError> {
        self.cached(CacheKey::Reviews(product.id.clone()), self.store.list_reviews(&product.id)).await
    }

    pub async fn variants_for(&self, product: &Product) -> Result<Vec<Variant>, CatalogError> {
        self.cached(CacheKey::Variants(product.id.clone()), self.store.list_variants(&product.id)).await
    }

    pub async fn average_rating_for(&self, product: &Product) -> Result<AverageRating, CatalogError> {
        self.cached(CacheKey::Rating(product.id.clone()), self.store.average_rating(&product.id)).await
    }

    /// Fails with `NotFound` when the product does not exist.
    pub async fn reviews(&self, product_id: &str) -> Result<Vec<Review>, CatalogError> {
        let product = self.get_product(product_id).await?;
        self.reviews_for(&product).await
    }

    /// Fails with `NotFound` when the product does not exist.
    pub async fn variants(&self, product_id: &str) -> Result<Vec<Variant>, CatalogError> {
        let product = self.get_product(product_id).await?;
        self.variants_for(&product).await
    }

    pub async fn average_rating(&self, product_id: &str) -> Result<AverageRating, CatalogError> {
        let product = self.get_product(product_id).await?;
        self.average_rating_for(&product).await
    }

    pub async fn add_variant(&self, product_id: &str, input: &VariantInput) -> Result<Variant, CatalogError> {
        validate_id("productId", product_id)?;
        let mut transaction = self.begin().await?;
        let result = Self::insert_variant(transaction.as_mut(), product_id, input).await;
        let variant = self.finish(transaction, result).await?;
        info!("[Catalog] Added variant {} to product {}", variant.id, product_id);

        self.invalidate(vec![InvalidationTarget::Key(CacheKey::Variants(product_id.to_string()))]).await;
        Ok(variant)
    }

    pub async fn create_review(&self, input: &ReviewInput) -> Result<Review, CatalogError> {
        validate_id("productId", &input.product_id)?;
        let mut transaction = self.begin().await?;
        let result = Self::insert_review(transaction.as_mut(), input).await;
        let review = self.finish(transaction, result).await?;
        info!("[Catalog] Added review {} to product {}", review.id, review.product_id);

        self.invalidate(vec![
            InvalidationTarget::Key(CacheKey::Reviews(review.product_id.clone())),
            InvalidationTarget::Key(CacheKey::Rating(review.product_id.clone())),
        ]).await;
        Ok(review)
    }

    async fn insert_variant(
        transaction: &mut dyn CatalogTransaction,
        product_id: &str,
        input: &VariantInput,
    ) -> Result<Variant, CatalogError> {
        transaction
            .find_product(product_id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product", product_id))?;
        Ok(transaction.insert_variant(product_id, input).await?)
    }

    async fn insert_review(transaction: &mut dyn CatalogTransaction, input: &ReviewInput) -> Result<Review, CatalogError> {
        transaction
            .find_product(&input.product_id)
            .await?
            .ok_or_else(|| CatalogError::not_found("product", &input.product_id))?;
        Ok(transaction.insert_review(input).await?)
    }
}
