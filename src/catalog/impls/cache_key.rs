use crate::catalog::enums::cache_key::CacheKey;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use std::fmt;
use std::time::Duration;

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheKey::Products { limit, offset } => write!(f, "products:{}:{}", limit, offset),
            CacheKey::Product(id) => write!(f, "product:{}", id),
            CacheKey::Category(id) => write!(f, "category:{}", id),
            CacheKey::CategoryProducts(id) => write!(f, "category:{}:products", id),
            CacheKey::Reviews(product_id) => write!(f, "reviews:{}", product_id),
            CacheKey::Variants(product_id) => write!(f, "variants:{}", product_id),
            CacheKey::Rating(product_id) => write!(f, "rating:{}", product_id),
        }
    }
}

impl CacheKey {
    pub fn ttl(&self, ttl: &CacheTtlConfig) -> Option<Duration> {
        CacheTtlConfig::expiry(match self {
            CacheKey::Products { .. } => ttl.products_list,
            CacheKey::Product(_) => ttl.product,
            CacheKey::Category(_) => ttl.category,
            CacheKey::CategoryProducts(_) => ttl.category_products,
            CacheKey::Reviews(_) => ttl.reviews,
            CacheKey::Variants(_) => ttl.variants,
            CacheKey::Rating(_) => ttl.rating,
        })
    }

    pub fn is_product_list(&self) -> bool {
        matches!(self, CacheKey::Products { .. })
    }
}
