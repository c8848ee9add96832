use serde::{Deserialize, Serialize};

/// Expiry in seconds per key template. `0` stores without expiry, except for
/// `negative` where `0` disables caching of not-found lookups.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CacheTtlConfig {
    pub products_list: u64,
    pub product: u64,
    pub category: u64,
    pub category_products: u64,
    pub reviews: u64,
    pub variants: u64,
    pub rating: u64,
    pub negative: u64,
}

impl Default for CacheTtlConfig {
    fn default() -> Self {
        Self {
            products_list: 30,
            product: 60,
            category: 300,
            category_products: 60,
            reviews: 120,
            variants: 300,
            rating: 600,
            negative: 5,
        }
    }
}
