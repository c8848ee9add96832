/// Templated cache keys. `Display` renders the exact key string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CacheKey {
    Products { limit: i64, offset: i64 },
    Product(String),
    Category(String),
    CategoryProducts(String),
    Reviews(String),
    Variants(String),
    Rating(String),
}

/// Set of every cached `products:{limit}:{offset}` key.
pub const PRODUCTS_INDEX: &str = "products:index";
