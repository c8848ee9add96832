use crate::catalog::enums::cache_key::CacheKey;

/// Something a committed mutation must clear from the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum InvalidationTarget {
    Key(CacheKey),
    /// Every live `products:{limit}:{offset}` key, found through the list index.
    ProductLists,
}
