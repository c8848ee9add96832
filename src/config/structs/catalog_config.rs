use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CatalogConfig {
    /// After a mutation, keys it invalidated are read from the store (and not
    /// repopulated) for this many milliseconds. `0` disables the bypass.
    pub read_your_writes_ms: u64,
    pub invalidation_retry_attempts: u32,
    pub invalidation_retry_base_ms: u64,
    pub max_page_size: i64,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            read_your_writes_ms: 0,
            invalidation_retry_attempts: 5,
            invalidation_retry_base_ms: 100,
            max_page_size: 100,
        }
    }
}
