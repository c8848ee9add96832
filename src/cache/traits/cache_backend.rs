use crate::cache::errors::CacheError;
use async_trait::async_trait;
use std::time::Duration;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CacheBackend: Send + Sync {
    async fn ping(&self) -> Result<(), CacheError>;

    /// Re-establishes the connection if the backend supports it, then pings.
    async fn reconnect(&self) -> Result<(), CacheError>;

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError>;

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError>;

    /// Missing keys are ignored.
    async fn delete(&self, keys: &[String]) -> Result<(), CacheError>;

    /// Adds `key` to the set stored at `index`, refreshing the index expiry.
    async fn index_add(&self, index: &str, key: &str, ttl: Option<Duration>) -> Result<(), CacheError>;

    async fn index_members(&self, index: &str) -> Result<Vec<String>, CacheError>;

    async fn close(&self) -> Result<(), CacheError>;
}
