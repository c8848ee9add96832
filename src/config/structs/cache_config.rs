use crate::cache::enums::cache_engine::CacheEngine;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct CacheConfig {
    pub enabled: bool,
    pub engine: CacheEngine,
    pub address: String,
    /// Prepended to every key. Leave empty when other services read the same keys.
    pub prefix: String,
    pub health_interval_secs: u64,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            engine: CacheEngine::redis,
            address: "127.0.0.1:6379".to_string(),
            prefix: String::new(),
            health_interval_secs: 10,
        }
    }
}
