use crate::config::structs::api_server_config::ApiServerConfig;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::catalog_config::CatalogConfig;
use crate::config::structs::circuit_breaker_config::CircuitBreakerConfig;
use crate::config::structs::database_config::DatabaseConfig;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Configuration {
    pub log_level: String,
    pub database: DatabaseConfig,
    pub cache: CacheConfig,
    #[serde(default)]
    pub circuit_breaker: CircuitBreakerConfig,
    #[serde(default)]
    pub cache_ttl: CacheTtlConfig,
    #[serde(default)]
    pub catalog: CatalogConfig,
    pub api_server: ApiServerConfig,
}
