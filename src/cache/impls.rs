//! Implementation blocks for cache types.

pub mod cache_client;
pub mod cache_connector_memcache;
pub mod cache_connector_memory;
pub mod cache_connector_redis;
pub mod cache_engine;
pub mod circuit_breaker;
pub mod circuit_state;
pub mod clock;
