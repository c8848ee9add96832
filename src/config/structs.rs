//! Configuration data structures.
//!
//! Each struct corresponds to a section in the TOML configuration file.

/// REST API listener configuration.
pub mod api_server_config;

/// Cache backend configuration (Redis/Memcache/memory).
pub mod cache_config;

/// Expiry per cache key template.
pub mod cache_ttl_config;

/// Accessor behaviour (read-your-writes, invalidation retry, paging).
pub mod catalog_config;

/// Circuit breaker thresholds and timings.
pub mod circuit_breaker_config;

/// Root configuration structure containing all settings.
pub mod configuration;

/// Record store connection configuration.
pub mod database_config;
