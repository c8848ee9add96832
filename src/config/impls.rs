//! Implementation blocks for configuration types.

pub mod cache_ttl_config;
pub mod catalog_config;
pub mod circuit_breaker_config;
pub mod configuration;
pub mod configuration_error;
pub mod database_config;
