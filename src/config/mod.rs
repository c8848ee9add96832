//! Configuration management module.
//!
//! Loads, validates and writes the service configuration (`config.toml`).
//!
//! # Configuration Structure
//!
//! - **database**: record store driver, DSN and pool limits
//! - **cache**: cache engine, address, key prefix, health probe interval
//! - **circuit_breaker**: call timeout, error-rate threshold, window, cooldown
//! - **cache_ttl**: per key template expiry in seconds
//! - **catalog**: read-your-writes window, invalidation retry, page size limit
//! - **api_server**: REST listener settings and API key
//!
//! `CATALOG_DATABASE_PATH`, `CATALOG_CACHE_ADDRESS` and `CATALOG_API_KEY`
//! override the matching file values.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_cache::config::structs::configuration::Configuration;
//!
//! let config = Configuration::load_from_file("config.toml", false)?;
//! ```

/// Configuration enumerations.
pub mod enums;

/// Configuration data structures.
pub mod structs;

/// Implementation blocks for configuration loading/saving.
pub mod impls;

#[cfg(test)]
mod tests;
