//! Cache client with failure isolation.
//!
//! This module wraps a key/value backing store (Redis, Memcache or an
//! in-process map) behind the `CacheBackend` trait and exposes it through a
//! single `CacheClient`, which adds JSON (de)serialization, connection health
//! tracking and a circuit breaker around every backend call.
//!
//! # Supported Backends
//!
//! - **Redis**: recommended for production, shared between instances
//! - **Memcache**: alternative option, secondary indexes are best-effort
//! - **Memory**: in-process map with an injectable clock, used by tests and
//!   single-node deployments
//!
//! # Failure Model
//!
//! The cache is never required for correctness. Every backend call is bounded
//! by the breaker's call timeout. Once the error rate over the rolling window
//! crosses the configured threshold the breaker opens and calls fail with
//! `CacheError::BackendUnavailable` immediately, without touching the backend,
//! until the cooldown elapses and a single probe is let through.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_cache::cache::structs::cache_client::CacheClient;
//!
//! let client = Arc::new(CacheClient::new(&config.cache, &config.circuit_breaker).await?);
//! client.set("product:1", &product, Some(Duration::from_secs(60))).await?;
//! let cached: Option<Product> = client.get("product:1").await?;
//! ```

/// Cache engine and circuit state enumerations.
pub mod enums;

/// Error types for cache operations.
pub mod errors;

/// Implementation blocks for cache connectors, the client and the breaker.
pub mod impls;

/// Data structures for cache connections, the client and the breaker.
pub mod structs;

/// Backend and clock trait definitions.
pub mod traits;
