//! # Catalog Cache
//!
//! Product catalog backend with a read-through, write-invalidate cache in front
//! of a relational record store.
//!
//! ## Overview
//!
//! Reads go to the cache first and fall back to the record store on a miss,
//! repopulating the cache with a per-key expiry. Writes run in a store
//! transaction and clear every affected cache key after the commit. The cache
//! sits behind a circuit breaker, so an unhealthy cache turns into misses
//! instead of errors or stalls.
//!
//! ## Features
//!
//! - **Cache Backends**: Redis, Memcache, or an in-process memory store
//! - **Circuit Breaker**: Rolling failure-rate window with half-open probing
//! - **Record Stores**: SQLite and PostgreSQL through sqlx
//! - **Key Index**: Paginated list keys are tracked so a write clears all pages
//! - **Negative Caching**: Unknown ids are cached briefly as `null`
//! - **Deferred Invalidation**: Failed deletes are retried with backoff
//! - **REST API**: Token-protected JSON endpoints with Prometheus metrics
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use catalog_cache::catalog::structs::catalog::Catalog;
//!
//! let catalog = Catalog::new(store, Some(cache), config.cache_ttl.clone(), config.catalog.clone());
//! let page = catalog.list_products(10, 0).await?;
//! ```
//!
//! ## Modules
//!
//! - [`api`] - REST API endpoints for the catalog, statistics and health
//! - [`cache`] - Cache client, backends and circuit breaker
//! - [`catalog`] - Read-through accessor and domain records
//! - [`common`] - Shared utilities, error handling, and logging setup
//! - [`config`] - Configuration management and TOML parsing
//! - [`database`] - Record store traits with SQLite and PostgreSQL drivers
//! - [`stats`] - Activity counters

/// REST API implementation for the catalog.
///
/// Provides endpoints for products, categories, reviews, variants,
/// statistics and health.
pub mod api;

/// Cache client in front of Redis, Memcache or memory.
///
/// Every backend call is bounded by a timeout and guarded by a circuit breaker.
pub mod cache;

/// Read-through / write-invalidate catalog accessor.
pub mod catalog;

/// Common utilities and helper functions.
///
/// Contains logging setup, time helpers and the boot error type.
pub mod common;

/// Configuration management.
///
/// Handles loading, parsing, validating and saving `config.toml`.
pub mod config;

/// Record store abstraction.
///
/// Transactional catalog storage on SQLite or PostgreSQL.
pub mod database;

/// Statistics collection.
pub mod stats;

/// Command-line interface structures.
pub mod structs;
