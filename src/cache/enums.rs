//! Cache enumeration types.

/// Supported cache engines (redis, memcache, memory).
pub mod cache_engine;

/// Circuit breaker states (closed, open, half-open).
pub mod circuit_state;
