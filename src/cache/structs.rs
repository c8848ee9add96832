//! Cache client, connector and breaker structures.

/// Client used by the rest of the crate: serialization, health, breaker.
pub mod cache_client;

/// Redis-specific cache connector implementation.
pub mod cache_connector_redis;

/// Memcache-specific cache connector implementation.
pub mod cache_connector_memcache;

/// In-process cache connector with clock-driven expiry.
pub mod cache_connector_memory;

/// Rolling-window circuit breaker.
pub mod circuit_breaker;

/// Breaker bookkeeping guarded by the breaker's lock.
pub mod circuit_breaker_window;

/// Wall clock.
pub mod system_clock;

/// Manually advanced clock for deterministic expiry.
pub mod manual_clock;
