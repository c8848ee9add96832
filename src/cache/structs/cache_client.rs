use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::structs::circuit_breaker::CircuitBreaker;
use crate::cache::traits::cache_backend::CacheBackend;
use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use tokio::sync::watch;

/// Process-wide handle to the cache backend.
///
/// Constructed once at startup and shared as `Arc<CacheClient>`. All backend
/// traffic goes through the embedded `CircuitBreaker`. Call `shutdown()` to stop
/// the health probe task and close the backend connection.
pub struct CacheClient {
    pub(crate) backend: Arc<dyn CacheBackend>,
    pub(crate) engine: CacheEngine,
    pub(crate) breaker: CircuitBreaker,
    pub(crate) connected: AtomicBool,
    pub(crate) shutdown: watch::Sender<bool>,
}
