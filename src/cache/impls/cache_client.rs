use crate::cache::enums::cache_engine::CacheEngine;
use crate::cache::enums::circuit_state::CircuitState;
use crate::cache::errors::CacheError;
use crate::cache::structs::cache_client::CacheClient;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::cache_connector_redis::CacheConnectorRedis;
use crate::cache::structs::circuit_breaker::CircuitBreaker;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::config::structs::cache_config::CacheConfig;
use crate::config::structs::circuit_breaker_config::CircuitBreakerConfig;
use log::{debug, info, warn};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};
use tokio::sync::watch;
use tokio::task::JoinHandle;

impl fmt::Debug for CacheClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheClient")
            .field("engine", &self.engine)
            .field("connected", &self.is_connected())
            .field("breaker", &self.breaker)
            .finish()
    }
}

impl CacheClient {
    pub async fn new(config: &CacheConfig, breaker: &CircuitBreakerConfig) -> Result<CacheClient, CacheError> {
        let connection_url = format!("{}{}", config.engine.url_scheme(), config.address);
        let backend: Arc<dyn CacheBackend> = match config.engine {
            CacheEngine::redis => {
                let redis_connector = CacheConnectorRedis::connect(&connection_url, &config.prefix).await?;
                info!("[Cache] Connected to Redis at {}", config.address);
                Arc::new(redis_connector)
            }
            CacheEngine::memcache => {
                let memcache_connector = CacheConnectorMemcache::connect(&connection_url, &config.prefix)?;
                info!("[Cache] Connected to Memcache at {}", config.address);
                Arc::new(memcache_connector)
            }
            CacheEngine::memory => {
                info!("[Cache] Using in-process memory cache");
                Arc::new(CacheConnectorMemory::new())
            }
        };
        Ok(Self::with_backend(backend, config.engine, CircuitBreaker::new(breaker.clone())))
    }

    pub fn with_backend(backend: Arc<dyn CacheBackend>, engine: CacheEngine, breaker: CircuitBreaker) -> CacheClient {
        let (shutdown, _) = watch::channel(false);
        CacheClient {
            backend,
            engine,
            breaker,
            connected: AtomicBool::new(true),
            shutdown,
        }
    }

    pub fn engine(&self) -> CacheEngine {
        self.engine
    }

    pub fn is_connected(&self) -> bool {
        self.connected.load(Ordering::SeqCst)
    }

    pub fn circuit_state(&self) -> CircuitState {
        self.breaker.state()
    }

    pub fn breaker(&self) -> &CircuitBreaker {
        &self.breaker
    }

    /// Runs one backend call under the breaker, probing the connection first
    /// when the client was marked disconnected.
    async fn execute<T, F>(&self, command: &str, key: &str, operation: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        let started = Instant::now();
        let mut reached = false;
        let result = self.breaker.call(async {
            reached = true;
            if !self.connected.load(Ordering::SeqCst) {
                self.backend.reconnect().await.map_err(|e| {
                    CacheError::BackendUnavailable(format!("reconnection probe failed: {}", e))
                })?;
                self.connected.store(true, Ordering::SeqCst);
                info!("[Cache] Reconnected to {} backend", self.engine);
            }
            operation.await
        }).await;

        match &result {
            Ok(_) => debug!("[Cache] {} {} ok in {:?}", command, key, started.elapsed()),
            Err(error) if !reached => debug!("[Cache] {} {} rejected: {}", command, key, error),
            Err(error) => {
                if error.is_unavailable() || Self::is_connection_failure(error) {
                    self.connected.store(false, Ordering::SeqCst);
                }
                warn!("[Cache] {} {} failed after {:?}: {}", command, key, started.elapsed(), error);
            }
        }
        result
    }

    fn is_connection_failure(error: &CacheError) -> bool {
        match error {
            CacheError::ConnectionError(_) => true,
            CacheError::RedisError(e) => {
                e.is_io_error() || e.is_connection_dropped() || e.is_connection_refusal() || e.is_timeout()
            }
            CacheError::MemcacheError(memcache::MemcacheError::IOError(_)) => true,
            _ => false,
        }
    }

    /// Returns `Ok(None)` on a miss. A stored value that fails to decode is an error.
    pub async fn get<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, CacheError> {
        let raw = self.execute("GET", key, self.backend.get(key)).await?;
        match raw {
            None => Ok(None),
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
        }
    }

    pub async fn set<T: Serialize + ?Sized>(&self, key: &str, value: &T, ttl: Option<Duration>) -> Result<(), CacheError> {
        let payload = serde_json::to_vec(value)?;
        self.execute("SET", key, self.backend.set(key, &payload, ttl)).await
    }

    pub async fn delete(&self, keys: &[String]) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }
        self.execute("DEL", &keys.join(" "), self.backend.delete(keys)).await
    }

    pub async fn index_add(&self, index: &str, key: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.execute("SADD", index, self.backend.index_add(index, key, ttl)).await
    }

    pub async fn index_members(&self, index: &str) -> Result<Vec<String>, CacheError> {
        self.execute("SMEMBERS", index, self.backend.index_members(index)).await
    }

    /// Deletes every key recorded in `index` together with the index itself.
    /// Returns the number of member keys removed.
    pub async fn delete_indexed(&self, index: &str) -> Result<usize, CacheError> {
        let mut keys = self.index_members(index).await?;
        let members = keys.len();
        keys.push(index.to_string());
        self.delete(&keys).await?;
        Ok(members)
    }

    /// Liveness check outside the breaker; updates the connection flag.
    pub async fn ping(&self) -> Result<(), CacheError> {
        let timeout = self.breaker.config.call_timeout();
        let result = match tokio::time::timeout(timeout, self.backend.ping()).await {
            Ok(result) => result,
            Err(_) => Err(CacheError::BackendUnavailable(format!("ping timed out after {:?}", timeout))),
        };
        self.connected.store(result.is_ok(), Ordering::SeqCst);
        result
    }

    pub fn spawn_health_probe(self: &Arc<Self>, interval: Duration) -> JoinHandle<()> {
        let client = Arc::clone(self);
        let mut shutdown = self.shutdown.subscribe();
        tokio::spawn(async move {
            if *shutdown.borrow() {
                return;
            }
            info!("[BOOT] Starting cache health probe every {:?}", interval);
            let mut ticker = tokio::time::interval(interval);
            loop {
                tokio::select! {
                    _ = ticker.tick() => {
                        let was_connected = client.is_connected();
                        match client.ping().await {
                            Ok(_) if !was_connected => info!("[Cache] {} backend reachable again", client.engine),
                            Err(error) if was_connected => warn!("[Cache] {} backend unreachable: {}", client.engine, error),
                            _ => {}
                        }
                    }
                    _ = shutdown.changed() => {
                        info!("[BOOT] Shutting down cache health probe...");
                        return;
                    }
                }
            }
        })
    }

    pub async fn shutdown(&self) {
        self.shutdown.send_replace(true);
        if let Err(error) = self.backend.close().await {
            warn!("[Cache] Error while closing {} backend: {}", self.engine, error);
        }
        self.connected.store(false, Ordering::SeqCst);
        info!("[Cache] {} client shut down", self.engine);
    }
}
