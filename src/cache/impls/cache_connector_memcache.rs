use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memcache::CacheConnectorMemcache;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::common::common::current_time;
use async_trait::async_trait;
use log::debug;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

/// Memcache reads any expiration past 30 days as an absolute unix timestamp.
const RELATIVE_EXPIRATION_LIMIT: u64 = 2_592_000;
const INDEX_CAS_ATTEMPTS: usize = 8;

impl fmt::Debug for CacheConnectorMemcache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemcache")
            .field("client", &"<memcache::Client>")
            .field("url", &self.url)
            .field("prefix", &self.prefix)
            .finish()
    }
}

impl CacheConnectorMemcache {
    pub fn connect(url: &str, prefix: &str) -> Result<Self, CacheError> {
        let client = memcache::connect(url)
            .map_err(|e| CacheError::ConnectionError(format!("Failed to connect to Memcache: {}", e)))?;
        Ok(Self {
            client: Arc::new(Mutex::new(client)),
            url: url.to_string(),
            prefix: prefix.to_string(),
        })
    }

    fn prefixed(&self, key: &str) -> String {
        format!("{}{}", self.prefix, key)
    }

    pub(crate) fn expiration(ttl: Option<Duration>) -> u32 {
        Self::expiration_at(ttl, u64::try_from(current_time()).unwrap_or(0))
    }

    /// Memcache expiries are whole seconds; anything below one second rounds up.
    pub(crate) fn expiration_at(ttl: Option<Duration>, now: u64) -> u32 {
        match ttl {
            None => 0,
            Some(ttl) if ttl.is_zero() => 0,
            Some(ttl) => {
                let mut secs = ttl.as_secs().saturating_add(u64::from(ttl.subsec_nanos() > 0));
                if secs > RELATIVE_EXPIRATION_LIMIT {
                    secs = now.saturating_add(secs);
                }
                secs.min(u32::MAX as u64) as u32
            }
        }
    }

    pub(crate) fn index_decode(raw: &[u8]) -> Result<BTreeSet<String>, CacheError> {
        Ok(serde_json::from_slice(raw)?)
    }

    pub(crate) fn index_encode(members: &BTreeSet<String>) -> Result<Vec<u8>, CacheError> {
        Ok(serde_json::to_vec(members)?)
    }

    /// Adds `member` to a JSON index with optimistic concurrency.
    ///
    /// `read` returns the stored bytes and their cas id, `create` stores a new
    /// index only if none exists, and `swap` replaces it only if the cas id still
    /// matches. A concurrent writer makes the swap fail and the loop re-reads.
    pub(crate) fn index_insert<R, C, S>(member: &str, mut read: R, mut create: C, mut swap: S) -> Result<(), CacheError>
    where
        R: FnMut() -> Result<Option<(Vec<u8>, u64)>, CacheError>,
        C: FnMut(&[u8]) -> Result<(), CacheError>,
        S: FnMut(&[u8], u64) -> Result<bool, CacheError>,
    {
        let mut created = false;
        for _ in 0..INDEX_CAS_ATTEMPTS {
            match read()? {
                None => {
                    let members = BTreeSet::from([member.to_string()]);
                    create(&Self::index_encode(&members)?)?;
                    created = true;
                }
                Some((raw, cas)) => {
                    let mut members = Self::index_decode(&raw)?;
                    if !members.insert(member.to_string()) && created {
                        return Ok(());
                    }
                    if swap(&Self::index_encode(&members)?, cas)? {
                        return Ok(());
                    }
                }
            }
        }
        Err(CacheError::Contention(format!("index update gave up after {} attempts", INDEX_CAS_ATTEMPTS)))
    }

    /// The memcache client does blocking socket I/O, so calls run on the
    /// blocking pool where the breaker timeout can abandon them.
    async fn run<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        T: Send + 'static,
        F: FnOnce(&memcache::Client) -> Result<T, CacheError> + Send + 'static,
    {
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || {
            let guard = client.lock();
            operation(&guard)
        })
            .await
            .map_err(|e| CacheError::OperationError(format!("Memcache task failed: {}", e)))?
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemcache {
    async fn ping(&self) -> Result<(), CacheError> {
        self.run(|client| {
            client.version()?;
            Ok(())
        }).await
    }

    async fn reconnect(&self) -> Result<(), CacheError> {
        let url = self.url.clone();
        let client = self.client.clone();
        tokio::task::spawn_blocking(move || {
            let fresh = memcache::connect(url.as_str())?;
            fresh.version()?;
            *client.lock() = fresh;
            Ok::<(), memcache::MemcacheError>(())
        })
            .await
            .map_err(|e| CacheError::OperationError(format!("Memcache task failed: {}", e)))?
            .map_err(CacheError::MemcacheError)?;
        debug!("[Memcache] Reconnected to {}", self.url);
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        let key = self.prefixed(key);
        self.run(move |client| Ok(client.get::<Vec<u8>>(&key)?)).await
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        let key = self.prefixed(key);
        let value = value.to_vec();
        let expiration = Self::expiration(ttl);
        self.run(move |client| Ok(client.set(&key, value.as_slice(), expiration)?)).await?;
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<(), CacheError> {
        if keys.is_empty() {
            return Ok(());
        }
        let prefixed: Vec<String> = keys.iter().map(|key| self.prefixed(key)).collect();
        let count = prefixed.len();
        self.run(move |client| {
            for key in &prefixed {
                client.delete(key)?;
            }
            Ok(())
        }).await?;
        debug!("[Memcache] Deleted {} keys", count);
        Ok(())
    }

    async fn index_add(&self, index: &str, key: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        let index_key = self.prefixed(index);
        let member = key.to_string();
        let expiration = Self::expiration(ttl);
        self.run(move |client| {
            Self::index_insert(
                &member,
                || {
                    let mut found = client.gets::<(Vec<u8>, u32, Option<u64>)>(&[index_key.as_str()])?;
                    match found.remove(&index_key) {
                        None => Ok(None),
                        Some((raw, _, Some(cas))) => Ok(Some((raw, cas))),
                        Some((_, _, None)) => Err(CacheError::OperationError("Memcache returned no cas id".to_string())),
                    }
                },
                |encoded| match client.add(&index_key, encoded, expiration) {
                    Err(memcache::MemcacheError::CommandError(memcache::CommandError::KeyExists)) => Ok(()),
                    result => Ok(result?),
                },
                |encoded, cas| Ok(client.cas(&index_key, encoded, expiration, cas)?),
            )
        }).await
    }

    async fn index_members(&self, index: &str) -> Result<Vec<String>, CacheError> {
        let index_key = self.prefixed(index);
        let raw = self.run(move |client| Ok(client.get::<Vec<u8>>(&index_key)?)).await?;
        match raw {
            None => Ok(Vec::new()),
            Some(raw) => Ok(Self::index_decode(&raw)?.into_iter().collect()),
        }
    }

    async fn close(&self) -> Result<(), CacheError> {
        debug!("[Memcache] Closing connection to {}", self.url);
        Ok(())
    }
}
