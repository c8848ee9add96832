use crate::cache::errors::CacheError;
use crate::cache::structs::cache_connector_memory::CacheConnectorMemory;
use crate::cache::structs::system_clock::SystemClock;
use crate::cache::traits::cache_backend::CacheBackend;
use crate::cache::traits::clock::Clock;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::time::{Duration, Instant};

const SWEEP_HIGH_WATER: usize = 1024;
const SWEEP_INTERVAL: Duration = Duration::from_secs(60);

impl fmt::Debug for CacheConnectorMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CacheConnectorMemory")
            .field("entries", &self.entries.lock().len())
            .field("indexes", &self.indexes.lock().len())
            .field("offline", &self.offline.load(Ordering::SeqCst))
            .finish()
    }
}

impl CacheConnectorMemory {
    pub fn new() -> CacheConnectorMemory {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> CacheConnectorMemory {
        let now = clock.now();
        CacheConnectorMemory {
            entries: Mutex::new(HashMap::new()),
            indexes: Mutex::new(HashMap::new()),
            clock,
            offline: AtomicBool::new(false),
            high_water: AtomicUsize::new(SWEEP_HIGH_WATER),
            last_sweep: Mutex::new(now),
        }
    }

    /// Simulates an outage: every call fails with a connection error.
    pub fn set_offline(&self, offline: bool) {
        self.offline.store(offline, Ordering::SeqCst);
    }

    /// Number of live (unexpired) entries.
    pub fn len(&self) -> usize {
        let now = self.clock.now();
        self.entries
            .lock()
            .values()
            .filter(|(_, expires)| !Self::expired(*expires, now))
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drops expired entries and indexes. Returns the number of entries removed.
    pub fn sweep(&self) -> usize {
        let now = self.clock.now();
        let (removed, live) = {
            let mut entries = self.entries.lock();
            let before = entries.len();
            entries.retain(|_, (_, expires)| !Self::expired(*expires, now));
            (before - entries.len(), entries.len())
        };
        self.indexes.lock().retain(|_, (_, expires)| !Self::expired(*expires, now));
        *self.last_sweep.lock() = now;
        self.high_water.store((live * 2).max(SWEEP_HIGH_WATER), Ordering::SeqCst);
        removed
    }

    /// Sweeps once the map grows past the high-water mark or the last sweep is old.
    fn sweep_if_due(&self, held: usize) {
        let stale = self.clock.now().saturating_duration_since(*self.last_sweep.lock()) >= SWEEP_INTERVAL;
        if stale || held >= self.high_water.load(Ordering::SeqCst) {
            self.sweep();
        }
    }

    fn expires_at(&self, ttl: Option<Duration>) -> Option<Instant> {
        match ttl {
            Some(ttl) if !ttl.is_zero() => Some(self.clock.now() + ttl),
            _ => None,
        }
    }

    fn expired(expires: Option<Instant>, now: Instant) -> bool {
        matches!(expires, Some(at) if now >= at)
    }

    fn check_online(&self) -> Result<(), CacheError> {
        if self.offline.load(Ordering::SeqCst) {
            return Err(CacheError::ConnectionError("memory backend offline".to_string()));
        }
        Ok(())
    }
}

impl Default for CacheConnectorMemory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CacheBackend for CacheConnectorMemory {
    async fn ping(&self) -> Result<(), CacheError> {
        self.check_online()?;
        self.sweep();
        Ok(())
    }

    async fn reconnect(&self) -> Result<(), CacheError> {
        self.check_online()
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>, CacheError> {
        self.check_online()?;
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        match entries.get(key) {
            Some((_, expires)) if Self::expired(*expires, now) => {
                entries.remove(key);
                Ok(None)
            }
            Some((value, _)) => Ok(Some(value.clone())),
            None => Ok(None),
        }
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<(), CacheError> {
        self.check_online()?;
        let expires = self.expires_at(ttl);
        let held = {
            let mut entries = self.entries.lock();
            entries.insert(key.to_string(), (value.to_vec(), expires));
            entries.len()
        };
        self.sweep_if_due(held);
        Ok(())
    }

    async fn delete(&self, keys: &[String]) -> Result<(), CacheError> {
        self.check_online()?;
        let mut entries = self.entries.lock();
        let mut indexes = self.indexes.lock();
        for key in keys {
            entries.remove(key);
            indexes.remove(key);
        }
        Ok(())
    }

    async fn index_add(&self, index: &str, key: &str, ttl: Option<Duration>) -> Result<(), CacheError> {
        self.check_online()?;
        let now = self.clock.now();
        let expires = self.expires_at(ttl);
        {
            let mut indexes = self.indexes.lock();
            let slot = indexes
                .entry(index.to_string())
                .or_insert_with(|| (HashSet::new(), None));
            if Self::expired(slot.1, now) {
                slot.0.clear();
            }
            slot.0.insert(key.to_string());
            slot.1 = expires;
        }
        let held = self.entries.lock().len();
        self.sweep_if_due(held);
        Ok(())
    }

    async fn index_members(&self, index: &str) -> Result<Vec<String>, CacheError> {
        self.check_online()?;
        let now = self.clock.now();
        let indexes = self.indexes.lock();
        match indexes.get(index) {
            Some((members, expires)) if !Self::expired(*expires, now) => {
                let mut members: Vec<String> = members.iter().cloned().collect();
                members.sort();
                Ok(members)
            }
            _ => Ok(Vec::new()),
        }
    }

    async fn close(&self) -> Result<(), CacheError> {
        self.entries.lock().clear();
        self.indexes.lock().clear();
        Ok(())
    }
}
