use crate::cache::structs::cache_client::CacheClient;
use crate::cache::structs::system_clock::SystemClock;
use crate::cache::traits::clock::Clock;
use crate::catalog::structs::catalog::Catalog;
use crate::catalog::structs::recent_writes::RecentWrites;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::catalog_config::CatalogConfig;
use crate::database::traits::catalog_store::CatalogStore;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

impl fmt::Debug for Catalog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Catalog")
            .field("cache", &self.cache.as_ref().map(|cache| cache.engine()))
            .field("config", &self.config)
            .field("pending", &self.pending.lock().len())
            .finish()
    }
}

impl Catalog {
    pub fn new(
        store: Arc<dyn CatalogStore>,
        cache: Option<Arc<CacheClient>>,
        ttl: CacheTtlConfig,
        config: CatalogConfig,
    ) -> Catalog {
        Self::with_clock(store, cache, ttl, config, Arc::new(SystemClock))
    }

    /// `clock` drives the read-your-writes window.
    pub fn with_clock(
        store: Arc<dyn CatalogStore>,
        cache: Option<Arc<CacheClient>>,
        ttl: CacheTtlConfig,
        config: CatalogConfig,
        clock: Arc<dyn Clock>,
    ) -> Catalog {
        let recent_writes = config
            .read_your_writes_window()
            .map(|window| RecentWrites::new(window, clock));
        Catalog {
            store,
            cache,
            ttl,
            config,
            stats: Arc::new(StatsAtomics::new()),
            recent_writes,
            pending: Arc::new(Mutex::new(BTreeSet::new())),
        }
    }

    pub fn cache(&self) -> Option<&Arc<CacheClient>> {
        self.cache.as_ref()
    }

    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    pub fn get_stats(&self) -> Stats {
        self.stats.get_stats()
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> i64 {
        self.stats.update_stats(event, value)
    }

    /// Keys whose invalidation failed and has not been confirmed by a retry yet.
    pub fn pending_invalidations(&self) -> Vec<String> {
        self.pending.lock().iter().cloned().collect()
    }
}
