use crate::cache::structs::cache_client::CacheClient;
use crate::catalog::structs::recent_writes::RecentWrites;
use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use crate::config::structs::catalog_config::CatalogConfig;
use crate::database::traits::catalog_store::CatalogStore;
use crate::stats::structs::stats_atomics::StatsAtomics;
use parking_lot::Mutex;
use std::collections::BTreeSet;
use std::sync::Arc;

/// Read-through / write-invalidate accessor over the record store.
///
/// The cache is optional: without one every read goes to the store. Cache
/// failures never surface to callers, store failures always do.
pub struct Catalog {
    pub(crate) store: Arc<dyn CatalogStore>,
    pub(crate) cache: Option<Arc<CacheClient>>,
    pub(crate) ttl: CacheTtlConfig,
    pub(crate) config: CatalogConfig,
    pub(crate) stats: Arc<StatsAtomics>,
    pub(crate) recent_writes: Option<RecentWrites>,
    pub(crate) pending: Arc<Mutex<BTreeSet<String>>>,
}
