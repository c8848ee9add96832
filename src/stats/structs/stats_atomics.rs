use std::sync::atomic::AtomicI64;

#[derive(Debug, Default)]
pub struct StatsAtomics {
    pub(crate) started: AtomicI64,
    pub(crate) cache_hits: AtomicI64,
    pub(crate) cache_misses: AtomicI64,
    pub(crate) cache_errors: AtomicI64,
    pub(crate) negative_hits: AtomicI64,
    pub(crate) bypassed_reads: AtomicI64,
    pub(crate) store_queries: AtomicI64,
    pub(crate) store_errors: AtomicI64,
    pub(crate) invalidations: AtomicI64,
    pub(crate) invalidation_failures: AtomicI64,
    pub(crate) invalidation_retries: AtomicI64,
}
