use serde::{Deserialize, Serialize};

/// Counters updated through `StatsAtomics::update_stats()`.
///
/// - **Cache**: CacheHits, CacheMisses, CacheErrors, NegativeHits, BypassedReads
/// - **Store**: StoreQueries, StoreErrors
/// - **Invalidation**: Invalidations, InvalidationFailures, InvalidationRetries
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub enum StatsEvent {
    CacheHits,
    CacheMisses,
    CacheErrors,
    NegativeHits,
    BypassedReads,
    StoreQueries,
    StoreErrors,
    Invalidations,
    InvalidationFailures,
    InvalidationRetries,
}
