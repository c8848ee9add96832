use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Stats {
    pub started: i64,
    pub cache_hits: i64,
    pub cache_misses: i64,
    pub cache_errors: i64,
    pub negative_hits: i64,
    pub bypassed_reads: i64,
    pub store_queries: i64,
    pub store_errors: i64,
    pub invalidations: i64,
    pub invalidation_failures: i64,
    pub invalidation_retries: i64,
}
