use crate::common::common::current_time;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats::Stats;
use crate::stats::structs::stats_atomics::StatsAtomics;
use std::sync::atomic::{AtomicI64, Ordering};

impl StatsAtomics {
    pub fn new() -> StatsAtomics {
        let stats = StatsAtomics::default();
        stats.started.store(current_time(), Ordering::SeqCst);
        stats
    }

    pub fn get_stats(&self) -> Stats
    {
        Stats {
            started: self.started.load(Ordering::SeqCst),
            cache_hits: self.cache_hits.load(Ordering::SeqCst),
            cache_misses: self.cache_misses.load(Ordering::SeqCst),
            cache_errors: self.cache_errors.load(Ordering::SeqCst),
            negative_hits: self.negative_hits.load(Ordering::SeqCst),
            bypassed_reads: self.bypassed_reads.load(Ordering::SeqCst),
            store_queries: self.store_queries.load(Ordering::SeqCst),
            store_errors: self.store_errors.load(Ordering::SeqCst),
            invalidations: self.invalidations.load(Ordering::SeqCst),
            invalidation_failures: self.invalidation_failures.load(Ordering::SeqCst),
            invalidation_retries: self.invalidation_retries.load(Ordering::SeqCst),
        }
    }

    pub fn update_stats(&self, event: StatsEvent, value: i64) -> i64
    {
        let counter = self.counter(event);
        if value >= 0 {
            counter.fetch_add(value, Ordering::SeqCst) + value
        } else {
            counter.fetch_sub(-value, Ordering::SeqCst) + value
        }
    }

    pub fn set_stats(&self, event: StatsEvent, value: i64)
    {
        self.counter(event).store(value, Ordering::SeqCst);
    }

    fn counter(&self, event: StatsEvent) -> &AtomicI64
    {
        match event {
            StatsEvent::CacheHits => &self.cache_hits,
            StatsEvent::CacheMisses => &self.cache_misses,
            StatsEvent::CacheErrors => &self.cache_errors,
            StatsEvent::NegativeHits => &self.negative_hits,
            StatsEvent::BypassedReads => &self.bypassed_reads,
            StatsEvent::StoreQueries => &self.store_queries,
            StatsEvent::StoreErrors => &self.store_errors,
            StatsEvent::Invalidations => &self.invalidations,
            StatsEvent::InvalidationFailures => &self.invalidation_failures,
            StatsEvent::InvalidationRetries => &self.invalidation_retries,
        }
    }
}
