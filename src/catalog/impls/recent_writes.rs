use crate::cache::traits::clock::Clock;
use crate::catalog::enums::cache_key::CacheKey;
use crate::catalog::enums::invalidation_target::InvalidationTarget;
use crate::catalog::structs::recent_writes::RecentWrites;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

impl RecentWrites {
    pub fn new(window: Duration, clock: Arc<dyn Clock>) -> RecentWrites {
        RecentWrites {
            window,
            clock,
            entries: Mutex::new(HashMap::new()),
        }
    }

    pub fn record(&self, targets: &[InvalidationTarget]) {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        entries.retain(|_, written| now.duration_since(*written) < self.window);
        for target in targets {
            entries.insert(target.to_string(), now);
        }
    }

    /// Page keys are also recent while any product list was invalidated.
    pub fn is_recent(&self, key: &CacheKey) -> bool {
        let now = self.clock.now();
        let entries = self.entries.lock();
        let fresh = |name: &str| {
            entries
                .get(name)
                .is_some_and(|written| now.duration_since(*written) < self.window)
        };
        fresh(&key.to_string())
            || (key.is_product_list() && fresh(&InvalidationTarget::ProductLists.to_string()))
    }
}
