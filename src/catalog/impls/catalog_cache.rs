use crate::cache::structs::cache_client::CacheClient;
use crate::catalog::enums::cache_key::{CacheKey, PRODUCTS_INDEX};
use crate::catalog::enums::invalidation_target::InvalidationTarget;
use crate::catalog::errors::CatalogError;
use crate::catalog::structs::catalog::Catalog;
use crate::database::errors::StoreError;
use crate::database::traits::catalog_transaction::CatalogTransaction;
use crate::stats::enums::stats_event::StatsEvent;
use crate::stats::structs::stats_atomics::StatsAtomics;
use log::{debug, error, info, warn};
use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeSet;
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

const LOG_PREFIX: &str = "[Catalog]";

impl Catalog {
    /// Read-through for values that always exist (collections, aggregates).
    /// `load` is only polled on a miss.
    pub(crate) async fn cached<T, F>(&self, key: CacheKey, load: F) -> Result<T, CatalogError>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<T, StoreError>>,
    {
        let bypass = self.bypassing(&key);
        if !bypass && let Some(value) = self.lookup::<T>(&key).await {
            self.update_stats(StatsEvent::CacheHits, 1);
            return Ok(value);
        }
        let value = self.query(load).await?;
        if !bypass {
            self.populate(&key, &value, key.ttl(&self.ttl)).await;
        }
        Ok(value)
    }

    /// Read-through for single entities. A missing entity is cached as `null`
    /// for the negative TTL and served from there as `None`.
    pub(crate) async fn cached_optional<T, F>(&self, key: CacheKey, load: F) -> Result<Option<T>, CatalogError>
    where
        T: Serialize + DeserializeOwned,
        F: Future<Output = Result<Option<T>, StoreError>>,
    {
        let bypass = self.bypassing(&key);
        if !bypass && let Some(value) = self.lookup::<Option<T>>(&key).await {
            match &value {
                Some(_) => self.update_stats(StatsEvent::CacheHits, 1),
                None => self.update_stats(StatsEvent::NegativeHits, 1),
            };
            return Ok(value);
        }
        let value = self.query(load).await?;
        if !bypass {
            match &value {
                Some(found) => self.populate(&key, found, key.ttl(&self.ttl)).await,
                None => {
                    if let Some(ttl) = self.ttl.negative_ttl() {
                        self.populate(&key, &None::<T>, Some(ttl)).await;
                    }
                }
            }
        }
        Ok(value)
    }

    fn bypassing(&self, key: &CacheKey) -> bool {
        let bypass = self.recent_writes.as_ref().is_some_and(|recent| recent.is_recent(key));
        if bypass {
            self.update_stats(StatsEvent::BypassedReads, 1);
            debug!("{} {} written recently, reading from store", LOG_PREFIX, key);
        }
        bypass
    }

    async fn lookup<T: DeserializeOwned>(&self, key: &CacheKey) -> Option<T> {
        let cache = self.cache.as_ref()?;
        match cache.get::<T>(&key.to_string()).await {
            Ok(Some(value)) => Some(value),
            Ok(None) => {
                self.update_stats(StatsEvent::CacheMisses, 1);
                None
            }
            Err(error) => {
                self.update_stats(StatsEvent::CacheErrors, 1);
                debug!("{} Lookup of {} treated as miss: {}", LOG_PREFIX, key, error);
                None
            }
        }
    }

    async fn query<T, F>(&self, load: F) -> Result<T, CatalogError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        self.update_stats(StatsEvent::StoreQueries, 1);
        load.await.map_err(|error| self.store_failure(error))
    }

    /// Page keys are indexed before they are written so invalidation can find them.
    async fn populate<T: Serialize + ?Sized>(&self, key: &CacheKey, value: &T, ttl: Option<Duration>) {
        let Some(cache) = &self.cache else {
            return;
        };
        let name = key.to_string();
        if key.is_product_list() && let Err(error) = cache.index_add(PRODUCTS_INDEX, &name, ttl).await {
            self.update_stats(StatsEvent::CacheErrors, 1);
            debug!("{} Skipping populate of {}, index update failed: {}", LOG_PREFIX, name, error);
            return;
        }
        if let Err(error) = cache.set(&name, value, ttl).await {
            self.update_stats(StatsEvent::CacheErrors, 1);
            debug!("{} Populate of {} failed: {}", LOG_PREFIX, name, error);
        }
    }

    pub(crate) fn store_failure(&self, error: StoreError) -> CatalogError {
        self.update_stats(StatsEvent::StoreErrors, 1);
        error!("{} Store query failed: {}", LOG_PREFIX, error);
        CatalogError::StoreQueryFailed(error)
    }

    pub(crate) async fn begin(&self) -> Result<Box<dyn CatalogTransaction>, CatalogError> {
        self.update_stats(StatsEvent::StoreQueries, 1);
        self.store.begin().await.map_err(|error| self.store_failure(error))
    }

    /// Commits on success, rolls back otherwise. Nothing is invalidated here.
    pub(crate) async fn finish<T>(
        &self,
        transaction: Box<dyn CatalogTransaction>,
        result: Result<T, CatalogError>,
    ) -> Result<T, CatalogError> {
        match result {
            Ok(value) => {
                transaction.commit().await.map_err(|error| self.store_failure(error))?;
                Ok(value)
            }
            Err(failure) => {
                if let Err(error) = transaction.rollback().await {
                    error!("{} Rollback failed: {}", LOG_PREFIX, error);
                }
                match failure {
                    CatalogError::StoreQueryFailed(error) => Err(self.store_failure(error)),
                    other => Err(other),
                }
            }
        }
    }

    /// Clears `targets` after a committed mutation. Failures are retried in the background.
    pub(crate) async fn invalidate(&self, targets: Vec<InvalidationTarget>) {
        if let Some(recent) = &self.recent_writes {
            recent.record(&targets);
        }
        let Some(cache) = &self.cache else {
            return;
        };
        let failed = Self::clear(cache, &targets).await;
        Self::confirm(&self.pending, &targets, &failed);
        self.update_stats(StatsEvent::Invalidations, (targets.len() - failed.len()) as i64);
        if failed.is_empty() {
            return;
        }
        self.update_stats(StatsEvent::InvalidationFailures, failed.len() as i64);
        warn!(
            "{} Invalidation of [{}] failed after commit, scheduling retry",
            LOG_PREFIX,
            Self::describe(&failed)
        );
        self.schedule_retry(Arc::clone(cache), failed);
    }

    /// Returns the targets that could not be cleared.
    async fn clear(cache: &CacheClient, targets: &[InvalidationTarget]) -> Vec<InvalidationTarget> {
        let mut failed = Vec::new();
        let keys: Vec<String> = targets
            .iter()
            .filter_map(|target| match target {
                InvalidationTarget::Key(key) => Some(key.to_string()),
                InvalidationTarget::ProductLists => None,
            })
            .collect();
        if let Err(error) = cache.delete(&keys).await {
            debug!("{} DEL {} failed: {}", LOG_PREFIX, keys.join(" "), error);
            failed.extend(
                targets
                    .iter()
                    .filter(|target| matches!(target, InvalidationTarget::Key(_)))
                    .cloned(),
            );
        }
        if targets.contains(&InvalidationTarget::ProductLists) {
            match cache.delete_indexed(PRODUCTS_INDEX).await {
                Ok(count) => debug!("{} Cleared {} product list keys", LOG_PREFIX, count),
                Err(error) => {
                    debug!("{} Clearing product lists failed: {}", LOG_PREFIX, error);
                    failed.push(InvalidationTarget::ProductLists);
                }
            }
        }
        failed
    }

    fn confirm(pending: &Mutex<BTreeSet<String>>, targets: &[InvalidationTarget], failed: &[InvalidationTarget]) {
        let mut pending = pending.lock();
        for target in targets {
            if failed.contains(target) {
                pending.insert(target.to_string());
            } else {
                pending.remove(&target.to_string());
            }
        }
    }

    fn describe(targets: &[InvalidationTarget]) -> String {
        targets.iter().map(|target| target.to_string()).collect::<Vec<_>>().join(", ")
    }

    pub(crate) fn retry_delay(base: Duration, attempt: u32) -> Duration {
        base.saturating_mul(1u32 << attempt.min(16))
    }

    fn schedule_retry(&self, cache: Arc<CacheClient>, targets: Vec<InvalidationTarget>) {
        let attempts = self.config.invalidation_retry_attempts;
        if attempts == 0 {
            return;
        }
        let base = self.config.invalidation_retry_base();
        let pending = Arc::clone(&self.pending);
        let stats: Arc<StatsAtomics> = Arc::clone(&self.stats);
        tokio::spawn(async move {
            let mut remaining = targets;
            for attempt in 0..attempts {
                tokio::time::sleep(Self::retry_delay(base, attempt)).await;
                stats.update_stats(StatsEvent::InvalidationRetries, 1);
                let failed = Self::clear(&cache, &remaining).await;
                Self::confirm(&pending, &remaining, &failed);
                stats.update_stats(StatsEvent::Invalidations, (remaining.len() - failed.len()) as i64);
                if failed.is_empty() {
                    info!("{} Deferred invalidation succeeded on attempt {}", LOG_PREFIX, attempt + 1);
                    return;
                }
                remaining = failed;
            }
            error!(
                "{} Giving up on invalidating [{}] after {} attempts, entries expire with their TTL",
                LOG_PREFIX,
                Self::describe(&remaining),
                attempts
            );
        });
    }
}
