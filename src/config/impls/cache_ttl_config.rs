use crate::config::structs::cache_ttl_config::CacheTtlConfig;
use std::time::Duration;

impl CacheTtlConfig {
    /// `0` means the entry is stored without expiry.
    pub fn expiry(seconds: u64) -> Option<Duration> {
        match seconds {
            0 => None,
            seconds => Some(Duration::from_secs(seconds)),
        }
    }

    /// `None` when negative caching is disabled.
    pub fn negative_ttl(&self) -> Option<Duration> {
        Self::expiry(self.negative)
    }
}
