use crate::config::structs::catalog_config::CatalogConfig;
use std::time::Duration;

impl CatalogConfig {
    pub fn read_your_writes_window(&self) -> Option<Duration> {
        match self.read_your_writes_ms {
            0 => None,
            ms => Some(Duration::from_millis(ms)),
        }
    }

    pub fn invalidation_retry_base(&self) -> Duration {
        Duration::from_millis(self.invalidation_retry_base_ms)
    }
}
