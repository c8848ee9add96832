use crate::cache::enums::cache_engine::CacheEngine;
use std::fmt;

impl fmt::Display for CacheEngine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CacheEngine::redis => write!(f, "redis"),
            CacheEngine::memcache => write!(f, "memcache"),
            CacheEngine::memory => write!(f, "memory"),
        }
    }
}

impl CacheEngine {
    pub fn url_scheme(&self) -> &'static str {
        match self {
            CacheEngine::redis => "redis://",
            CacheEngine::memcache => "memcache://",
            CacheEngine::memory => "",
        }
    }

    /// Memcache has no set type; its secondary indexes are read-modify-write.
    pub fn has_atomic_indexes(&self) -> bool {
        !matches!(self, CacheEngine::memcache)
    }
}
