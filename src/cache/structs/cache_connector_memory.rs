use crate::cache::traits::clock::Clock;
use parking_lot::Mutex;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize};
use std::time::Instant;

pub(crate) type MemoryEntry = (Vec<u8>, Option<Instant>);
pub(crate) type MemoryIndex = (HashSet<String>, Option<Instant>);

pub struct CacheConnectorMemory {
    pub(crate) entries: Mutex<HashMap<String, MemoryEntry>>,
    pub(crate) indexes: Mutex<HashMap<String, MemoryIndex>>,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) offline: AtomicBool,
    /// Stored entry count (live or expired) that triggers the next sweep.
    pub(crate) high_water: AtomicUsize,
    pub(crate) last_sweep: Mutex<Instant>,
}
