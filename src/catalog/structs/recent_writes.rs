use crate::cache::traits::clock::Clock;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Keys touched by recent mutations, read from the store until `window` elapses.
pub struct RecentWrites {
    pub(crate) window: Duration,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) entries: Mutex<HashMap<String, Instant>>,
}
