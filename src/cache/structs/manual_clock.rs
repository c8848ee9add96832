use parking_lot::Mutex;
use std::time::{Duration, Instant};

/// Clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    pub(crate) origin: Instant,
    pub(crate) offset: Mutex<Duration>,
}
