use crate::cache::structs::circuit_breaker_window::CircuitBreakerWindow;
use crate::cache::traits::clock::Clock;
use crate::config::structs::circuit_breaker_config::CircuitBreakerConfig;
use parking_lot::Mutex;
use std::sync::Arc;
use std::sync::atomic::AtomicU64;

pub struct CircuitBreaker {
    pub(crate) config: CircuitBreakerConfig,
    pub(crate) clock: Arc<dyn Clock>,
    pub(crate) window: Mutex<CircuitBreakerWindow>,
    pub(crate) rejected: AtomicU64,
}
