use crate::cache::enums::circuit_state::CircuitState;
use std::collections::VecDeque;
use std::time::Instant;

#[derive(Debug)]
pub struct CircuitBreakerWindow {
    pub(crate) state: CircuitState,
    /// Call outcomes inside the rolling window, `true` meaning failure.
    pub(crate) outcomes: VecDeque<(Instant, bool)>,
    pub(crate) opened_at: Option<Instant>,
    pub(crate) probe_started: Option<Instant>,
}
