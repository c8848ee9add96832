use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct CircuitBreakerConfig {
    pub call_timeout_ms: u64,
    /// Failure ratio (0.0 - 1.0) over the window at which the circuit opens.
    pub failure_rate_threshold: f64,
    pub window_ms: u64,
    /// Calls required in the window before the failure ratio is considered.
    pub minimum_calls: u32,
    pub cooldown_ms: u64,
}

impl Default for CircuitBreakerConfig {
    fn default() -> Self {
        Self {
            call_timeout_ms: 250,
            failure_rate_threshold: 0.5,
            window_ms: 30_000,
            minimum_calls: 10,
            cooldown_ms: 15_000,
        }
    }
}
