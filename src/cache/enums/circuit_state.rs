use serde::{Deserialize, Serialize};

/// State of the breaker guarding the cache backend.
///
/// ```text
/// Closed   → Open     : error rate over the rolling window >= threshold
/// Open     → HalfOpen : cooldown elapsed, one probe call is admitted
/// HalfOpen → Closed   : probe succeeded
/// HalfOpen → Open     : probe failed
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CircuitState {
    Closed,
    Open,
    HalfOpen,
}
