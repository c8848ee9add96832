use crate::cache::enums::circuit_state::CircuitState;
use crate::cache::errors::CacheError;
use crate::cache::structs::circuit_breaker::CircuitBreaker;
use crate::cache::structs::circuit_breaker_window::CircuitBreakerWindow;
use crate::cache::structs::system_clock::SystemClock;
use crate::cache::traits::clock::Clock;
use crate::config::structs::circuit_breaker_config::CircuitBreakerConfig;
use log::{info, warn};
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::fmt;
use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Instant;

impl CircuitBreakerWindow {
    fn new() -> CircuitBreakerWindow {
        CircuitBreakerWindow {
            state: CircuitState::Closed,
            outcomes: VecDeque::new(),
            opened_at: None,
            probe_started: None,
        }
    }

    fn prune(&mut self, now: Instant, config: &CircuitBreakerConfig) {
        let window = config.window();
        while let Some((at, _)) = self.outcomes.front() {
            if now.saturating_duration_since(*at) > window {
                self.outcomes.pop_front();
            } else {
                break;
            }
        }
    }

    fn failure_rate(&self) -> f64 {
        if self.outcomes.is_empty() {
            return 0.0;
        }
        let failures = self.outcomes.iter().filter(|(_, failed)| *failed).count();
        failures as f64 / self.outcomes.len() as f64
    }

    fn trip(&mut self, now: Instant) {
        self.state = CircuitState::Open;
        self.opened_at = Some(now);
        self.probe_started = None;
        self.outcomes.clear();
    }
}

impl fmt::Debug for CircuitBreaker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CircuitBreaker")
            .field("state", &self.state())
            .field("rejected", &self.rejected.load(Ordering::Relaxed))
            .field("config", &self.config)
            .finish()
    }
}

impl CircuitBreaker {
    pub fn new(config: CircuitBreakerConfig) -> CircuitBreaker {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    pub fn with_clock(config: CircuitBreakerConfig, clock: Arc<dyn Clock>) -> CircuitBreaker {
        CircuitBreaker {
            config,
            clock,
            window: Mutex::new(CircuitBreakerWindow::new()),
            rejected: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> CircuitState {
        self.window.lock().state
    }

    /// Calls turned away without reaching the backend.
    pub fn rejected(&self) -> u64 {
        self.rejected.load(Ordering::SeqCst)
    }

    /// Decides whether a call may reach the backend right now.
    pub fn try_acquire(&self) -> bool {
        let now = self.clock.now();
        let mut window = self.window.lock();
        match window.state {
            CircuitState::Closed => true,
            CircuitState::Open => {
                let cooled = window
                    .opened_at
                    .is_none_or(|at| now.saturating_duration_since(at) >= self.config.cooldown());
                if cooled {
                    window.state = CircuitState::HalfOpen;
                    window.probe_started = Some(now);
                    info!("[Cache] Circuit half-open, admitting probe call");
                    true
                } else {
                    self.rejected.fetch_add(1, Ordering::SeqCst);
                    false
                }
            }
            CircuitState::HalfOpen => {
                // A probe whose future was dropped never reports back; give up on it after the call timeout.
                let abandoned = window
                    .probe_started
                    .is_none_or(|at| now.saturating_duration_since(at) >= self.config.call_timeout());
                if abandoned {
                    window.probe_started = Some(now);
                    true
                } else {
                    self.rejected.fetch_add(1, Ordering::SeqCst);
                    false
                }
            }
        }
    }

    pub fn record_success(&self) {
        let now = self.clock.now();
        let mut window = self.window.lock();
        match window.state {
            CircuitState::HalfOpen => {
                *window = CircuitBreakerWindow::new();
                info!("[Cache] Probe succeeded, circuit closed");
            }
            CircuitState::Closed => {
                window.outcomes.push_back((now, false));
                window.prune(now, &self.config);
            }
            CircuitState::Open => {}
        }
    }

    pub fn record_failure(&self) {
        let now = self.clock.now();
        let mut window = self.window.lock();
        match window.state {
            CircuitState::HalfOpen => {
                window.trip(now);
                warn!("[Cache] Probe failed, circuit re-opened for {:?}", self.config.cooldown());
            }
            CircuitState::Closed => {
                window.outcomes.push_back((now, true));
                window.prune(now, &self.config);
                let calls = window.outcomes.len() as u32;
                let rate = window.failure_rate();
                if calls >= self.config.minimum_calls && rate >= self.config.failure_rate_threshold {
                    window.trip(now);
                    warn!(
                        "[Cache] Circuit opened: failure rate {:.2} over {} calls, cooling down for {:?}",
                        rate, calls, self.config.cooldown()
                    );
                }
            }
            CircuitState::Open => {}
        }
    }

    pub fn reset(&self) {
        *self.window.lock() = CircuitBreakerWindow::new();
        self.rejected.store(0, Ordering::SeqCst);
    }

    /// Runs `operation` under the breaker. Rejected calls and timeouts surface as
    /// `CacheError::BackendUnavailable`; a rejected call never polls `operation`.
    /// Errors that do not count toward the breaker are recorded as successes.
    pub async fn call<T, F>(&self, operation: F) -> Result<T, CacheError>
    where
        F: Future<Output = Result<T, CacheError>>,
    {
        if !self.try_acquire() {
            return Err(CacheError::BackendUnavailable("circuit open".to_string()));
        }
        let timeout = self.config.call_timeout();
        match tokio::time::timeout(timeout, operation).await {
            Ok(Ok(value)) => {
                self.record_success();
                Ok(value)
            }
            Ok(Err(error)) if error.counts_toward_breaker() => {
                self.record_failure();
                Err(error)
            }
            Ok(Err(error)) => {
                // The backend answered; the request was at fault.
                self.record_success();
                Err(error)
            }
            Err(_) => {
                self.record_failure();
                Err(CacheError::BackendUnavailable(format!("call timed out after {:?}", timeout)))
            }
        }
    }
}
