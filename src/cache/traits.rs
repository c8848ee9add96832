//! Cache trait definitions.

/// Raw key/value operations every backing store provides.
pub mod cache_backend;

/// Time source used for expiry and breaker windows.
pub mod clock;
