//! Common utilities and shared functionality.
//!
//! - Logging setup (`fern` dispatch over the `log` facade)
//! - Timestamp helper
//! - `CustomError` for boot-time failures

/// Common data structures.
pub mod structs;

/// Core utility functions.
#[allow(clippy::module_inception)]
pub mod common;

/// Implementation blocks for common types.
pub mod impls;
