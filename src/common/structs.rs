//! Common data structures.

/// Plain message error used while booting.
pub mod custom_error;
