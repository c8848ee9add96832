//! Catalog enumerations.

/// Cache key templates.
pub mod cache_key;

/// Targets cleared after a committed mutation.
pub mod invalidation_target;
