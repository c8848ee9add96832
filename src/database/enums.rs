//! Database enumerations.

/// Supported record store drivers.
pub mod database_drivers;
