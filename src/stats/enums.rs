//! Statistics enumerations.

/// Countable catalog events.
pub mod stats_event;
