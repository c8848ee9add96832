//! Catalog activity counters.
//!
//! Every counter is an atomic integer so request handlers update them without
//! locking. The `/api/stats` endpoint serves a `Stats` snapshot.
//!
//! # Example
//!
//! ```rust,ignore
//! use catalog_cache::stats::enums::stats_event::StatsEvent;
//!
//! catalog.update_stats(StatsEvent::CacheHits, 1);
//! let stats = catalog.get_stats();
//! ```

/// Statistics event enumeration.
pub mod enums;

/// Implementation blocks for statistics operations.
pub mod impls;

/// Statistics data structures (atomic counters and snapshot).
pub mod structs;
