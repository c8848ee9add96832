//! Database trait definitions.

/// Read operations and transaction entry point.
pub mod catalog_store;

/// Write operations inside one transaction.
pub mod catalog_transaction;
