//! Database implementation blocks.

/// Driver selection and dispatch.
pub mod database_connector;

/// SQLite store and transaction.
pub mod database_connector_sqlite;

/// PostgreSQL store and transaction.
pub mod database_connector_pgsql;

pub mod database_drivers;
