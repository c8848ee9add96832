//! Database connector structures.

/// Driver-dispatching connector built from configuration.
pub mod database_connector;

/// SQLite-specific database connector implementation.
pub mod database_connector_sqlite;

/// PostgreSQL-specific database connector implementation.
pub mod database_connector_pgsql;

/// Open SQLite transaction.
pub mod database_transaction_sqlite;

/// Open PostgreSQL transaction.
pub mod database_transaction_pgsql;
