//! Record store access.
//!
//! `CatalogStore` is the read side and the entry point for transactions;
//! `CatalogTransaction` carries every write. Two sqlx-backed drivers implement
//! both traits:
//!
//! - **SQLite** (`sqlite3`): file or `:memory:` databases
//! - **PostgreSQL** (`pgsql`)
//!
//! `DatabaseConnector` picks the driver from configuration and dispatches to it.

pub mod enums;
pub mod errors;
pub mod helpers;
pub mod impls;
pub mod structs;
pub mod traits;

#[cfg(test)]
mod tests;
