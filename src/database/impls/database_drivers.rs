use crate::database::enums::database_drivers::DatabaseDrivers;
use std::fmt;

impl fmt::Display for DatabaseDrivers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatabaseDrivers::sqlite3 => write!(f, "sqlite3"),
            DatabaseDrivers::pgsql => write!(f, "pgsql"),
        }
    }
}
