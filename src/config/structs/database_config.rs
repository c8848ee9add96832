use crate::database::enums::database_drivers::DatabaseDrivers;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct DatabaseConfig {
    pub engine: DatabaseDrivers,
    pub path: String,
    pub max_connections: u32,
    pub idle_timeout_secs: u64,
    pub connect_timeout_secs: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            engine: DatabaseDrivers::sqlite3,
            path: "sqlite://catalog.db".to_string(),
            max_connections: 10,
            idle_timeout_secs: 300,
            connect_timeout_secs: 5,
        }
    }
}
