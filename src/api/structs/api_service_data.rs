//! Shared data context for API request handlers.

use crate::catalog::structs::catalog::Catalog;
use crate::config::structs::configuration::Configuration;
use std::sync::Arc;

/// Shared application data available to all API request handlers.
///
/// Injected into Actix-web's application data as `Data<Arc<ApiServiceData>>`.
#[derive(Debug)]
pub struct ApiServiceData {
    /// Catalog accessor shared by every worker.
    pub catalog: Arc<Catalog>,

    /// Loaded configuration; the API key is read from here.
    pub config: Arc<Configuration>,
}
