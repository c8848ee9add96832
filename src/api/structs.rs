//! Data structures for the REST API module.

/// Query parameter for API token authentication.
pub mod query_token;

/// Pagination query parameters.
pub mod query_pagination;

/// Shared data context for API request handlers.
pub mod api_service_data;
