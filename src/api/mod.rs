//! REST API over the catalog.
//!
//! # Endpoints Overview
//!
//! ## Products
//! - `GET /api/products?limit=&offset=` - One page of products
//! - `POST /api/products` - Create a product, optionally with nested variants
//! - `GET /api/product/{id}` - Get a product
//! - `PATCH /api/product/{id}` - Partially update a product
//! - `DELETE /api/product/{id}` - Delete a product with its variants and reviews
//! - `GET /api/product/{id}/category` - Category of a product
//! - `GET /api/product/{id}/reviews` - Reviews of a product
//! - `POST /api/product/{id}/reviews` - Add a review
//! - `GET /api/product/{id}/variants` - Variants of a product
//! - `POST /api/product/{id}/variants` - Add a variant
//! - `GET /api/product/{id}/rating` - Average rating
//!
//! ## Categories
//! - `GET /api/category/{id}` - Get a category
//! - `GET /api/category/{id}/products` - Products of a category
//! - `POST /api/categories` - Create a category
//!
//! ## Monitoring
//! - `GET /api/stats` - Catalog counters in JSON format
//! - `GET /api/metrics` - Catalog counters in Prometheus format
//! - `GET /api/health` - Cache connection, circuit state and pending invalidations
//!
//! # Authentication
//!
//! All API endpoints require a valid API token passed as a query parameter:
//! `?token=<api_key>`
//!
//! # Errors
//!
//! Failures answer with `{"status": "..."}`: 400 for invalid input, 401 for a
//! missing or wrong token, 404 for unknown entities, 409 for constraint
//! violations and 500 for other store failures.

/// Data structures for API service context.
pub mod structs;

/// Core API service functions and route configuration.
#[allow(clippy::module_inception)]
pub mod api;

/// Product endpoints and product child collections.
pub mod api_products;

/// Category endpoints.
pub mod api_categories;

/// Statistics, metrics and health endpoints.
pub mod api_stats;
