//! Catalog implementation blocks.

/// Construction, counters and pending invalidations.
pub mod catalog;

/// Cache lookup, population and invalidation.
pub mod catalog_cache;

/// Product reads and mutations.
pub mod catalog_products;

/// Category reads and mutations.
pub mod catalog_categories;

/// Reviews, variants and ratings of a product.
pub mod catalog_children;

pub mod cache_key;
pub mod invalidation_target;
pub mod recent_writes;

/// Input validation.
pub mod product_input;
pub mod product_update;
pub mod variant_input;
pub mod category_input;
pub mod review_input;
